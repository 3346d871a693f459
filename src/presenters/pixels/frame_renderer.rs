use bytemuck::{Pod, Zeroable};
use pixels::wgpu;
use pixels::wgpu::util::DeviceExt;

use crate::controllers::interactive::data::frame_params::FrameParams;
use crate::controllers::interactive::errors::shader::ShaderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::pixels::shader_program::{self, ShaderProgram};
use crate::storage::read_shader::ShaderSources;

/// Two triangles covering clip space.
const QUAD_POSITIONS: [[f32; 3]; 6] = [
    [1.0, 1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
];

/// Uniform block shared by both stages, laid out as the `Frame` struct in WGSL.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct FrameUniforms {
    c: [f32; 2],
    aspect_ratio: f32,
    time: f32,
}

impl From<&FrameParams> for FrameUniforms {
    fn from(frame: &FrameParams) -> Self {
        Self {
            c: frame.parameter.to_array(),
            aspect_ratio: frame.aspect_ratio,
            time: frame.time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Display,
    Capture,
}

/// Paints the composited fractal into whichever view it is handed.
///
/// Owns the quad geometry, the source image texture and one pipeline per
/// target format. It never binds, resizes or presents targets itself.
pub struct FrameRenderer {
    quad: wgpu::Buffer,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    display_pipeline: wgpu::RenderPipeline,
    capture_pipeline: wgpu::RenderPipeline,
    capture_format: wgpu::TextureFormat,
}

impl FrameRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        display_format: wgpu::TextureFormat,
        source: &PixelBuffer,
        shaders: &ShaderSources,
    ) -> Result<Self, ShaderError> {
        let program = ShaderProgram::compile(device, shaders)?;

        let quad = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractrap_quad"),
            contents: bytemuck::cast_slice(&QUAD_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fractrap_frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let source_view = upload_source(device, queue, source);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("fractrap_source_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("fractrap_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractrap_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&source_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("fractrap_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let capture_format = capture_format_for(display_format);
        let display_pipeline = shader_program::link(device, || {
            create_pipeline(device, &layout, &program, display_format, "fractrap_display")
        })?;
        let capture_pipeline = shader_program::link(device, || {
            create_pipeline(device, &layout, &program, capture_format, "fractrap_capture")
        })?;

        Ok(Self {
            quad,
            uniforms,
            bind_group,
            display_pipeline,
            capture_pipeline,
            capture_format,
        })
    }

    #[must_use]
    pub fn capture_format(&self) -> wgpu::TextureFormat {
        self.capture_format
    }

    /// Records one full-screen draw into `view`, cleared first.
    ///
    /// The uniform write is queued and lands before `encoder` is submitted.
    pub fn render_frame(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        target: TargetKind,
        frame: &FrameParams,
    ) {
        let uniforms = FrameUniforms::from(frame);
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&uniforms));

        let pipeline = match target {
            TargetKind::Display => &self.display_pipeline,
            TargetKind::Capture => &self.capture_pipeline,
        };

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fractrap_frame"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.quad.slice(..));
        pass.draw(0..QUAD_POSITIONS.len() as u32, 0..1);
    }
}

/// Capture encodes the same byte values the display shows.
fn capture_format_for(display_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if display_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

fn upload_source(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    source: &PixelBuffer,
) -> wgpu::TextureView {
    let extent = source.extent();
    let size = wgpu::Extent3d {
        width: extent.width(),
        height: extent.height(),
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("fractrap_source"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        source.buffer(),
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(extent.width() * 4),
            rows_per_image: Some(extent.height()),
        },
        size,
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    program: &ShaderProgram,
    format: wgpu::TextureFormat,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &program.vertex,
            entry_point: ShaderProgram::VERTEX_ENTRY_POINT,
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            }],
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &program.fragment,
            entry_point: ShaderProgram::FRAGMENT_ENTRY_POINT,
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
    })
}
