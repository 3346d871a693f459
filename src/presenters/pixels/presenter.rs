use std::sync::Arc;

use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use tracing::{debug, error, info, warn};
use winit::window::Window;

use crate::controllers::interactive::data::frame_params::FrameParams;
use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::controllers::interactive::errors::startup::StartupError;
use crate::controllers::interactive::ports::GraphicsPort;
use crate::core::data::extent::Extent;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::capture_target::CaptureTarget;
use crate::presenters::pixels::frame_renderer::{FrameRenderer, TargetKind};
use crate::storage::read_shader::ShaderSources;

/// Window presenter and capture target sharing one `pixels` device.
///
/// The `pixels` framebuffer itself is unused; every frame is drawn straight
/// into the surface texture by [`FrameRenderer`].
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    renderer: FrameRenderer,
    capture: CaptureTarget,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: Arc<Window>,
        vsync: bool,
        capture_size: Extent,
        source: &PixelBuffer,
        shaders: &ShaderSources,
    ) -> Result<Self, StartupError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);

        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .enable_vsync(vsync)
            .device_descriptor(wgpu::DeviceDescriptor {
                label: Some("fractrap_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            })
            .build()
            .map_err(|e| GraphicsError::Context(e.to_string()))?;

        let display_format = pixels.render_texture_format();
        let renderer = FrameRenderer::new(
            pixels.device(),
            pixels.queue(),
            display_format,
            source,
            shaders,
        )?;
        let capture = CaptureTarget::new(pixels.device(), capture_size, renderer.capture_format())?;

        info!(
            "Graphics ready: display {:?}, capture {:?} {}x{}",
            display_format,
            renderer.capture_format(),
            capture_size.width(),
            capture_size.height()
        );

        Ok(Self {
            pixels,
            renderer,
            capture,
            width: size.width,
            height: size.height,
        })
    }
}

impl GraphicsPort for PixelsPresenter {
    fn capture_extent(&self) -> Extent {
        self.capture.extent()
    }

    fn capture(&mut self, frame: &FrameParams) -> Result<PixelBuffer, GraphicsError> {
        let device = self.pixels.device();
        let queue = self.pixels.queue();

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("fractrap_capture"),
        });
        self.renderer
            .render_frame(queue, &mut encoder, self.capture.view(), TargetKind::Capture, frame);
        self.capture.copy_to_readback(&mut encoder);
        queue.submit(Some(encoder.finish()));

        self.capture.read_back(device)
    }

    fn present(&mut self, frame: &FrameParams) -> Result<(), GraphicsError> {
        if self.width == 0 || self.height == 0 {
            debug!("Skipping present to a zero-sized surface");
            return Ok(());
        }

        let renderer = &self.renderer;
        let result = self.pixels.render_with(|encoder, render_target, context| {
            renderer.render_frame(
                &context.queue,
                encoder,
                render_target,
                TargetKind::Display,
                frame,
            );
            Ok(())
        });

        match result {
            Ok(()) => Ok(()),
            Err(pixels::Error::Surface(wgpu::SurfaceError::Lost)) => {
                warn!("Surface lost, reconfiguring");
                self.resize(self.width, self.height);
                Ok(())
            }
            Err(e) => Err(GraphicsError::Present(e.to_string())),
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.pixels.resize_surface(width, height) {
            error!("Failed to resize surface to {width}x{height}: {e}");
        }
    }
}
