use pixels::wgpu;

use crate::controllers::interactive::errors::shader::ShaderError;
use crate::storage::read_shader::{ShaderSource, ShaderSources};

/// Compiled vertex and fragment modules, not yet linked into a pipeline.
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    pub const VERTEX_ENTRY_POINT: &'static str = "vs_main";
    pub const FRAGMENT_ENTRY_POINT: &'static str = "fs_main";

    pub fn compile(device: &wgpu::Device, sources: &ShaderSources) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: compile_stage(device, &sources.vertex)?,
            fragment: compile_stage(device, &sources.fragment)?,
        })
    }
}

fn compile_stage(
    device: &wgpu::Device,
    source: &ShaderSource,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&source.label),
        source: wgpu::ShaderSource::Wgsl(source.code.clone()),
    });

    match pollster::block_on(device.pop_error_scope()) {
        Some(e) => Err(ShaderError::Compile {
            label: source.label.clone(),
            diagnostic: e.to_string(),
        }),
        None => Ok(module),
    }
}

/// Runs `build` inside a validation scope, reporting failures as link errors.
pub fn link<T>(device: &wgpu::Device, build: impl FnOnce() -> T) -> Result<T, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let linked = build();

    match pollster::block_on(device.pop_error_scope()) {
        Some(e) => Err(ShaderError::Link {
            diagnostic: e.to_string(),
        }),
        None => Ok(linked),
    }
}
