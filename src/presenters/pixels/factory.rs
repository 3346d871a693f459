use std::sync::Arc;

use winit::window::Window;

use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::errors::startup::StartupError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::storage::read_shader::ShaderSources;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: Arc<Window>,
        config: &ViewerConfig,
        source: &PixelBuffer,
        shaders: &ShaderSources,
    ) -> Result<PixelsPresenter, StartupError> {
        PixelsPresenter::new(window, config.vsync, config.capture_size, source, shaders)
    }
}
