use std::sync::Arc;

use winit::window::Window;

use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::errors::startup::StartupError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::storage::read_shader::ShaderSources;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    /// `source` is the premultiplied background image.
    fn build(
        &self,
        window: Arc<Window>,
        config: &ViewerConfig,
        source: &PixelBuffer,
        shaders: &ShaderSources,
    ) -> Result<T, StartupError>;
}
