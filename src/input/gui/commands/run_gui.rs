use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::controllers::interactive::errors::startup::StartupError;
use crate::controllers::interactive::snapshot::{DrainReport, EncodeWorker, SnapshotPipeline};
use crate::controllers::interactive::Session;
use crate::core::data::extent::Extent;
use crate::core::evolution::EvolutionMode;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::input_state::InputState;
use crate::presenters::file::png::PngSnapshotSink;
use crate::storage::read_png::load_source_image;
use crate::storage::read_shader::ShaderSources;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    config: ViewerConfig,
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(config: ViewerConfig, presenter_factory: F) -> Self {
        Self {
            config,
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the viewer and blocks until it is closed and every snapshot has
    /// been written.
    ///
    /// The source image and shader files are read before any window exists,
    /// so a bad path fails without one ever being shown.
    pub fn execute(&self) -> Result<DrainReport, StartupError> {
        let config = &self.config;

        let source = load_source_image(&config.image_path)?;
        let shaders = ShaderSources::load(
            config.vertex_shader.as_deref(),
            config.fragment_shader.as_deref(),
        )?;

        let event_loop = EventLoop::new().map_err(|e| GraphicsError::EventLoop(e.to_string()))?;

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.window_title.as_str())
                .with_inner_size(logical_size(config.window_size))
                .with_min_inner_size(logical_size(config.min_window_size))
                .build(&event_loop)
                .map_err(|e| GraphicsError::Window(e.to_string()))?,
        );

        let presenter = self
            .presenter_factory
            .build(Arc::clone(&window), config, &source, &shaders)?;
        drop(source);

        let worker = EncodeWorker::new(config.encode_threads)?;
        let pipeline = SnapshotPipeline::new(
            Arc::new(PngSnapshotSink::new()),
            worker,
            config.snapshot_path.clone(),
        );
        let session = Session::new(config, pipeline);

        let size = window.inner_size();
        let input = InputState::new(Extent::new(size.width, size.height).unwrap_or(config.window_size));

        if config.mode == EvolutionMode::Interactive {
            info!("No time evolution, drag the pointer to set the fractal parameter");
        }

        let app = GuiApp::new(window, presenter, input, session);
        Ok(app.run(event_loop)?)
    }
}

fn logical_size(extent: Extent) -> LogicalSize<f64> {
    LogicalSize::new(f64::from(extent.width()), f64::from(extent.height()))
}
