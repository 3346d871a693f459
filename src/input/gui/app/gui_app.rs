use std::sync::Arc;

use tracing::{debug, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowId};

use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::controllers::interactive::snapshot::DrainReport;
use crate::controllers::interactive::Session;
use crate::input::gui::app::events::apply_window_event;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::input_state::InputState;

/// Owns the window, the presenter and the session for one run of the loop.
///
/// Each loop iteration reaps finished encodes on `NewEvents`, feeds window
/// events into [`InputState`], and ticks the session on `AboutToWait`.
pub struct GuiApp<P: GuiPresenterPort> {
    window: Option<Arc<Window>>,
    window_id: WindowId,
    presenter: Option<P>,
    input: InputState,
    session: Session,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(window: Arc<Window>, presenter: P, input: InputState, session: Session) -> Self {
        Self {
            window_id: window.id(),
            window: Some(window),
            presenter: Some(presenter),
            input,
            session,
        }
    }

    /// Runs until the window closes, then waits for every pending snapshot.
    ///
    /// The drain happens even when the event loop itself fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<DrainReport, GraphicsError> {
        event_loop.set_control_flow(ControlFlow::Poll);

        let result = event_loop.run(|event, elwt| self.handle_event(event, elwt));
        let report = self.finish();

        result.map_err(|e| GraphicsError::EventLoop(e.to_string()))?;
        Ok(report)
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::NewEvents(_) => {
                let reaped = self.session.reap_completed();
                if reaped > 0 {
                    debug!("Reaped {reaped} finished snapshot encodes");
                }
            }
            Event::WindowEvent { window_id, event } if window_id == self.window_id => {
                self.handle_window_event(&event);

                if self.input.quit_requested() {
                    self.shutdown(elwt);
                }
            }
            Event::AboutToWait => {
                if let Some(presenter) = self.presenter.as_mut() {
                    self.session.tick(&mut self.input, presenter);
                }
            }
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        apply_window_event(&mut self.input, event);

        if let WindowEvent::Resized(size) = event {
            debug!("Resized to {}x{}", size.width, size.height);
            if let Some(presenter) = self.presenter.as_mut() {
                presenter.resize(size.width, size.height);
            }
        }
    }

    /// Releases the surface before the window, then stops the loop.
    fn shutdown(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.window.is_none() {
            return;
        }

        info!("Shutting down");
        self.session.begin_shutdown();
        self.presenter = None;
        self.window = None;
        elwt.exit();
    }

    fn finish(mut self) -> DrainReport {
        self.presenter = None;
        self.window = None;
        self.session.drain()
    }
}
