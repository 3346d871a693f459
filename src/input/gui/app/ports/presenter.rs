use crate::controllers::interactive::ports::GraphicsPort;

/// A [`GraphicsPort`] bound to a resizable window surface.
pub trait GuiPresenterPort: GraphicsPort {
    /// A zero `width` or `height` marks the window minimized; presents are
    /// skipped until the next non-zero resize.
    fn resize(&mut self, width: u32, height: u32);
}
