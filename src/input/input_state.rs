use crate::core::data::{complex::Complex, extent::Extent};
use crate::core::evolution::PointerSample;

/// Live UI state written by event handlers and read once per tick.
///
/// Raw pointer coordinates are converted to centered, normalized coordinates
/// when they arrive and again whenever the window size changes.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    window_width: u32,
    window_height: u32,
    aspect_ratio: f32,
    raw_pointer: Option<(f64, f64)>,
    pointer: Complex,
    pointer_down: bool,
    capture_requested: bool,
    quit_requested: bool,
}

impl InputState {
    #[must_use]
    pub fn new(window_size: Extent) -> Self {
        Self {
            window_width: window_size.width(),
            window_height: window_size.height(),
            aspect_ratio: window_size.aspect_ratio(),
            raw_pointer: None,
            pointer: Complex::default(),
            pointer_down: false,
            capture_requested: false,
            quit_requested: false,
        }
    }

    /// A zero-sized (minimized) window keeps the previous aspect ratio.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;

        if let Ok(extent) = Extent::new(width, height) {
            self.aspect_ratio = extent.aspect_ratio();
            self.normalize_pointer();
        }
    }

    pub fn on_pointer_moved(&mut self, x: f64, y: f64) {
        self.raw_pointer = Some((x, y));
        self.normalize_pointer();
    }

    pub fn on_pointer_button(&mut self, pressed: bool) {
        self.pointer_down = pressed;
    }

    pub fn request_capture(&mut self) {
        self.capture_requested = true;
    }

    /// Returns whether a capture was requested and clears the request.
    pub fn take_capture_request(&mut self) -> bool {
        std::mem::take(&mut self.capture_requested)
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    #[must_use]
    pub fn pointer(&self) -> PointerSample {
        PointerSample {
            position: self.pointer,
            down: self.pointer_down,
        }
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Current window size, or `None` while the window has no area.
    #[must_use]
    pub fn window_size(&self) -> Option<Extent> {
        Extent::new(self.window_width, self.window_height).ok()
    }

    fn normalize_pointer(&mut self) {
        let Some((x, y)) = self.raw_pointer else {
            return;
        };

        if self.window_width == 0 || self.window_height == 0 {
            return;
        }

        let width = f64::from(self.window_width);
        let height = f64::from(self.window_height);

        // Origin at the window center, +y up, edges at -1 and 1.
        self.pointer = Complex {
            real: (2.0 * x / width - 1.0) as f32,
            imag: (1.0 - 2.0 * y / height) as f32,
        };
    }
}
