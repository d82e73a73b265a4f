/// Rendering options read from config at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Scroll position of the page body, in rendered lines from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
    max: u16,
}

impl ScrollState {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Updates the scrollable range and clamps the offset into it.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.offset).saturating_add(delta);
        self.offset = target.clamp(0, i32::from(self.max)) as u16;
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max;
    }
}
