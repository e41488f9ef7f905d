use crate::constants::CAROUSEL_DRAG_SPEED;

/// Click-and-drag horizontal scrolling state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselDrag {
    pub active: bool,
    pub start_x: f64,
    pub start_scroll_left: f64,
}

impl CarouselDrag {
    /// `x` is the pointer position relative to the carousel's left edge.
    pub fn begin(&mut self, x: f64, scroll_left: f64) {
        self.active = true;
        self.start_x = x;
        self.start_scroll_left = scroll_left;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// New `scrollLeft` for a move to `x`, or `None` when not dragging.
    pub fn drag_to(&self, x: f64) -> Option<f64> {
        self.active
            .then(|| self.start_scroll_left - (x - self.start_x) * CAROUSEL_DRAG_SPEED)
    }
}
