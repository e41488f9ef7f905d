use glam::Vec2;

/// Viewport size in CSS pixels at the time of a pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Latest pointer position, viewport-relative. No history is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub client: Vec2,
    pub viewport: Viewport,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, viewport: Viewport) -> Self {
        Self {
            client: Vec2::new(x, y),
            viewport,
        }
    }
}

/// Something that reports pointer motion over the page.
pub trait PointerSource {
    fn on_pointer_move(&self, handler: Box<dyn FnMut(PointerSample)>);
    /// Fires when the pointer leaves the document.
    fn on_pointer_leave(&self, handler: Box<dyn FnMut()>);
}

/// Something that reports when a target first scrolls into view.
///
/// Handlers fire at most once per registration; the source stops watching
/// the target after the first intersection.
pub trait VisibilitySource {
    type Target;

    fn on_intersect(&self, target: &Self::Target, threshold: f64, handler: Box<dyn FnMut()>);
}
