use crate::core::cursor::CursorFrame;
use crate::core::tilt::TiltPose;
use crate::core::FrameScheduler;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `FrameScheduler` backed by `window.requestAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_next_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let cb = Closure::once_into_js(move |ts: f64| callback(ts));
        _ = self.window.request_animation_frame(cb.unchecked_ref());
    }
}

/// The two cursor layers; either may be missing on a given page.
pub struct CursorLayers {
    pub dot: Option<web::HtmlElement>,
    pub ring: Option<web::HtmlElement>,
}

impl CursorLayers {
    pub fn is_empty(&self) -> bool {
        self.dot.is_none() && self.ring.is_none()
    }

    pub fn present(&self, frame: CursorFrame) {
        if let Some(dot) = &self.dot {
            place(dot, frame.dot.x, frame.dot.y);
        }
        if let Some(ring) = &self.ring {
            place(ring, frame.ring.x, frame.ring.y);
        }
    }
}

#[inline]
fn place(el: &web::HtmlElement, x: f32, y: f32) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", x));
    _ = style.set_property("top", &format!("{}px", y));
}

/// The product container driven by the tilt loop.
pub struct TiltTarget {
    pub product: web::HtmlElement,
}

impl TiltTarget {
    pub fn present(&self, pose: TiltPose) {
        dom::set_style(&self.product, "transform", &pose.css());
    }
}
