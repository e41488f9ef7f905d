use crate::core::cards::{card_tilt_transform, CardRect};
use crate::core::carousel::CarouselDrag;
use crate::core::tilt::{glow_position, normalized_offset};
use crate::core::{PointerSample, PointerSource, Viewport};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer motion over the whole document.
pub struct DocumentPointer {
    document: web::Document,
}

impl DocumentPointer {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl PointerSource for DocumentPointer {
    fn on_pointer_move(&self, mut handler: Box<dyn FnMut(PointerSample)>) {
        dom::add_listener(&self.document, "mousemove", move |ev: web::MouseEvent| {
            let (w, h) = dom::viewport_size();
            handler(PointerSample::new(
                ev.client_x() as f32,
                ev.client_y() as f32,
                Viewport::new(w, h),
            ));
        });
    }

    fn on_pointer_leave(&self, mut handler: Box<dyn FnMut()>) {
        dom::add_listener(&self.document, "mouseleave", move |_: web::MouseEvent| handler());
    }
}

/// Hero glow drifts with the raw pointer offset (no smoothing).
pub fn wire_glow(pointer: &dyn PointerSource, glow: web::HtmlElement) {
    pointer.on_pointer_move(Box::new(move |sample| {
        let pos = glow_position(normalized_offset(&sample));
        let style = glow.style();
        _ = style.set_property("left", &format!("{}%", pos.x));
        _ = style.set_property("top", &format!("{}%", pos.y));
    }));
}

const HOVER_TARGETS: &str =
    "a, button, .product-image-wrap, .flavor-card, .benefit-card, .review-card, .showcase-image-wrap";

/// Cursor layers get a `hover` class while over interactive elements.
pub fn wire_cursor_hover(document: &web::Document, layers: Vec<web::HtmlElement>) {
    if layers.is_empty() {
        return;
    }
    let layers = Rc::new(layers);
    let targets = dom::query_all(document, HOVER_TARGETS);
    for el in &targets {
        let on_enter = layers.clone();
        dom::add_listener(el, "mouseenter", move |_: web::MouseEvent| {
            for l in on_enter.iter() {
                _ = l.class_list().add_1("hover");
            }
        });
        let on_leave = layers.clone();
        dom::add_listener(el, "mouseleave", move |_: web::MouseEvent| {
            for l in on_leave.iter() {
                _ = l.class_list().remove_1("hover");
            }
        });
    }
    log::debug!("[cursor] hover wired on {} elements", targets.len());
}

/// Per-card tilt toward the pointer; resets on leave.
pub fn wire_card_tilt(document: &web::Document) {
    let cards = dom::query_all(document, "[data-tilt]");
    for card in &cards {
        let el = card.clone();
        dom::add_listener(card, "mousemove", move |ev: web::MouseEvent| {
            let r = el.get_bounding_client_rect();
            let rect = CardRect {
                left: r.left(),
                top: r.top(),
                width: r.width(),
                height: r.height(),
            };
            let t = card_tilt_transform(ev.client_x() as f64, ev.client_y() as f64, &rect);
            dom::set_style(&el, "transform", &t);
        });
        let el = card.clone();
        dom::add_listener(card, "mouseleave", move |_: web::MouseEvent| {
            dom::clear_style(&el, "transform");
        });
    }
    log::debug!("[cards] tilt wired on {} cards", cards.len());
}

/// Click-and-drag scrolling for the flavor carousel.
pub fn wire_carousel(document: &web::Document) {
    let Some(carousel) = document
        .query_selector(".flavors-carousel")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let drag = Rc::new(RefCell::new(CarouselDrag::default()));

    let (c, d) = (carousel.clone(), drag.clone());
    dom::add_listener(&carousel, "mousedown", move |ev: web::MouseEvent| {
        let x = (ev.page_x() - c.offset_left()) as f64;
        d.borrow_mut().begin(x, c.scroll_left() as f64);
    });
    for event in ["mouseleave", "mouseup"] {
        let d = drag.clone();
        dom::add_listener(&carousel, event, move |_: web::MouseEvent| d.borrow_mut().end());
    }
    let (c, d) = (carousel.clone(), drag);
    dom::add_listener(&carousel, "mousemove", move |ev: web::MouseEvent| {
        let x = (ev.page_x() - c.offset_left()) as f64;
        let next = d.borrow().drag_to(x);
        if let Some(left) = next {
            ev.prevent_default();
            // scrollLeft takes whole pixels
            c.set_scroll_left(left.round() as i32);
        }
    });
}
