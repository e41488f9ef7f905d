#![cfg(target_arch = "wasm32")]
use crate::core::{cursor, tilt, Animator, AnimatorConfig, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;

use events::pointer::DocumentPointer;
use frame::{CursorLayers, RafScheduler, TiltTarget};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scheduler: Rc<dyn FrameScheduler> = Rc::new(RafScheduler::new(window.clone()));
    let pointer = DocumentPointer::new(document.clone());
    let animator = Rc::new(RefCell::new(Animator::new(AnimatorConfig::default())?));

    overlay::schedule_intro(&document);
    wire_cursor(&document, &pointer, &animator, &scheduler);
    wire_tilt(&document, &pointer, &animator, &scheduler);

    events::scroll::wire_scroll_effects(&window, &document);
    events::scroll::wire_scroll_reveals(&document, scheduler.clone());
    events::menu::wire_hamburger(&document);
    events::menu::wire_smooth_anchors(&document);
    events::pointer::wire_card_tilt(&document);
    events::pointer::wire_carousel(&document);

    log::info!("landing-fx ready");
    Ok(())
}

fn wire_cursor(
    document: &web::Document,
    pointer: &DocumentPointer,
    animator: &Rc<RefCell<Animator>>,
    scheduler: &Rc<dyn FrameScheduler>,
) {
    let layers = CursorLayers {
        dot: dom::html_by_id(document, "cursorDot"),
        ring: dom::html_by_id(document, "cursorRing"),
    };
    if layers.is_empty() {
        return;
    }
    let hover: Vec<web::HtmlElement> = layers
        .dot
        .iter()
        .chain(layers.ring.iter())
        .cloned()
        .collect();
    events::pointer::wire_cursor_hover(document, hover);
    cursor::wire(animator.clone(), pointer, scheduler.clone(), move |f| layers.present(f));
}

fn wire_tilt(
    document: &web::Document,
    pointer: &DocumentPointer,
    animator: &Rc<RefCell<Animator>>,
    scheduler: &Rc<dyn FrameScheduler>,
) {
    let scene = dom::html_by_id(document, "productScene");
    let product = dom::html_by_id(document, "product3D");
    let (Some(_scene), Some(product)) = (scene, product) else {
        return;
    };
    if let Some(glow) = dom::html_by_id(document, "heroGlow") {
        events::pointer::wire_glow(pointer, glow);
    }
    let target = TiltTarget { product };
    tilt::wire(animator.clone(), pointer, scheduler.clone(), move |pose| target.present(pose));
}
