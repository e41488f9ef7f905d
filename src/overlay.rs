use crate::constants::{
    LOADER_HIDE_DELAY_MS, PRODUCT_ENTRY_DELAY_MS, PRODUCT_ENTRY_FROM_TRANSFORM,
    PRODUCT_ENTRY_SETTLE_MS, PRODUCT_ENTRY_TO_TRANSFORM, PRODUCT_ENTRY_TRANSITION,
};
use crate::core::intro::hero_reveal_delay_ms;
use crate::dom;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loader") {
        _ = el.class_list().add_1("hidden");
    }
}

/// Hide the loader after its fixed delay, then run the hero entry.
pub fn schedule_intro(document: &web::Document) {
    let doc = document.clone();
    dom::set_timeout(LOADER_HIDE_DELAY_MS, move || {
        hide(&doc);
        reveal_hero(&doc);
    });
}

fn reveal_hero(document: &web::Document) {
    let items = dom::query_all(document, ".hero .reveal-up, .hero .reveal-scale");
    log::debug!("[intro] revealing {} hero elements", items.len());
    for (i, el) in items.into_iter().enumerate() {
        dom::set_timeout(hero_reveal_delay_ms(i), move || {
            _ = el.class_list().add_1("visible");
        });
    }
    if let Some(product) = dom::html_by_id(document, "product3D") {
        enter_product(product);
    }
}

/// One-shot entry transition; the transition is removed afterwards so the
/// tilt loop's own smoothing is not eased a second time by CSS.
fn enter_product(product: web::HtmlElement) {
    let style = product.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("transform", PRODUCT_ENTRY_FROM_TRANSFORM);
    _ = style.set_property("transition", PRODUCT_ENTRY_TRANSITION);

    dom::set_timeout(PRODUCT_ENTRY_DELAY_MS, move || {
        let style = product.style();
        _ = style.set_property("opacity", "1");
        _ = style.set_property("transform", PRODUCT_ENTRY_TO_TRANSFORM);
        dom::set_timeout(PRODUCT_ENTRY_SETTLE_MS, move || {
            _ = product.style().set_property("transition", "none");
        });
    });
}
