use crate::dom;
use web_sys as web;

fn set_body_overflow(document: &web::Document, hidden: bool) {
    if let Some(body) = document.body() {
        let style = body.style();
        _ = if hidden {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Hamburger toggles the mobile menu; any mobile link closes it again.
pub fn wire_hamburger(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        dom::html_by_id(document, "hamburger"),
        dom::html_by_id(document, "mobileMenu"),
    ) else {
        return;
    };

    let (h, m, doc) = (hamburger.clone(), menu.clone(), document.clone());
    dom::add_click_listener(document, "hamburger", move || {
        _ = h.class_list().toggle("active");
        let open = m.class_list().toggle("active").unwrap_or(false);
        set_body_overflow(&doc, open);
    });

    for link in dom::query_all(document, "#mobileMenu .mobile-link") {
        let (h, m, doc) = (hamburger.clone(), menu.clone(), document.clone());
        dom::add_listener(&link, "click", move |_: web::Event| {
            _ = h.class_list().remove_1("active");
            _ = m.class_list().remove_1("active");
            set_body_overflow(&doc, false);
        });
    }
}

/// In-page anchors scroll smoothly to their target instead of jumping.
pub fn wire_smooth_anchors(document: &web::Document) {
    let anchors = dom::query_all(document, "a[href^=\"#\"]");
    for anchor in &anchors {
        let (a, doc) = (anchor.clone(), document.clone());
        dom::add_listener(anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            // a bare "#" is not a valid selector
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
    log::debug!("[menu] smooth scroll on {} anchors", anchors.len());
}

