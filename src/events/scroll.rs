use crate::constants::{
    COUNTER_THRESHOLD, NAV_ACTIVE_COLOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RING_THRESHOLD,
};
use crate::core::counter::{CounterAnimation, CounterRun};
use crate::core::scroll::{
    active_section, bg_text_transform, glow_scroll_transform, is_nav_scrolled, parse_percent,
    ring_dash_offset, SectionBounds,
};
use crate::core::{drive, FrameScheduler, VisibilitySource};
use crate::dom;
use crate::events::visibility::ViewportVisibility;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nav state, scroll parallax and active-link highlighting, all on `scroll`.
pub fn wire_scroll_effects(window: &web::Window, document: &web::Document) {
    let nav = dom::html_by_id(document, "nav");
    let glow = dom::html_by_id(document, "heroGlow");
    let bg_text = document.query_selector(".hero-bg-text").ok().flatten();
    let doc = document.clone();

    dom::add_listener(window, "scroll", move |_: web::Event| {
        let y = dom::scroll_y();
        if let Some(nav) = &nav {
            let cl = nav.class_list();
            _ = if is_nav_scrolled(y) {
                cl.add_1("scrolled")
            } else {
                cl.remove_1("scrolled")
            };
        }
        if let Some(bg) = &bg_text {
            dom::set_style(bg, "transform", &bg_text_transform(y));
        }
        if let Some(glow) = &glow {
            dom::set_style(glow, "transform", &glow_scroll_transform(y));
        }
        highlight_active_link(&doc, y);
    });
}

fn highlight_active_link(document: &web::Document, scroll_y: f64) {
    let sections: Vec<SectionBounds> = dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|el| {
            let id = el.id();
            let html = el.dyn_into::<web::HtmlElement>().ok()?;
            Some(SectionBounds {
                id,
                top: html.offset_top() as f64,
                height: html.offset_height() as f64,
            })
        })
        .filter(|s| nav_link_for(document, &s.id).is_some())
        .collect();

    let Some(id) = active_section(scroll_y, &sections) else {
        return;
    };
    let Some(link) = nav_link_for(document, id) else {
        return;
    };
    for l in dom::query_all(document, ".nav-link") {
        dom::clear_style(&l, "color");
    }
    dom::set_style(&link, "color", NAV_ACTIVE_COLOR);
}

fn nav_link_for(document: &web::Document, id: &str) -> Option<web::Element> {
    document
        .query_selector(&format!(".nav-link[href=\"#{}\"]", id))
        .ok()
        .flatten()
}

/// One-shot reveals, counters and rings as elements scroll into view.
pub fn wire_scroll_reveals(document: &web::Document, scheduler: Rc<dyn FrameScheduler>) {
    let reveal = ViewportVisibility::with_root_margin(REVEAL_ROOT_MARGIN);
    let mut revealed = 0usize;
    for el in dom::query_all(document, ".reveal-up, .reveal-scale") {
        // hero elements are revealed by the loader sequence
        if el.closest(".hero").ok().flatten().is_some() {
            continue;
        }
        let target = el.clone();
        reveal.on_intersect(
            &el,
            REVEAL_THRESHOLD,
            Box::new(move || {
                _ = target.class_list().add_1("visible");
            }),
        );
        revealed += 1;
    }

    let visibility = ViewportVisibility::new();
    let counters = dom::query_all(document, ".counter, .stat-number[data-target]");
    for el in &counters {
        let target = el.clone();
        let scheduler = scheduler.clone();
        visibility.on_intersect(
            el,
            COUNTER_THRESHOLD,
            Box::new(move || start_counter(&target, scheduler.clone())),
        );
    }

    let rings = dom::query_all(document, ".ring-progress");
    for el in &rings {
        let target = el.clone();
        visibility.on_intersect(
            el,
            RING_THRESHOLD,
            Box::new(move || fill_ring(&target)),
        );
    }
    log::info!(
        "[scroll] reveals={} counters={} rings={}",
        revealed,
        counters.len(),
        rings.len()
    );
}

fn start_counter(el: &web::Element, scheduler: Rc<dyn FrameScheduler>) {
    let Some(anim) = el
        .get_attribute("data-target")
        .and_then(|v| CounterAnimation::parse(&v))
    else {
        log::debug!("[counter] missing or invalid data-target");
        return;
    };
    log::debug!("[counter] counting to {}", anim.target());
    let el = el.clone();
    let mut run = CounterRun::new(anim);
    drive(scheduler, move |ts| {
        let (text, flow) = run.tick(ts);
        el.set_text_content(Some(&text));
        flow
    });
}

fn fill_ring(el: &web::Element) {
    let Some(percent) = el
        .get_attribute("data-progress")
        .and_then(|v| parse_percent(&v))
    else {
        return;
    };
    dom::set_style(el, "stroke-dashoffset", &ring_dash_offset(percent).to_string());
}
