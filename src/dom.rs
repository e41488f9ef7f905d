use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Optional page element by id; absence is an expected page variant.
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if el.is_none() {
        log::debug!("[dom] no #{} on this page", id);
    }
    el
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Inline style of an HTML or SVG element.
pub fn style_of(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        return Some(h.style());
    }
    el.dyn_ref::<web::SvgElement>().map(|s| s.style())
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(style) = style_of(el) {
        _ = style.set_property(property, value);
    }
}

#[inline]
pub fn clear_style(el: &web::Element, property: &str) {
    if let Some(style) = style_of(el) {
        _ = style.remove_property(property);
    }
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_: web::Event| handler());
    }
}

pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}
