use crate::core::VisibilitySource;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `IntersectionObserver`-backed visibility, one observer per target.
pub struct ViewportVisibility {
    root_margin: Option<&'static str>,
}

impl ViewportVisibility {
    pub fn new() -> Self {
        Self { root_margin: None }
    }

    pub fn with_root_margin(root_margin: &'static str) -> Self {
        Self {
            root_margin: Some(root_margin),
        }
    }
}

impl VisibilitySource for ViewportVisibility {
    type Target = web::Element;

    fn on_intersect(&self, target: &web::Element, threshold: f64, mut handler: Box<dyn FnMut()>) {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        observer.unobserve(&entry.target());
                        observer.disconnect();
                        handler();
                        return;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = self.root_margin {
            init.set_root_margin(margin);
        }
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(observer) => observer.observe(target),
            Err(e) => log::error!("IntersectionObserver init error: {:?}", e),
        }
        callback.forget();
    }
}
