//! Container width observation.

use leptos::{html, NodeRef};

/// Calls `on_width` with the content-box width of `target` whenever it is resized.
///
/// The observer is disconnected when the owning view is disposed. Off-wasm this does nothing.
#[cfg(target_arch = "wasm32")]
pub(crate) fn observe_container_width(
    target: NodeRef<html::Div>,
    on_width: impl Fn(f64) + 'static,
) {
    use std::rc::Rc;

    use leptos::{create_effect, logging, on_cleanup};
    use wasm_bindgen::{closure::Closure, JsCast};

    let on_width = Rc::new(on_width);
    create_effect(move |_| {
        let Some(element) = target.get() else {
            return;
        };

        let notify = on_width.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let entry = entries.get(0);
            if let Some(entry) = entry.dyn_ref::<web_sys::ResizeObserverEntry>() {
                notify(entry.content_rect().width());
            }
        });
        let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                logging::warn!("ResizeObserver unavailable: {err:?}");
                on_width(element.client_width() as f64);
                return;
            }
        };
        observer.observe(&element);
        on_cleanup(move || {
            observer.disconnect();
            drop(callback);
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn observe_container_width(
    target: NodeRef<html::Div>,
    on_width: impl Fn(f64) + 'static,
) {
    let _ = (target, on_width);
}
