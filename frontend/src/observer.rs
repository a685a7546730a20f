//! Viewport intersection tracking with guaranteed cleanup.
//!
//! [`InViewObserver`] wraps an `IntersectionObserver` and the JS closure it
//! calls. Dropping the guard disconnects the observer before the closure is
//! released, so no callback can fire against an unmounted component.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

pub struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl InViewObserver {
    /// Starts observing `element`; `on_change` receives `true` whenever at
    /// least `threshold` of it is visible and `false` when it leaves.
    pub fn observe(element: &Element, threshold: f64, on_change: Callback<bool>) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change.emit(entry.is_intersecting());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl InViewObserver {
    /// Stops observing from inside the observer's own callback. The guard
    /// is dropped on the next microtask, after the callback has returned.
    pub fn release(self) {
        self.observer.disconnect();
        wasm_bindgen_futures::spawn_local(async move {
            drop(self);
        });
    }
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
