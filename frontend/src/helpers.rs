//! Small browser helpers shared by the page components.
//!
//! - **User Feedback**: temporary toast notifications.
//! - **Navigation**: full-page redirects and query-string access.
//! - **Formatting**: grouped number display for the stats strip.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, UrlSearchParams};

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast removes itself after three seconds. Used by the form renderer to
/// report validation problems that may be scrolled out of view.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Sends the browser to `url` with a full page load.
pub fn navigate_to(url: &str) {
    let result = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|w| w.location().set_href(url).map_err(|e| format!("{:?}", e)));
    if let Err(e) = result {
        gloo_console::error!(format!("Navigation to {} failed: {}", url, e));
    }
}

/// Reads `name` from the current location's query string.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// `2500` -> `"2,500"`.
pub fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}
