//! Update function for the generic form renderer.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Editing a field clears its error as soon as the value becomes valid.
//! - Blur re-validates touched fields only, so untouched required fields are
//!   not flagged before the first submit.
//! - Submit validates every field; on success the busy label is rendered
//!   first, then `Msg::Dispatch` hands the values to `on_submit` and redirects.

use common::forms::get_form_redirect_url;
use common::forms::validation::{validate_field, validate_form};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{navigate_to, show_toast};

use super::messages::Msg;
use super::state::FormRenderer;

pub fn update(component: &mut FormRenderer, ctx: &Context<FormRenderer>, msg: Msg) -> bool {
    let config = match component.config {
        Ok(config) => config,
        Err(_) => return false,
    };

    match msg {
        Msg::UpdateField { name, value } => {
            component.touched.insert(name);
            if component.errors.contains_key(name) {
                if let Some(field) = config.field(name) {
                    match validate_field(field, &value) {
                        Ok(()) => {
                            component.errors.remove(name);
                        }
                        Err(e) => {
                            component.errors.insert(name, e.kind);
                        }
                    }
                }
            }
            component.values.set(name, value);
            true
        }
        Msg::Blur(name) => {
            if !component.touched.contains(name) {
                return false;
            }
            let Some(field) = config.field(name) else {
                return false;
            };
            match validate_field(field, component.values.get(name)) {
                Ok(()) => component.errors.remove(name).is_some(),
                Err(e) => {
                    component.errors.insert(name, e.kind);
                    true
                }
            }
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let errors = validate_form(config, &component.values);
            component.errors = errors.iter().map(|e| (e.field, e.kind)).collect();
            if !errors.is_empty() {
                show_toast("Please check the highlighted fields.");
                return true;
            }

            component.submitting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(50).await;
                link.send_message(Msg::Dispatch);
            });
            true
        }
        Msg::Dispatch => {
            let values = component.values.trimmed();
            match serde_json::to_string(&values) {
                Ok(payload) => gloo_console::log!(format!("Submitting {}: {}", config.id, payload)),
                Err(e) => gloo_console::warn!(e.to_string()),
            }
            if let Some(on_submit) = &ctx.props().on_submit {
                on_submit.emit(values);
            }
            match get_form_redirect_url(config.id) {
                Ok(url) => navigate_to(&url),
                Err(e) => gloo_console::error!(e.to_string()),
            }
            false
        }
    }
}
