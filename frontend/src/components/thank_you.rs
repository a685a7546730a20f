//! Post-submission landing page.
//!
//! The form type arrives as an untrusted `type` query parameter, so it is
//! narrowed with `is_valid_form_type` before any registry lookup.

use common::forms::{get_form_config, is_valid_form_type, parse_form_type, FormConfig};
use yew::prelude::*;

use crate::helpers::query_param;

const GENERIC_TITLE: &str = "Thank you!";
const GENERIC_DESCRIPTION: &str = "We've received your details and will be in touch shortly.";

pub struct ThankYou {
    config: Option<&'static FormConfig>,
}

fn config_from_query() -> Option<&'static FormConfig> {
    let candidate = query_param("type")?;
    if !is_valid_form_type(&candidate) {
        gloo_console::warn!(format!("Ignoring unknown form type `{}`", candidate));
        return None;
    }
    let form_type = parse_form_type(&candidate).ok()?;
    get_form_config(form_type).ok()
}

impl Component for ThankYou {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: config_from_query(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (title, description) = match self.config {
            Some(config) => (config.success_message.title, config.success_message.description),
            None => (GENERIC_TITLE, GENERIC_DESCRIPTION),
        };

        html! {
            <section class="thank-you">
                <h1>{ title }</h1>
                <p>{ description }</p>
                <a class="btn-secondary" href="/">{ "Back to home" }</a>
            </section>
        }
    }
}
