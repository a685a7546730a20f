use common::forms::FormType;
use yew::{html, Component, Context, Html};

use crate::components::background::Background;
use crate::components::forms::FormRenderer;
use crate::components::portfolio::PortfolioGrid;
use crate::components::thank_you::ThankYou;

/// What to show for the current location. Paths are resolved once at start-up;
/// navigation between pages is a full page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Portfolio,
    Form(FormType),
    ThankYou,
}

fn page_for(path: &str) -> Page {
    match path.trim_end_matches('/') {
        "/contact" => Page::Form(FormType::Contact),
        "/seo-audit" => Page::Form(FormType::SeoAudit),
        "/google-ads-audit" => Page::Form(FormType::AdsAudit),
        "/consultation" => Page::Form(FormType::Consultation),
        "/thank-you" => Page::ThankYou,
        _ => Page::Portfolio,
    }
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self { page: page_for(&path) }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content = match self.page {
            Page::Portfolio => html! { <PortfolioGrid /> },
            Page::Form(form_type) => html! { <FormRenderer {form_type} /> },
            Page::ThankYou => html! { <ThankYou /> },
        };

        html! {
            <div class="site-root">
                <Background />
                <main class="site-content">
                    { content }
                </main>
            </div>
        }
    }
}
