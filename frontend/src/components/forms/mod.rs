//! Generic lead-capture form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! The component knows nothing about individual forms. Everything it renders
//! (fields, layout, copy, redirect target) comes from the form registry in
//! `common::forms`, keyed by the `form_type` property.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormRendererProps;
pub use state::FormRenderer;

impl Component for FormRenderer {
    type Message = Msg;
    type Properties = FormRendererProps;

    fn create(ctx: &Context<Self>) -> Self {
        FormRenderer::new(ctx.props().form_type)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().form_type != old_props.form_type {
            *self = FormRenderer::new(ctx.props().form_type);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
