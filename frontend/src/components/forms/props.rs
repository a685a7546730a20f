use common::forms::validation::FormValues;
use common::forms::FormType;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormRendererProps {
    /// Which registered form to render.
    pub form_type: FormType,

    /// Submission handler. Receives the trimmed, validated values just before
    /// the browser is sent to the form's thank-you URL. Delivery of the values
    /// is up to the caller.
    #[prop_or_default]
    pub on_submit: Option<Callback<FormValues>>,
}
