//! Component state for the generic form renderer.

use std::collections::{HashMap, HashSet};

use common::forms::validation::{FieldErrorKind, FormValues};
use common::forms::{get_form_config, FormConfig, FormError, FormType};
use uuid::Uuid;

pub struct FormRenderer {
    /// The registry entry being rendered, or the lookup error to display.
    pub config: Result<&'static FormConfig, FormError>,

    /// Current raw values keyed by field name.
    pub values: FormValues,

    /// Latest validation failure per field. Cleared as fields become valid.
    pub errors: HashMap<&'static str, FieldErrorKind>,

    /// Fields the user has edited; blur validation only applies to these.
    pub touched: HashSet<&'static str>,

    /// Set between a valid submit and the redirect. Switches the button to
    /// its busy label and disables it.
    pub submitting: bool,

    /// Prefix for element ids so that two forms on one page never collide.
    pub id_prefix: String,
}

impl FormRenderer {
    pub fn new(form_type: FormType) -> Self {
        let config = get_form_config(form_type);
        if let Err(e) = &config {
            gloo_console::error!(e.to_string());
        }
        let values = config
            .as_ref()
            .map(|c| FormValues::for_config(c))
            .unwrap_or_default();

        Self {
            config,
            values,
            errors: HashMap::new(),
            touched: HashSet::new(),
            submitting: false,
            id_prefix: format!("form-{}", Uuid::new_v4().simple()),
        }
    }

    pub fn field_id(&self, name: &str) -> String {
        format!("{}-{}", self.id_prefix, name)
    }
}
