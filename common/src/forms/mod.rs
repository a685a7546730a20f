//! Declarative lead-capture forms.
//!
//! Every form on the site is described by a [`FormConfig`] literal and
//! registered in [`FORM_CONFIGS`]. A generic renderer only needs the registry
//! accessors below to lay out, validate and submit any of them; adding a form
//! type means adding a literal and a registry entry, nothing else.

mod configs;
mod model;
mod registry;
pub mod validation;

use thiserror::Error;

pub use configs::{ADS_AUDIT_FORM, CONSULTATION_FORM, CONTACT_FORM, SEO_AUDIT_FORM};
pub use model::{FieldType, FormConfig, FormField, FormType, GridColumn, SelectOption, SuccessMessage};
pub use registry::{
    FORM_CONFIGS, FormRegistry, THANK_YOU_PATH, get_field_by_name, get_fields_by_column,
    get_form_config, get_form_redirect_url, get_form_types, get_required_fields,
    is_valid_form_type, parse_form_type,
};

/// Errors raised by registry lookups.
///
/// Both variants signal a programming mistake (a type constant that is out of
/// sync with the registry, or an unchecked external string), so callers are
/// expected to surface them rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form configuration not found for type `{0}`")]
    ConfigNotFound(FormType),
    #[error("unknown form type `{0}`")]
    UnknownFormType(String),
}
