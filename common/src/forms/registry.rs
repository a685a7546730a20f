use log::warn;

use super::FormError;
use super::configs::{ADS_AUDIT_FORM, CONSULTATION_FORM, CONTACT_FORM, SEO_AUDIT_FORM};
use super::model::{FormConfig, FormField, FormType, GridColumn};

/// Path of the page every form redirects to after a successful submission.
pub const THANK_YOU_PATH: &str = "/thank-you";

/// Read-only table from [`FormType`] to its [`FormConfig`].
///
/// Entries are kept in definition order, which is also the order reported by
/// [`FormRegistry::types`]. There is no write path.
#[derive(Debug)]
pub struct FormRegistry {
    entries: &'static [&'static FormConfig],
}

/// The process-wide registry used by the free accessor functions.
pub static FORM_CONFIGS: FormRegistry = FormRegistry::new(&[
    &CONTACT_FORM,
    &SEO_AUDIT_FORM,
    &ADS_AUDIT_FORM,
    &CONSULTATION_FORM,
]);

impl FormRegistry {
    pub const fn new(entries: &'static [&'static FormConfig]) -> Self {
        Self { entries }
    }

    pub fn get(&self, form_type: FormType) -> Result<&'static FormConfig, FormError> {
        let entries: &'static [&'static FormConfig] = self.entries;
        entries
            .iter()
            .copied()
            .find(|config| config.id == form_type)
            .ok_or(FormError::ConfigNotFound(form_type))
    }

    pub fn types(&self) -> Vec<FormType> {
        self.entries.iter().map(|config| config.id).collect()
    }

    pub fn contains(&self, form_type: FormType) -> bool {
        self.entries.iter().any(|config| config.id == form_type)
    }

    /// Narrows an arbitrary string (URL segment, query parameter) to a
    /// registered form type.
    pub fn parse(&self, candidate: &str) -> Result<FormType, FormError> {
        let form_type: FormType = candidate.parse()?;
        if self.contains(form_type) {
            Ok(form_type)
        } else {
            Err(FormError::ConfigNotFound(form_type))
        }
    }
}

/// Looks up the configuration for `form_type`.
///
/// Fails with [`FormError::ConfigNotFound`] when the type is not registered.
pub fn get_form_config(form_type: FormType) -> Result<&'static FormConfig, FormError> {
    FORM_CONFIGS.get(form_type).inspect_err(|e| warn!("{}", e))
}

/// All registered form types, in registry definition order.
pub fn get_form_types() -> Vec<FormType> {
    FORM_CONFIGS.types()
}

/// Total predicate: `true` only for the wire name of a registered form type.
pub fn is_valid_form_type(candidate: &str) -> bool {
    FORM_CONFIGS.parse(candidate).is_ok()
}

pub fn parse_form_type(candidate: &str) -> Result<FormType, FormError> {
    FORM_CONFIGS.parse(candidate)
}

/// `/thank-you?type=<redirect_type>` for the given form.
pub fn get_form_redirect_url(form_type: FormType) -> Result<String, FormError> {
    Ok(get_form_config(form_type)?.redirect_url())
}

/// Fields placed in exactly `column`. An empty result is not an error.
pub fn get_fields_by_column(
    form_type: FormType,
    column: GridColumn,
) -> Result<Vec<&'static FormField>, FormError> {
    Ok(get_form_config(form_type)?.fields_in_column(column))
}

pub fn get_required_fields(form_type: FormType) -> Result<Vec<&'static FormField>, FormError> {
    Ok(get_form_config(form_type)?.required_fields())
}

/// Finds a field by name. A missing field is `Ok(None)`: callers probe for
/// optional fields, so absence is expected.
pub fn get_field_by_name(
    form_type: FormType,
    field_name: &str,
) -> Result<Option<&'static FormField>, FormError> {
    Ok(get_form_config(form_type)?.field(field_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldType;
    use std::collections::HashSet;

    static CONTACT_ONLY: FormRegistry = FormRegistry::new(&[&CONTACT_FORM]);

    #[test]
    fn every_registered_type_resolves_to_its_own_config() {
        for form_type in get_form_types() {
            let config = get_form_config(form_type).unwrap();
            assert_eq!(config.id, form_type);
        }
    }

    #[test]
    fn types_follow_definition_order() {
        assert_eq!(
            get_form_types(),
            vec![
                FormType::Contact,
                FormType::SeoAudit,
                FormType::AdsAudit,
                FormType::Consultation
            ]
        );
    }

    #[test]
    fn missing_entry_is_config_not_found() {
        assert_eq!(
            CONTACT_ONLY.get(FormType::AdsAudit),
            Err(FormError::ConfigNotFound(FormType::AdsAudit))
        );
        assert!(CONTACT_ONLY.parse("contact").is_ok());
        assert_eq!(
            CONTACT_ONLY.parse("seoAudit"),
            Err(FormError::ConfigNotFound(FormType::SeoAudit))
        );
    }

    #[test]
    fn parse_rejects_unknown_and_miscased_names() {
        assert_eq!(
            parse_form_type("bogus"),
            Err(FormError::UnknownFormType("bogus".to_string()))
        );
        assert!(!is_valid_form_type("SeoAudit"));
        assert!(!is_valid_form_type(""));
        assert!(is_valid_form_type("seoAudit"));
    }

    #[test]
    fn redirect_url_uses_redirect_type() {
        assert_eq!(
            get_form_redirect_url(FormType::SeoAudit).unwrap(),
            "/thank-you?type=seoAudit"
        );
        assert_eq!(
            get_form_redirect_url(FormType::Contact).unwrap(),
            "/thank-you?type=contact"
        );
    }

    #[test]
    fn field_names_are_unique_within_each_config() {
        for form_type in get_form_types() {
            let config = get_form_config(form_type).unwrap();
            let names: HashSet<_> = config.fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), config.fields.len(), "duplicate field in {}", form_type);
        }
    }

    #[test]
    fn select_fields_start_with_an_empty_placeholder_option() {
        for form_type in get_form_types() {
            let config = get_form_config(form_type).unwrap();
            for field in config.fields {
                match field.field_type {
                    FieldType::Select => {
                        let first = field.select_options().first().expect("select without options");
                        assert_eq!(first.value, "", "{}.{}", form_type, field.name);
                    }
                    _ => assert!(field.options.is_none(), "{}.{}", form_type, field.name),
                }
            }
        }
    }

    #[test]
    fn rows_only_on_textareas() {
        for form_type in get_form_types() {
            for field in get_form_config(form_type).unwrap().fields {
                if field.rows.is_some() {
                    assert_eq!(field.field_type, FieldType::Textarea);
                }
            }
        }
    }

    #[test]
    fn field_lookup_distinguishes_absence() {
        let email = get_field_by_name(FormType::Contact, "email").unwrap();
        assert_eq!(email.map(|f| f.name), Some("email"));
        assert_eq!(get_field_by_name(FormType::Contact, "website").unwrap(), None);
    }

    #[test]
    fn empty_column_is_not_an_error() {
        const FULL_ONLY_FIELDS: &[FormField] = &[FormField::new("message", FieldType::Textarea, "Message")
            .column(GridColumn::Full)
            .rows(4)];
        const FULL_ONLY: FormConfig = FormConfig {
            fields: FULL_ONLY_FIELDS,
            ..CONTACT_FORM
        };
        assert!(FULL_ONLY.fields_in_column(GridColumn::One).is_empty());
        assert_eq!(FULL_ONLY.fields_in_column(GridColumn::Full).len(), 1);

        let full = get_fields_by_column(FormType::Contact, GridColumn::Full).unwrap();
        assert_eq!(
            full.iter().map(|f| f.name).collect::<Vec<_>>(),
            vec!["service", "message"]
        );
    }
}
