use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FormError;
use super::registry::THANK_YOU_PATH;

/// Closed set of forms the site knows how to render.
///
/// The serialized names double as the `type` query parameter of the thank-you
/// page, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormType {
    Contact,
    SeoAudit,
    AdsAudit,
    Consultation,
}

impl FormType {
    pub const ALL: [FormType; 4] = [
        FormType::Contact,
        FormType::SeoAudit,
        FormType::AdsAudit,
        FormType::Consultation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormType::Contact => "contact",
            FormType::SeoAudit => "seoAudit",
            FormType::AdsAudit => "adsAudit",
            FormType::Consultation => "consultation",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = FormError;

    /// Matches the exact wire names; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormError::UnknownFormType(s.to_string()))
    }
}

/// Input kind of a field. Drives both the rendered control and the basic
/// validation class applied to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Url,
    Textarea,
    Select,
}

impl FieldType {
    /// Value for the `type` attribute of an `<input>`. `None` for controls that
    /// are not inputs.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldType::Text => Some("text"),
            FieldType::Email => Some("email"),
            FieldType::Tel => Some("tel"),
            FieldType::Url => Some("url"),
            FieldType::Textarea | FieldType::Select => None,
        }
    }
}

/// Placement of a field in the two-column responsive form grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridColumn {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "full")]
    Full,
}

impl GridColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            GridColumn::One => "1",
            GridColumn::Two => "2",
            GridColumn::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One input descriptor.
///
/// A trailing `*` in `label` is only a visual hint; `required` is what the
/// renderer and the validator enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub required: bool,
    /// Only present on `select` fields. The first option is the empty
    /// placeholder choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [SelectOption]>,
    /// Fields without a column hint flow in document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<GridColumn>,
    /// Only meaningful on `textarea` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

impl FormField {
    pub const fn new(name: &'static str, field_type: FieldType, label: &'static str) -> Self {
        Self {
            name,
            field_type,
            label,
            placeholder: None,
            required: false,
            options: None,
            grid_column: None,
            rows: None,
        }
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn column(mut self, column: GridColumn) -> Self {
        self.grid_column = Some(column);
        self
    }

    pub const fn options(mut self, options: &'static [SelectOption]) -> Self {
        self.options = Some(options);
        self
    }

    pub const fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Label without the cosmetic required marker.
    pub fn plain_label(&self) -> &'static str {
        self.label.trim_end_matches('*').trim_end()
    }

    /// Options of a select field, empty for every other field type.
    pub fn select_options(&self) -> &'static [SelectOption] {
        self.options.unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessMessage {
    pub title: &'static str,
    pub description: &'static str,
}

/// Complete declarative description of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub id: FormType,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FormField],
    pub submit_text: &'static str,
    pub submitting_text: &'static str,
    pub success_message: SuccessMessage,
    pub redirect_type: &'static str,
}

impl FormConfig {
    /// Fields whose column hint is exactly `column`, in declaration order.
    pub fn fields_in_column(&self, column: GridColumn) -> Vec<&'static FormField> {
        let fields: &'static [FormField] = self.fields;
        fields
            .iter()
            .filter(|f| f.grid_column == Some(column))
            .collect()
    }

    pub fn required_fields(&self) -> Vec<&'static FormField> {
        let fields: &'static [FormField] = self.fields;
        fields.iter().filter(|f| f.required).collect()
    }

    pub fn field(&self, name: &str) -> Option<&'static FormField> {
        let fields: &'static [FormField] = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    pub fn redirect_url(&self) -> String {
        format!("{}?type={}", THANK_YOU_PATH, self.redirect_type)
    }
}
