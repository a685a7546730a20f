//! Form definitions. Each one is an immutable literal; nothing here is
//! mutated after compilation.

use super::model::{FieldType, FormConfig, FormField, FormType, GridColumn, SelectOption, SuccessMessage};

const SERVICE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select a service" },
    SelectOption { value: "web-design", label: "Web Design & Development" },
    SelectOption { value: "seo", label: "Search Engine Optimisation" },
    SelectOption { value: "google-ads", label: "Google Ads Management" },
    SelectOption { value: "branding", label: "Branding & Identity" },
    SelectOption { value: "ecommerce", label: "E-commerce" },
    SelectOption { value: "other", label: "Something else" },
];

const BUDGET_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select a budget range" },
    SelectOption { value: "under-5k", label: "Under $5,000" },
    SelectOption { value: "5k-10k", label: "$5,000 - $10,000" },
    SelectOption { value: "10k-25k", label: "$10,000 - $25,000" },
    SelectOption { value: "25k-plus", label: "$25,000+" },
];

const AD_SPEND_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select monthly ad spend" },
    SelectOption { value: "under-2k", label: "Under $2,000 / month" },
    SelectOption { value: "2k-5k", label: "$2,000 - $5,000 / month" },
    SelectOption { value: "5k-15k", label: "$5,000 - $15,000 / month" },
    SelectOption { value: "15k-plus", label: "$15,000+ / month" },
];

const AD_PLATFORM_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select a platform" },
    SelectOption { value: "google", label: "Google Ads" },
    SelectOption { value: "meta", label: "Meta (Facebook & Instagram)" },
    SelectOption { value: "both", label: "Both" },
];

const TIMELINE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select a timeline" },
    SelectOption { value: "asap", label: "As soon as possible" },
    SelectOption { value: "1-3-months", label: "1 - 3 months" },
    SelectOption { value: "3-6-months", label: "3 - 6 months" },
    SelectOption { value: "exploring", label: "Just exploring" },
];

const CONTACT_FIELDS: &[FormField] = &[
    FormField::new("name", FieldType::Text, "Full Name *")
        .placeholder("Jane Citizen")
        .required()
        .column(GridColumn::One),
    FormField::new("email", FieldType::Email, "Email Address *")
        .placeholder("jane@business.com.au")
        .required()
        .column(GridColumn::Two),
    FormField::new("phone", FieldType::Tel, "Phone Number")
        .placeholder("0400 000 000")
        .column(GridColumn::One),
    FormField::new("company", FieldType::Text, "Company")
        .placeholder("Your business name")
        .column(GridColumn::Two),
    FormField::new("service", FieldType::Select, "Service of Interest")
        .options(SERVICE_OPTIONS)
        .column(GridColumn::Full),
    FormField::new("message", FieldType::Textarea, "Message *")
        .placeholder("Tell us a little about your project")
        .required()
        .column(GridColumn::Full)
        .rows(5),
];

const SEO_AUDIT_FIELDS: &[FormField] = &[
    FormField::new("name", FieldType::Text, "Full Name *")
        .placeholder("Jane Citizen")
        .required()
        .column(GridColumn::One),
    FormField::new("email", FieldType::Email, "Email Address *")
        .placeholder("jane@business.com.au")
        .required()
        .column(GridColumn::Two),
    FormField::new("website", FieldType::Url, "Website URL *")
        .placeholder("https://www.yourbusiness.com.au")
        .required()
        .column(GridColumn::Full),
    FormField::new("phone", FieldType::Tel, "Phone Number")
        .placeholder("0400 000 000")
        .column(GridColumn::One),
    FormField::new("location", FieldType::Text, "Business Location")
        .placeholder("e.g. Parramatta, NSW")
        .column(GridColumn::Two),
    FormField::new("keywords", FieldType::Textarea, "Target Keywords")
        .placeholder("The searches you want to rank for, one per line")
        .column(GridColumn::Full)
        .rows(3),
];

const ADS_AUDIT_FIELDS: &[FormField] = &[
    FormField::new("name", FieldType::Text, "Full Name *")
        .placeholder("Jane Citizen")
        .required()
        .column(GridColumn::One),
    FormField::new("email", FieldType::Email, "Email Address *")
        .placeholder("jane@business.com.au")
        .required()
        .column(GridColumn::Two),
    FormField::new("website", FieldType::Url, "Website URL *")
        .placeholder("https://www.yourbusiness.com.au")
        .required()
        .column(GridColumn::Full),
    FormField::new("platform", FieldType::Select, "Advertising Platform *")
        .options(AD_PLATFORM_OPTIONS)
        .required()
        .column(GridColumn::One),
    FormField::new("adSpend", FieldType::Select, "Monthly Ad Spend")
        .options(AD_SPEND_OPTIONS)
        .column(GridColumn::Two),
    FormField::new("goals", FieldType::Textarea, "Campaign Goals")
        .placeholder("Leads, sales, bookings... what does success look like?")
        .column(GridColumn::Full)
        .rows(4),
];

const CONSULTATION_FIELDS: &[FormField] = &[
    FormField::new("name", FieldType::Text, "Full Name *")
        .placeholder("Jane Citizen")
        .required()
        .column(GridColumn::One),
    FormField::new("email", FieldType::Email, "Email Address *")
        .placeholder("jane@business.com.au")
        .required()
        .column(GridColumn::Two),
    FormField::new("phone", FieldType::Tel, "Phone Number *")
        .placeholder("0400 000 000")
        .required()
        .column(GridColumn::One),
    FormField::new("company", FieldType::Text, "Company")
        .placeholder("Your business name")
        .column(GridColumn::Two),
    FormField::new("service", FieldType::Select, "Service *")
        .options(SERVICE_OPTIONS)
        .required()
        .column(GridColumn::One),
    FormField::new("budget", FieldType::Select, "Budget")
        .options(BUDGET_OPTIONS)
        .column(GridColumn::Two),
    FormField::new("timeline", FieldType::Select, "Timeline")
        .options(TIMELINE_OPTIONS)
        .column(GridColumn::Full),
    FormField::new("details", FieldType::Textarea, "Project Details")
        .placeholder("Goals, existing website, anything we should know before we call")
        .column(GridColumn::Full)
        .rows(5),
];

pub const CONTACT_FORM: FormConfig = FormConfig {
    id: FormType::Contact,
    title: "Get in Touch",
    description: "Tell us about your project and our Sydney team will get back to you within one business day.",
    fields: CONTACT_FIELDS,
    submit_text: "Send Message",
    submitting_text: "Sending...",
    success_message: SuccessMessage {
        title: "Message received!",
        description: "Thanks for reaching out. We'll be in touch within one business day.",
    },
    redirect_type: "contact",
};

pub const SEO_AUDIT_FORM: FormConfig = FormConfig {
    id: FormType::SeoAudit,
    title: "Free SEO Audit",
    description: "Find out what's holding your website back in Google. We'll review your rankings, technical health and local visibility.",
    fields: SEO_AUDIT_FIELDS,
    submit_text: "Get My Free Audit",
    submitting_text: "Requesting audit...",
    success_message: SuccessMessage {
        title: "Your SEO audit is on its way!",
        description: "Our team will review your site and send the report to your inbox within 48 hours.",
    },
    redirect_type: "seoAudit",
};

pub const ADS_AUDIT_FORM: FormConfig = FormConfig {
    id: FormType::AdsAudit,
    title: "Free Google Ads Audit",
    description: "Stop wasting ad spend. We'll analyse your account structure, keywords and conversion tracking.",
    fields: ADS_AUDIT_FIELDS,
    submit_text: "Audit My Campaigns",
    submitting_text: "Requesting audit...",
    success_message: SuccessMessage {
        title: "Audit request received!",
        description: "A paid media specialist will contact you to arrange read-only access to your account.",
    },
    redirect_type: "adsAudit",
};

pub const CONSULTATION_FORM: FormConfig = FormConfig {
    id: FormType::Consultation,
    title: "Book a Free Consultation",
    description: "A 30 minute strategy session with a senior consultant, no strings attached.",
    fields: CONSULTATION_FIELDS,
    submit_text: "Book My Consultation",
    submitting_text: "Booking...",
    success_message: SuccessMessage {
        title: "Consultation requested!",
        description: "We'll call you shortly to lock in a time that suits.",
    },
    redirect_type: "consultation",
};
