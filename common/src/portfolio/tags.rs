/// Chip class for services that have no dedicated colour.
pub const DEFAULT_TAG_CLASS: &str = "tag tag-neutral";

const TAG_CLASSES: &[(&str, &str)] = &[
    ("web design", "tag tag-web-design"),
    ("branding", "tag tag-branding"),
    ("seo", "tag tag-seo"),
    ("e-commerce", "tag tag-ecommerce"),
    ("google ads", "tag tag-ads"),
    ("social media", "tag tag-social"),
];

/// CSS classes for a service tag chip. Matching ignores case.
pub fn tag_class(service: &str) -> &'static str {
    let service = service.to_lowercase();
    TAG_CLASSES
        .iter()
        .find(|(name, _)| *name == service)
        .map(|(_, class)| *class)
        .unwrap_or(DEFAULT_TAG_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_services_get_their_colour() {
        assert_eq!(tag_class("Web Design"), "tag tag-web-design");
        assert_eq!(tag_class("SEO"), "tag tag-seo");
        assert_eq!(tag_class("e-Commerce"), "tag tag-ecommerce");
    }

    #[test]
    fn unknown_services_are_neutral() {
        assert_eq!(tag_class("Podcast Production"), DEFAULT_TAG_CLASS);
    }
}
