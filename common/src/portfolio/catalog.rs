use super::PortfolioProject;

struct Entry {
    id: u32,
    name: &'static str,
    description: &'static str,
    industry: &'static str,
    services: &'static [&'static str],
    image: &'static str,
    images: &'static [&'static str],
    website_url: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        name: "Bondi Coast Physio",
        description: "A fast, mobile-first clinic site with online bookings and suburb landing pages that doubled enquiries in four months.",
        industry: "Healthcare",
        services: &["Web Design", "SEO"],
        image: "/images/portfolio/bondi-physio.jpg",
        images: &[
            "/images/portfolio/bondi-physio.jpg",
            "/images/portfolio/bondi-physio-bookings.jpg",
            "/images/portfolio/bondi-physio-mobile.jpg",
        ],
        website_url: Some("https://www.bondicoastphysio.com.au"),
    },
    Entry {
        id: 2,
        name: "Harbour Roast Co.",
        description: "Full brand identity for a specialty coffee roaster: logo, packaging system and café signage.",
        industry: "Food & Beverage",
        services: &["Branding"],
        image: "/images/portfolio/harbour-roast.jpg",
        images: &[],
        website_url: None,
    },
    Entry {
        id: 3,
        name: "Inner West Homewares",
        description: "Shopify store migration with a custom theme, faster checkout and automated stock sync.",
        industry: "Retail",
        services: &["E-commerce", "Web Design"],
        image: "/images/portfolio/inner-west-homewares.jpg",
        images: &[
            "/images/portfolio/inner-west-homewares.jpg",
            "/images/portfolio/inner-west-homewares-product.jpg",
        ],
        website_url: Some("https://www.innerwesthomewares.com.au"),
    },
    Entry {
        id: 4,
        name: "Parramatta Legal Group",
        description: "Technical SEO overhaul and content strategy that took the firm to page one for twelve practice-area searches.",
        industry: "Legal",
        services: &["SEO", "Google Ads"],
        image: "/images/portfolio/parramatta-legal.jpg",
        images: &[
            "/images/portfolio/parramatta-legal.jpg",
            "/images/portfolio/parramatta-legal-rankings.jpg",
        ],
        website_url: Some("https://www.parramattalegal.com.au"),
    },
    Entry {
        id: 5,
        name: "Northern Beaches Builders",
        description: "Rebrand and portfolio website showcasing custom home builds with a filterable project gallery.",
        industry: "Construction",
        services: &["Branding", "Web Design"],
        image: "/images/portfolio/nb-builders.jpg",
        images: &[
            "/images/portfolio/nb-builders.jpg",
            "/images/portfolio/nb-builders-gallery.jpg",
            "/images/portfolio/nb-builders-logo.jpg",
            "/images/portfolio/nb-builders-mobile.jpg",
        ],
        website_url: Some("https://www.nbbuilders.com.au"),
    },
    Entry {
        id: 6,
        name: "Surry Hills Florist",
        description: "Same-day delivery e-commerce site with postcode-based shipping rules and local search campaigns.",
        industry: "Retail",
        services: &["E-commerce", "SEO"],
        image: "/images/portfolio/surry-hills-florist.jpg",
        images: &[],
        website_url: Some("https://www.surryhillsflorist.com.au"),
    },
];

/// The static list of portfolio projects shown on the site, in display order.
pub fn catalog() -> Vec<PortfolioProject> {
    ENTRIES
        .iter()
        .map(|e| PortfolioProject {
            id: e.id,
            name: e.name.to_string(),
            description: e.description.to_string(),
            industry: e.industry.to_string(),
            services: e.services.iter().map(|s| s.to_string()).collect(),
            image: e.image.to_string(),
            images: e.images.iter().map(|s| s.to_string()).collect(),
            website_url: e.website_url.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let projects = catalog();
        let ids: HashSet<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn every_project_has_something_to_show() {
        for project in catalog() {
            assert!(!project.image.is_empty());
            assert!(!project.display_images().is_empty());
            assert!(!project.services.is_empty(), "{} has no services", project.name);
        }
    }
}
