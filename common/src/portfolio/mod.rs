//! Portfolio data model and the category filter behind the portfolio grid.

mod catalog;
mod stats;
mod tags;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use catalog::catalog;
pub use stats::{HIGHLIGHT_STATS, Stat};
pub use tags::{DEFAULT_TAG_CLASS, tag_class};

/// Filter token that matches every project.
pub const ALL_CATEGORIES: &str = "all";

/// One past client project, as shown in the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub industry: String,
    /// Service tags, used both for filtering and for the coloured tag chips.
    pub services: Vec<String>,
    /// Fallback image used when `images` is empty.
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl PortfolioProject {
    /// Images to feed a carousel. Never empty: falls back to `image` when no
    /// gallery is set.
    pub fn display_images(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.image.clone()]
        } else {
            self.images.clone()
        }
    }
}

/// The fixed set of filter tabs above the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    WebDesign,
    Branding,
    Seo,
    Ecommerce,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::WebDesign,
        Category::Branding,
        Category::Seo,
        Category::Ecommerce,
    ];

    /// Token handed to [`category_matches`].
    pub fn token(self) -> &'static str {
        match self {
            Category::All => ALL_CATEGORIES,
            Category::WebDesign => "Web Design",
            Category::Branding => "Branding",
            Category::Seo => "SEO",
            Category::Ecommerce => "E-commerce",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Projects",
            other => other.token(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown portfolio category `{}`", s))
    }
}

/// `"all"` matches everything; any other category matches when one of the
/// project's services contains it, ignoring case.
pub fn category_matches(project: &PortfolioProject, category: &str) -> bool {
    if category == ALL_CATEGORIES {
        return true;
    }
    let needle = category.to_lowercase();
    project
        .services
        .iter()
        .any(|service| service.to_lowercase().contains(&needle))
}

/// Projects matching `category`, in their original order.
pub fn filter_projects<'a>(projects: &'a [PortfolioProject], category: &str) -> Vec<&'a PortfolioProject> {
    projects
        .iter()
        .filter(|project| category_matches(project, category))
        .collect()
}
