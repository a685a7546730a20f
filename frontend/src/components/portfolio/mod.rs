//! Portfolio display engine: filter tabs, project cards with image carousels
//! and the animated stats strip.

mod card;
mod carousel;
mod grid;
mod stats;

pub use grid::PortfolioGrid;
