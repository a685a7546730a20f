//! Shared model and logic for the agency website.
//!
//! Everything in this crate is platform independent so that the Yew frontend,
//! the actix backend and the test suite all work from the same definitions.

pub mod background;
pub mod carousel;
pub mod counter;
pub mod forms;
pub mod portfolio;
