pub mod background;
pub mod forms;
pub mod portfolio;
pub mod thank_you;
