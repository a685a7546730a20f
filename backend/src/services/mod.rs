pub mod forms;
pub mod portfolio;
