pub mod convert;
pub mod prompt;
pub mod setup;
pub mod ui;
