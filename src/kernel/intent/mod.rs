pub mod catalog;
pub mod detector;
pub mod types;
