pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod prompt;
pub mod stages;

pub use config::Config;
