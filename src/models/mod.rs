pub mod config;

pub use config::{AppConfig, CONFIG_ENV};
