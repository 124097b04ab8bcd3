pub mod config;
pub mod demo;
pub mod types;

pub use config::{ConfigError, Settings};
pub use types::*;
