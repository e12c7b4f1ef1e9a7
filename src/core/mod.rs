pub mod config;

pub use config::{DEFAULT_MAX_DEPTH, ValidatorConfig};
