//! Surfsup Core Library
//!
//! Shared pieces for the climate API binary:
//! - Configuration file discovery and loading (XDG-compliant)
//! - Filesystem probes for the dataset file

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{is_file, path_exists};

/// Application name used for XDG paths and env var prefixes
pub const APP_NAME: &str = "surfsup";

/// Default listen port for the API server
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the read-only climate dataset
pub const DEFAULT_DB_PATH: &str = "./Resources/hawaii.sqlite";
