//! Configuration file loading for finruimte
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FINRUIMTE_*` environment variables (e.g. `FINRUIMTE_EVENTS__MAX_RECORDS`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./finruimte.toml` or `./.finruimte.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/finruimte/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileEventsConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
