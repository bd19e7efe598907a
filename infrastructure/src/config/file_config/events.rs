//! Event log configuration from TOML (`[events]` section)

use finruimte_application::{DEFAULT_MAX_EVENT_RECORDS, EventParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw event log configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEventsConfig {
    /// Record wizard events locally
    pub enabled: bool,
    /// JSONL file location; defaults to the platform data directory
    pub path: Option<PathBuf>,
    /// Keep only the most recent N records
    pub max_records: usize,
}

impl Default for FileEventsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            max_records: DEFAULT_MAX_EVENT_RECORDS,
        }
    }
}

impl FileEventsConfig {
    /// Default event file: `$XDG_DATA_HOME/finruimte/events.jsonl`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("finruimte").join("events.jsonl"))
    }

    /// Configured path, falling back to [`Self::default_path`]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(Self::default_path)
    }

    pub fn to_event_params(&self) -> EventParams {
        EventParams::default()
            .with_enabled(self.enabled)
            .with_max_records(self.max_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileEventsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.max_records, 2000);
        assert!(config.path.is_none());
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = FileEventsConfig {
            path: Some(PathBuf::from("/tmp/events.jsonl")),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_path(),
            Some(PathBuf::from("/tmp/events.jsonl"))
        );
    }

    #[test]
    fn test_to_event_params() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[events]
enabled = false
max_records = 50
"#,
        )
        .unwrap();
        let params = config.events.to_event_params();
        assert!(!params.enabled);
        assert_eq!(params.max_records, 50);
    }
}
