//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod events;
mod logging;
mod output;

pub use events::FileEventsConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use finruimte_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Local event log settings
    pub events: FileEventsConfig,
    /// Diagnostic log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `events.max_records` must keep at least one record
    /// 2. Path settings must not be empty strings
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.events.max_records == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "events.max_records".to_string(),
                    value: "0".to_string(),
                },
                message: "events.max_records is 0, keeping the most recent record only"
                    .to_string(),
            });
        }

        let paths = [
            ("events.path", self.events.path.as_ref()),
            ("logging.dir", self.logging.dir.as_ref()),
        ];
        for (field, path) in paths {
            if path.is_some_and(|p| p.as_os_str().is_empty()) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    message: format!("{} is set but empty", field),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finruimte_domain::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "full"
color = false

[events]
enabled = true
path = "/var/tmp/finruimte/events.jsonl"
max_records = 500

[logging]
dir = "/var/tmp/finruimte/logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(
            config.events.path,
            Some(PathBuf::from("/var/tmp/finruimte/events.jsonl"))
        );
        assert_eq!(config.events.max_records, 500);
        assert_eq!(
            config.logging.dir,
            Some(PathBuf::from("/var/tmp/finruimte/logs"))
        );
        assert_eq!(config.logging.file_prefix(), "finruimte.log");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_zero_max_records() {
        let mut config = FileConfig::default();
        config.events.max_records = 0;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_empty_path() {
        let mut config = FileConfig::default();
        config.events.path = Some(PathBuf::new());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyPath {
                field: "events.path".to_string()
            }
        );
    }
}
