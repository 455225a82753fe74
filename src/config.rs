use crate::{
    result::{Result, ValuesError},
    scanner::TruncationPolicy,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Characters of each tuple shown in the report
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// How the scan report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one scan run, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Only scan the `INSERT INTO` statement of this table
    pub table: Option<String>,
    pub preview_chars: usize,
    pub policy: TruncationPolicy,
    /// Split each tuple into typed fields
    pub include_fields: bool,
    pub format: OutputFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            table: None,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            policy: TruncationPolicy::default(),
            include_fields: false,
            format: OutputFormat::default(),
        }
    }
}

impl ScanConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Self::from_json(json)
    }

    /// Load a config from a serde_json::Value object; missing keys take defaults
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        if !json.is_object() {
            return Err(ValuesError::InvalidConfig(format!(
                "expected object, got {json}"
            )));
        }
        let config: ScanConfig = serde_json::from_value(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.preview_chars == 0 {
            return Err(ValuesError::InvalidConfig(
                "preview_chars must be greater than 0".to_string(),
            ));
        }
        if let Some(table) = &self.table {
            if table.trim().is_empty() {
                return Err(ValuesError::InvalidConfig(
                    "table must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
