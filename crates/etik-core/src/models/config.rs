//! Configuration structures for lookup and label planning.

use serde::{Deserialize, Serialize};

use crate::models::row::columns;

/// Main configuration for the etik pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtikConfig {
    /// Order lookup configuration.
    pub lookup: LookupConfig,

    /// Label planning configuration.
    pub labels: LabelConfig,
}

/// Order lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Column holding the order number.
    pub order_column: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            order_column: columns::ORDER_NUMBER.to_string(),
        }
    }
}

/// Label planning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Days added to the planning date to produce the label date.
    pub date_offset_days: i64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            date_offset_days: 7,
        }
    }
}

impl EtikConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
