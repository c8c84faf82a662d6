//! Application configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the lobby display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Optional roster file; the built-in roster is used when absent
    pub roster_path: Option<PathBuf>,

    /// Doctors shown per page
    pub page_size: usize,

    /// Seconds between automatic testimonial advances
    pub rotate_interval_secs: u64,

    /// Window title
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            page_size: 3,
            rotate_interval_secs: 5,
            title: "St. Mary's Medical Center".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Doctors per page, never below 1
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Interval between automatic testimonial advances
    pub fn rotate_interval(&self) -> Duration {
        Duration::from_secs(self.rotate_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.rotate_interval_secs, 5);
        assert!(config.roster_path.is_none());
    }

    #[test]
    fn test_partial_config_overrides_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"page_size": 2, "rotate_interval_secs": 8}"#).unwrap();
        assert_eq!(config.page_size(), 2);
        assert_eq!(config.rotate_interval(), Duration::from_secs(8));
        assert_eq!(config.title, "St. Mary's Medical Center");
    }

    #[test]
    fn test_degenerate_values_are_clamped() {
        let config: AppConfig =
            serde_json::from_str(r#"{"page_size": 0, "rotate_interval_secs": 0}"#).unwrap();
        assert_eq!(config.page_size(), 1);
        assert_eq!(config.rotate_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/lobbyview.json")).unwrap();
        assert_eq!(config.page_size, 3);
    }
}
