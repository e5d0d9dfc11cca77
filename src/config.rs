//! Configuration handling for the landing page

use crate::contact::FormVariant;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default simulated submission delay in milliseconds
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// User configuration for the landing page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Contact form field set
    pub form_variant: Option<FormVariant>,
    /// Re-validate a field on every edit instead of only on blur
    pub validate_on_change: Option<bool>,
    /// Artificial delay of the simulated contact backend
    pub submit_delay_ms: Option<u64>,
    /// Make the simulated backend reject every submission
    pub simulate_submit_failure: Option<bool>,
    /// Jump instead of animating scroll
    pub reduced_motion: Option<bool>,
}

impl SiteConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "bladeandbarrel", "blade-and-barrel")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to the platform config file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn form_variant(&self) -> FormVariant {
        self.form_variant.unwrap_or_default()
    }

    pub fn validate_on_change(&self) -> bool {
        self.validate_on_change.unwrap_or(false)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn simulate_submit_failure(&self) -> bool {
        self.simulate_submit_failure.unwrap_or(false)
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.form_variant.is_none());
        assert!(config.validate_on_change.is_none());
        assert!(config.submit_delay_ms.is_none());
        assert!(config.simulate_submit_failure.is_none());
        assert!(config.reduced_motion.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = SiteConfig::default();
        assert_eq!(config.form_variant(), FormVariant::Simple);
        assert!(!config.validate_on_change());
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert!(!config.simulate_submit_failure());
        assert!(!config.reduced_motion());
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            form_variant: Some(FormVariant::Detailed),
            validate_on_change: Some(true),
            submit_delay_ms: Some(250),
            simulate_submit_failure: Some(true),
            reduced_motion: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.form_variant, Some(FormVariant::Detailed));
        assert_eq!(parsed.validate_on_change, Some(true));
        assert_eq!(parsed.submit_delay(), Duration::from_millis(250));
        assert!(parsed.simulate_submit_failure());
        assert!(parsed.reduced_motion());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.form_variant.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"form_variant": "detailed", "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.form_variant(), FormVariant::Detailed);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let json = r#"{"form_variant": "fancy"}"#;
        assert!(serde_json::from_str::<SiteConfig>(json).is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = SiteConfig::config_path();
    }

    mod files {
        use super::*;

        fn scratch_dir(name: &str) -> PathBuf {
            let dir = std::env::temp_dir().join(format!(
                "blade-and-barrel-{}-{name}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            dir
        }

        #[test]
        fn test_save_then_load_round_trips() {
            let dir = scratch_dir("round-trip");
            let path = dir.join("nested").join("config.json");
            let config = SiteConfig {
                form_variant: Some(FormVariant::Detailed),
                submit_delay_ms: Some(10),
                ..Default::default()
            };

            config.save_to(&path).unwrap();
            let loaded = SiteConfig::load_from(&path).unwrap();

            assert_eq!(loaded.form_variant(), FormVariant::Detailed);
            assert_eq!(loaded.submit_delay(), Duration::from_millis(10));
            assert!(loaded.reduced_motion.is_none());
            fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_starter_file_lists_every_option() {
            let dir = scratch_dir("starter");
            let path = dir.join("config.json");
            SiteConfig::default().save_to(&path).unwrap();

            let written = fs::read_to_string(&path).unwrap();
            for key in [
                "form_variant",
                "validate_on_change",
                "submit_delay_ms",
                "simulate_submit_failure",
                "reduced_motion",
            ] {
                assert!(written.contains(key), "{key}");
            }
            assert!(SiteConfig::load_from(&path).unwrap().form_variant.is_none());
            fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_missing_file_yields_defaults() {
            let dir = scratch_dir("missing");
            let loaded = SiteConfig::load_from(&dir.join("config.json")).unwrap();
            assert!(loaded.form_variant.is_none());
        }

        #[test]
        fn test_malformed_file_is_an_error() {
            let dir = scratch_dir("malformed");
            let path = dir.join("config.json");
            fs::create_dir_all(&dir).unwrap();
            fs::write(&path, "{ not json").unwrap();

            let err = SiteConfig::load_from(&path).unwrap_err();
            assert!(format!("{err:#}").contains("parsing"));
            fs::remove_dir_all(&dir).unwrap();
        }
    }
}
