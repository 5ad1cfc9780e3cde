//! Application configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub restaurant_name: String,
    pub currency_symbol: String,
    pub splash_delay_ms: u64,
    pub tick_rate_ms: u64,
    /// Show the built-in dishes for a course that has none on the menu
    pub show_default_dishes: bool,
    /// Start with the built-in dishes already in the catalog
    pub seed_catalog: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Maison Christoffel".to_string(),
            currency_symbol: "R".to_string(),
            splash_delay_ms: 3000,
            tick_rate_ms: 100,
            show_default_dishes: true,
            seed_catalog: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load from an explicit path, or from the user config dir when present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("maison-menu/config.toml"))
    }

    /// Where logs go when `log_file` is not set
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("maison-menu/maison-menu.log")
        })
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.restaurant_name.trim().is_empty() {
            errors.push("Restaurant name is required".to_string());
        }

        if self.currency_symbol.trim().is_empty() {
            errors.push("Currency symbol is required".to_string());
        }

        if self.tick_rate_ms == 0 {
            errors.push("Tick rate must be at least 1 ms".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
