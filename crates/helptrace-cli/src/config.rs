use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config directory based on priority:
/// 1. HELPTRACE_PATH environment variable (with tilde expansion)
/// 2. XDG config directory
/// 3. ~/.helptrace (fallback for systems without XDG)
pub fn resolve_config_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("HELPTRACE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("helptrace"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".helptrace"));
    }

    anyhow::bail!("could not determine config path: no HOME or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Theme preference carried into the interactive dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dataset file used when --data is not given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemePreference,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/helptrace/config.toml")).unwrap();
        assert!(config.data_file.is_none());
        assert_eq!(config.theme, ThemePreference::Dark);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = std::env::temp_dir().join("helptrace-config-test");
        let path = dir.join("config.toml");
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/dataset.json")),
            theme: ThemePreference::Light,
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, ThemePreference::Light);
        assert_eq!(loaded.data_file, config.data_file);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
