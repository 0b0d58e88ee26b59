//! Configuration system (layered: defaults < settings file < env).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog_file, CategoryCatalog};
use crate::error::{Result, SkillboardError};
use crate::routing::normalize_base_path;
use crate::status::{SkillStatusEntry, SkillStatusReport};

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<SkillboardConfig> = OnceLock::new();

pub const ENV_BASE_PATH: &str = "SKILLBOARD_BASE_PATH";
pub const ENV_CATALOG: &str = "SKILLBOARD_CATALOG";
pub const ENV_STATUS: &str = "SKILLBOARD_STATUS";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Layered configuration for Skillboard.
///
/// Resolution order, later wins:
/// 1. Built-in defaults (no base path, built-in catalog, no status report)
/// 2. `config.toml` from the platform config directory or an explicit path
/// 3. `SKILLBOARD_*` environment variables (a `.env` file is honored)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillboardConfig {
    /// Prefix under which the dashboard is mounted, e.g. `/ui`.
    pub base_path: String,
    /// TOML catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Skill status report JSON used when no live status is supplied.
    pub status_path: Option<PathBuf>,
}

impl SkillboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by environment variables only.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();
        config.apply_env();
        config
    }

    /// Full layered load. `path` overrides the platform settings file.
    ///
    /// A missing settings file is skipped; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let file = path.map(Path::to_path_buf).or_else(default_config_path);
        let mut config = match file {
            Some(file) => Self::read_file(&file)?.unwrap_or_default(),
            None => Self::new(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    fn read_file(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let config = Self::from_toml_str(&raw).map_err(|err| {
            SkillboardError::Configuration(format!(
                "failed to parse settings '{}': {err}",
                path.display()
            ))
        })?;
        tracing::info!(path = %path.display(), "loaded settings file");
        Ok(Some(config))
    }

    /// Overlay `SKILLBOARD_*` variables that are set and non-empty.
    pub fn apply_env(&mut self) {
        if let Some(base) = env_value(ENV_BASE_PATH) {
            self.base_path = base;
        }
        if let Some(catalog) = env_value(ENV_CATALOG) {
            self.catalog_path = Some(PathBuf::from(catalog));
        }
        if let Some(status) = env_value(ENV_STATUS) {
            self.status_path = Some(PathBuf::from(status));
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_status_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.status_path = Some(path.into());
        self
    }

    /// Normalized base path (`""` or `/segment...`).
    pub fn base_path(&self) -> String {
        normalize_base_path(&self.base_path)
    }

    /// Configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<CategoryCatalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(CategoryCatalog::builtin()),
        }
    }

    /// Skills from the configured status report; empty when none is set.
    pub fn load_status(&self) -> Result<Vec<SkillStatusEntry>> {
        let Some(path) = &self.status_path else {
            return Ok(Vec::new());
        };
        load_status_report(path).map(|report| report.skills)
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static SkillboardConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }
}

/// Read a status report written by the status collaborator.
pub fn load_status_report(path: &Path) -> Result<SkillStatusReport> {
    let raw = fs::read_to_string(path)?;
    let report = SkillStatusReport::from_json(&raw).map_err(|err| {
        SkillboardError::Configuration(format!(
            "failed to parse status report '{}': {err}",
            path.display()
        ))
    })?;
    tracing::debug!(path = %path.display(), skills = report.skills.len(), "loaded status report");
    Ok(report)
}

/// `config.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "skillboard", "skillboard")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn parses_partial_settings() {
        let config = SkillboardConfig::from_toml_str("base_path = \"/ui/\"").unwrap();
        assert_eq!(config.base_path(), "/ui");
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn unknown_setting_types_are_rejected() {
        let err = SkillboardConfig::from_toml_str("base_path = 3").unwrap_err();
        assert!(matches!(err, SkillboardError::TomlParse(_)));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let found = SkillboardConfig::read_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn malformed_file_names_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_path = [").unwrap();
        let err = SkillboardConfig::read_file(&path).unwrap_err();
        match err {
            SkillboardError::Configuration(msg) => assert!(msg.contains("config.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_catalog_is_builtin() {
        let catalog = SkillboardConfig::new().load_catalog().unwrap();
        assert_eq!(catalog, CategoryCatalog::builtin());
    }

    #[test]
    fn unset_status_path_yields_no_skills() {
        assert!(SkillboardConfig::new().load_status().unwrap().is_empty());
    }

    #[test]
    fn status_report_is_read_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.json");
        fs::write(
            &path,
            r#"{"skills": [{"name": "Slack", "skillKey": "slack", "description": "Chat"}]}"#,
        )
        .unwrap();
        let skills = SkillboardConfig::new()
            .with_status_path(&path)
            .load_status()
            .unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].skill_key, "slack");
    }
}
