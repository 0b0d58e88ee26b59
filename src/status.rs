//! Live skill status as reported by the gateway.
//!
//! These records are produced elsewhere and only read here, except for the
//! placeholder entries synthesized for skills that are cataloged but not
//! installed.

use serde::{Deserialize, Serialize};

/// Source tag used on synthesized placeholder entries.
pub const PLACEHOLDER_SOURCE: &str = "definition";

/// Requirement buckets (binaries, env vars, config keys, operating systems).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementBuckets {
    #[serde(default)]
    pub bins: Vec<String>,
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default)]
    pub config: Vec<String>,
    #[serde(default)]
    pub os: Vec<String>,
}

impl RequirementBuckets {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty() && self.env.is_empty() && self.config.is_empty() && self.os.is_empty()
    }
}

/// Installed/enabled state of one skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStatusEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub base_dir: String,
    pub skill_key: String,
    #[serde(default)]
    pub always: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub blocked_by_allowlist: bool,
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub requirements: RequirementBuckets,
    #[serde(default)]
    pub missing: RequirementBuckets,
    /// Passed through untouched.
    #[serde(default)]
    pub config_checks: Vec<serde_json::Value>,
    /// Passed through untouched.
    #[serde(default)]
    pub install: Vec<serde_json::Value>,
}

impl SkillStatusEntry {
    /// Disabled, ineligible stand-in for a cataloged skill that is not installed.
    pub fn placeholder(
        skill_key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: PLACEHOLDER_SOURCE.to_string(),
            file_path: String::new(),
            base_dir: String::new(),
            skill_key: skill_key.into(),
            always: false,
            disabled: true,
            blocked_by_allowlist: false,
            eligible: false,
            requirements: RequirementBuckets::default(),
            missing: RequirementBuckets::default(),
            config_checks: Vec::new(),
            install: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == PLACEHOLDER_SOURCE && self.file_path.is_empty()
    }
}

/// Full report returned by the status collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStatusReport {
    #[serde(default)]
    pub workspace_dir: Option<String>,
    #[serde(default)]
    pub managed_skills_dir: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillStatusEntry>,
}

impl SkillStatusReport {
    pub fn from_json(input: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
