//! Job categories and the skill → category mapping table.
//!
//! The catalog is plain data: it is built once (from the shipped tables or a
//! TOML file), validated, and never mutated afterwards. Queries over it live in
//! [`crate::index`].

pub mod builtin;
pub mod file;
pub mod shared;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, SkillboardError};
use crate::index::SkillCategoryIndex;

pub use file::{load_catalog_file, CatalogFile};
pub use shared::SharedCatalog;

/// Job-function tag used to group skills for navigation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobCategory {
    Marketing,
    Product,
    Service,
    Legal,
    Finance,
    Brand,
    Data,
    Efficiency,
    Dev,
    Communication,
    Media,
    Tools,
    Other,
}

impl JobCategory {
    /// Canonical category id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Product => "product",
            Self::Service => "service",
            Self::Legal => "legal",
            Self::Finance => "finance",
            Self::Brand => "brand",
            Self::Data => "data",
            Self::Efficiency => "efficiency",
            Self::Dev => "dev",
            Self::Communication => "communication",
            Self::Media => "media",
            Self::Tools => "tools",
            Self::Other => "other",
        }
    }

    /// Parse a category id, reporting unknown ids as an error.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| SkillboardError::UnknownCategory(raw.to_string()))
    }
}

/// Display metadata for one job category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: JobCategory,
    pub display_name: String,
    pub icon: String,
    pub description: String,
}

/// One row of the skill → category table.
///
/// A skill may appear in several rows with different categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategoryMapping {
    pub skill_key: String,
    pub category: JobCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SkillCategoryMapping {
    pub fn new(skill_key: impl Into<String>, category: JobCategory) -> Self {
        Self {
            skill_key: skill_key.into(),
            category,
            icon: None,
            display_name: None,
            description: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Immutable, validated category and mapping tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<CategoryInfo>,
    mappings: Vec<SkillCategoryMapping>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryCatalog {
    /// Build a catalog, rejecting duplicate category ids, mappings that point
    /// at an undeclared category, and empty skill keys.
    pub fn new(
        categories: Vec<CategoryInfo>,
        mappings: Vec<SkillCategoryMapping>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(categories.len());
        for info in &categories {
            if !seen.insert(info.id) {
                return Err(SkillboardError::InvalidCatalog(format!(
                    "category '{}' is declared more than once",
                    info.id
                )));
            }
        }

        for (position, mapping) in mappings.iter().enumerate() {
            if mapping.skill_key.trim().is_empty() {
                return Err(SkillboardError::InvalidCatalog(format!(
                    "mapping #{position} has an empty skill key"
                )));
            }
            if !seen.contains(&mapping.category) {
                return Err(SkillboardError::InvalidCatalog(format!(
                    "skill '{}' maps to undeclared category '{}'",
                    mapping.skill_key, mapping.category
                )));
            }
        }

        Ok(Self {
            categories,
            mappings,
        })
    }

    /// The tables shipped with the dashboard.
    pub fn builtin() -> Self {
        Self {
            categories: builtin::categories(),
            mappings: builtin::mappings(),
        }
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn mappings(&self) -> &[SkillCategoryMapping] {
        &self.mappings
    }

    /// Look up display metadata for a category.
    pub fn category_info(&self, id: JobCategory) -> Option<&CategoryInfo> {
        self.categories.iter().find(|info| info.id == id)
    }

    /// Query view over this catalog.
    pub fn index(&self) -> SkillCategoryIndex<'_> {
        SkillCategoryIndex::new(self)
    }
}
