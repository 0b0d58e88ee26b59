//! TOML representation of a full catalog.
//!
//! ```toml
//! [[categories]]
//! id = "finance"
//! display_name = "Finance"
//! icon = "💰"
//! description = "Statements and reconciliation"
//!
//! [[mappings]]
//! skill_key = "reconciliation"
//! category = "finance"
//! display_name = "Reconciliation"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryCatalog, CategoryInfo, SkillCategoryMapping};
use crate::error::{Result, SkillboardError};

/// Serialized catalog: the whole table, never a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<CategoryInfo>,
    #[serde(default)]
    pub mappings: Vec<SkillCategoryMapping>,
}

impl CatalogFile {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_catalog(catalog: &CategoryCatalog) -> Self {
        Self {
            categories: catalog.categories().to_vec(),
            mappings: catalog.mappings().to_vec(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SkillboardError::Configuration(e.to_string()))
    }

    /// Validate and convert into an immutable catalog.
    pub fn into_catalog(self) -> Result<CategoryCatalog> {
        CategoryCatalog::new(self.categories, self.mappings)
    }
}

/// Read, parse and validate a catalog file.
pub fn load_catalog_file(path: &Path) -> Result<CategoryCatalog> {
    let raw = fs::read_to_string(path)?;
    let catalog = CatalogFile::parse(&raw)
        .and_then(CatalogFile::into_catalog)
        .map_err(|err| match err {
            SkillboardError::TomlParse(inner) => SkillboardError::Configuration(format!(
                "failed to parse catalog '{}': {inner}",
                path.display()
            )),
            other => other,
        })?;
    tracing::info!(
        path = %path.display(),
        categories = catalog.categories().len(),
        mappings = catalog.mappings().len(),
        "loaded skill catalog"
    );
    Ok(catalog)
}
