//! Convenience re-exports for common use.

pub use crate::catalog::{
    CategoryCatalog, CategoryInfo, JobCategory, SharedCatalog, SkillCategoryMapping,
};
pub use crate::config::SkillboardConfig;
pub use crate::error::{Result, SkillboardError};
pub use crate::index::SkillCategoryIndex;
pub use crate::projection::{SkillWithViewMapping, ViewSkillMapping, ViewSkillProjector};
pub use crate::routing::{
    infer_base_path_from_pathname, path_for_tab, tab_from_path, PathRouter, Tab,
};
pub use crate::status::{SkillStatusEntry, SkillStatusReport};
pub use crate::view::{build_view, view_for_tab, SkillAction, ViewDescriptor, ViewModel};
