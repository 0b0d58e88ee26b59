//! Shared test fixtures.
#![allow(dead_code)]

use skillboard::catalog::{CategoryCatalog, CategoryInfo, JobCategory, SkillCategoryMapping};
use skillboard::status::SkillStatusEntry;

/// Installed, enabled skill as the status collaborator reports it.
pub fn live_skill(skill_key: &str, name: &str, description: &str) -> SkillStatusEntry {
    SkillStatusEntry {
        name: name.to_string(),
        description: description.to_string(),
        source: "managed".to_string(),
        file_path: format!("/skills/{skill_key}/SKILL.md"),
        base_dir: format!("/skills/{skill_key}"),
        skill_key: skill_key.to_string(),
        eligible: true,
        ..Default::default()
    }
}

pub fn category(id: JobCategory, display_name: &str) -> CategoryInfo {
    CategoryInfo {
        id,
        display_name: display_name.to_string(),
        icon: "🏷️".to_string(),
        description: String::new(),
    }
}

/// Small catalog with one skill (`slack`) tagged twice.
pub fn messaging_catalog() -> CategoryCatalog {
    CategoryCatalog::new(
        vec![
            category(JobCategory::Efficiency, "Efficiency"),
            category(JobCategory::Communication, "Communication"),
        ],
        vec![
            SkillCategoryMapping::new("notion", JobCategory::Efficiency).with_icon("📝"),
            SkillCategoryMapping::new("slack", JobCategory::Efficiency)
                .with_display_name("Slack (workspace)")
                .with_description("Pins and reactions"),
            SkillCategoryMapping::new("slack", JobCategory::Communication)
                .with_display_name("Slack (chat)")
                .with_description("Send messages"),
            SkillCategoryMapping::new("discord", JobCategory::Communication),
        ],
    )
    .expect("fixture catalog is valid")
}
