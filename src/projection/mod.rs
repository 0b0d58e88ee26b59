//! Joining catalog definitions with live skill status.
//!
//! Definitions drive the output: every cataloged skill appears exactly once,
//! installed or not, and live skills without a definition are never shown.
//! Skills that are not installed get a disabled placeholder status entry.

mod types;

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::catalog::{CategoryCatalog, JobCategory, SkillCategoryMapping};
use crate::index::SkillCategoryIndex;
use crate::status::SkillStatusEntry;

pub use types::{
    SkillInteraction, SkillVisualStyle, SkillWithViewMapping, ViewSkillMapping, VisualSize,
    VisualVariant,
};

/// Icon shown when a definition carries none.
pub const DEFAULT_SKILL_ICON: &str = "📦";

/// Fallback description when neither the live skill nor the definition has one.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Flat priority used by the installed-only projections.
pub const INSTALLED_PRIORITY: i64 = 50;

/// Description given to placeholders whose definition has none.
pub fn placeholder_description(context_label: &str, display_name: &str) -> String {
    format!("{context_label} has pre-configured a prompt for «{display_name}»")
}

/// Merge `definitions` with `live` status, in definition order.
///
/// Earlier definitions get higher priority (`len - index`). The result is
/// sorted by descending priority with a stable sort, so equal priorities keep
/// definition order.
pub fn project_definitions<I, D>(
    live: &[SkillStatusEntry],
    definitions: I,
    featured: &BTreeSet<String>,
    context_label: &str,
) -> Vec<SkillWithViewMapping>
where
    I: IntoIterator<Item = D>,
    D: Borrow<SkillCategoryMapping>,
{
    let definitions: Vec<D> = definitions.into_iter().collect();
    let mut by_key: HashMap<&str, &SkillStatusEntry> = HashMap::with_capacity(live.len());
    for skill in live {
        by_key.insert(skill.skill_key.as_str(), skill);
    }

    let total = definitions.len();
    let mut placeholders = 0usize;
    let mut entries = Vec::with_capacity(total);

    for (index, definition) in definitions.iter().enumerate() {
        let definition = <D as Borrow<SkillCategoryMapping>>::borrow(definition);
        let matched = by_key.get(definition.skill_key.as_str()).copied();
        let is_featured = featured.contains(&definition.skill_key);

        let skill = match matched {
            Some(skill) => skill.clone(),
            None => {
                placeholders += 1;
                synthesize_placeholder(definition, context_label)
            }
        };

        let display_name = definition
            .display_name
            .clone()
            .unwrap_or_else(|| skill.name.clone());
        let description = non_empty(matched.map(|s| s.description.as_str()))
            .or(non_empty(definition.description.as_deref()))
            .or(non_empty(Some(skill.description.as_str())))
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        let variant = if is_featured {
            VisualVariant::Primary
        } else if matched.is_none() {
            VisualVariant::Subtle
        } else {
            VisualVariant::Secondary
        };

        entries.push(SkillWithViewMapping {
            mapping: ViewSkillMapping {
                skill_key: definition.skill_key.clone(),
                display_name,
                description,
                category: definition.category,
                visual: SkillVisualStyle {
                    variant,
                    icon: icon_or_default(definition.icon.as_deref()),
                    size: if is_featured {
                        VisualSize::Large
                    } else {
                        VisualSize::Medium
                    },
                    featured: is_featured,
                },
                interaction: SkillInteraction::prompt_for(&definition.skill_key),
                priority: (total - index) as i64,
            },
            skill,
        });
    }

    debug!(
        context = context_label,
        definitions = total,
        placeholders,
        "projected skill definitions"
    );

    sort_by_priority(&mut entries);
    entries
}

/// Stable sort by descending priority.
pub fn sort_by_priority(entries: &mut [SkillWithViewMapping]) {
    entries.sort_by(|a, b| b.mapping.priority.cmp(&a.mapping.priority));
}

fn synthesize_placeholder(definition: &SkillCategoryMapping, context_label: &str) -> SkillStatusEntry {
    let display_name = definition
        .display_name
        .as_deref()
        .unwrap_or(&definition.skill_key);
    let description = definition
        .description
        .clone()
        .unwrap_or_else(|| placeholder_description(context_label, display_name));
    SkillStatusEntry::placeholder(&definition.skill_key, display_name, description)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn icon_or_default(icon: Option<&str>) -> String {
    non_empty(icon).unwrap_or(DEFAULT_SKILL_ICON).to_string()
}

/// Catalog-backed projections for a category or a set of categories.
#[derive(Debug, Clone, Copy)]
pub struct ViewSkillProjector<'a> {
    index: SkillCategoryIndex<'a>,
}

impl<'a> ViewSkillProjector<'a> {
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self {
            index: SkillCategoryIndex::new(catalog),
        }
    }

    pub fn index(&self) -> SkillCategoryIndex<'a> {
        self.index
    }

    /// Project an explicit definition list.
    pub fn project<I, D>(
        &self,
        live: &[SkillStatusEntry],
        definitions: I,
        featured: &BTreeSet<String>,
        context_label: &str,
    ) -> Vec<SkillWithViewMapping>
    where
        I: IntoIterator<Item = D>,
        D: Borrow<SkillCategoryMapping>,
    {
        project_definitions(live, definitions, featured, context_label)
    }

    /// Every definition in `category`.
    pub fn project_category(
        &self,
        live: &[SkillStatusEntry],
        category: JobCategory,
        featured: &BTreeSet<String>,
        context_label: &str,
    ) -> Vec<SkillWithViewMapping> {
        let definitions = self.index.filter_by_category(category);
        project_definitions(live, definitions, featured, context_label)
    }

    /// Definitions in any of `categories`, one per skill (see
    /// [`SkillCategoryIndex::union_by_categories`] for precedence).
    pub fn project_category_union(
        &self,
        live: &[SkillStatusEntry],
        categories: &[JobCategory],
        featured: &BTreeSet<String>,
        context_label: &str,
    ) -> Vec<SkillWithViewMapping> {
        let definitions = self.index.union_by_categories(categories);
        project_definitions(live, definitions, featured, context_label)
    }

    /// Definitions tagged with every one of `categories`.
    pub fn project_category_set(
        &self,
        live: &[SkillStatusEntry],
        categories: &[JobCategory],
        featured: &BTreeSet<String>,
        context_label: &str,
    ) -> Vec<SkillWithViewMapping> {
        let definitions = self.index.filter_by_category_set(categories);
        project_definitions(live, definitions, featured, context_label)
    }

    /// Installed skills mapped to `category`, without placeholders.
    pub fn installed_in_category(
        &self,
        live: &[SkillStatusEntry],
        category: JobCategory,
    ) -> Vec<SkillWithViewMapping> {
        let definitions = self.index.filter_by_category(category);
        let mut entries: Vec<SkillWithViewMapping> = live
            .iter()
            .filter_map(|skill| {
                definitions
                    .iter()
                    .find(|definition| definition.skill_key == skill.skill_key)
                    .map(|definition| installed_entry(skill, definition, definition.category))
            })
            .collect();
        sort_by_priority(&mut entries);
        entries
    }

    /// Installed skills mapped to every one of `categories`, tagged with the
    /// first requested category.
    pub fn installed_in_all_categories(
        &self,
        live: &[SkillStatusEntry],
        categories: &[JobCategory],
    ) -> Vec<SkillWithViewMapping> {
        let Some(&primary) = categories.first() else {
            return Vec::new();
        };
        let targets: BTreeSet<String> = self
            .index
            .filter_by_category_set(categories)
            .into_iter()
            .map(|mapping| mapping.skill_key)
            .collect();

        let mut entries: Vec<SkillWithViewMapping> = live
            .iter()
            .filter(|skill| targets.contains(&skill.skill_key))
            .filter_map(|skill| {
                self.index
                    .find_by_skill(&skill.skill_key)
                    .map(|definition| installed_entry(skill, definition, primary))
            })
            .collect();
        sort_by_priority(&mut entries);
        entries
    }
}

fn installed_entry(
    skill: &SkillStatusEntry,
    definition: &SkillCategoryMapping,
    category: JobCategory,
) -> SkillWithViewMapping {
    let description = non_empty(Some(skill.description.as_str()))
        .or(non_empty(definition.description.as_deref()))
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();
    SkillWithViewMapping {
        mapping: ViewSkillMapping {
            skill_key: definition.skill_key.clone(),
            display_name: definition
                .display_name
                .clone()
                .unwrap_or_else(|| skill.name.clone()),
            description,
            category,
            visual: SkillVisualStyle {
                variant: VisualVariant::Secondary,
                icon: icon_or_default(definition.icon.as_deref()),
                size: VisualSize::Medium,
                featured: false,
            },
            interaction: SkillInteraction::prompt_for(&definition.skill_key),
            priority: INSTALLED_PRIORITY,
        },
        skill: skill.clone(),
    }
}
