//! Queries over a [`CategoryCatalog`].
//!
//! All operations are pure and keep the catalog's declaration order.
//!
//! The two multi-category queries resolve duplicate skill rows differently:
//! - [`SkillCategoryIndex::filter_by_category_set`] (intersection) tags every
//!   result with the *first requested* category and takes display metadata
//!   from the skill's first row in the catalog.
//! - [`SkillCategoryIndex::union_by_categories`] keeps the row seen *last*
//!   while iterating the requested categories in order.
//!
//! Both behaviors are relied on by existing views; keep them as they are.

use std::collections::{HashMap, HashSet};

use crate::catalog::{CategoryCatalog, JobCategory, SkillCategoryMapping};

/// Borrowed query view over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategoryIndex<'a> {
    catalog: &'a CategoryCatalog,
}

impl<'a> SkillCategoryIndex<'a> {
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a CategoryCatalog {
        self.catalog
    }

    /// First row declared for `skill_key`.
    pub fn find_by_skill(&self, skill_key: &str) -> Option<&'a SkillCategoryMapping> {
        self.catalog
            .mappings()
            .iter()
            .find(|mapping| mapping.skill_key == skill_key)
    }

    /// Every row tagged with `category`, in declaration order.
    pub fn filter_by_category(&self, category: JobCategory) -> Vec<&'a SkillCategoryMapping> {
        self.catalog
            .mappings()
            .iter()
            .filter(|mapping| mapping.category == category)
            .collect()
    }

    /// Every category `skill_key` is tagged with, in declaration order.
    pub fn categories_for_skill(&self, skill_key: &str) -> Vec<JobCategory> {
        let mut categories = Vec::new();
        for mapping in self.catalog.mappings() {
            if mapping.skill_key == skill_key && !categories.contains(&mapping.category) {
                categories.push(mapping.category);
            }
        }
        categories
    }

    /// Skills tagged with *every* category in `categories`.
    ///
    /// Repeated categories count once. An empty request yields nothing. Each
    /// result is the skill's first catalog row re-tagged with the first
    /// requested category; results follow that category's declaration order.
    pub fn filter_by_category_set(&self, categories: &[JobCategory]) -> Vec<SkillCategoryMapping> {
        let requested = dedup_preserving_order(categories);
        let Some(&primary) = requested.first() else {
            return Vec::new();
        };

        let mut order: Vec<&str> = Vec::new();
        let mut matched: HashMap<&str, HashSet<JobCategory>> = HashMap::new();
        for &category in &requested {
            for mapping in self.filter_by_category(category) {
                let key = mapping.skill_key.as_str();
                let entry = matched.entry(key).or_insert_with(|| {
                    order.push(key);
                    HashSet::new()
                });
                entry.insert(category);
            }
        }

        order
            .into_iter()
            .filter(|key| matched.get(key).map(HashSet::len) == Some(requested.len()))
            .filter_map(|key| self.find_by_skill(key))
            .map(|mapping| SkillCategoryMapping {
                category: primary,
                ..mapping.clone()
            })
            .collect()
    }

    /// Skills tagged with *any* category in `categories`, one row per skill.
    ///
    /// When a skill has rows under several requested categories, the row met
    /// last (later category in `categories`) wins, while the skill keeps the
    /// position where it was first seen.
    pub fn union_by_categories(&self, categories: &[JobCategory]) -> Vec<&'a SkillCategoryMapping> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut rows: Vec<&'a SkillCategoryMapping> = Vec::new();
        for &category in categories {
            for mapping in self.filter_by_category(category) {
                match positions.get(mapping.skill_key.as_str()) {
                    Some(&position) => rows[position] = mapping,
                    None => {
                        positions.insert(mapping.skill_key.as_str(), rows.len());
                        rows.push(mapping);
                    }
                }
            }
        }
        rows
    }
}

fn dedup_preserving_order(categories: &[JobCategory]) -> Vec<JobCategory> {
    let mut seen = HashSet::with_capacity(categories.len());
    categories
        .iter()
        .copied()
        .filter(|category| seen.insert(*category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryInfo;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn catalog(rows: &[(&str, JobCategory, &str)]) -> CategoryCatalog {
        let categories = JobCategory::iter()
            .map(|id| CategoryInfo {
                id,
                display_name: id.to_string(),
                icon: String::new(),
                description: String::new(),
            })
            .collect();
        let mappings = rows
            .iter()
            .map(|(key, category, name)| {
                SkillCategoryMapping::new(*key, *category).with_display_name(*name)
            })
            .collect();
        CategoryCatalog::new(categories, mappings).unwrap()
    }

    fn keys<'m>(rows: impl IntoIterator<Item = &'m SkillCategoryMapping>) -> Vec<&'m str> {
        rows.into_iter().map(|m| m.skill_key.as_str()).collect()
    }

    #[test]
    fn find_by_skill_returns_first_declared_row() {
        let catalog = catalog(&[
            ("slack", JobCategory::Efficiency, "Slack (work)"),
            ("slack", JobCategory::Communication, "Slack (chat)"),
        ]);
        let found = catalog.index().find_by_skill("slack").unwrap();
        assert_eq!(found.category, JobCategory::Efficiency);
        assert!(catalog.index().find_by_skill("teams").is_none());
    }

    #[test]
    fn filter_by_category_keeps_declaration_order() {
        let catalog = catalog(&[
            ("b", JobCategory::Data, "B"),
            ("x", JobCategory::Legal, "X"),
            ("a", JobCategory::Data, "A"),
        ]);
        assert_eq!(keys(catalog.index().filter_by_category(JobCategory::Data)), vec!["b", "a"]);
    }

    #[test]
    fn intersection_requires_every_category() {
        let catalog = catalog(&[
            ("seo-audit", JobCategory::Marketing, "SEO"),
            ("copywriting", JobCategory::Marketing, "Copy"),
            ("seo-audit", JobCategory::Data, "SEO data"),
            ("model-usage", JobCategory::Data, "Usage"),
        ]);
        let result = catalog
            .index()
            .filter_by_category_set(&[JobCategory::Data, JobCategory::Marketing]);
        assert_eq!(keys(&result), vec!["seo-audit"]);
    }

    #[test]
    fn intersection_tags_result_with_first_requested_category() {
        let catalog = catalog(&[
            ("seo-audit", JobCategory::Marketing, "SEO"),
            ("seo-audit", JobCategory::Data, "SEO data"),
        ]);
        let result = catalog
            .index()
            .filter_by_category_set(&[JobCategory::Data, JobCategory::Marketing]);
        assert_eq!(result[0].category, JobCategory::Data);
        // metadata still comes from the skill's first row
        assert_eq!(result[0].display_name.as_deref(), Some("SEO"));
    }

    #[test]
    fn intersection_of_nothing_is_empty() {
        let catalog = catalog(&[("a", JobCategory::Data, "A")]);
        assert!(catalog.index().filter_by_category_set(&[]).is_empty());
    }

    #[test]
    fn intersection_ignores_repeated_categories() {
        let catalog = catalog(&[("a", JobCategory::Data, "A")]);
        let result = catalog
            .index()
            .filter_by_category_set(&[JobCategory::Data, JobCategory::Data]);
        assert_eq!(keys(&result), vec!["a"]);
    }

    #[test]
    fn union_keeps_first_position_and_last_row() {
        let catalog = catalog(&[
            ("social-content", JobCategory::Communication, "Social (comms)"),
            ("slack", JobCategory::Communication, "Slack"),
            ("social-content", JobCategory::Brand, "Social (brand)"),
            ("brand-voice", JobCategory::Brand, "Voice"),
        ]);
        let rows = catalog
            .index()
            .union_by_categories(&[JobCategory::Communication, JobCategory::Brand]);
        assert_eq!(keys(rows.iter().copied()), vec!["social-content", "slack", "brand-voice"]);
        assert_eq!(rows[0].display_name.as_deref(), Some("Social (brand)"));
        assert_eq!(rows[0].category, JobCategory::Brand);
    }

    #[test]
    fn union_precedence_follows_request_order() {
        let catalog = catalog(&[
            ("x", JobCategory::Data, "from data"),
            ("x", JobCategory::Tools, "from tools"),
        ]);
        let forward = catalog
            .index()
            .union_by_categories(&[JobCategory::Data, JobCategory::Tools]);
        let backward = catalog
            .index()
            .union_by_categories(&[JobCategory::Tools, JobCategory::Data]);
        assert_eq!(forward[0].category, JobCategory::Tools);
        assert_eq!(backward[0].category, JobCategory::Data);
    }

    #[test]
    fn categories_for_skill_lists_each_tag_once() {
        let catalog = catalog(&[
            ("slack", JobCategory::Efficiency, "Slack"),
            ("slack", JobCategory::Communication, "Slack"),
            ("slack", JobCategory::Efficiency, "Slack again"),
        ]);
        assert_eq!(
            catalog.index().categories_for_skill("slack"),
            vec![JobCategory::Efficiency, JobCategory::Communication]
        );
    }
}
