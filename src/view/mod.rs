//! Assistant views as data.
//!
//! A [`ViewDescriptor`] states what a page shows (title, categories, featured
//! skills, section rules); [`build_view`] turns it plus the live skill status
//! into a [`ViewModel`] the renderer consumes.

pub mod builtin;

use std::collections::BTreeSet;

use bon::Builder;
use serde::Serialize;

use crate::catalog::{CategoryCatalog, JobCategory};
use crate::projection::{SkillInteraction, SkillWithViewMapping, ViewSkillProjector};
use crate::status::SkillStatusEntry;

pub use builtin::{assistant_tabs, view_for_tab};

/// Section that collects skills no rule claims.
pub const OTHER_SECTION: &str = "other";

/// Hint shown in the chat dock before a skill is picked.
pub const DEFAULT_SELECTION_HINT: &str = "Click any skill above to inject prompt into chat";

const UNNAMED_SKILL: &str = "Unnamed Skill";

/// Assigns a skill to one of a view's sections.
pub trait SectionResolver {
    fn resolve(&self, skill_key: &str) -> String;
}

/// Keyword rule: a skill key containing any keyword belongs to the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRule {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

impl SectionRule {
    pub fn new(id: impl Into<String>, label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, normalized_key: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized_key.contains(keyword.as_str()))
    }
}

/// Everything a page needs to know to list its skills.
#[derive(Debug, Clone, Builder)]
pub struct ViewDescriptor {
    #[builder(into)]
    pub page_title: String,
    #[builder(into)]
    pub page_subtitle: String,
    pub primary_category: JobCategory,
    /// When non-empty, the view lists the union of these categories instead
    /// of `primary_category`.
    pub category_set: Option<Vec<JobCategory>>,
    #[builder(default)]
    pub featured: BTreeSet<String>,
    #[builder(default)]
    pub sections: Vec<SectionRule>,
    #[builder(into)]
    pub empty_message: String,
}

impl ViewDescriptor {
    /// Categories whose definitions the view lists.
    pub fn categories(&self) -> Vec<JobCategory> {
        match &self.category_set {
            Some(set) if !set.is_empty() => set.clone(),
            _ => vec![self.primary_category],
        }
    }

    /// Section ids in display order.
    pub fn section_order(&self) -> Vec<&str> {
        self.sections.iter().map(|rule| rule.id.as_str()).collect()
    }

    pub fn section_label<'s>(&'s self, id: &'s str) -> &'s str {
        self.sections
            .iter()
            .find(|rule| rule.id == id)
            .map(|rule| rule.label.as_str())
            .unwrap_or(id)
    }

    /// Projected skills for this view, placeholders included.
    pub fn skill_entries(
        &self,
        catalog: &CategoryCatalog,
        live: &[SkillStatusEntry],
    ) -> Vec<SkillWithViewMapping> {
        let projector = ViewSkillProjector::new(catalog);
        match &self.category_set {
            Some(set) if !set.is_empty() => {
                projector.project_category_union(live, set, &self.featured, &self.page_title)
            }
            _ => projector.project_category(
                live,
                self.primary_category,
                &self.featured,
                &self.page_title,
            ),
        }
    }
}

impl SectionResolver for ViewDescriptor {
    fn resolve(&self, skill_key: &str) -> String {
        let normalized = skill_key.to_lowercase();
        self.sections
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.id.clone())
            .unwrap_or_else(|| OTHER_SECTION.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSection {
    pub id: String,
    pub label: String,
    pub skills: Vec<SkillWithViewMapping>,
}

/// Render-ready content of one assistant page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub title: String,
    pub subtitle: String,
    pub featured: Vec<SkillWithViewMapping>,
    pub sections: Vec<ViewSection>,
    /// Set only when the view has no skills at all.
    pub empty_message: Option<String>,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.sections.is_empty()
    }

    /// All entries in display order: featured first, then by section.
    pub fn entries(&self) -> impl Iterator<Item = &SkillWithViewMapping> {
        self.featured
            .iter()
            .chain(self.sections.iter().flat_map(|section| section.skills.iter()))
    }
}

/// Build a view using the descriptor's own keyword sections.
pub fn build_view(
    descriptor: &ViewDescriptor,
    catalog: &CategoryCatalog,
    live: &[SkillStatusEntry],
) -> ViewModel {
    build_view_with(descriptor, descriptor, catalog, live)
}

/// Build a view with a custom section resolver.
pub fn build_view_with(
    descriptor: &ViewDescriptor,
    resolver: &dyn SectionResolver,
    catalog: &CategoryCatalog,
    live: &[SkillStatusEntry],
) -> ViewModel {
    let entries = descriptor.skill_entries(catalog, live);
    let empty_message = entries
        .is_empty()
        .then(|| descriptor.empty_message.clone());

    let (featured, regular): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| entry.mapping.visual.featured);

    let mut groups: Vec<(String, Vec<SkillWithViewMapping>)> = descriptor
        .section_order()
        .into_iter()
        .map(|id| (id.to_string(), Vec::new()))
        .collect();

    for entry in regular {
        let id = resolver.resolve(&entry.skill.skill_key);
        if let Some(group) = groups.iter_mut().find(|(gid, _)| *gid == id) {
            group.1.push(entry);
        } else if let Some(other) = groups.iter_mut().find(|(gid, _)| gid == OTHER_SECTION) {
            other.1.push(entry);
        } else {
            groups.push((id, vec![entry]));
        }
    }

    let sections = groups
        .into_iter()
        .filter(|(_, skills)| !skills.is_empty())
        .map(|(id, skills)| ViewSection {
            label: descriptor.section_label(&id).to_string(),
            id,
            skills,
        })
        .collect();

    ViewModel {
        title: descriptor.page_title.clone(),
        subtitle: descriptor.page_subtitle.clone(),
        featured,
        sections,
        empty_message,
    }
}

/// Effect of clicking a skill card, for the surrounding shell to carry out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SkillAction {
    InjectPrompt {
        prompt: String,
        skill_key: String,
        display_name: String,
    },
    OpenLink {
        url: String,
    },
    InvokeTool {
        params: serde_json::Value,
    },
    OpenModal {
        modal: String,
    },
    Nothing,
}

pub fn action_for(entry: &SkillWithViewMapping) -> SkillAction {
    match &entry.mapping.interaction {
        SkillInteraction::Prompt { prompt } => SkillAction::InjectPrompt {
            prompt: prompt.clone(),
            skill_key: entry.skill.skill_key.clone(),
            display_name: display_name_of(entry).to_string(),
        },
        SkillInteraction::Link { link: Some(url) } => SkillAction::OpenLink { url: url.clone() },
        SkillInteraction::Link { link: None } => SkillAction::Nothing,
        SkillInteraction::Tool { tool_params } => SkillAction::InvokeTool {
            params: tool_params.clone(),
        },
        SkillInteraction::Modal { modal } => SkillAction::OpenModal {
            modal: modal.clone(),
        },
    }
}

fn display_name_of(entry: &SkillWithViewMapping) -> &str {
    [entry.mapping.display_name.as_str(), entry.skill.name.as_str()]
        .into_iter()
        .find(|name| !name.trim().is_empty())
        .unwrap_or(UNNAMED_SKILL)
}

/// Description of the selected skill, or the default hint.
pub fn selected_description<'e, I>(entries: I, selected_key: Option<&str>) -> String
where
    I: IntoIterator<Item = &'e SkillWithViewMapping>,
{
    selected_key
        .and_then(|key| {
            entries
                .into_iter()
                .find(|entry| entry.skill.skill_key == key)
        })
        .map(|entry| entry.mapping.description.clone())
        .unwrap_or_else(|| DEFAULT_SELECTION_HINT.to_string())
}

/// Per-page interaction state: selected skill and panel collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSession {
    selected_skill_key: Option<String>,
    panel_collapsed: bool,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the clicked skill and return what the shell should do.
    pub fn click(&mut self, entry: &SkillWithViewMapping) -> SkillAction {
        self.selected_skill_key = Some(entry.skill.skill_key.clone());
        action_for(entry)
    }

    pub fn selected_skill_key(&self) -> Option<&str> {
        self.selected_skill_key.as_deref()
    }

    /// Slash command shown in the chat dock header.
    pub fn selected_command(&self) -> Option<String> {
        self.selected_skill_key.as_ref().map(|key| format!("/{key}"))
    }

    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel_collapsed = !self.panel_collapsed;
        self.panel_collapsed
    }
}
