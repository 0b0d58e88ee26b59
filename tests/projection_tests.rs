//! Projection integration tests: definitions joined with live status.

mod common;

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use skillboard::catalog::{CategoryCatalog, JobCategory};
use skillboard::projection::{
    placeholder_description, SkillInteraction, ViewSkillProjector, VisualSize, VisualVariant,
    DEFAULT_SKILL_ICON, INSTALLED_PRIORITY,
};
use skillboard::status::PLACEHOLDER_SOURCE;

use common::{live_skill, messaging_catalog};

fn featured(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn every_definition_appears_once_installed_or_not() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);
    let live = vec![
        live_skill("discord", "Discord", "Bot messages"),
        live_skill("spotify", "Spotify", "Not cataloged"),
    ];

    let entries = projector.project_category(
        &live,
        JobCategory::Communication,
        &BTreeSet::new(),
        "Sentiment Monitor",
    );

    let keys: Vec<&str> = entries.iter().map(|e| e.mapping.skill_key.as_str()).collect();
    assert_eq!(keys, vec!["slack", "discord"]);
    assert!(entries[0].skill.is_placeholder());
    assert!(!entries[1].skill.is_placeholder());
}

#[test]
fn placeholders_are_disabled_ineligible_and_subtle() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);

    let entries = projector.project_category(&[], JobCategory::Efficiency, &BTreeSet::new(), "Desk");
    let notion = &entries[0];

    assert_eq!(notion.skill.source, PLACEHOLDER_SOURCE);
    assert!(notion.skill.disabled);
    assert!(!notion.skill.eligible);
    assert_eq!(notion.skill.name, "notion");
    assert_eq!(notion.mapping.visual.variant, VisualVariant::Subtle);
    assert_eq!(notion.mapping.visual.icon, "📝");
    assert_eq!(
        notion.mapping.description,
        placeholder_description("Desk", "notion")
    );
}

#[test]
fn featured_wins_over_placeholder_styling() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);

    let entries = projector.project_category(
        &[],
        JobCategory::Communication,
        &featured(&["discord"]),
        "Sentiment Monitor",
    );
    let discord = entries
        .iter()
        .find(|e| e.mapping.skill_key == "discord")
        .unwrap();

    assert_eq!(discord.mapping.visual.variant, VisualVariant::Primary);
    assert_eq!(discord.mapping.visual.size, VisualSize::Large);
    assert!(discord.mapping.visual.featured);
    assert_eq!(discord.mapping.visual.icon, DEFAULT_SKILL_ICON);
}

#[test]
fn priorities_descend_in_definition_order() {
    let catalog = CategoryCatalog::builtin();
    let projector = ViewSkillProjector::new(&catalog);

    let entries = projector.project_category(&[], JobCategory::Legal, &BTreeSet::new(), "Legal");
    let priorities: Vec<i64> = entries.iter().map(|e| e.mapping.priority).collect();
    let expected: Vec<i64> = (1..=entries.len() as i64).rev().collect();

    assert_eq!(priorities, expected);
}

#[test]
fn live_description_and_definition_name_take_precedence() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);
    let live = vec![live_skill("slack", "slack-cli", "Live description")];

    let entries = projector.project_category(
        &live,
        JobCategory::Communication,
        &BTreeSet::new(),
        "Sentiment Monitor",
    );
    let slack = &entries[0];

    assert_eq!(slack.mapping.display_name, "Slack (chat)");
    assert_eq!(slack.mapping.description, "Live description");
    assert_eq!(slack.mapping.visual.variant, VisualVariant::Secondary);
    assert_eq!(slack.skill.name, "slack-cli");
}

#[test]
fn empty_live_description_falls_back_to_definition() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);
    let live = vec![live_skill("slack", "Slack", "")];

    let entries =
        projector.project_category(&live, JobCategory::Communication, &BTreeSet::new(), "x");

    assert_eq!(entries[0].mapping.description, "Send messages");
}

#[test]
fn projection_is_idempotent() {
    let catalog = CategoryCatalog::builtin();
    let projector = ViewSkillProjector::new(&catalog);
    let live = vec![live_skill("copywriting", "Copywriting", "Write copy")];
    let featured = featured(&["copywriting"]);

    let first = projector.project_category(&live, JobCategory::Marketing, &featured, "Marketing");
    let second = projector.project_category(&live, JobCategory::Marketing, &featured, "Marketing");

    assert_eq!(first, second);
}

#[test]
fn every_projection_prompts_with_slash_command() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);

    for entry in projector.project_category_union(
        &[],
        &[JobCategory::Efficiency, JobCategory::Communication],
        &BTreeSet::new(),
        "All",
    ) {
        assert_eq!(
            entry.mapping.interaction,
            SkillInteraction::prompt_for(&entry.mapping.skill_key)
        );
    }
}

#[test]
fn intersection_projection_carries_primary_category() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);

    let entries = projector.project_category_set(
        &[],
        &[JobCategory::Communication, JobCategory::Efficiency],
        &BTreeSet::new(),
        "Both",
    );

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mapping.category, JobCategory::Communication);
    assert_eq!(entries[0].mapping.display_name, "Slack (workspace)");
}

#[test]
fn installed_views_skip_placeholders_and_use_flat_priority() {
    let catalog = messaging_catalog();
    let projector = ViewSkillProjector::new(&catalog);
    let live = vec![
        live_skill("discord", "Discord", "Bot"),
        live_skill("slack", "Slack", "Chat"),
        live_skill("spotify", "Spotify", "Music"),
    ];

    let installed = projector.installed_in_category(&live, JobCategory::Communication);
    let keys: Vec<&str> = installed.iter().map(|e| e.mapping.skill_key.as_str()).collect();
    assert_eq!(keys, vec!["discord", "slack"]);
    assert!(installed.iter().all(|e| e.mapping.priority == INSTALLED_PRIORITY));
    assert!(installed.iter().all(|e| !e.skill.is_placeholder()));

    let both = projector.installed_in_all_categories(
        &live,
        &[JobCategory::Efficiency, JobCategory::Communication],
    );
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].mapping.skill_key, "slack");
    assert_eq!(both[0].mapping.category, JobCategory::Efficiency);
}
