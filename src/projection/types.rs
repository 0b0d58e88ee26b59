use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::catalog::JobCategory;
use crate::status::SkillStatusEntry;

/// Card emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VisualVariant {
    Primary,
    Secondary,
    Accent,
    Subtle,
}

/// Card size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VisualSize {
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillVisualStyle {
    pub variant: VisualVariant,
    pub icon: String,
    pub size: VisualSize,
    pub featured: bool,
}

/// What clicking a skill card does.
///
/// Projections only ever build [`SkillInteraction::Prompt`]; the other kinds
/// are set by callers that customize a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SkillInteraction {
    Prompt {
        prompt: String,
    },
    Tool {
        #[serde(rename = "toolParams", default)]
        tool_params: serde_json::Value,
    },
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },
    Modal {
        modal: String,
    },
}

impl SkillInteraction {
    /// `/<skill_key>` slash-command prompt.
    pub fn prompt_for(skill_key: &str) -> Self {
        Self::Prompt {
            prompt: format!("/{skill_key}"),
        }
    }
}

/// Render metadata for one skill in one view. Rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSkillMapping {
    pub skill_key: String,
    pub display_name: String,
    pub description: String,
    pub category: JobCategory,
    pub visual: SkillVisualStyle,
    pub interaction: SkillInteraction,
    pub priority: i64,
}

/// A status entry (real or placeholder) paired with its render metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillWithViewMapping {
    pub skill: SkillStatusEntry,
    pub mapping: ViewSkillMapping,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_interaction_serializes_with_type_tag() {
        let value = serde_json::to_value(SkillInteraction::prompt_for("seo-audit")).unwrap();
        assert_eq!(value, json!({"type": "prompt", "prompt": "/seo-audit"}));
    }

    #[test]
    fn tool_interaction_uses_camel_case_params() {
        let interaction: SkillInteraction =
            serde_json::from_value(json!({"type": "tool", "toolParams": {"city": "Oslo"}})).unwrap();
        assert_eq!(
            interaction,
            SkillInteraction::Tool {
                tool_params: json!({"city": "Oslo"})
            }
        );
    }

    #[test]
    fn visual_variant_round_trips_through_strings() {
        assert_eq!(VisualVariant::Subtle.to_string(), "subtle");
        assert_eq!("primary".parse::<VisualVariant>().unwrap(), VisualVariant::Primary);
    }
}
