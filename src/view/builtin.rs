//! The nine assistant pages and their tab wiring.

use std::collections::BTreeSet;

use super::{SectionRule, ViewDescriptor, OTHER_SECTION};
use crate::catalog::JobCategory;
use crate::routing::Tab;

const ASSISTANT_TABS: [Tab; 9] = [
    Tab::Marketing,
    Tab::ProductManagement,
    Tab::Legal,
    Tab::Finance,
    Tab::DataProcessing,
    Tab::MarketAnalysis,
    Tab::CustomerService,
    Tab::BrandManagement,
    Tab::SentimentMonitor,
];

/// Tabs that render an assistant view, in sidebar order.
pub fn assistant_tabs() -> &'static [Tab] {
    &ASSISTANT_TABS
}

/// Descriptor for `tab`, or `None` for tabs that are not assistant pages.
pub fn view_for_tab(tab: Tab) -> Option<ViewDescriptor> {
    let view = match tab {
        Tab::Marketing => marketing(),
        Tab::ProductManagement => product_management(),
        Tab::Legal => legal(),
        Tab::Finance => finance(),
        Tab::DataProcessing => data_processing(),
        Tab::MarketAnalysis => market_analysis(),
        Tab::CustomerService => customer_service(),
        Tab::BrandManagement => brand_management(),
        Tab::SentimentMonitor => sentiment_monitor(),
        _ => return None,
    };
    Some(view)
}

fn featured(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

fn with_other(mut rules: Vec<SectionRule>) -> Vec<SectionRule> {
    rules.push(SectionRule::new(OTHER_SECTION, "Other", &[]));
    rules
}

fn not_installed(area: &str) -> String {
    format!("No {area} skills yet. Install or enable some to get started.")
}

fn marketing() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Marketing Assistant")
        .page_subtitle("Campaign planning, content generation and performance analysis")
        .primary_category(JobCategory::Marketing)
        .featured(featured(&["launch-strategy", "copywriting", "analytics-tracking", "paid-ads"]))
        .sections(with_other(vec![
            SectionRule::new(
                "strategy",
                "Strategy",
                &["strategy", "launch", "pricing", "referral", "free-tool", "idea", "psychology"],
            ),
            SectionRule::new(
                "content",
                "Content",
                &["product-marketing-context", "content", "copy", "writing", "editing"],
            ),
            SectionRule::new(
                "social",
                "Social & Email",
                &["social", "instagram", "linkedin", "tiktok", "email"],
            ),
            SectionRule::new("seo", "SEO", &["seo", "schema", "keyword", "competitor-alternatives"]),
            SectionRule::new("paid", "Paid Ads", &["paid", "ads"]),
            SectionRule::new(
                "cro",
                "Conversion",
                &["cro", "form", "page", "popup", "onboarding", "signup", "paywall"],
            ),
            SectionRule::new("analytics", "Analytics", &["analytics", "tracking", "metric"]),
            SectionRule::new("research", "Research", &["research", "ab-test", "survey"]),
        ]))
        .empty_message(not_installed("marketing"))
        .build()
}

fn product_management() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Product Management Assistant")
        .page_subtitle("Product planning, requirements and user research")
        .primary_category(JobCategory::Product)
        .featured(featured(&["feature-spec", "roadmap-management", "user-research-synthesis"]))
        .sections(with_other(vec![
            SectionRule::new("spec", "Specs", &["spec", "prd", "feature"]),
            SectionRule::new("roadmap", "Roadmap", &["roadmap", "planning"]),
            SectionRule::new("research", "User Research", &["research", "user", "synthesis"]),
            SectionRule::new("analysis", "Insights", &["competitive", "analysis", "metrics"]),
            SectionRule::new("comms", "Communication", &["stakeholder", "comms", "communication"]),
        ]))
        .empty_message(not_installed("product management"))
        .build()
}

fn legal() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Legal Assistant")
        .page_subtitle("Contract review, compliance and legal risk assessment")
        .primary_category(JobCategory::Legal)
        .featured(featured(&["contract-review", "compliance", "nda-triage"]))
        .sections(with_other(vec![
            SectionRule::new("compliance", "Compliance", &["compliance", "gdpr", "ccpa", "privacy"]),
            SectionRule::new("contract", "Contracts", &["contract", "nda", "agreement"]),
            SectionRule::new("risk", "Risk", &["risk", "assessment", "triage"]),
            SectionRule::new("template", "Templates", &["canned", "template", "response"]),
            SectionRule::new("meeting", "Meetings", &["meeting", "briefing"]),
        ]))
        .empty_message(not_installed("legal"))
        .build()
}

fn finance() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Finance Assistant")
        .page_subtitle("Financial statements, reconciliation and budget analysis")
        .primary_category(JobCategory::Finance)
        .featured(featured(&["financial-statements", "reconciliation", "variance-analysis"]))
        .sections(with_other(vec![
            SectionRule::new("statements", "Statements", &["financial", "statements", "report"]),
            SectionRule::new("close", "Month-End Close", &["close", "journal", "entry"]),
            SectionRule::new("reconciliation", "Reconciliation", &["reconcil", "rec"]),
            SectionRule::new("analysis", "Analysis & Audit", &["variance", "analysis", "audit"]),
        ]))
        .empty_message(not_installed("finance"))
        .build()
}

fn data_processing() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Data Processing Assistant")
        .page_subtitle("Data analysis, cleaning and visualization tools")
        .primary_category(JobCategory::Data)
        .featured(featured(&["analytics-tracking", "seo-audit", "model-usage"]))
        .sections(with_other(vec![
            SectionRule::new("analytics", "Analytics", &["analytics"]),
            SectionRule::new("seo", "SEO Audits", &["seo"]),
            SectionRule::new("logs", "Log Analysis", &["session", "log"]),
            SectionRule::new("cost", "Cost Tracking", &["usage", "cost"]),
            SectionRule::new("visualization", "Visualization", &["mapper", "viz"]),
        ]))
        .empty_message(not_installed("data processing"))
        .build()
}

fn market_analysis() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Market Analysis Assistant")
        .page_subtitle("Market trends and competitive intelligence (data + marketing)")
        .primary_category(JobCategory::Data)
        .category_set(vec![JobCategory::Data, JobCategory::Marketing])
        .featured(featured(&["analytics-tracking", "seo-audit", "competitor-alternatives"]))
        .sections(with_other(vec![
            SectionRule::new("analytics", "Analytics & Tracking", &["analytics"]),
            SectionRule::new("seo", "SEO Audits & Optimization", &["seo"]),
        ]))
        .empty_message("No market analysis skills yet.")
        .build()
}

fn customer_service() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Customer Service Assistant")
        .page_subtitle("Customer support and issue resolution")
        .primary_category(JobCategory::Service)
        .featured(featured(&["imsg", "wacli"]))
        .sections(with_other(vec![SectionRule::new(
            "messaging",
            "Messaging",
            &["imsg", "wacli", "bluebubbles", "whatsapp", "telegram", "discord"],
        )]))
        .empty_message(not_installed("customer service"))
        .build()
}

fn brand_management() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Brand Management Assistant")
        .page_subtitle("Brand strategy and image management")
        .primary_category(JobCategory::Brand)
        .featured(featured(&["social-content", "competitor-alternatives"]))
        .sections(with_other(vec![
            SectionRule::new("social", "Social Media", &["social"]),
            SectionRule::new(
                "competitive",
                "Competitive Analysis",
                &["competitive", "competitor", "alternative"],
            ),
        ]))
        .empty_message(not_installed("brand management"))
        .build()
}

fn sentiment_monitor() -> ViewDescriptor {
    ViewDescriptor::builder()
        .page_title("Sentiment Monitor Assistant")
        .page_subtitle("Sentiment monitoring and reputation management (communication + brand)")
        .primary_category(JobCategory::Communication)
        .category_set(vec![JobCategory::Communication, JobCategory::Brand])
        .featured(featured(&["social-content", "slack", "discord"]))
        .sections(with_other(vec![
            SectionRule::new("monitoring", "Social Monitoring", &["social", "monitor"]),
            SectionRule::new("analysis", "Sentiment Analysis", &["sentiment", "analysis"]),
        ]))
        .empty_message("No sentiment monitoring skills yet.")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;
    use crate::view::build_view;
    use strum::IntoEnumIterator;

    #[test]
    fn only_assistant_tabs_have_views() {
        for tab in Tab::iter() {
            assert_eq!(
                view_for_tab(tab).is_some(),
                assistant_tabs().contains(&tab),
                "{tab}"
            );
        }
    }

    #[test]
    fn every_view_lists_catalog_skills() {
        let catalog = CategoryCatalog::builtin();
        for &tab in assistant_tabs() {
            let descriptor = view_for_tab(tab).unwrap();
            let view = build_view(&descriptor, &catalog, &[]);
            assert!(!view.is_empty(), "{tab} has no skills");
            assert_eq!(view.empty_message, None);
        }
    }

    #[test]
    fn every_view_ends_with_other_section() {
        for &tab in assistant_tabs() {
            let descriptor = view_for_tab(tab).unwrap();
            assert_eq!(descriptor.section_order().last(), Some(&OTHER_SECTION));
        }
    }

    #[test]
    fn multi_category_views_use_unions() {
        let market = view_for_tab(Tab::MarketAnalysis).unwrap();
        assert_eq!(market.categories(), vec![JobCategory::Data, JobCategory::Marketing]);
        let finance = view_for_tab(Tab::Finance).unwrap();
        assert_eq!(finance.categories(), vec![JobCategory::Finance]);
    }
}
