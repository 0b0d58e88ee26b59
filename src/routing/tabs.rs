//! Navigation grouping and per-tab display metadata.

use super::Tab;

/// A sidebar group of tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabGroup {
    pub label: &'static str,
    pub tabs: &'static [Tab],
    /// Rendered as nested sub-tabs.
    pub subtabs: bool,
    /// Starts collapsed.
    pub collapsed: bool,
}

pub const TAB_GROUPS: &[TabGroup] = &[
    TabGroup {
        label: "",
        tabs: &[Tab::Home, Tab::Chat],
        subtabs: false,
        collapsed: false,
    },
    TabGroup {
        label: "",
        tabs: &[Tab::Statistics],
        subtabs: false,
        collapsed: false,
    },
    TabGroup {
        label: "",
        tabs: &[Tab::Docs],
        subtabs: false,
        collapsed: false,
    },
    TabGroup {
        label: "AI Assistants",
        tabs: &[
            Tab::Marketing,
            Tab::ProductManagement,
            Tab::Legal,
            Tab::Finance,
            Tab::DataProcessing,
            Tab::MarketAnalysis,
            Tab::CustomerService,
            Tab::BrandManagement,
            Tab::SentimentMonitor,
        ],
        subtabs: true,
        collapsed: false,
    },
    TabGroup {
        label: "Settings",
        tabs: &[
            Tab::Config,
            Tab::Channels,
            Tab::Nodes,
            Tab::Instances,
            Tab::Sessions,
            Tab::Skills,
            Tab::Logs,
        ],
        subtabs: true,
        collapsed: true,
    },
    TabGroup {
        label: "Apps",
        tabs: &[Tab::Wordstudy],
        subtabs: false,
        collapsed: false,
    },
];

/// Group containing `tab`, if it is shown in the sidebar.
pub fn group_for_tab(tab: Tab) -> Option<&'static TabGroup> {
    TAB_GROUPS.iter().find(|group| group.tabs.contains(&tab))
}

pub fn icon_for_tab(tab: Tab) -> &'static str {
    match tab {
        Tab::Chat => "messageCircle",
        Tab::Home => "home",
        Tab::Statistics => "barChart",
        Tab::Docs => "book",
        Tab::AiAssistant => "bot",
        Tab::Marketing => "megaphone",
        Tab::ProductManagement => "puzzle",
        Tab::Legal => "scale",
        Tab::Finance => "coins",
        Tab::DataProcessing => "database",
        Tab::MarketAnalysis => "trendingUp",
        Tab::CustomerService => "headphones",
        Tab::BrandManagement => "palette",
        Tab::SentimentMonitor => "eye",
        Tab::Channels => "link",
        Tab::Nodes => "monitor",
        Tab::Instances => "radio",
        Tab::Sessions => "fileText",
        Tab::Skills => "zap",
        Tab::Config => "settings",
        Tab::Logs => "scrollText",
        Tab::Wordstudy => "bookOpen",
    }
}

pub fn title_for_tab(tab: Tab) -> &'static str {
    match tab {
        Tab::Chat => "Workbench",
        Tab::Home => "Home",
        Tab::Statistics => "Statistics",
        Tab::Docs => "Docs",
        Tab::AiAssistant => "AI Assistants",
        Tab::Marketing => "Marketing",
        Tab::ProductManagement => "Product Management",
        Tab::Legal => "Legal & Contracts",
        Tab::Finance => "Finance & Accounting",
        Tab::DataProcessing => "Data Processing",
        Tab::MarketAnalysis => "Market Analysis",
        Tab::CustomerService => "Customer Service",
        Tab::BrandManagement => "Brand Management",
        Tab::SentimentMonitor => "Sentiment Monitor",
        Tab::Channels => "Channels",
        Tab::Nodes => "Nodes",
        Tab::Instances => "Instances",
        Tab::Sessions => "Sessions",
        Tab::Skills => "Skills",
        Tab::Config => "Config",
        Tab::Logs => "Logs",
        Tab::Wordstudy => "Word Study",
    }
}

pub fn subtitle_for_tab(tab: Tab) -> &'static str {
    match tab {
        Tab::Chat => "Work alongside AI",
        Tab::Home => "Welcome back to your workspace",
        Tab::Statistics => "Message statistics and tool call analysis",
        Tab::Docs => "Full usage documentation and API reference",
        Tab::AiAssistant => "Pick a specialized assistant",
        Tab::Marketing => "Campaign planning, content generation and performance analysis",
        Tab::ProductManagement => "Product planning, requirements and user research",
        Tab::Legal => "Contract review, compliance and legal risk assessment",
        Tab::Finance => "Financial statements, reconciliation and budget analysis",
        Tab::DataProcessing => "Data processing, cleaning and transformation",
        Tab::MarketAnalysis => "Market trends and competitive intelligence",
        Tab::CustomerService => "Customer support and issue resolution",
        Tab::BrandManagement => "Brand strategy and image management",
        Tab::SentimentMonitor => "Sentiment monitoring and reputation management",
        Tab::Channels => "Manage channels and their settings",
        Tab::Nodes => "Device pairing, exec permissions and node bindings",
        Tab::Instances => "Presence beacons from connected clients and nodes",
        Tab::Sessions => "Inspect active sessions and adjust defaults",
        Tab::Skills => "Manage skill availability and API key injection",
        Tab::Config => "Safely edit the gateway configuration",
        Tab::Logs => "Live tail of the gateway log files",
        Tab::Wordstudy => "Character learning for children with dyslexia",
    }
}
