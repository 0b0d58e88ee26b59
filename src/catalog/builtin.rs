//! Category and mapping tables shipped with the dashboard.
//!
//! Row order is significant: lookups by skill return the first row, and
//! per-category listings keep this order.

use super::{CategoryInfo, JobCategory, SkillCategoryMapping};

use super::JobCategory::*;

const CATEGORIES: &[(JobCategory, &str, &str, &str)] = &[
    (Marketing, "Marketing", "📢", "Campaigns, content generation, ad delivery"),
    (Product, "Product", "🎯", "Product planning, requirements, user research"),
    (Legal, "Legal", "⚖️", "Contract review, compliance, legal risk assessment"),
    (Finance, "Finance", "💰", "Financial statements, reconciliation, budget analysis"),
    (Service, "Customer Service", "💬", "Customer support and after-sales handling"),
    (Brand, "Brand", "✨", "Brand image and reputation management"),
    (Data, "Data", "📊", "Data analysis and report generation"),
    (Efficiency, "Productivity", "📋", "Office automation and document handling"),
    (Dev, "Development", "💻", "Software development and technical tooling"),
    (Communication, "Messaging", "📱", "Instant messaging and message delivery"),
    (Media, "Media", "🎬", "Audio, video and image processing"),
    (Tools, "Tools", "🛠️", "Utilities and system tools"),
    (Other, "Other", "📦", "Other skills"),
];

const MAPPINGS: &[(&str, JobCategory, &str, &str, &str)] = &[
    // Marketing
    ("content-strategy", Marketing, "📝", "Content Strategy", "Plan content strategy, topics and topic clusters"),
    ("copywriting", Marketing, "✍️", "Copywriting", "Write marketing pages, landing pages and product copy"),
    ("copy-editing", Marketing, "📝", "Copy Editing", "Review and polish existing marketing copy"),
    ("social-content", Marketing, "📱", "Social Content", "Create posts for LinkedIn, Twitter, Instagram and more"),
    ("email-sequence", Marketing, "📧", "Email Sequences", "Design automated email flows and outreach sequences"),
    ("instagram-marketing", Marketing, "📸", "Instagram Marketing", "Generate Instagram content and hashtag strategy from a product link"),
    ("product-marketing-context", Marketing, "📋", "Product Marketing Context", "Document product positioning and marketing fundamentals"),
    ("launch-strategy", Marketing, "🚀", "Launch Strategy", "Plan product launches, feature releases and go-to-market"),
    ("pricing-strategy", Marketing, "💰", "Pricing Strategy", "Design pricing, packaging and monetization models"),
    ("competitor-alternatives", Marketing, "🔄", "SEO Comparison Pages", "Write competitor comparison and alternative pages for SEO and sales"),
    ("referral-program", Marketing, "👥", "Referral Program", "Design referral, affiliate and word-of-mouth growth programs"),
    ("free-tool-strategy", Marketing, "🎁", "Free Tool Strategy", "Plan free-tool acquisition and engineering-led marketing"),
    ("programmatic-seo", Marketing, "🔍", "Programmatic SEO", "Generate templated SEO pages that cover long-tail keywords"),
    ("seo-audit", Marketing, "📊", "SEO Audit", "Diagnose SEO issues and improve technical and content performance"),
    ("schema-markup", Marketing, "🏷️", "Schema Markup", "Add Schema.org markup to improve search result display"),
    ("analytics-tracking", Marketing, "📈", "Analytics Tracking", "Configure GA4, GTM and conversion tracking"),
    ("form-cro", Marketing, "📝", "Form Optimization", "Optimize form design, fields and conversion rate"),
    ("page-cro", Marketing, "📄", "Landing Page Optimization", "Raise marketing page conversion and user experience"),
    ("popup-cro", Marketing, "🪟", "Popup Optimization", "Optimize popups, modals and banners"),
    ("onboarding-cro", Marketing, "🎯", "Onboarding Optimization", "Improve post-signup activation and first-run experience"),
    ("signup-flow-cro", Marketing, "✅", "Signup Flow Optimization", "Reduce signup friction and lift account creation"),
    ("paywall-upgrade-cro", Marketing, "💎", "Paywall Optimization", "Optimize in-product upgrade prompts and paywalls"),
    ("paid-ads", Marketing, "💵", "Paid Ads", "Manage Google, Meta and LinkedIn ad campaigns"),
    ("marketing-ideas", Marketing, "💡", "Marketing Ideas", "139 proven SaaS marketing strategies and ideas"),
    ("marketing-psychology", Marketing, "🧠", "Marketing Psychology", "Apply 70+ psychology and behavioral science principles"),
    ("ab-test-setup", Marketing, "🧪", "A/B Testing", "Design and plan A/B and multivariate experiments"),
    // Product
    ("feature-spec", Product, "📝", "Feature Spec", "Write PRDs with problem statements, user stories and acceptance criteria"),
    ("roadmap-management", Product, "🗺️", "Roadmap Planning", "Prioritize the roadmap with RICE or MoSCoW"),
    ("user-research-synthesis", Product, "🔬", "Research Synthesis", "Distill insights from interviews, surveys and behavior data"),
    ("competitive-analysis", Product, "🔍", "Competitive Analysis", "Build comparison matrices, positioning and recommendations"),
    ("metrics-tracking", Product, "📊", "Metrics Tracking", "Set OKRs, build dashboards and run weekly metric reviews"),
    ("stakeholder-comms", Product, "📣", "Stakeholder Comms", "Write status reports, risk notices and decision docs"),
    // Legal
    ("compliance", Legal, "⚖️", "Compliance Review", "Check GDPR and CCPA compliance and handle data subject requests"),
    ("contract-review", Legal, "📜", "Contract Review", "Review contract clauses against the negotiation playbook"),
    ("legal-risk-assessment", Legal, "⚠️", "Legal Risk Assessment", "Grade legal risk of contracts and deals, define escalation"),
    ("nda-triage", Legal, "🔒", "NDA Triage", "Sort NDAs into standard, review and risky"),
    ("canned-responses", Legal, "📋", "Canned Responses", "Generate standard replies to common legal questions"),
    ("meeting-briefing", Legal, "📑", "Meeting Briefing", "Prepare legal meeting material and track action items"),
    // Finance
    ("financial-statements", Finance, "📊", "Financial Statements", "Produce income statement, balance sheet and cash flow"),
    ("journal-entry-prep", Finance, "📝", "Journal Entries", "Prepare month-end accruals, amortization and depreciation"),
    ("reconciliation", Finance, "🔍", "Reconciliation", "Reconcile ledgers, bank statements and intercompany balances"),
    ("variance-analysis", Finance, "📈", "Variance Analysis", "Break down variance drivers with waterfall explanations"),
    ("close-management", Finance, "📅", "Close Management", "Run the month-end close schedule and track progress"),
    ("audit-support", Finance, "🔒", "Audit Support", "Support SOX 404 control testing, sampling and workpapers"),
    // Customer service
    ("imsg", Service, "💬", "iMessage Support", "Handle customer questions over iMessage and SMS"),
    ("wacli", Service, "📱", "WhatsApp Support", "Handle customer messages and after-sales over WhatsApp"),
    ("bluebubbles", Service, "📱", "BlueBubbles", "Bridge iMessage conversations through BlueBubbles"),
    // Brand
    ("social-content", Brand, "📱", "Social Brand", "Manage brand presence and tone on social media"),
    ("competitor-alternatives", Brand, "🔄", "Competitor Analysis", "Analyze competitor positioning and differentiation"),
    // Data
    ("analytics-tracking", Data, "📈", "Data Analytics", "Set up tracking plans and analyze user behavior"),
    ("seo-audit", Data, "📊", "SEO Data Audit", "Analyze SEO performance data and opportunities"),
    ("session-logs", Data, "📜", "Session Log Analysis", "Search and analyze past conversations"),
    ("model-usage", Data, "💸", "Cost Tracking", "Track API cost and usage per model"),
    ("summarize", Data, "🧾", "Summarize", "Extract and summarize URLs, podcasts and files"),
    // Productivity
    ("apple-notes", Efficiency, "📝", "Apple Notes", "Manage Apple Notes from the command line"),
    ("notion", Efficiency, "📔", "Notion", "Manage Notion pages and databases"),
    ("apple-reminders", Efficiency, "⏰", "Reminders", "Manage Apple Reminders to-dos"),
    ("trello", Efficiency, "📋", "Trello", "Manage Trello boards, lists and cards"),
    ("himalaya", Efficiency, "📧", "Email CLI", "Manage IMAP/SMTP mail from the command line"),
    ("nano-pdf", Efficiency, "📄", "PDF Editing", "Edit PDF documents with natural-language instructions"),
    ("slack", Efficiency, "💬", "Slack", "Post messages, reactions and pins in Slack channels"),
    // Development
    ("coding-agent", Dev, "💻", "Coding Agent", "Run AI coding agents"),
    ("openai-whisper", Dev, "🎙️", "Whisper (local)", "Run Whisper speech-to-text locally"),
    ("openai-whisper-api", Dev, "☁️", "Whisper API", "Transcribe audio with the OpenAI Whisper API"),
    ("openai-image-gen", Dev, "🖼️", "OpenAI Images", "Batch-generate images into an HTML gallery"),
    ("nano-banana-pro", Dev, "🍌", "Gemini Images", "Generate or edit images with Gemini 3 Pro"),
    ("oracle", Dev, "🧿", "Code Analysis", "Analyze code and files with the oracle CLI"),
    ("mcporter", Dev, "⚙️", "MCP Tools", "Configure and call MCP servers and tools"),
    ("tmux", Dev, "🧵", "tmux", "Drive tmux sessions and interactive shells"),
    ("skill-creator", Dev, "🛠️", "Skill Creator", "Create or update skill packages"),
    ("peekaboo", Dev, "🖱️", "UI Automation", "Capture and automate macOS UI"),
    ("canvas", Dev, "🎨", "Canvas", "Canvas and visual development"),
    ("remotion", Dev, "🎬", "Remotion Video", "Create programmatic videos with React"),
    // Messaging
    ("slack", Communication, "💬", "Slack", "Send messages and manage channels in Slack"),
    ("discord", Communication, "🎮", "Discord", "Send messages through a Discord bot"),
    ("imsg", Communication, "💬", "iMessage", "Send and receive iMessage and SMS"),
    ("wacli", Communication, "📱", "WhatsApp", "Send WhatsApp messages from the CLI"),
    ("bluebubbles", Communication, "📱", "BlueBubbles", "Send iMessage through BlueBubbles"),
    ("voice-call", Communication, "📞", "Voice Call", "Start a voice call"),
    // Media
    ("sag", Media, "🗣️", "Text to Speech", "Generate high-quality speech with ElevenLabs"),
    ("sherpa-onnx-tts", Media, "🗣️", "Offline TTS", "Run text-to-speech locally without network"),
    ("video-frames", Media, "🎞️", "Video Frames", "Extract frames or clips from video"),
    ("camsnap", Media, "📷", "Camera Snapshot", "Capture frames from RTSP/ONVIF cameras"),
    ("gifgrep", Media, "🔍", "GIF Search", "Search GIF libraries and download results"),
    ("openai-image-gen", Media, "🖼️", "AI Image Generation", "Generate images with the OpenAI API"),
    ("nano-banana-pro", Media, "🍌", "Gemini Images", "Generate or edit images with Gemini"),
    ("remotion", Media, "🎬", "Remotion", "Create video animations in React"),
    // Tools
    ("weather", Tools, "🌤️", "Weather", "Current weather and forecast, no API key needed"),
    ("local-places", Tools, "📍", "Local Places", "Search nearby businesses via Google Places"),
    ("summarize", Tools, "🧾", "Summarize", "Summarize URLs, videos and files"),
    ("openhue", Tools, "💡", "Hue Lights", "Control Philips Hue lights and scenes"),
    ("sonoscli", Tools, "🔊", "Sonos", "Control Sonos playback and volume"),
    ("blogwatcher", Tools, "👀", "Blog Watcher", "Watch blogs and RSS/Atom feeds for updates"),
    ("ordercli", Tools, "🍕", "Order Lookup", "Look up Foodora order history and delivery status"),
];

pub(crate) fn categories() -> Vec<CategoryInfo> {
    CATEGORIES
        .iter()
        .map(|(id, display_name, icon, description)| CategoryInfo {
            id: *id,
            display_name: (*display_name).to_string(),
            icon: (*icon).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

pub(crate) fn mappings() -> Vec<SkillCategoryMapping> {
    MAPPINGS
        .iter()
        .map(|(skill_key, category, icon, display_name, description)| {
            SkillCategoryMapping::new(*skill_key, *category)
                .with_icon(*icon)
                .with_display_name(*display_name)
                .with_description(*description)
        })
        .collect()
}
