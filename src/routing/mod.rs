//! Bidirectional mapping between URL paths and dashboard tabs.
//!
//! Paths may be served under a base path (`/console/chat`); the router strips
//! or prepends it, and can infer it from the current location. External tabs
//! (absolute `http(s)://` URLs) are returned verbatim and never resolved back.

pub mod tabs;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, SkillboardError};

pub use tabs::{
    group_for_tab, icon_for_tab, subtitle_for_tab, title_for_tab, TabGroup, TAB_GROUPS,
};

const INDEX_HTML_SUFFIX: &str = "/index.html";

static DEFAULT_ROUTER: OnceLock<PathRouter> = OnceLock::new();

/// Logical navigation destination.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Chat,
    Home,
    Statistics,
    Docs,
    AiAssistant,
    Marketing,
    ProductManagement,
    Legal,
    Finance,
    DataProcessing,
    MarketAnalysis,
    CustomerService,
    BrandManagement,
    SentimentMonitor,
    Channels,
    Nodes,
    Instances,
    Sessions,
    Skills,
    Config,
    Logs,
    Wordstudy,
}

impl Tab {
    /// Tab shown for the application root.
    pub const DEFAULT: Tab = Tab::Chat;

    /// Parse a tab id, reporting unknown ids as an error.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| SkillboardError::UnknownTab(raw.to_string()))
    }
}

const BUILTIN_ROUTES: &[(Tab, &str)] = &[
    (Tab::Chat, "/chat"),
    (Tab::Home, "/home"),
    (Tab::Statistics, "/statistics"),
    (Tab::Docs, "/docs"),
    (Tab::AiAssistant, "/ai-assistant"),
    (Tab::Marketing, "/marketing"),
    (Tab::ProductManagement, "/product-management"),
    (Tab::Legal, "/legal"),
    (Tab::Finance, "/finance"),
    (Tab::DataProcessing, "/data-processing"),
    (Tab::MarketAnalysis, "/market-analysis"),
    (Tab::CustomerService, "/customer-service"),
    (Tab::BrandManagement, "/brand-management"),
    (Tab::SentimentMonitor, "/sentiment-monitor"),
    (Tab::Channels, "/channels"),
    (Tab::Nodes, "/nodes"),
    (Tab::Instances, "/instances"),
    (Tab::Sessions, "/sessions"),
    (Tab::Skills, "/skills"),
    (Tab::Config, "/config"),
    (Tab::Logs, "/logs"),
    (Tab::Wordstudy, "https://edu.52tuan.com/wordstudy/"),
];

/// Whether `path` is an absolute external URL rather than an app route.
pub fn is_external_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// `""` for no base path, otherwise `/segment[/segment...]` without a trailing slash.
pub fn normalize_base_path(raw: &str) -> String {
    let mut base = raw.trim().to_string();
    if base.is_empty() {
        return String::new();
    }
    if !base.starts_with('/') {
        base.insert(0, '/');
    }
    if base == "/" {
        return String::new();
    }
    if base.ends_with('/') {
        base.pop();
    }
    base
}

/// Leading slash added, one trailing slash removed; the root stays `/`.
pub fn normalize_path(raw: &str) -> String {
    let mut path = raw.trim().to_string();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Route table: one path per tab, internal paths unique.
#[derive(Debug, Clone)]
pub struct PathRouter {
    paths: Vec<String>,
    reverse: HashMap<String, Tab>,
}

impl Default for PathRouter {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PathRouter {
    /// Build a router, requiring exactly one path per tab and distinct
    /// (case-insensitive) internal paths.
    pub fn new<I, S>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Tab, S)>,
        S: Into<String>,
    {
        let mut slots: Vec<Option<String>> = vec![None; Tab::COUNT];
        for (tab, path) in routes {
            let path = path.into();
            if !is_external_url(&path) && !path.starts_with('/') {
                return Err(SkillboardError::InvalidRouteTable(format!(
                    "path '{path}' for tab '{tab}' must be absolute"
                )));
            }
            let slot = &mut slots[tab as usize];
            if slot.is_some() {
                return Err(SkillboardError::InvalidRouteTable(format!(
                    "tab '{tab}' has more than one path"
                )));
            }
            *slot = Some(path);
        }

        let mut paths = Vec::with_capacity(Tab::COUNT);
        for (tab, slot) in Tab::iter().zip(slots) {
            let Some(path) = slot else {
                return Err(SkillboardError::InvalidRouteTable(format!(
                    "tab '{tab}' has no path"
                )));
            };
            paths.push(path);
        }

        let router = Self::assemble(paths);
        let internal = Tab::iter()
            .filter(|tab| !is_external_url(router.raw_path(*tab)))
            .count();
        if router.reverse.len() != internal {
            return Err(SkillboardError::InvalidRouteTable(
                "two tabs share the same path".to_string(),
            ));
        }
        Ok(router)
    }

    /// The dashboard's shipped routes.
    pub fn builtin() -> Self {
        Self::assemble(BUILTIN_ROUTES.iter().map(|(_, path)| (*path).to_string()).collect())
    }

    /// Process-wide router over the shipped routes.
    pub fn global() -> &'static PathRouter {
        DEFAULT_ROUTER.get_or_init(Self::builtin)
    }

    fn assemble(paths: Vec<String>) -> Self {
        let mut reverse = HashMap::with_capacity(paths.len());
        for (tab, path) in Tab::iter().zip(paths.iter()) {
            if !is_external_url(path) {
                reverse.insert(normalize_path(path).to_lowercase(), tab);
            }
        }
        Self { paths, reverse }
    }

    fn raw_path(&self, tab: Tab) -> &str {
        &self.paths[tab as usize]
    }

    /// Whether `tab` points outside the application.
    pub fn is_external(&self, tab: Tab) -> bool {
        is_external_url(self.raw_path(tab))
    }

    /// URL for `tab`. External URLs ignore `base_path`.
    pub fn path_for_tab(&self, tab: Tab, base_path: &str) -> String {
        let path = self.raw_path(tab);
        if is_external_url(path) {
            return path.to_string();
        }
        let base = normalize_base_path(base_path);
        format!("{base}{path}")
    }

    /// Tab for the current location, or `None` when nothing matches.
    ///
    /// The root (and any `/index.html`) resolves to [`Tab::DEFAULT`].
    pub fn tab_from_path(&self, pathname: &str, base_path: &str) -> Option<Tab> {
        let base = normalize_base_path(base_path);
        let mut path = if pathname.is_empty() { "/" } else { pathname };
        if !base.is_empty() {
            if path == base {
                path = "/";
            } else if path
                .strip_prefix(base.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
            {
                path = &path[base.len()..];
            }
        }

        let mut normalized = normalize_path(path).to_lowercase();
        if normalized.ends_with(INDEX_HTML_SUFFIX) {
            normalized = "/".to_string();
        }
        if normalized == "/" {
            return Some(Tab::DEFAULT);
        }

        let tab = self.reverse.get(&normalized).copied();
        if tab.is_none() {
            tracing::debug!(pathname, base_path = %base, "no tab for path");
        }
        tab
    }

    /// Base path the app is mounted under, inferred from the current location.
    ///
    /// Tries the longest trailing run of segments first; everything before the
    /// first suffix that is a known tab path is the base. With no match at
    /// all, the whole path is taken as the base.
    pub fn infer_base_path_from_pathname(&self, pathname: &str) -> String {
        let mut normalized = normalize_path(pathname);
        if let Some(stripped) = normalized.strip_suffix(INDEX_HTML_SUFFIX) {
            normalized = normalize_path(stripped);
        }
        if normalized == "/" {
            return String::new();
        }

        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return String::new();
        }

        for start in 0..segments.len() {
            let candidate = format!("/{}", segments[start..].join("/")).to_lowercase();
            if self.reverse.contains_key(&candidate) {
                let prefix = &segments[..start];
                return if prefix.is_empty() {
                    String::new()
                } else {
                    format!("/{}", prefix.join("/"))
                };
            }
        }

        format!("/{}", segments.join("/"))
    }
}

/// [`PathRouter::path_for_tab`] on the shipped routes.
pub fn path_for_tab(tab: Tab, base_path: &str) -> String {
    PathRouter::global().path_for_tab(tab, base_path)
}

/// [`PathRouter::tab_from_path`] on the shipped routes.
pub fn tab_from_path(pathname: &str, base_path: &str) -> Option<Tab> {
    PathRouter::global().tab_from_path(pathname, base_path)
}

/// [`PathRouter::infer_base_path_from_pathname`] on the shipped routes.
pub fn infer_base_path_from_pathname(pathname: &str) -> String {
    PathRouter::global().infer_base_path_from_pathname(pathname)
}
