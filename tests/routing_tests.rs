//! Path routing integration tests.

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use skillboard::error::SkillboardError;
use skillboard::routing::{
    infer_base_path_from_pathname, is_external_url, normalize_base_path, normalize_path,
    path_for_tab, tab_from_path, PathRouter, Tab,
};

const BASES: [&str; 4] = ["", "/ui", "/apps/dash", "ui/"];

#[test]
fn every_internal_tab_round_trips_under_every_base() {
    for base in BASES {
        for tab in Tab::iter() {
            let path = path_for_tab(tab, base);
            if is_external_url(&path) {
                continue;
            }
            assert_eq!(tab_from_path(&path, base), Some(tab), "{tab} under '{base}'");
        }
    }
}

#[test]
fn external_tab_ignores_base_path() {
    assert_eq!(
        path_for_tab(Tab::Wordstudy, "/ui"),
        "https://edu.52tuan.com/wordstudy/"
    );
    assert!(PathRouter::global().is_external(Tab::Wordstudy));
    assert_eq!(tab_from_path("https://edu.52tuan.com/wordstudy/", ""), None);
}

#[test]
fn root_and_index_html_resolve_to_chat() {
    assert_eq!(tab_from_path("/", ""), Some(Tab::Chat));
    assert_eq!(tab_from_path("", ""), Some(Tab::Chat));
    assert_eq!(tab_from_path("/ui", "/ui"), Some(Tab::Chat));
    assert_eq!(tab_from_path("/ui/index.html", "/ui"), Some(Tab::Chat));
}

#[test]
fn matching_is_case_insensitive_and_tolerates_trailing_slash() {
    assert_eq!(tab_from_path("/UI/Legal/", "/ui"), None);
    assert_eq!(tab_from_path("/ui/Legal/", "/ui"), Some(Tab::Legal));
    assert_eq!(tab_from_path("/MARKET-ANALYSIS", ""), Some(Tab::MarketAnalysis));
}

#[test]
fn base_is_only_stripped_on_segment_boundary() {
    assert_eq!(tab_from_path("/uilegal", "/ui"), None);
    assert_eq!(tab_from_path("/legal", "/ui"), Some(Tab::Legal));
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert_eq!(tab_from_path("/nowhere", ""), None);
    assert_eq!(tab_from_path("/ui/legal/extra", "/ui"), None);
}

#[test]
fn infer_base_strips_known_tab_suffix() {
    assert_eq!(infer_base_path_from_pathname("/"), "");
    assert_eq!(infer_base_path_from_pathname("/legal"), "");
    assert_eq!(infer_base_path_from_pathname("/ui/legal"), "/ui");
    assert_eq!(infer_base_path_from_pathname("/apps/dash/Finance/"), "/apps/dash");
    assert_eq!(infer_base_path_from_pathname("/ui/index.html"), "/ui");
}

#[test]
fn infer_base_without_tab_keeps_whole_path() {
    assert_eq!(infer_base_path_from_pathname("/ui/unknown"), "/ui/unknown");
}

#[test]
fn normalization_helpers() {
    assert_eq!(normalize_base_path(""), "");
    assert_eq!(normalize_base_path("/"), "");
    assert_eq!(normalize_base_path("ui/"), "/ui");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("legal/"), "/legal");
    assert_eq!(normalize_path("  /legal  "), "/legal");
}

#[test]
fn route_table_rejects_duplicate_paths() {
    let mut routes: Vec<(Tab, String)> = Tab::iter()
        .map(|tab| (tab, PathRouter::builtin().path_for_tab(tab, "")))
        .collect();
    routes[1].1 = "/CHAT".to_string();

    let err = PathRouter::new(routes).unwrap_err();
    assert!(matches!(err, SkillboardError::InvalidRouteTable(_)));
}

#[test]
fn route_table_rejects_missing_tab() {
    let routes: Vec<(Tab, String)> = Tab::iter()
        .filter(|tab| *tab != Tab::Logs)
        .map(|tab| (tab, PathRouter::builtin().path_for_tab(tab, "")))
        .collect();

    assert!(PathRouter::new(routes).is_err());
}

#[test]
fn tab_ids_parse_in_kebab_case() {
    assert_eq!(Tab::parse("sentiment-monitor").unwrap(), Tab::SentimentMonitor);
    assert_eq!(Tab::parse(" Finance ").unwrap(), Tab::Finance);
    assert!(Tab::parse("settings").unwrap_err().is_user_error());
    assert_eq!(Tab::MarketAnalysis.to_string(), "market-analysis");
}
