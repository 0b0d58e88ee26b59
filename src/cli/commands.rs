//! CLI command handlers.

use std::io::Write;

use super::{Commands, PathArgs, RouteArgs, SkillsArgs, ViewArgs};
use crate::catalog::{CategoryCatalog, JobCategory, SkillCategoryMapping};
use crate::config::{load_status_report, SkillboardConfig};
use crate::error::{Result, SkillboardError};
use crate::routing::{PathRouter, Tab};
use crate::view::{build_view, view_for_tab};

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The query was valid but matched nothing.
    NotFound,
}

/// Run one command, writing its output to `out`.
pub fn run(command: &Commands, config: &SkillboardConfig, out: &mut dyn Write) -> Result<Outcome> {
    match command {
        Commands::Route(args) => handle_route(args, config, out),
        Commands::Path(args) => handle_path(args, config, out),
        Commands::InferBase(args) => {
            let base = PathRouter::global().infer_base_path_from_pathname(&args.pathname);
            writeln!(out, "{base}")?;
            Ok(Outcome::Success)
        }
        Commands::Categories => handle_categories(&config.load_catalog()?, out),
        Commands::Skills(args) => handle_skills(args, &config.load_catalog()?, out),
        Commands::View(args) => handle_view(args, config, out),
    }
}

fn base_or_configured(base: &Option<String>, config: &SkillboardConfig) -> String {
    base.clone().unwrap_or_else(|| config.base_path())
}

fn handle_route(args: &RouteArgs, config: &SkillboardConfig, out: &mut dyn Write) -> Result<Outcome> {
    let base = base_or_configured(&args.base, config);
    match PathRouter::global().tab_from_path(&args.pathname, &base) {
        Some(tab) => {
            writeln!(out, "{tab}")?;
            Ok(Outcome::Success)
        }
        None => {
            writeln!(out, "not found")?;
            Ok(Outcome::NotFound)
        }
    }
}

fn handle_path(args: &PathArgs, config: &SkillboardConfig, out: &mut dyn Write) -> Result<Outcome> {
    let tab = Tab::parse(&args.tab)?;
    let base = base_or_configured(&args.base, config);
    writeln!(out, "{}", PathRouter::global().path_for_tab(tab, &base))?;
    Ok(Outcome::Success)
}

fn handle_categories(catalog: &CategoryCatalog, out: &mut dyn Write) -> Result<Outcome> {
    let index = catalog.index();
    for info in catalog.categories() {
        let count = index.filter_by_category(info.id).len();
        writeln!(
            out,
            "{:<14} {} {:<22} {count}",
            info.id, info.icon, info.display_name
        )?;
    }
    Ok(Outcome::Success)
}

fn handle_skills(args: &SkillsArgs, catalog: &CategoryCatalog, out: &mut dyn Write) -> Result<Outcome> {
    let categories = args
        .categories
        .iter()
        .map(|raw| JobCategory::parse(raw))
        .collect::<Result<Vec<_>>>()?;
    let index = catalog.index();

    let mappings: Vec<SkillCategoryMapping> = match categories.as_slice() {
        [] => catalog.mappings().to_vec(),
        [single] => index.filter_by_category(*single).into_iter().cloned().collect(),
        several if args.union => index.union_by_categories(several).into_iter().cloned().collect(),
        several => index.filter_by_category_set(several),
    };

    serde_json::to_writer_pretty(&mut *out, &mappings)?;
    writeln!(out)?;
    Ok(if mappings.is_empty() {
        Outcome::NotFound
    } else {
        Outcome::Success
    })
}

fn handle_view(args: &ViewArgs, config: &SkillboardConfig, out: &mut dyn Write) -> Result<Outcome> {
    let tab = Tab::parse(&args.tab)?;
    let descriptor = view_for_tab(tab).ok_or_else(|| {
        SkillboardError::InvalidArgument(format!("'{tab}' is not an assistant view"))
    })?;
    let live = match &args.status {
        Some(path) => load_status_report(path)?.skills,
        None => config.load_status()?,
    };
    let catalog = config.load_catalog()?;

    let view = build_view(&descriptor, &catalog, &live);
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)?;
    Ok(Outcome::Success)
}
