//! Skillboard: skill categorization and dashboard navigation.
//!
//! A static [`catalog`] tags skills with job categories. The [`index`] answers
//! category queries over it, [`projection`] joins the answers with live skill
//! status into render-ready entries, and [`view`] groups those entries into
//! assistant pages. [`routing`] maps dashboard tabs to URL paths and back.
//!
//! # Quick Start
//!
//! ```
//! use skillboard::prelude::*;
//!
//! let catalog = CategoryCatalog::builtin();
//! let legal = view_for_tab(Tab::Legal).expect("legal is an assistant tab");
//! let view = build_view(&legal, &catalog, &[]);
//! assert!(!view.is_empty());
//!
//! assert_eq!(tab_from_path("/ui/legal", "/ui"), Some(Tab::Legal));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod prelude;
pub mod projection;
pub mod routing;
pub mod status;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;
