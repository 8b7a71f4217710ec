// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! memviz: draw live in-memory value graphs as Graphviz diagrams.
//!
//! Values describe themselves through [`model::Inspect`]; [`render`] walks everything reachable
//! from a set of roots and writes a `dot` description in which shared values are drawn once and
//! cycles terminate.
//!
//! ```
//! use std::rc::Rc;
//!
//! use memviz::{render_value, Config};
//!
//! struct Tree {
//!     id: i64,
//!     left: Option<Rc<Tree>>,
//!     right: Option<Rc<Tree>>,
//! }
//!
//! memviz::record!(Tree { pub id, pub left, pub right });
//!
//! let leaf = Rc::new(Tree { id: 1, left: None, right: None });
//! let root = Tree { id: 0, left: Some(leaf.clone()), right: Some(leaf) };
//!
//! let dot = render_value(&Config::default(), &root);
//! assert!(dot.starts_with("digraph structs {\n"));
//! assert_eq!(dot.matches("-> 2:name;").count(), 2);
//! ```

pub mod config;
pub mod demo;
pub mod export;
pub mod format;
pub mod model;
pub mod render;

pub use config::{Config, ConfigError};
pub use export::{write_png, ExportError};
pub use model::{Field, Inspect, Place, View};
pub use render::{render, render_to_string, render_value, RenderError};
