// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of value graphs into Graphviz dot.
//!
//! One call to [`render`] is one session: a single node table is shared by every root, so values
//! reachable from several roots are drawn once. Sessions hold no global state and can run
//! concurrently on different threads.

use std::io::{self, Write};

use thiserror::Error;

use crate::config::Config;
use crate::format::dot::GraphWriter;
use crate::model::{Inspect, Place, View};

mod mapper;
mod preview;
pub mod table;


pub use table::{IdentityKey, IdentityResolver, NodeTable};

/// Written instead of a graph when a root can be neither addressed nor followed.
pub const UNADDRESSABLE_ROOT_ERROR: &str = "error: cannot map unaddressable value";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write graph: {0}")]
    Io(#[from] io::Error),
}

/// Writes a dot description of everything reachable from `roots` into `out`.
///
/// An invalid root is not an error: the call writes [`UNADDRESSABLE_ROOT_ERROR`] instead of a graph
/// and returns `Ok(())`. Only sink failures are reported.
pub fn render<W: Write>(out: W, config: &Config, roots: &[Place<'_>]) -> Result<(), RenderError> {
    tracing::debug!(roots = roots.len(), ?config, "render session start");
    let mut writer = GraphWriter::new(out);

    if let Some(index) = roots.iter().position(|root| !is_mappable(root)) {
        tracing::warn!(root = index, type_name = roots[index].type_name(), "unaddressable root");
        writer.write_raw(UNADDRESSABLE_ROOT_ERROR)?;
        writer.write_raw("\n")?;
        return Ok(());
    }

    writer.open()?;
    let mut mapper = mapper::Mapper::new(config, writer);
    for root in roots {
        mapper.map_root(*root)?;
    }
    let ids = mapper.table().allocated_ids();
    let mut writer = mapper.into_writer();
    writer.close()?;

    tracing::debug!(
        roots = roots.len(),
        ids,
        nodes = writer.nodes_written(),
        edges = writer.edges_written(),
        "rendered value graph"
    );
    Ok(())
}

/// Renders into a fresh string.
pub fn render_to_string(config: &Config, roots: &[Place<'_>]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(&mut buf, config, roots);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Renders a single stored value with the given config.
pub fn render_value<T: Inspect>(config: &Config, value: &T) -> String {
    render_to_string(config, &[Place::stored(value)])
}

fn is_mappable(root: &Place<'_>) -> bool {
    if root.is_addressable() {
        return true;
    }

    let mut indirection = false;
    root.inspect(&mut |view| indirection = matches!(view, View::Pointer(_)));
    indirection
}
