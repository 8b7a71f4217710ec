// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io::{self, Write};

use smallvec::SmallVec;

use crate::model::NodeId;

const GRAPH_HEADER: &str = "digraph structs {\n";
const NODE_STYLE: &str = "  node [shape=Mrecord];\n";
const GRAPH_FOOTER: &str = "}\n";

/// A named slot inside a record label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// The header cell every node starts with.
    Name,
    Field(usize),
    Element { owner: NodeId, index: usize },
    Key { owner: NodeId, index: usize },
    Value { owner: NodeId, index: usize },
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Field(index) => write!(f, "f{index}"),
            Self::Element { owner, index } => write!(f, "i{owner}_{index}"),
            Self::Key { owner, index } => write!(f, "k{owner}_{index}"),
            Self::Value { owner, index } => write!(f, "v{owner}_{index}"),
        }
    }
}

/// One cell of a record label. Text is already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Single { port: Port, text: String },
    /// A `{key|value}` group.
    Pair { key: (Port, String), value: (Port, String) },
}

pub type Cells = SmallVec<[Cell; 8]>;

/// Appends `|`-separated cells, without a leading separator.
pub fn push_cells(out: &mut String, cells: &[Cell]) {
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            out.push('|');
        }
        match cell {
            Cell::Single { port, text } => push_port_text(out, *port, text),
            Cell::Pair { key, value } => {
                out.push('{');
                push_port_text(out, key.0, &key.1);
                out.push('|');
                push_port_text(out, value.0, &value.1);
                out.push('}');
            }
        }
    }
}

fn push_port_text(out: &mut String, port: Port, text: &str) {
    use fmt::Write as _;

    // Writing into a String cannot fail.
    let _ = write!(out, "<{port}> {text}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub port: Port,
    pub to: NodeId,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}:{} -> {}:{};", self.from, self.port, self.to, Port::Name)
    }
}

/// Append-only writer for node and edge statements.
///
/// Edges are queued on a single stack. A composite takes a [`mark`](Self::mark) before visiting
/// its children and [`flush_edges`](Self::flush_edges) right after its own node statement, so
/// every edge follows the statement of the node it leaves from, and edges queued by inlined
/// children travel with the enclosing node.
pub struct GraphWriter<W: Write> {
    out: W,
    pending: Vec<Edge>,
    nodes_written: usize,
    edges_written: usize,
}

impl<W: Write> GraphWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, pending: Vec::new(), nodes_written: 0, edges_written: 0 }
    }

    pub fn open(&mut self) -> io::Result<()> {
        self.out.write_all(GRAPH_HEADER.as_bytes())?;
        self.out.write_all(NODE_STYLE.as_bytes())
    }

    pub fn close(&mut self) -> io::Result<()> {
        self.out.write_all(GRAPH_FOOTER.as_bytes())?;
        self.out.flush()
    }

    /// Writes raw text, bypassing the statement structure.
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// A node with a header cell only.
    pub fn basic_node(&mut self, id: NodeId, text: &str) -> io::Result<()> {
        self.node(id, text, &[])
    }

    pub fn node(&mut self, id: NodeId, header: &str, cells: &[Cell]) -> io::Result<()> {
        let mut label = String::with_capacity(header.len() + 16 * (cells.len() + 1));
        label.push_str("<name> ");
        label.push_str(header);
        if !cells.is_empty() {
            label.push('|');
            push_cells(&mut label, cells);
        }

        tracing::trace!(node = %id, cells = cells.len(), "emit node");
        self.nodes_written += 1;
        writeln!(self.out, "  {id} [label=\"{label}\"];")
    }

    pub fn edge(&mut self, edge: Edge) -> io::Result<()> {
        self.edges_written += 1;
        writeln!(self.out, "{edge}")
    }

    pub fn mark(&self) -> usize {
        self.pending.len()
    }

    pub fn queue_edge(&mut self, edge: Edge) {
        self.pending.push(edge);
    }

    /// Writes and drops every edge queued since `mark`.
    pub fn flush_edges(&mut self, mark: usize) -> io::Result<()> {
        let edges = self.pending.split_off(mark.min(self.pending.len()));
        for edge in edges {
            self.edge(edge)?;
        }
        Ok(())
    }

    pub fn nodes_written(&self) -> usize {
        self.nodes_written
    }

    pub fn edges_written(&self) -> usize {
        self.edges_written
    }
}
