// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::{self, Write};

use smallvec::SmallVec;

use super::table::{IdentityKey, IdentityResolver, NodeTable};
use crate::config::Config;
use crate::format::dot::{escape_label, Edge, GraphWriter, Port};
use crate::model::{display_type_name, Kind, NodeId, Place, View};

mod composite;

/// How a visited value ended up in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mapped {
    /// Text to embed in the caller's label; no edge.
    Inline(String),
    /// A standalone node the caller links to.
    Node { id: NodeId, summary: String },
    /// Past the depth limit: no text, no edge.
    Elided,
}

impl Mapped {
    fn nil() -> Self {
        Self::Inline(NodeTable::NIL_SUMMARY.to_owned())
    }

    fn memoized(id: NodeId, summary: &str) -> Self {
        if id.is_nil() {
            Self::Inline(summary.to_owned())
        } else {
            Self::Node { id, summary: summary.to_owned() }
        }
    }
}

/// The traversal state of one render session.
pub(crate) struct Mapper<'c, W: Write> {
    config: &'c Config,
    writer: GraphWriter<W>,
    resolver: IdentityResolver,
    table: NodeTable,
    /// Collections currently being drawn inside their parent's label.
    inlining: SmallVec<[IdentityKey; 4]>,
}

impl<'c, W: Write> Mapper<'c, W> {
    pub(crate) fn new(config: &'c Config, writer: GraphWriter<W>) -> Self {
        Self {
            config,
            writer,
            resolver: IdentityResolver::new(),
            table: NodeTable::new(),
            inlining: SmallVec::new(),
        }
    }

    pub(crate) fn table(&self) -> &NodeTable {
        &self.table
    }

    pub(crate) fn into_writer(self) -> GraphWriter<W> {
        self.writer
    }

    /// Maps a session root. Non-addressable roots are indirections and are followed first.
    pub(crate) fn map_root(&mut self, root: Place<'_>) -> io::Result<Mapped> {
        if root.is_addressable() {
            return self.map_value(root, NodeId::NIL, false, 0);
        }

        let mut result = Ok(Mapped::nil());
        root.inspect(&mut |view| {
            if let View::Pointer(Some(target)) = view {
                result = self.map_value(target, NodeId::NIL, false, 0);
            }
        });
        result
    }

    pub(crate) fn map_value(
        &mut self,
        place: Place<'_>,
        parent: NodeId,
        inlineable: bool,
        depth: usize,
    ) -> io::Result<Mapped> {
        let mut result = Ok(Mapped::nil());
        place.inspect(&mut |view| {
            result = self.map_view(place, view, parent, inlineable, depth);
        });
        result
    }

    fn map_view(
        &mut self,
        place: Place<'_>,
        view: View<'_>,
        parent: NodeId,
        inlineable: bool,
        depth: usize,
    ) -> io::Result<Mapped> {
        let kind = view.kind();
        let key = self.resolver.key(&place, kind);

        if let Some(hit) = self.memo_hit(key, &view) {
            if let Some((id, summary)) = self.table.memoized(&hit) {
                // A reference back into a collection that is still being inlined: that
                // collection will never get a node of its own, so there is nothing to link to.
                if self.inlining.contains(&hit) {
                    return Ok(Mapped::Inline(summary.to_owned()));
                }
                return Ok(Mapped::memoized(id, summary));
            }
        }

        match view {
            View::Pointer(target) => self.map_pointer(place, key, target, inlineable, depth),
            View::Record(fields) => self.map_record(place, key, &fields, depth),
            View::Sequence(items) => {
                self.map_sequence(place, key, &items, parent, inlineable, depth)
            }
            View::Map(entries) => self.map_entries(place, key, &entries, parent, inlineable, depth),
            View::Bool(value) => {
                let text = if value { "true" } else { "false" };
                self.map_scalar(key, kind, text.to_owned(), inlineable)
            }
            View::Str(value) => {
                let text = format!("\\\"{}\\\"", escape_label(&value));
                self.map_scalar(key, kind, text, inlineable)
            }
            View::Int(value) => {
                let text = itoa::Buffer::new().format(value).to_owned();
                self.map_scalar(key, kind, text, inlineable)
            }
            View::Uint(value) => {
                let text = itoa::Buffer::new().format(value).to_owned();
                self.map_scalar(key, kind, text, inlineable)
            }
            View::Opaque(text) => self.map_opaque(place, key, &text),
        }
    }

    /// The memoized key a visit resolves to, if any.
    ///
    /// Opaque views of stored values also match the same storage under another kind: a lock
    /// held further up the traversal is the value being drawn there.
    fn memo_hit(&self, key: IdentityKey, view: &View<'_>) -> Option<IdentityKey> {
        if self.table.memoized(&key).is_some() {
            return Some(key);
        }
        match view {
            View::Opaque(_) => self.table.memoized_storage(&key),
            _ => None,
        }
    }

    /// The escaped type name of a place, per the configured naming.
    fn type_label(&self, place: &Place<'_>) -> String {
        let name = display_type_name(place.type_name(), self.config.abbreviated_type_names());
        escape_label(&name).into_owned()
    }

    fn map_pointer(
        &mut self,
        place: Place<'_>,
        key: IdentityKey,
        target: Option<Place<'_>>,
        inlineable: bool,
        depth: usize,
    ) -> io::Result<Mapped> {
        let summary = self.type_label(&place);
        let Some(target) = target else {
            let text = format!("{summary}({})", NodeTable::NIL_SUMMARY);
            if inlineable {
                return Ok(Mapped::Inline(text));
            }
            let id = self.table.assign_id(key);
            self.table.set_summary(key, text.clone());
            self.writer.basic_node(id, &text)?;
            return Ok(Mapped::Node { id, summary: text });
        };

        if inlineable {
            // Transparent: the caller links straight to the pointee.
            return Ok(match self.map_value(target, NodeId::NIL, false, depth)? {
                Mapped::Node { id, .. } => Mapped::Node { id, summary },
                Mapped::Inline(text) => Mapped::Inline(format!("{summary}({text})")),
                Mapped::Elided => Mapped::Elided,
            });
        }

        // Registered before recursing so cycles made only of pointers terminate.
        let id = self.table.assign_id(key);
        self.table.set_summary(key, summary.clone());

        match self.map_value(target, NodeId::NIL, false, depth)? {
            Mapped::Node { id: target_id, .. } => {
                self.writer.basic_node(id, &summary)?;
                self.writer.edge(Edge { from: id, port: Port::Name, to: target_id })?;
            }
            Mapped::Inline(text) => self.writer.basic_node(id, &format!("{summary}({text})"))?,
            Mapped::Elided => self.writer.basic_node(id, &summary)?,
        }
        Ok(Mapped::Node { id, summary })
    }

    fn map_scalar(
        &mut self,
        key: IdentityKey,
        kind: Kind,
        text: String,
        inlineable: bool,
    ) -> io::Result<Mapped> {
        if inlineable {
            return Ok(Mapped::Inline(text));
        }

        let id = self.table.assign_id(key);
        self.table.set_summary(key, kind.as_str());
        self.writer.basic_node(id, &text)?;
        Ok(Mapped::Node { id, summary: kind.as_str().to_owned() })
    }

    fn map_opaque(&mut self, place: Place<'_>, key: IdentityKey, text: &str) -> io::Result<Mapped> {
        let id = self.table.assign_id(key);
        let summary = self.type_label(&place);
        self.table.set_summary(key, summary.clone());
        self.writer.basic_node(id, &escape_label(text))?;
        Ok(Mapped::Node { id, summary })
    }
}
