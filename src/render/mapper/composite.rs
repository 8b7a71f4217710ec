// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::{self, Write};

use super::{Mapped, Mapper};
use crate::format::dot::{escape_label, push_cells, Cell, Cells, Edge, Port};
use crate::model::{Field, NodeId, Place};
use crate::render::preview::preview_key;
use crate::render::table::IdentityKey;

/// Text for one side of a map entry, plus the node it links to.
type EntrySide = (String, Option<NodeId>);

impl<W: Write> Mapper<'_, W> {
    pub(super) fn map_record(
        &mut self,
        place: Place<'_>,
        key: IdentityKey,
        fields: &[Field<'_>],
        depth: usize,
    ) -> io::Result<Mapped> {
        if self.config.elides(depth) {
            return Ok(Mapped::Elided);
        }

        let id = self.table.assign_id(key);
        let summary = self.type_label(&place);
        self.table.set_summary(key, summary.clone());

        let mark = self.writer.mark();
        let mut cells = Cells::new();
        for (index, field) in fields.iter().enumerate() {
            if field.is_skipped() || (!field.is_public() && !self.config.include_private_fields())
            {
                continue;
            }

            let port = Port::Field(index);
            let name = escape_label(field.name());
            match self.map_value(field.place(), id, true, depth + 1)? {
                Mapped::Inline(text) => {
                    cells.push(Cell::Single { port, text: format!("{name}: {text}") });
                }
                Mapped::Node { id: target, .. } => {
                    cells.push(Cell::Single { port, text: name.into_owned() });
                    self.writer.queue_edge(Edge { from: id, port, to: target });
                }
                Mapped::Elided => {}
            }
        }

        self.writer.node(id, &summary, &cells)?;
        self.writer.flush_edges(mark)?;
        Ok(Mapped::Node { id, summary })
    }

    pub(super) fn map_sequence(
        &mut self,
        place: Place<'_>,
        key: IdentityKey,
        items: &[Place<'_>],
        parent: NodeId,
        inlineable: bool,
        depth: usize,
    ) -> io::Result<Mapped> {
        if self.config.elides(depth) {
            return Ok(Mapped::Elided);
        }

        let summary = self.type_label(&place);
        if items.is_empty() {
            return self.map_empty(key, summary, inlineable);
        }

        let id = self.table.assign_id(key);
        self.table.set_summary(key, summary.clone());

        let inline = inlineable && self.config.inlines(items.len());
        // Inlined collections have no node: their links leave from the parent's label.
        let source = if inline { parent } else { id };
        if inline {
            self.inlining.push(key);
        }

        let mark = self.writer.mark();
        let mut cells = Cells::new();
        let mut index_buf = itoa::Buffer::new();
        for (index, item) in items.iter().enumerate() {
            let port = Port::Element { owner: id, index };
            let label = index_buf.format(index);
            match self.map_value(*item, source, true, depth + 1)? {
                Mapped::Inline(text) => {
                    cells.push(Cell::Single { port, text: format!("{label}: {text}") });
                }
                Mapped::Node { id: target, .. } => {
                    cells.push(Cell::Single { port, text: label.to_owned() });
                    self.writer.queue_edge(Edge { from: source, port, to: target });
                }
                Mapped::Elided => {}
            }
        }

        if inline {
            return Ok(self.finish_inline(key, &cells));
        }

        self.writer.node(id, &summary, &cells)?;
        self.writer.flush_edges(mark)?;
        Ok(Mapped::Node { id, summary })
    }

    pub(super) fn map_entries(
        &mut self,
        place: Place<'_>,
        key: IdentityKey,
        entries: &[(Place<'_>, Place<'_>)],
        parent: NodeId,
        inlineable: bool,
        depth: usize,
    ) -> io::Result<Mapped> {
        if self.config.elides(depth) {
            return Ok(Mapped::Elided);
        }

        let summary = self.type_label(&place);
        if entries.is_empty() {
            return self.map_empty(key, summary, inlineable);
        }

        let id = self.table.assign_id(key);
        self.table.set_summary(key, summary.clone());

        let inline = inlineable && self.config.inlines(entries.len());
        let source = if inline { parent } else { id };
        if inline {
            self.inlining.push(key);
        }

        // Storage order is arbitrary for hash maps; draw entries in key order, then value
        // order, so ids and output are reproducible.
        let mut order = entries
            .iter()
            .enumerate()
            .map(|(original, (entry_key, entry_value))| {
                (preview_key(*entry_key), preview_key(*entry_value), original)
            })
            .collect::<Vec<_>>();
        order.sort();

        let mark = self.writer.mark();
        let mut cells = Cells::new();
        for (index, (_, _, original)) in order.into_iter().enumerate() {
            let (entry_key, entry_value) = entries[original];
            let key_port = Port::Key { owner: id, index };
            let value_port = Port::Value { owner: id, index };

            let key_side = self.map_entry_side(entry_key, source, depth)?;
            let value_side = self.map_entry_side(entry_value, source, depth)?;
            let (Some((key_text, key_target)), Some((value_text, value_target))) =
                (key_side, value_side)
            else {
                continue;
            };

            if let Some(target) = key_target {
                self.writer.queue_edge(Edge { from: source, port: key_port, to: target });
            }
            if let Some(target) = value_target {
                self.writer.queue_edge(Edge { from: source, port: value_port, to: target });
            }
            cells.push(Cell::Pair { key: (key_port, key_text), value: (value_port, value_text) });
        }

        if inline {
            return Ok(self.finish_inline(key, &cells));
        }

        self.writer.node(id, &summary, &cells)?;
        self.writer.flush_edges(mark)?;
        Ok(Mapped::Node { id, summary })
    }

    fn map_entry_side(
        &mut self,
        place: Place<'_>,
        source: NodeId,
        depth: usize,
    ) -> io::Result<Option<EntrySide>> {
        Ok(match self.map_value(place, source, true, depth + 1)? {
            Mapped::Inline(text) => Some((text, None)),
            Mapped::Node { id, summary } => Some((summary, Some(id))),
            Mapped::Elided => None,
        })
    }

    /// Wraps up a collection drawn inside its parent. Its queued edges stay pending and are
    /// flushed with the parent's node.
    fn finish_inline(&mut self, key: IdentityKey, cells: &[Cell]) -> Mapped {
        self.inlining.pop();
        // Nothing was drawn for this storage; a later visit must render it (and its links) again.
        self.table.forget(&key);

        let mut text = String::from("{");
        push_cells(&mut text, cells);
        text.push('}');
        Mapped::Inline(text)
    }

    fn map_empty(
        &mut self,
        key: IdentityKey,
        summary: String,
        inlineable: bool,
    ) -> io::Result<Mapped> {
        let text = format!("{summary}\\{{\\}}");
        if inlineable {
            return Ok(Mapped::Inline(text));
        }

        let id = self.table.assign_id(key);
        self.table.set_summary(key, summary.clone());
        self.writer.basic_node(id, &text)?;
        Ok(Mapped::Node { id, summary })
    }
}
