// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use crate::model::{Kind, NodeId, Place};

/// Deduplication key for a visited value.
///
/// Kind and type name are part of the key: a record and its first field can share an address
/// but are different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    /// The reserved entry for empty indirections.
    Nil,
    Stored { kind: Kind, type_name: &'static str, address: usize },
    /// A value without stable storage; never equal to any other key.
    Synthetic { serial: u64, kind: Kind },
}

/// Hands out identity keys for one session.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    next_serial: u64,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&mut self, place: &Place<'_>, kind: Kind) -> IdentityKey {
        match place.address() {
            Some(address) => {
                IdentityKey::Stored { kind, type_name: place.type_name(), address }
            }
            None => {
                let serial = self.next_serial;
                self.next_serial += 1;
                IdentityKey::Synthetic { serial, kind }
            }
        }
    }
}

/// Node ids and memoized summaries for one session.
#[derive(Debug)]
pub struct NodeTable {
    ids: HashMap<IdentityKey, NodeId>,
    summaries: HashMap<IdentityKey, String>,
    /// The non-opaque key last memoized for each `(address, type name)`.
    storage: HashMap<(usize, &'static str), IdentityKey>,
}

impl Default for NodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTable {
    pub const NIL_SUMMARY: &'static str = "nil";

    pub fn new() -> Self {
        let mut ids = HashMap::new();
        ids.insert(IdentityKey::Nil, NodeId::NIL);
        let mut summaries = HashMap::new();
        summaries.insert(IdentityKey::Nil, Self::NIL_SUMMARY.to_owned());
        Self { ids, summaries, storage: HashMap::new() }
    }

    /// Returns the key's id, allocating the next one on first sight.
    pub fn assign_id(&mut self, key: IdentityKey) -> NodeId {
        let next = NodeId::new(self.ids.len());
        *self.ids.entry(key).or_insert(next)
    }

    pub fn id_of(&self, key: &IdentityKey) -> Option<NodeId> {
        self.ids.get(key).copied()
    }

    pub fn summary_of(&self, key: &IdentityKey) -> Option<&str> {
        self.summaries.get(key).map(String::as_str)
    }

    pub fn set_summary(&mut self, key: IdentityKey, summary: impl Into<String>) {
        if let IdentityKey::Stored { kind, type_name, address } = key {
            if kind != Kind::Opaque {
                self.storage.insert((address, type_name), key);
            }
        }
        self.summaries.insert(key, summary.into());
    }

    /// Drops a memoized summary so the next visit renders the value again. The id is kept.
    pub fn forget(&mut self, key: &IdentityKey) {
        if *key != IdentityKey::Nil {
            self.summaries.remove(key);
        }
    }

    /// The memoized `(id, summary)` of a visited key.
    pub fn memoized(&self, key: &IdentityKey) -> Option<(NodeId, &str)> {
        let summary = self.summary_of(key)?;
        Some((self.id_of(key).unwrap_or(NodeId::NIL), summary))
    }

    /// A memoized key for the same storage under another kind.
    ///
    /// A guard that is already held (a `Mutex` reached again through a cycle) can only report
    /// an opaque view; this finds the node the guarded value was drawn as.
    pub fn memoized_storage(&self, key: &IdentityKey) -> Option<IdentityKey> {
        let IdentityKey::Stored { type_name, address, .. } = *key else {
            return None;
        };
        let found = *self.storage.get(&(address, type_name))?;
        (found != *key && self.summaries.contains_key(&found)).then_some(found)
    }

    /// Number of allocated ids, including the nil entry.
    pub fn allocated_ids(&self) -> usize {
        self.ids.len()
    }
}
