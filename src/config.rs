// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for one render session.
///
/// Deserializes from partial JSON: missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    max_items_to_inline: usize,
    include_private_fields: bool,
    abbreviated_type_names: bool,
    max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items_to_inline: Self::INLINE_LOW,
            include_private_fields: true,
            abbreviated_type_names: true,
            max_depth: 0,
        }
    }
}

impl Config {
    /// Collections of any size are inlined.
    pub const INLINE_UNLIMITED: usize = 0;
    pub const INLINE_LOW: usize = 2;
    pub const INLINE_MEDIUM: usize = 5;
    pub const INLINE_HIGH: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_items_to_inline(&self) -> usize {
        self.max_items_to_inline
    }

    pub fn with_max_items_to_inline(mut self, max_items_to_inline: usize) -> Self {
        self.max_items_to_inline = max_items_to_inline;
        self
    }

    pub fn include_private_fields(&self) -> bool {
        self.include_private_fields
    }

    pub fn with_include_private_fields(mut self, include_private_fields: bool) -> Self {
        self.include_private_fields = include_private_fields;
        self
    }

    pub fn abbreviated_type_names(&self) -> bool {
        self.abbreviated_type_names
    }

    pub fn with_abbreviated_type_names(mut self, abbreviated_type_names: bool) -> Self {
        self.abbreviated_type_names = abbreviated_type_names;
        self
    }

    /// `0` means unlimited.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether a collection of `count` items may be drawn inside its parent's label.
    pub fn inlines(&self, count: usize) -> bool {
        self.max_items_to_inline == Self::INLINE_UNLIMITED || count <= self.max_items_to_inline
    }

    /// Whether composites at `depth` are past the depth limit.
    pub fn elides(&self, depth: usize) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { path: None, source })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_owned(), source })?;
        serde_json::from_str(&json)
            .map_err(|source| ConfigError::Parse { path: Some(path.to_owned()), source })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {source}")]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}
