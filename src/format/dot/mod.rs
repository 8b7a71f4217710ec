// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphviz `dot` output: label escaping and statement emission.

mod emit;
mod escape;

pub use emit::{push_cells, Cell, Cells, Edge, GraphWriter, Port};
pub use escape::escape_label;
