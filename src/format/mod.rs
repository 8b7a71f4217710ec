// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram output formats.
//!
//! Currently this module only targets Graphviz `dot` record graphs.

pub mod dot;
