// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The reflection model the mapper walks.
//!
//! Values describe themselves through [`Inspect`], one level at a time, as a [`View`] whose
//! children are [`Place`]s.

pub mod ids;
mod impls;
mod record;
pub mod type_name;
pub mod view;

pub use ids::NodeId;
pub use type_name::{abbreviate_type_name, display_type_name};
pub use view::{Field, Inspect, Kind, Place, View, SKIP_MARKER};
