// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

static MODULE_PATH: OnceLock<Regex> = OnceLock::new();

fn module_path_regex() -> &'static Regex {
    MODULE_PATH.get_or_init(|| {
        Regex::new(r"(?:[A-Za-z_][A-Za-z0-9_]*::)+").expect("module path pattern is valid")
    })
}

/// Strips every module path from a type name, including those nested in generic arguments.
///
/// `alloc::vec::Vec<my_crate::Tree>` becomes `Vec<Tree>`; primitives are left alone.
pub fn abbreviate_type_name(full: &str) -> Cow<'_, str> {
    if !full.contains("::") {
        return Cow::Borrowed(full);
    }
    module_path_regex().replace_all(full, "")
}

/// Renders a type name for a label.
pub fn display_type_name(full: &'static str, abbreviated: bool) -> Cow<'static, str> {
    if abbreviated {
        abbreviate_type_name(full)
    } else {
        Cow::Borrowed(full)
    }
}
