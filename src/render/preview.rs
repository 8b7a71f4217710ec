// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Side-effect free sort keys for map entries.

use crate::model::{Place, View};

const MAX_PREVIEW_DEPTH: usize = 4;

/// A structural snapshot of a value, ordered so that numbers compare numerically.
///
/// Previews never touch the node table or the writer; they only read through [`Place::inspect`].
/// Skipped and private fields still take part: they are never drawn, but they tell keys apart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Preview {
    Nil,
    Bool(bool),
    Number(i128),
    Text(String),
    Opaque(String),
    Composite(Vec<Preview>),
    Pair(Box<Preview>, Box<Preview>),
    /// Deeper than the preview bound.
    Truncated,
}

pub(crate) fn preview_key(place: Place<'_>) -> Preview {
    preview_at(place, 0)
}

fn preview_at(place: Place<'_>, depth: usize) -> Preview {
    if depth > MAX_PREVIEW_DEPTH {
        return Preview::Truncated;
    }

    let mut preview = Preview::Nil;
    place.inspect(&mut |view| {
        preview = match view {
            View::Pointer(None) => Preview::Nil,
            View::Pointer(Some(target)) => preview_at(target, depth + 1),
            View::Record(fields) => Preview::Composite(
                fields.iter().map(|field| preview_at(field.place(), depth + 1)).collect(),
            ),
            View::Sequence(items) => Preview::Composite(
                items.iter().map(|item| preview_at(*item, depth + 1)).collect(),
            ),
            View::Map(entries) => {
                let mut pairs = entries
                    .iter()
                    .map(|(key, value)| {
                        Preview::Pair(
                            Box::new(preview_at(*key, depth + 1)),
                            Box::new(preview_at(*value, depth + 1)),
                        )
                    })
                    .collect::<Vec<_>>();
                pairs.sort();
                Preview::Composite(pairs)
            }
            View::Bool(value) => Preview::Bool(value),
            View::Str(value) => Preview::Text(value.into_owned()),
            View::Int(value) => Preview::Number(i128::from(value)),
            View::Uint(value) => Preview::Number(i128::from(value)),
            View::Opaque(text) => Preview::Opaque(text),
        };
    });
    preview
}
