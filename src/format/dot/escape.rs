// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'\\' | b'"' | b'{' | b'}' | b'<' | b'>' | b'|' | b'\n')
}

/// Makes arbitrary text safe inside a quoted `Mrecord` label.
///
/// Backslashes, quotes, braces, angle brackets and pipes are backslash-escaped; newlines become
/// `\n`. Text without any of them is returned as is.
pub fn escape_label(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' | '"' | '{' | '}' | '<' | '>' | '|' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
