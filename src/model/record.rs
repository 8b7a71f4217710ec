// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Implements [`Inspect`](crate::model::Inspect) for a struct by listing its fields.
///
/// Fields are drawn in the order listed. Prefix a field with `pub` to mark it as externally
/// visible (private fields are hidden when `include_private_fields` is off) and with `#[skip]`
/// to leave it out of every diagram.
///
/// ```
/// use std::rc::Rc;
///
/// struct Node<'a> {
///     id: u32,
///     label: String,
///     next: Option<Rc<Node<'a>>>,
///     parent: Option<&'a Node<'a>>,
///     scratch: Vec<u8>,
/// }
///
/// memviz::record!(Node<'a> {
///     pub id,
///     pub label,
///     next,
///     parent,
///     #[skip] scratch,
/// });
/// ```
#[macro_export]
macro_rules! record {
    (
        $name:ident $(<$($lt:lifetime),+>)? {
            $( $(#[$marker:ident])* $vis:vis $field:ident ),* $(,)?
        }
    ) => {
        impl $(<$($lt),+>)? $crate::model::Inspect for $name $(<$($lt),+>)? {
            fn inspect(&self, f: &mut dyn FnMut($crate::model::View<'_>)) {
                f($crate::model::View::Record(vec![
                    $(
                        $crate::model::Field::new(
                            stringify!($field),
                            $crate::model::Place::stored(&self.$field),
                        )
                        .with_visibility(!stringify!($vis).is_empty())
                        .with_markers(&[$(stringify!($marker)),*]),
                    )*
                ]));
            }
        }
    };
}
