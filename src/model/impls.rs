// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! [`Inspect`] implementations for std types and `serde_json::Value`.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::{self, Rc};
use std::sync::{self, Arc, Mutex, RwLock, TryLockError};

use super::view::{Field, Inspect, Place, View};

macro_rules! inspect_signed {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
                    f(View::Int(i64::from(*self)));
                }
            }
        )*
    };
}

macro_rules! inspect_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
                    f(View::Uint(u64::from(*self)));
                }
            }
        )*
    };
}

macro_rules! inspect_display {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
                    f(View::Opaque(self.to_string()));
                }
            }
        )*
    };
}

inspect_signed!(i8, i16, i32, i64);
inspect_unsigned!(u8, u16, u32, u64);
inspect_display!(f32, f64, i128, u128);

impl Inspect for isize {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        // isize is at most 64 bits on every supported target.
        f(View::Int(*self as i64));
    }
}

impl Inspect for usize {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Uint(*self as u64));
    }
}

impl Inspect for bool {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Bool(*self));
    }
}

impl Inspect for char {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        let mut buf = [0_u8; 4];
        f(View::Str(Cow::Borrowed(self.encode_utf8(&mut buf))));
    }
}

impl Inspect for String {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Str(Cow::Borrowed(self.as_str())));
    }
}

impl Inspect for Cow<'_, str> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Str(Cow::Borrowed(self.as_ref())));
    }
}

impl Inspect for () {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Record(Vec::new()));
    }
}

// Indirections.

impl<T: Inspect> Inspect for &T {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Pointer(Some(Place::stored(*self))));
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Pointer(Some(Place::stored(&**self))));
    }
}

impl<T: Inspect> Inspect for Rc<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Pointer(Some(Place::stored(&**self))));
    }
}

impl<T: Inspect> Inspect for Arc<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Pointer(Some(Place::stored(&**self))));
    }
}

impl<T: Inspect> Inspect for rc::Weak<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        match self.upgrade() {
            Some(strong) => f(View::Pointer(Some(Place::stored(&*strong)))),
            None => f(View::Pointer(None)),
        }
    }
}

impl<T: Inspect> Inspect for sync::Weak<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        match self.upgrade() {
            Some(strong) => f(View::Pointer(Some(Place::stored(&*strong)))),
            None => f(View::Pointer(None)),
        }
    }
}

/// `Some` is transparent; `None` is an empty indirection.
impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        match self {
            Some(value) => value.inspect(f),
            None => f(View::Pointer(None)),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => std::any::type_name::<T>(),
        }
    }
}

// Cells and locks lend their contents for the duration of the visit and draw as the value they
// guard. A guard that is already held reports an opaque view of the same storage.

impl<T: Inspect> Inspect for RefCell<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        match self.try_borrow() {
            Ok(inner) => inner.inspect(f),
            Err(_) => f(View::Opaque("<mutably borrowed>".to_owned())),
        }
    }

    fn type_name(&self) -> &'static str {
        match self.try_borrow() {
            Ok(inner) => inner.type_name(),
            Err(_) => std::any::type_name::<T>(),
        }
    }
}

impl<T: Inspect> Inspect for Mutex<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        match self.try_lock() {
            Ok(inner) => inner.inspect(f),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().inspect(f),
            Err(TryLockError::WouldBlock) => f(View::Opaque("<locked>".to_owned())),
        }
    }

    fn type_name(&self) -> &'static str {
        match self.try_lock() {
            Ok(inner) => inner.type_name(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().type_name(),
            Err(TryLockError::WouldBlock) => std::any::type_name::<T>(),
        }
    }
}

impl<T: Inspect> Inspect for RwLock<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        match self.try_read() {
            Ok(inner) => inner.inspect(f),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().inspect(f),
            Err(TryLockError::WouldBlock) => f(View::Opaque("<locked>".to_owned())),
        }
    }

    fn type_name(&self) -> &'static str {
        match self.try_read() {
            Ok(inner) => inner.type_name(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().type_name(),
            Err(TryLockError::WouldBlock) => std::any::type_name::<T>(),
        }
    }
}

// Sequences.

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Sequence(self.iter().map(Place::stored).collect()));
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Sequence(self.iter().map(Place::stored).collect()));
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Sequence(self.iter().map(Place::stored).collect()));
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Sequence(self.iter().map(Place::stored).collect()));
    }
}

// Associative collections. Entry order is normalized by the mapper.

impl<K: Inspect, V: Inspect, S: BuildHasher> Inspect for HashMap<K, V, S> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Map(self.iter().map(|(k, v)| (Place::stored(k), Place::stored(v))).collect()));
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Map(self.iter().map(|(k, v)| (Place::stored(k), Place::stored(v))).collect()));
    }
}

// Tuples draw as records with positional field names.

impl<A: Inspect, B: Inspect> Inspect for (A, B) {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Record(vec![
            Field::new("0", Place::stored(&self.0)),
            Field::new("1", Place::stored(&self.1)),
        ]));
    }
}

impl<A: Inspect, B: Inspect, C: Inspect> Inspect for (A, B, C) {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        f(View::Record(vec![
            Field::new("0", Place::stored(&self.0)),
            Field::new("1", Place::stored(&self.1)),
            Field::new("2", Place::stored(&self.2)),
        ]));
    }
}

impl Inspect for serde_json::Value {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        use serde_json::Value;

        match self {
            Value::Null => f(View::Pointer(None)),
            Value::Bool(value) => f(View::Bool(*value)),
            Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    f(View::Uint(value))
                } else if let Some(value) = number.as_i64() {
                    f(View::Int(value))
                } else {
                    f(View::Opaque(number.to_string()))
                }
            }
            Value::String(value) => f(View::Str(Cow::Borrowed(value.as_str()))),
            Value::Array(items) => f(View::Sequence(items.iter().map(Place::stored).collect())),
            Value::Object(entries) => f(View::Map(
                entries.iter().map(|(k, v)| (Place::stored(k), Place::stored(v))).collect(),
            )),
        }
    }

    fn type_name(&self) -> &'static str {
        use serde_json::Value;

        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::super::view::{Inspect, Kind, View};

    fn kind_of(value: &dyn Inspect) -> Kind {
        let mut kind = None;
        value.inspect(&mut |view| kind = Some(view.kind()));
        kind.expect("inspect calls back exactly once")
    }

    #[test]
    fn scalars_map_to_scalar_kinds() {
        assert_eq!(kind_of(&true), Kind::Bool);
        assert_eq!(kind_of(&-3_i16), Kind::Int);
        assert_eq!(kind_of(&3_usize), Kind::Uint);
        assert_eq!(kind_of(&"hi".to_owned()), Kind::String);
        assert_eq!(kind_of(&'x'), Kind::String);
        assert_eq!(kind_of(&1.5_f64), Kind::Opaque);
    }

    #[test]
    fn option_is_transparent_and_none_is_an_empty_pointer() {
        assert_eq!(kind_of(&Some(5_u8)), Kind::Uint);

        let none: Option<Box<u8>> = None;
        let mut empty = false;
        Inspect::inspect(&none, &mut |view| empty = matches!(view, View::Pointer(None)));
        assert!(empty);
        assert_eq!(none.type_name(), std::any::type_name::<Box<u8>>());
    }

    #[test]
    fn smart_pointers_point_at_their_allocation() {
        let shared = Rc::new(4_u32);
        let mut target = None;
        shared.inspect(&mut |view| {
            if let View::Pointer(Some(place)) = view {
                target = place.address();
            }
        });
        assert_eq!(target, Some(&*shared as *const u32 as usize));
    }

    #[test]
    fn refcell_draws_as_its_contents() {
        let cell = RefCell::new(vec![1_u8, 2]);
        assert_eq!(kind_of(&cell), Kind::Sequence);
        assert_eq!(cell.type_name(), std::any::type_name::<Vec<u8>>());
        assert_eq!(RefCell::new(Some(1_u8)).type_name(), "u8");

        let _guard = cell.borrow_mut();
        assert_eq!(kind_of(&cell), Kind::Opaque);
    }

    #[test]
    fn json_values_follow_their_variant() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"a": [1, -2, 1.5], "b": null}"#).expect("json");
        assert_eq!(kind_of(&value), Kind::Map);
        assert_eq!(kind_of(&value["a"]), Kind::Sequence);
        assert_eq!(kind_of(&value["a"][0]), Kind::Uint);
        assert_eq!(kind_of(&value["a"][1]), Kind::Int);
        assert_eq!(kind_of(&value["a"][2]), Kind::Opaque);
        assert_eq!(kind_of(&value["b"]), Kind::Indirection);
        assert_eq!(value.type_name(), "object");
    }

    #[test]
    fn btree_maps_expose_every_entry() {
        let map = BTreeMap::from([(1_u8, 'a'), (2, 'b')]);
        let mut len = 0;
        map.inspect(&mut |view| {
            if let View::Map(entries) = view {
                len = entries.len();
            }
        });
        assert_eq!(len, 2);
    }
}
