// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt;

/// The shape of a value as far as the mapper is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Indirection,
    Record,
    Sequence,
    Map,
    Bool,
    String,
    Int,
    Uint,
    Opaque,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indirection => "indirection",
            Self::Record => "record",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Opaque => "opaque",
        }
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Bool | Self::String | Self::Int | Self::Uint)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime introspection for values that can be drawn.
///
/// Rust has no runtime reflection, so every drawable type describes itself through a [`View`].
/// The view is handed to a continuation rather than returned: values behind guards (`RefCell`,
/// `Mutex`, `Weak`) can only lend their contents for the duration of a call.
///
/// Implementations must be side-effect free and must not mutate the value.
pub trait Inspect {
    fn inspect(&self, f: &mut dyn FnMut(View<'_>));

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// One level of a value, with its children exposed as [`Place`]s.
pub enum View<'a> {
    /// A reference-like wrapper. `None` is an empty indirection (a null pointer, `None`, a dead
    /// `Weak`).
    Pointer(Option<Place<'a>>),
    Record(Vec<Field<'a>>),
    Sequence(Vec<Place<'a>>),
    Map(Vec<(Place<'a>, Place<'a>)>),
    Bool(bool),
    Str(Cow<'a, str>),
    Int(i64),
    Uint(u64),
    /// Anything else, with a best-effort textual rendering.
    Opaque(String),
}

impl View<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Pointer(_) => Kind::Indirection,
            Self::Record(_) => Kind::Record,
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::Map,
            Self::Bool(_) => Kind::Bool,
            Self::Str(_) => Kind::String,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Opaque(_) => Kind::Opaque,
        }
    }
}

/// A handle to a value plus whether it lives in stable storage.
///
/// Addressable places are identified by their address; temporary ones (values materialized while
/// inspecting, e.g. computed fields) get a fresh identity on every visit.
#[derive(Clone, Copy)]
pub struct Place<'a> {
    value: &'a dyn Inspect,
    addressable: bool,
}

impl<'a> Place<'a> {
    pub fn stored<T: Inspect>(value: &'a T) -> Self {
        Self { value, addressable: true }
    }

    pub fn temporary<T: Inspect>(value: &'a T) -> Self {
        Self { value, addressable: false }
    }

    pub fn from_dyn(value: &'a dyn Inspect, addressable: bool) -> Self {
        Self { value, addressable }
    }

    pub fn value(&self) -> &'a dyn Inspect {
        self.value
    }

    pub fn is_addressable(&self) -> bool {
        self.addressable
    }

    /// The storage address, if the place has one.
    pub fn address(&self) -> Option<usize> {
        self.addressable.then(|| self.value as *const dyn Inspect as *const () as usize)
    }

    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    pub fn inspect(&self, f: &mut dyn FnMut(View<'_>)) {
        self.value.inspect(f);
    }
}

impl fmt::Debug for Place<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Place")
            .field("type_name", &self.type_name())
            .field("address", &self.address())
            .finish()
    }
}

/// Marker that excludes a field from every diagram.
pub const SKIP_MARKER: &str = "skip";

/// A named record field.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    place: Place<'a>,
    public: bool,
    skipped: bool,
}

impl<'a> Field<'a> {
    /// A public field; see [`Field::with_visibility`] for private ones.
    pub fn new(name: &'static str, place: Place<'a>) -> Self {
        Self { name, place, public: true, skipped: false }
    }

    pub fn with_visibility(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.skipped = markers.iter().any(|marker| *marker == SKIP_MARKER);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn place(&self) -> Place<'a> {
        self.place
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }
}
