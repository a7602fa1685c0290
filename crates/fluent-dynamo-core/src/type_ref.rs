// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime handle for a Rust type.

use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher}
};

/// Identity and name of a `'static` Rust type.
///
/// Equality and hashing use [`TypeId`] only; the name is kept for error
/// messages and logs.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id:   TypeId,
    name: &'static str
}

impl TypeRef {
    /// Handle for `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id:   TypeId::of::<T>(),
            name: type_name::<T>()
        }
    }

    /// Underlying type id.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment without generic arguments.
    ///
    /// ```rust
    /// use fluent_dynamo_core::TypeRef;
    ///
    /// assert_eq!(TypeRef::of::<Vec<String>>().short_name(), "Vec");
    /// assert_eq!(TypeRef::of::<u64>().short_name(), "u64");
    /// ```
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Check if this handle refers to `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name).finish()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn equality_uses_type_id() {
        assert_eq!(TypeRef::of::<String>(), TypeRef::of::<String>());
        assert_ne!(TypeRef::of::<String>(), TypeRef::of::<&'static str>());
    }

    #[test]
    fn short_name_strips_path_and_generics() {
        assert_eq!(TypeRef::of::<Marker>().short_name(), "Marker");
        assert_eq!(
            TypeRef::of::<std::collections::HashMap<String, u8>>().short_name(),
            "HashMap"
        );
    }

    #[test]
    fn is_checks_identity() {
        let ty = TypeRef::of::<Marker>();
        assert!(ty.is::<Marker>());
        assert!(!ty.is::<u8>());
        assert!(ty.name().ends_with("Marker"));
    }
}
