// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level mapping configuration.
//!
//! A [`FieldConfiguration`] is one node of the mapping tree:
//!
//! ```text
//! FieldConfiguration
//! ├── name: String              (property name, e.g. "bar")
//! ├── declared_type: TypeRef    (property type)
//! ├── kind: FieldKind           (Scalar | Reference | Collection { element })
//! ├── children: Vec<FieldConfiguration>   (non-empty iff complex)
//! ├── converter: Option<ConverterRef>     (scalar fields only)
//! └── access_strategy: AccessStrategy
//! ```

use crate::{ConverterRef, TypeRef};

/// Which direction a field takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessStrategy {
    /// Read from and written to the store.
    #[default]
    Default,

    /// Read from the store, never written back.
    ReadOnly,

    /// Written to the store, ignored when reading.
    WriteOnly
}

impl AccessStrategy {
    /// Check if the mapper populates this field when reading.
    #[must_use]
    pub const fn is_readable(&self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    /// Check if the mapper stores this field when writing.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        !matches!(self, Self::ReadOnly)
    }
}

/// Shape of the value behind a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain value stored as a single attribute.
    Scalar,

    /// Nested object stored as a map attribute.
    Reference,

    /// Homogeneous collection of nested objects.
    Collection {
        /// Element type whose map produced the children.
        element: TypeRef
    }
}

impl FieldKind {
    /// Check if the kind carries a nested field tree.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

/// Mapping of one property.
///
/// Only scalar fields can be built outside the crate. Complex fields come
/// from [`MapBuilder`](crate::MapBuilder), which always attaches the nested
/// map's fields:
///
/// ```rust,compile_fail
/// use fluent_dynamo_core::{FieldConfiguration, TypeRef};
///
/// let hollow = FieldConfiguration::reference("bar", TypeRef::of::<u8>(), Vec::new());
/// ```
#[derive(Debug, Clone)]
pub struct FieldConfiguration {
    name:            String,
    declared_type:   TypeRef,
    kind:            FieldKind,
    children:        Vec<FieldConfiguration>,
    converter:       Option<ConverterRef>,
    access_strategy: AccessStrategy
}

impl FieldConfiguration {
    /// Leaf field with default access and no converter.
    pub fn scalar(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            kind: FieldKind::Scalar,
            children: Vec::new(),
            converter: None,
            access_strategy: AccessStrategy::Default
        }
    }

    /// Nested object field.
    ///
    /// `children` must not be empty; the builder rejects empty nested maps
    /// before reaching this point.
    pub(crate) fn reference(
        name: impl Into<String>,
        declared_type: TypeRef,
        children: Vec<FieldConfiguration>
    ) -> Self {
        Self::complex(name, declared_type, FieldKind::Reference, children)
    }

    /// Collection field whose children describe one `element`.
    pub(crate) fn collection(
        name: impl Into<String>,
        declared_type: TypeRef,
        element: TypeRef,
        children: Vec<FieldConfiguration>
    ) -> Self {
        Self::complex(
            name,
            declared_type,
            FieldKind::Collection {
                element
            },
            children
        )
    }

    fn complex(
        name: impl Into<String>,
        declared_type: TypeRef,
        kind: FieldKind,
        children: Vec<FieldConfiguration>
    ) -> Self {
        debug_assert!(!children.is_empty(), "complex field without children");
        Self {
            name: name.into(),
            declared_type,
            kind,
            children,
            converter: None,
            access_strategy: AccessStrategy::Default
        }
    }

    /// Attach a converter.
    #[must_use]
    pub fn with_converter(mut self, converter: ConverterRef) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Set the access strategy.
    #[must_use]
    pub fn with_access_strategy(mut self, access_strategy: AccessStrategy) -> Self {
        self.access_strategy = access_strategy;
        self
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared property type.
    #[must_use]
    pub const fn declared_type(&self) -> TypeRef {
        self.declared_type
    }

    /// Field kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Check if the field is backed by a nested object or collection.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        self.kind.is_complex()
    }

    /// Element type for collection fields.
    #[must_use]
    pub const fn element_type(&self) -> Option<TypeRef> {
        match self.kind {
            FieldKind::Collection {
                element
            } => Some(element),
            _ => None
        }
    }

    /// Nested fields, in declaration order. Empty for scalars.
    #[must_use]
    pub fn children(&self) -> &[FieldConfiguration] {
        &self.children
    }

    /// Nested field by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&FieldConfiguration> {
        self.children.iter().find(|f| f.name == name)
    }

    /// Converter, if one was attached.
    #[must_use]
    pub fn converter(&self) -> Option<&ConverterRef> {
        self.converter.as_ref()
    }

    /// Access strategy.
    #[must_use]
    pub const fn access_strategy(&self) -> AccessStrategy {
        self.access_strategy
    }

    /// Depth of the subtree rooted here; `1` for a scalar.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

impl PartialEq for FieldConfiguration {
    fn eq(&self, other: &Self) -> bool {
        let same_converter = match (&self.converter, &other.converter) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false
        };
        self.name == other.name
            && self.declared_type == other.declared_type
            && self.kind == other.kind
            && self.access_strategy == other.access_strategy
            && same_converter
            && self.children == other.children
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldConfiguration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldConfiguration", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.declared_type)?;
        state.serialize_field("complex", &self.is_complex())?;
        state.serialize_field(
            "converter",
            &self.converter.as_ref().map(|c| c.converter_type())
        )?;
        state.serialize_field("access", &self.access_strategy)?;
        state.serialize_field("fields", &self.children)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bar;
    struct Other;

    fn bar_tree() -> FieldConfiguration {
        FieldConfiguration::reference(
            "bar",
            TypeRef::of::<Bar>(),
            vec![
                FieldConfiguration::scalar("bar_name", TypeRef::of::<String>()),
                FieldConfiguration::reference(
                    "other",
                    TypeRef::of::<Other>(),
                    vec![FieldConfiguration::scalar(
                        "other_name",
                        TypeRef::of::<String>()
                    )],
                ),
            ]
        )
    }

    #[test]
    fn scalar_is_leaf() {
        let field = FieldConfiguration::scalar("name", TypeRef::of::<String>());
        assert!(!field.is_complex());
        assert!(field.children().is_empty());
        assert_eq!(field.kind(), FieldKind::Scalar);
        assert_eq!(field.access_strategy(), AccessStrategy::Default);
        assert_eq!(field.depth(), 1);
    }

    #[test]
    fn reference_keeps_children_in_order() {
        let field = bar_tree();
        assert!(field.is_complex());
        let names: Vec<_> = field.children().iter().map(FieldConfiguration::name).collect();
        assert_eq!(names, ["bar_name", "other"]);
        assert_eq!(field.depth(), 3);
        assert!(field.child("other").is_some_and(FieldConfiguration::is_complex));
        assert!(field.child("missing").is_none());
    }

    #[test]
    fn collection_records_element() {
        let field = FieldConfiguration::collection(
            "bars",
            TypeRef::of::<Vec<Bar>>(),
            TypeRef::of::<Bar>(),
            vec![FieldConfiguration::scalar("bar_name", TypeRef::of::<String>())]
        );
        assert!(field.is_complex());
        assert_eq!(field.element_type(), Some(TypeRef::of::<Bar>()));
        assert!(field.declared_type().is::<Vec<Bar>>());
    }

    #[test]
    fn access_strategy_directions() {
        assert!(AccessStrategy::Default.is_readable());
        assert!(AccessStrategy::Default.is_writable());
        assert!(AccessStrategy::ReadOnly.is_readable());
        assert!(!AccessStrategy::ReadOnly.is_writable());
        assert!(!AccessStrategy::WriteOnly.is_readable());
        assert!(AccessStrategy::WriteOnly.is_writable());
    }

    #[test]
    fn equality_compares_whole_tree() {
        assert_eq!(bar_tree(), bar_tree());
        let read_only = bar_tree().with_access_strategy(AccessStrategy::ReadOnly);
        assert_ne!(bar_tree(), read_only);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_nested_tree() {
        let json = serde_json::to_value(bar_tree()).unwrap();
        assert_eq!(json["name"], "bar");
        assert_eq!(json["complex"], true);
        assert_eq!(json["fields"][1]["fields"][0]["name"], "other_name");
        assert_eq!(json["fields"][0]["access"], "default");
    }
}
