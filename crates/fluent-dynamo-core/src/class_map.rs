// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative class maps.
//!
//! A class map describes how one entity type is stored. Implement
//! [`ClassMap`] on a unit struct (or derive it on the entity) and declare
//! the fields inside [`ClassMap::configure`]:
//!
//! ```rust,ignore
//! use fluent_dynamo_core::{ClassMap, MapBuilder, Result, property};
//!
//! #[derive(Default)]
//! pub struct FooMap;
//!
//! impl ClassMap for FooMap {
//!     type Entity = Foo;
//!
//!     fn configure(&self, map: &mut MapBuilder<'_, Foo>) -> Result<()> {
//!         map.table_name("foos");
//!         map.map(property!(Foo, name))?
//!             .references(property!(Foo, bar))?
//!             .has_many(property!(Foo, bars))?;
//!         Ok(())
//!     }
//! }
//! ```
//!
//! # Construction Flow
//!
//! ```text
//! ClassMapLoader::load::<Foo>()
//! │
//! ├── registry lookup ──────────► FooMap::default()
//! │
//! └── FooMap::configure(&mut MapBuilder<Foo>)
//!     ├── map(name)           → scalar field
//!     ├── references(bar)     → load::<Bar>() → children
//!     └── has_many(bars)      → load::<Bar>() → children
//! ```
//!
//! Every nested call loads and configures the nested map again; nothing
//! is cached between calls.

use std::{fmt, marker::PhantomData};

use crate::{
    AccessStrategy, ClassMapLoader, ConverterRef, EntityConfiguration, FieldConfiguration,
    MappingError, PropertyConverter, PropertyExpr, Result, RootEntityConfiguration, TypeRef
};

/// Mapping declaration for one entity type.
///
/// The loader instantiates registered maps through [`Default`], so a map
/// must be cheap to construct and free of side effects beyond what
/// `configure` declares.
pub trait ClassMap: 'static {
    /// Entity type this map describes.
    type Entity: 'static;

    /// Declare the entity's fields.
    ///
    /// # Errors
    ///
    /// Propagate any [`MappingError`] returned by the builder.
    fn configure(&self, map: &mut MapBuilder<'_, Self::Entity>) -> Result<()>;
}

/// Options for a scalar field.
pub struct MapOptions<T> {
    converter:       Option<ConverterRef>,
    access_strategy: AccessStrategy,
    _value:          PhantomData<fn() -> T>
}

impl<T: 'static> MapOptions<T> {
    /// No converter, default access.
    #[must_use]
    pub fn new() -> Self {
        Self {
            converter:       None,
            access_strategy: AccessStrategy::Default,
            _value:          PhantomData
        }
    }

    /// Use `converter` for this field's values.
    #[must_use]
    pub fn converter<C>(mut self, converter: C) -> Self
    where
        C: PropertyConverter<Value = T>
    {
        self.converter = Some(ConverterRef::new(converter));
        self
    }

    /// Set the access strategy.
    #[must_use]
    pub fn access(mut self, access_strategy: AccessStrategy) -> Self {
        self.access_strategy = access_strategy;
        self
    }

    /// Shorthand for [`AccessStrategy::ReadOnly`].
    #[must_use]
    pub fn read_only(self) -> Self {
        self.access(AccessStrategy::ReadOnly)
    }

    /// Shorthand for [`AccessStrategy::WriteOnly`].
    #[must_use]
    pub fn write_only(self) -> Self {
        self.access(AccessStrategy::WriteOnly)
    }
}

impl<T: 'static> Default for MapOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the declarations of one [`ClassMap::configure`] call.
pub struct MapBuilder<'a, E> {
    loader:     &'a ClassMapLoader,
    path:       &'a [TypeRef],
    table_name: Option<String>,
    entity:     EntityConfiguration,
    _entity:    PhantomData<fn(&E)>
}

impl<'a, E: 'static> MapBuilder<'a, E> {
    pub(crate) fn new(loader: &'a ClassMapLoader, path: &'a [TypeRef]) -> Self {
        Self {
            loader,
            path,
            table_name: None,
            entity: EntityConfiguration::new(),
            _entity: PhantomData
        }
    }

    /// Record the table the entity is stored in.
    pub fn table_name(&mut self, table_name: impl Into<String>) -> &mut Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Map a scalar property.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidMappingExpression`] if `expr` is not a member
    /// access. No field is added in that case.
    pub fn map<T: 'static>(&mut self, expr: PropertyExpr<E, T>) -> Result<&mut Self> {
        self.map_with(expr, MapOptions::new())
    }

    /// Map a scalar property with a converter and/or access strategy.
    ///
    /// # Errors
    ///
    /// Same as [`map`](Self::map), plus
    /// [`MappingError::ConverterTypeMismatch`] when the converter handles a
    /// type other than the member's own (a converter on a cast expression).
    /// No field is added in either case.
    pub fn map_with<T: 'static>(
        &mut self,
        expr: PropertyExpr<E, T>,
        options: MapOptions<T>
    ) -> Result<&mut Self> {
        let property = expr.resolve()?;
        let declared_type = property.declared_type();
        if let Some(converter) = &options.converter
            && converter.value_type() != declared_type
        {
            return Err(MappingError::ConverterTypeMismatch {
                entity:    std::any::type_name::<E>(),
                property:  property.into_name(),
                declared:  declared_type.name(),
                converter: converter.value_type().name()
            });
        }
        let mut field = FieldConfiguration::scalar(property.into_name(), declared_type)
            .with_access_strategy(options.access_strategy);
        if let Some(converter) = options.converter {
            field = field.with_converter(converter);
        }
        Ok(self.push(field))
    }

    /// Map a nested object using the map registered for `T`.
    ///
    /// # Errors
    ///
    /// - [`MappingError::InvalidMappingExpression`] for a bad expression
    /// - [`MappingError::MappingClassNotFound`] /
    ///   [`MappingError::AmbiguousMappingClass`] from the lookup
    /// - [`MappingError::EmptyClassMap`] if the nested map has no fields
    /// - [`MappingError::RecursiveMapping`] if `T` is already being built
    pub fn references<T: 'static>(&mut self, expr: PropertyExpr<E, T>) -> Result<&mut Self> {
        let property = expr.resolve()?;
        let children = self.nested_fields::<T>()?;
        let declared_type = property.declared_type();
        Ok(self.push(FieldConfiguration::reference(
            property.into_name(),
            declared_type,
            children
        )))
    }

    /// Map a collection of nested objects using the map registered for the
    /// element type.
    ///
    /// # Errors
    ///
    /// Same as [`references`](Self::references), for the element type.
    pub fn has_many<C>(&mut self, expr: PropertyExpr<E, C>) -> Result<&mut Self>
    where
        C: IntoIterator + 'static,
        C::Item: 'static
    {
        let property = expr.resolve()?;
        let children = self.nested_fields::<C::Item>()?;
        let declared_type = property.declared_type();
        Ok(self.push(FieldConfiguration::collection(
            property.into_name(),
            declared_type,
            TypeRef::of::<C::Item>(),
            children
        )))
    }

    /// Fields declared so far.
    #[must_use]
    pub fn fields(&self) -> &[FieldConfiguration] {
        self.entity.fields()
    }

    fn nested_fields<T: 'static>(&self) -> Result<Vec<FieldConfiguration>> {
        let nested = self.loader.load_within::<T>(self.path)?;
        if nested.entity_configuration().is_empty() {
            return Err(MappingError::EmptyClassMap {
                entity: std::any::type_name::<T>(),
                map:    nested.map_type().name()
            });
        }
        let (_, entity) = nested.into_root_configuration().into_parts();
        Ok(entity.into_fields())
    }

    fn push(&mut self, field: FieldConfiguration) -> &mut Self {
        tracing::trace!(
            entity = std::any::type_name::<E>(),
            field = field.name(),
            complex = field.is_complex(),
            "mapped field"
        );
        self.entity.add_field_configuration(field);
        self
    }

    pub(crate) fn finish(self) -> RootEntityConfiguration {
        RootEntityConfiguration::new(self.table_name, self.entity)
    }
}

/// Configuration produced by running one class map.
pub struct LoadedClassMap<E> {
    map_type: TypeRef,
    root:     RootEntityConfiguration,
    _entity:  PhantomData<fn() -> E>
}

impl<E> LoadedClassMap<E> {
    pub(crate) fn new(map_type: TypeRef, root: RootEntityConfiguration) -> Self {
        Self {
            map_type,
            root,
            _entity: PhantomData
        }
    }

    /// Type of the map that produced this configuration.
    #[must_use]
    pub const fn map_type(&self) -> TypeRef {
        self.map_type
    }

    /// Check if the configuration came from map `M`.
    #[must_use]
    pub fn is<M: ClassMap>(&self) -> bool {
        self.map_type.is::<M>()
    }

    /// Table name declared by the map.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.root.table_name()
    }

    /// Top-level fields in declaration order.
    #[must_use]
    pub fn mapping_configuration_fields(&self) -> &[FieldConfiguration] {
        self.root.entity_configuration().fields()
    }

    /// Entity configuration.
    #[must_use]
    pub fn entity_configuration(&self) -> &EntityConfiguration {
        self.root.entity_configuration()
    }

    /// Root configuration handed to a mapper.
    #[must_use]
    pub fn root_configuration(&self) -> &RootEntityConfiguration {
        &self.root
    }

    /// Take the root configuration.
    #[must_use]
    pub fn into_root_configuration(self) -> RootEntityConfiguration {
        self.root
    }
}

impl<E> Clone for LoadedClassMap<E> {
    fn clone(&self) -> Self {
        Self::new(self.map_type, self.root.clone())
    }
}

impl<E> fmt::Debug for LoadedClassMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedClassMap")
            .field("entity", &std::any::type_name::<E>())
            .field("map", &self.map_type)
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{AttributeValue, ConversionError, FieldKind, MappingRegistry, property};

    #[allow(dead_code)]
    struct Foo {
        name:   String,
        amount: u32,
        bar:    Bar,
        bars:   Vec<Bar>
    }

    #[allow(dead_code)]
    struct Bar {
        bar_name: String
    }

    #[derive(Default)]
    struct BarMap;

    impl ClassMap for BarMap {
        type Entity = Bar;

        fn configure(&self, map: &mut MapBuilder<'_, Bar>) -> Result<()> {
            map.map(property!(Bar, bar_name))?;
            Ok(())
        }
    }

    struct Cents;

    impl PropertyConverter for Cents {
        type Value = u32;

        fn to_stored(&self, value: &u32) -> Result<AttributeValue, ConversionError> {
            Ok(AttributeValue::number(value))
        }

        fn from_stored(&self, stored: &AttributeValue) -> Result<u32, ConversionError> {
            let text = stored.as_n().unwrap_or_default();
            text.parse().map_err(|_| ConversionError::Parse {
                value:   text.to_string(),
                target:  "u32",
                message: "not a number".to_string()
            })
        }
    }

    fn loader() -> ClassMapLoader {
        let mut registry = MappingRegistry::new();
        registry.register::<BarMap>();
        ClassMapLoader::with_registry(Arc::new(registry))
    }

    struct Inline<F>(F);

    fn inline<F>(configure: F) -> Inline<F>
    where
        F: Fn(&mut MapBuilder<'_, Foo>) -> Result<()> + 'static
    {
        Inline(configure)
    }

    impl<F> ClassMap for Inline<F>
    where
        F: Fn(&mut MapBuilder<'_, Foo>) -> Result<()> + 'static
    {
        type Entity = Foo;

        fn configure(&self, map: &mut MapBuilder<'_, Foo>) -> Result<()> {
            (self.0)(map)
        }
    }

    #[test]
    fn map_adds_scalar_field() {
        let loaded = loader()
            .build(&inline(|map| {
                map.table_name("foos").map(property!(Foo, name))?;
                Ok(())
            }))
            .unwrap();

        assert_eq!(loaded.table_name(), Some("foos"));
        let fields = loaded.mapping_configuration_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name(), "name");
        assert!(!fields[0].is_complex());
        assert!(fields[0].children().is_empty());
        assert!(fields[0].declared_type().is::<String>());
    }

    #[test]
    fn map_with_options_keeps_converter_and_access() {
        let loaded = loader()
            .build(&inline(|map| {
                map.map_with(
                    property!(Foo, amount),
                    MapOptions::new().converter(Cents).read_only()
                )?;
                Ok(())
            }))
            .unwrap();

        let field = &loaded.mapping_configuration_fields()[0];
        assert_eq!(field.access_strategy(), AccessStrategy::ReadOnly);
        let converter = field.converter().unwrap();
        assert!(converter.value_type().is::<u32>());
        assert_eq!(
            converter.to_stored(&250_u32).unwrap(),
            AttributeValue::N("250".to_string())
        );
    }

    struct Widen;

    impl PropertyConverter for Widen {
        type Value = i64;

        fn to_stored(&self, value: &i64) -> Result<AttributeValue, ConversionError> {
            Ok(AttributeValue::number(value))
        }

        fn from_stored(&self, _stored: &AttributeValue) -> Result<i64, ConversionError> {
            Ok(0)
        }
    }

    #[test]
    fn converter_on_cast_is_rejected() {
        let result = loader().build(&inline(|map| {
            let err = map
                .map_with(
                    property!(Foo, amount as i64),
                    MapOptions::new().converter(Widen)
                )
                .map(|_| ())
                .unwrap_err();
            assert!(map.fields().is_empty());
            Err(err)
        }));

        match result.unwrap_err() {
            MappingError::ConverterTypeMismatch {
                property,
                declared,
                converter,
                ..
            } => {
                assert_eq!(property, "amount");
                assert_eq!(declared, "u32");
                assert_eq!(converter, "i64");
            }
            other => panic!("unexpected error: {other:?}")
        }
    }

    #[test]
    fn cast_without_converter_keeps_member_type() {
        let loaded = loader()
            .build(&inline(|map| {
                map.map_with(property!(Foo, amount as i64), MapOptions::new().write_only())?;
                Ok(())
            }))
            .unwrap();

        let field = &loaded.mapping_configuration_fields()[0];
        assert!(field.declared_type().is::<u32>());
        assert!(field.converter().is_none());
        assert_eq!(field.access_strategy(), AccessStrategy::WriteOnly);
    }

    #[test]
    fn invalid_expression_adds_no_field() {
        let result = loader().build(&inline(|map| {
            map.map(property!(Foo, name))?;
            let err = map
                .map(property!(Foo, |f| f.name.len() * 2))
                .map(|_| ())
                .unwrap_err();
            assert!(matches!(err, MappingError::InvalidMappingExpression { .. }));
            assert_eq!(map.fields().len(), 1);
            Err(err)
        }));

        assert!(matches!(
            result,
            Err(MappingError::InvalidMappingExpression { .. })
        ));
    }

    #[test]
    fn references_and_has_many_attach_element_tree() {
        let loaded = loader()
            .build(&inline(|map| {
                map.references(property!(Foo, bar))?
                    .has_many(property!(Foo, bars))?;
                Ok(())
            }))
            .unwrap();

        let fields = loaded.mapping_configuration_fields();
        assert_eq!(fields[0].kind(), FieldKind::Reference);
        assert_eq!(fields[0].children()[0].name(), "bar_name");

        assert!(fields[1].is_complex());
        assert!(fields[1].declared_type().is::<Vec<Bar>>());
        assert_eq!(fields[1].element_type(), Some(TypeRef::of::<Bar>()));
        assert_eq!(fields[1].children(), fields[0].children());
    }

    #[test]
    fn missing_nested_map_fails() {
        let result = ClassMapLoader::with_registry(Arc::new(MappingRegistry::new())).build(
            &inline(|map| {
                map.references(property!(Foo, bar))?;
                Ok(())
            })
        );
        let err = result.unwrap_err();
        assert!(matches!(err, MappingError::MappingClassNotFound { entity } if entity.ends_with("Bar")));
    }

    #[test]
    fn options_default_is_plain() {
        let options = MapOptions::<String>::default();
        assert!(options.converter.is_none());
        assert_eq!(options.access_strategy, AccessStrategy::Default);
        assert_eq!(
            MapOptions::<String>::new().write_only().access_strategy,
            AccessStrategy::WriteOnly
        );
    }
}
