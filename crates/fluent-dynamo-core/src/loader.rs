// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class map lookup and construction.

use std::sync::Arc;

use crate::{
    ClassMap, LoadedClassMap, MapBuilder, MappingError, MappingRegistry, Result, TypeRef, config,
    registry
};

/// Finds and runs class maps.
///
/// The registry is chosen in this order:
///
/// 1. the registry passed to [`with_registry`](Self::with_registry)
/// 2. the process-wide registry set by [`config::configure`]
/// 3. the linked registry filled by `#[derive(ClassMap)]`
///
/// The choice is made once per [`load`](Self::load) or
/// [`build`](Self::build) call; nested maps are looked up in the same
/// registry.
#[derive(Debug, Clone, Default)]
pub struct ClassMapLoader {
    registry: Option<Arc<MappingRegistry>>
}

impl ClassMapLoader {
    /// Loader using the process-wide or linked registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registry: None
        }
    }

    /// Loader bound to `registry`.
    #[must_use]
    pub fn with_registry(registry: impl Into<Arc<MappingRegistry>>) -> Self {
        Self {
            registry: Some(registry.into())
        }
    }

    /// Registry this loader searches right now.
    #[must_use]
    pub fn registry(&self) -> Arc<MappingRegistry> {
        self.registry
            .clone()
            .or_else(config::configured)
            .unwrap_or_else(registry::linked)
    }

    /// Find the map registered for `T` and run it.
    ///
    /// # Errors
    ///
    /// - [`MappingError::MappingClassNotFound`] if no map is registered for
    ///   `T`
    /// - [`MappingError::AmbiguousMappingClass`] if several are
    /// - any error raised while configuring the map or its nested maps
    pub fn load<T: 'static>(&self) -> Result<LoadedClassMap<T>> {
        self.pinned().load_within::<T>(&[])
    }

    /// Run a specific map instance.
    ///
    /// Nested maps are still looked up in the registry.
    ///
    /// # Errors
    ///
    /// Any error raised while configuring the map or its nested maps.
    pub fn build<M: ClassMap>(&self, map: &M) -> Result<LoadedClassMap<M::Entity>> {
        self.pinned().build_within(map, &[])
    }

    fn pinned(&self) -> Self {
        Self {
            registry: Some(self.registry())
        }
    }

    pub(crate) fn load_within<T: 'static>(&self, path: &[TypeRef]) -> Result<LoadedClassMap<T>> {
        let entity = TypeRef::of::<T>();
        if path.contains(&entity) {
            return Err(MappingError::RecursiveMapping {
                entity: entity.name(),
                path:   render_path(path, entity)
            });
        }

        let registry = self.registry();
        let registration = registry.find(entity)?;
        tracing::debug!(
            entity = entity.name(),
            map = registration.map_type().name(),
            depth = path.len(),
            "loading class map"
        );
        let root = registration.build(self, path)?;
        Ok(LoadedClassMap::new(registration.map_type(), root))
    }

    pub(crate) fn build_within<M: ClassMap>(
        &self,
        map: &M,
        path: &[TypeRef]
    ) -> Result<LoadedClassMap<M::Entity>> {
        let mut path = path.to_vec();
        path.push(TypeRef::of::<M::Entity>());

        let mut builder = MapBuilder::new(self, &path);
        map.configure(&mut builder)?;
        let root = builder.finish();

        tracing::debug!(
            map = std::any::type_name::<M>(),
            fields = root.entity_configuration().len(),
            table = root.table_name().unwrap_or_default(),
            "built class map"
        );
        Ok(LoadedClassMap::new(TypeRef::of::<M>(), root))
    }
}

fn render_path(path: &[TypeRef], repeated: TypeRef) -> String {
    path.iter()
        .chain(std::iter::once(&repeated))
        .map(TypeRef::short_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}
