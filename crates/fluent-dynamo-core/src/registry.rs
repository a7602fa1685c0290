// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Registry of known class maps.
//!
//! Two kinds of registry exist:
//!
//! - an explicit [`MappingRegistry`] built by the application and handed to
//!   a [`ClassMapLoader`](crate::ClassMapLoader) or to
//!   [`config::configure`](crate::config::configure)
//! - the linked registry, filled before `main` by `#[derive(ClassMap)]` for
//!   every map compiled into the program

use std::{
    fmt,
    sync::{Arc, LazyLock, PoisonError, RwLock}
};

use crate::{ClassMap, ClassMapLoader, MappingError, Result, RootEntityConfiguration, TypeRef};

type BuildFn = fn(&ClassMapLoader, &[TypeRef]) -> Result<RootEntityConfiguration>;

/// One class map known to a registry.
#[derive(Clone, Copy)]
pub struct Registration {
    entity: TypeRef,
    map:    TypeRef,
    build:  BuildFn
}

impl Registration {
    /// Registration for map `M`, instantiated through [`Default`].
    #[must_use]
    pub fn of<M: ClassMap + Default>() -> Self {
        Self {
            entity: TypeRef::of::<M::Entity>(),
            map:    TypeRef::of::<M>(),
            build:  build_registered::<M>
        }
    }

    /// Entity type the map describes.
    #[must_use]
    pub const fn entity_type(&self) -> TypeRef {
        self.entity
    }

    /// Map type.
    #[must_use]
    pub const fn map_type(&self) -> TypeRef {
        self.map
    }

    pub(crate) fn build(
        &self,
        loader: &ClassMapLoader,
        path: &[TypeRef]
    ) -> Result<RootEntityConfiguration> {
        (self.build)(loader, path)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("entity", &self.entity)
            .field("map", &self.map)
            .finish()
    }
}

fn build_registered<M: ClassMap + Default>(
    loader: &ClassMapLoader,
    path: &[TypeRef]
) -> Result<RootEntityConfiguration> {
    loader
        .build_within(&M::default(), path)
        .map(crate::LoadedClassMap::into_root_configuration)
}

/// Set of class maps the loader searches.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = MappingRegistry::new();
/// registry.register::<FooMap>().register::<BarMap>();
/// let loader = ClassMapLoader::with_registry(registry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
    registrations: Vec<Registration>
}

impl MappingRegistry {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registrations: Vec::new()
        }
    }

    /// Register map `M`. Registering the same map type twice is a no-op.
    pub fn register<M: ClassMap + Default>(&mut self) -> &mut Self {
        self.insert(Registration::of::<M>());
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<M: ClassMap + Default>(mut self) -> Self {
        self.register::<M>();
        self
    }

    fn insert(&mut self, registration: Registration) {
        if self
            .registrations
            .iter()
            .any(|known| known.map == registration.map)
        {
            tracing::trace!(map = registration.map.name(), "class map already registered");
            return;
        }
        self.registrations.push(registration);
    }

    /// Maps registered for `entity`.
    pub fn candidates(&self, entity: TypeRef) -> impl Iterator<Item = &Registration> {
        self.registrations
            .iter()
            .filter(move |registration| registration.entity == entity)
    }

    /// The single map registered for `entity`.
    ///
    /// # Errors
    ///
    /// - [`MappingError::MappingClassNotFound`] if none is registered
    /// - [`MappingError::AmbiguousMappingClass`] if more than one is
    pub fn find(&self, entity: TypeRef) -> Result<&Registration> {
        let mut candidates = self.candidates(entity);
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(MappingError::MappingClassNotFound {
                entity: entity.name()
            }),
            (Some(_), Some(_)) => Err(MappingError::AmbiguousMappingClass {
                entity:     entity.name(),
                candidates: self
                    .candidates(entity)
                    .map(|registration| registration.map.name())
                    .collect()
            })
        }
    }

    /// Check if any map is registered for `T`.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.candidates(TypeRef::of::<T>()).next().is_some()
    }

    /// All registrations in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Registration> {
        self.registrations.iter()
    }

    /// Number of registered maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Check if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingRegistry {
    type Item = &'a Registration;
    type IntoIter = std::slice::Iter<'a, Registration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static LINKED: LazyLock<RwLock<Arc<MappingRegistry>>> = LazyLock::new(RwLock::default);

/// Snapshot of the linked registry.
///
/// Holds every map registered by `#[derive(ClassMap)]` in the running
/// program, unless registration was skipped.
#[must_use]
pub fn linked() -> Arc<MappingRegistry> {
    Arc::clone(&LINKED.read().unwrap_or_else(PoisonError::into_inner))
}

/// Add map `M` to the linked registry.
///
/// Called from the start-up hook emitted by `#[derive(ClassMap)]`.
#[doc(hidden)]
pub fn register_linked<M: ClassMap + Default>() {
    let mut linked = LINKED.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut linked).register::<M>();
}
