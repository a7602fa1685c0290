// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide mapping configuration.
//!
//! A [`ClassMapLoader`](crate::ClassMapLoader) without an explicit registry
//! searches the registry configured here, and falls back to the linked
//! registry when none is configured.
//!
//! ```rust,ignore
//! use fluent_dynamo::{MappingRegistry, config};
//!
//! config::configure(Some(MappingRegistry::new().with::<FooMap>()));
//! // ...
//! config::configure(None);
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::MappingRegistry;

static CONFIGURED: RwLock<Option<Arc<MappingRegistry>>> = RwLock::new(None);

/// Set or clear the process-wide registry.
///
/// Passing `None` restores the fallback to the linked registry. Loads that
/// already started keep the registry they started with.
pub fn configure(registry: Option<MappingRegistry>) {
    let mut slot = CONFIGURED.write().unwrap_or_else(PoisonError::into_inner);
    match &registry {
        Some(registry) => {
            if slot.is_some() {
                tracing::warn!("replacing configured mapping registry");
            }
            tracing::debug!(maps = registry.len(), "configured mapping registry");
        }
        None => tracing::debug!("cleared mapping registry, using linked class maps")
    }
    *slot = registry.map(Arc::new);
}

/// Currently configured process-wide registry.
#[must_use]
pub fn configured() -> Option<Arc<MappingRegistry>> {
    CONFIGURED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
