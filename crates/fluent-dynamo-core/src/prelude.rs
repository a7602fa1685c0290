// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fluent_dynamo_core::prelude::*;
//! ```

pub use crate::{
    AccessStrategy, AttributeValue, ClassMap, ClassMapLoader, CompoundKey, ConversionError,
    EntityConfiguration, FieldConfiguration, LoadedClassMap, MapBuilder, MapOptions,
    MappingError, MappingRegistry, PropertyConverter, RootEntityConfiguration, property
};
