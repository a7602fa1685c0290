// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime types for fluent DynamoDB mapping configuration.
//!
//! A class map declares how the properties of a plain data type correspond
//! to stored attributes. Running it produces a [`RootEntityConfiguration`]:
//! an ordered tree of [`FieldConfiguration`] nodes plus the table name,
//! ready to be handed to a mapper.
//!
//! # Overview
//!
//! - [`ClassMap`] and [`MapBuilder`] declare fields
//! - [`property!`] builds the property expressions the builder inspects
//! - [`ClassMapLoader`] finds the map for an entity type in a
//!   [`MappingRegistry`]
//! - [`config`] holds the process-wide registry
//! - [`PropertyConverter`] translates values to [`AttributeValue`]s
//!
//! # Usage
//!
//! Most users should use `fluent-dynamo` with `#[derive(ClassMap)]`. Maps
//! can also be written by hand:
//!
//! ```rust
//! use fluent_dynamo_core::{
//!     ClassMap, ClassMapLoader, MapBuilder, MappingRegistry, Result, property
//! };
//!
//! #[allow(dead_code)]
//! struct Account {
//!     email:   String,
//!     profile: Profile
//! }
//!
//! #[allow(dead_code)]
//! struct Profile {
//!     nickname: String
//! }
//!
//! #[derive(Default)]
//! struct AccountMap;
//!
//! impl ClassMap for AccountMap {
//!     type Entity = Account;
//!
//!     fn configure(&self, map: &mut MapBuilder<'_, Account>) -> Result<()> {
//!         map.table_name("accounts")
//!             .map(property!(Account, email))?
//!             .references(property!(Account, profile))?;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct ProfileMap;
//!
//! impl ClassMap for ProfileMap {
//!     type Entity = Profile;
//!
//!     fn configure(&self, map: &mut MapBuilder<'_, Profile>) -> Result<()> {
//!         map.map(property!(Profile, nickname))?;
//!         Ok(())
//!     }
//! }
//!
//! let registry = MappingRegistry::new()
//!     .with::<AccountMap>()
//!     .with::<ProfileMap>();
//! let loaded = ClassMapLoader::with_registry(registry)
//!     .load::<Account>()
//!     .unwrap();
//!
//! assert_eq!(loaded.table_name(), Some("accounts"));
//! let profile = &loaded.mapping_configuration_fields()[1];
//! assert!(profile.is_complex());
//! assert_eq!(profile.children()[0].name(), "nickname");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod class_map;
pub mod config;
mod converter;
mod entity;
mod error;
mod expression;
mod field;
mod key;
mod loader;
pub mod prelude;
mod registry;
mod type_ref;
mod value;

pub use class_map::{ClassMap, LoadedClassMap, MapBuilder, MapOptions};
pub use converter::{ConverterRef, PropertyConverter};
pub use entity::{EntityConfiguration, RootEntityConfiguration};
pub use error::{ConversionError, MappingError, Result};
pub use expression::{ExprBody, PropertyExpr, PropertyInfo};
pub use field::{AccessStrategy, FieldConfiguration, FieldKind};
pub use key::CompoundKey;
pub use loader::ClassMapLoader;
pub use registry::{MappingRegistry, Registration, linked};
pub use type_ref::TypeRef;
pub use value::AttributeValue;

#[doc(hidden)]
pub mod __private {
    pub use crate::registry::register_linked;
}
