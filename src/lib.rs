// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # Quick Navigation
//!
//! - **Derive Macro**: [`ClassMap`](macro@ClassMap) generates `{Entity}Map`
//! - **Manual maps**: [`ClassMap`](trait@ClassMap), [`MapBuilder`] and
//!   [`property!`]
//! - **Lookup**: [`ClassMapLoader`], [`MappingRegistry`] and [`config`]
//! - **Result**: [`RootEntityConfiguration`] and [`FieldConfiguration`]

// Re-export all core types
pub use fluent_dynamo_core::*;
// Re-export derive macro
pub use fluent_dynamo_derive::ClassMap;

/// Crates the generated code refers to.
///
/// Users do not need to add them to their own `Cargo.toml`.
#[doc(hidden)]
pub mod __reexports {
    pub use ctor;
}
