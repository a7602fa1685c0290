// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive macro for fluent-dynamo class maps.
//!
//! Use the `fluent-dynamo` crate, which re-exports [`ClassMap`](macro@ClassMap)
//! together with the runtime types the generated code refers to.
//!
//! # Attribute Quick Reference
//!
//! ## Container `#[dynamo(...)]`
//!
//! ```rust,ignore
//! #[derive(ClassMap)]
//! #[dynamo(
//!     table = "orders",     // Optional: table name
//!     map = "OrderMapping", // Optional: map type name (default: "{Entity}Map")
//!     skip_registration     // Optional: keep out of the linked registry
//! )]
//! pub struct Order { /* ... */ }
//! ```
//!
//! ## Field `#[dynamo(...)]`
//!
//! ```rust,ignore
//! pub struct Order {
//!     pub id: String,                         // Scalar field
//!
//!     #[dynamo(references)]                   // Nested object
//!     pub customer: Customer,
//!
//!     #[dynamo(has_many)]                     // Collection of nested objects
//!     pub lines: Vec<OrderLine>,
//!
//!     #[dynamo(converter = "CentsConverter")] // Value converter
//!     pub total: u64,
//!
//!     #[dynamo(read_only)]                    // Access strategy
//!     pub version: u32,
//!
//!     #[dynamo(skip)]                         // Not mapped
//!     pub cache: Option<String>,
//! }
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod class_map;

use proc_macro::TokenStream;

/// Derive a class map for a struct with named fields.
///
/// # Generated Code
///
/// For an entity named `Order` the macro generates:
///
/// - **`OrderMap`**: a unit struct implementing `ClassMap<Entity = Order>`
/// - a start-up hook adding `OrderMap` to the linked registry, so
///   `ClassMapLoader::new().load::<Order>()` finds it
///
/// Fields are declared in source order. Fields without attributes become
/// scalar fields.
///
/// # Errors
///
/// Compile errors are reported for:
///
/// - enums, unions, tuple and unit structs
/// - generic structs
/// - `references` together with `has_many`
/// - `skip` together with any other field key
/// - `converter`, `read_only` or `write_only` on a nested field
/// - `read_only` together with `write_only`
/// - unknown keys
///
/// # Example
///
/// ```rust,ignore
/// use fluent_dynamo::{ClassMap, ClassMapLoader};
///
/// #[derive(ClassMap)]
/// #[dynamo(table = "orders")]
/// pub struct Order {
///     pub id: String,
///     #[dynamo(references)]
///     pub customer: Customer,
/// }
///
/// #[derive(ClassMap)]
/// pub struct Customer {
///     pub email: String,
/// }
///
/// let loaded = ClassMapLoader::new().load::<Order>()?;
/// assert_eq!(loaded.table_name(), Some("orders"));
/// ```
#[proc_macro_derive(ClassMap, attributes(dynamo))]
pub fn derive_class_map(input: TokenStream) -> TokenStream {
    class_map::derive(input)
}
