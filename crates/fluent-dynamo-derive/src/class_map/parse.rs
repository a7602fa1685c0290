// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the ClassMap derive macro.
//!
//! Container attributes are parsed with [`darling`]; field attributes are
//! marker-style keys and are parsed manually with `parse_nested_meta`.
//!
//! # Data Structures
//!
//! ```text
//! MapDef
//! ├── ident: Ident          (entity name, e.g. "Order")
//! ├── vis: Visibility       (copied to the generated map)
//! ├── table: Option<String> (#[dynamo(table = "...")])
//! ├── map_ident: Ident      (generated map, default "{Entity}Map")
//! ├── register: bool        (false with skip_registration)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── role: FieldRole        (Scalar, Reference, Collection, Skip)
//!         ├── access: Access         (Default, ReadOnly, WriteOnly)
//!         └── converter: Option<Path>
//! ```

mod container;
mod field;

use darling::FromDeriveInput;
use quote::format_ident;
use syn::{DeriveInput, Ident, Visibility};

pub use self::field::{Access, FieldDef, FieldRole};
use self::container::ContainerAttrs;

/// Parsed `#[derive(ClassMap)]` input.
#[derive(Debug)]
pub struct MapDef {
    /// Entity identifier.
    pub ident: Ident,

    /// Entity visibility, reused for the generated map.
    pub vis: Visibility,

    /// Table name, if declared.
    pub table: Option<String>,

    /// Identifier of the generated map type.
    pub map_ident: Ident,

    /// Whether to emit the linked-registry hook.
    pub register: bool,

    /// Fields in declaration order, skipped ones included.
    pub fields: Vec<FieldDef>
}

impl MapDef {
    /// Parse the derive input.
    ///
    /// # Errors
    ///
    /// - applied to anything but a struct with named fields
    /// - applied to a generic struct
    /// - unknown or conflicting `#[dynamo(...)]` keys
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named,
                _ => {
                    return Err(darling::Error::custom("ClassMap requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("ClassMap can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let attrs = ContainerAttrs::from_derive_input(input)?;

        if let Some(param) = attrs.generics.params.first() {
            return Err(
                darling::Error::custom("ClassMap cannot be derived for generic structs")
                    .with_span(param)
            );
        }

        let fields = named
            .named
            .iter()
            .map(FieldDef::from_field)
            .collect::<darling::Result<Vec<_>>>()?;

        let map_ident = attrs
            .map
            .unwrap_or_else(|| format_ident!("{}Map", attrs.ident));

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table: attrs.table,
            map_ident,
            register: !attrs.skip_registration,
            fields
        })
    }

    /// Fields that end up in the map.
    pub fn mapped_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.is_mapped())
    }
}
