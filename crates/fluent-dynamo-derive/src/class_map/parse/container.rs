// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | none | Table name |
//! | `map` | No | `{Entity}Map` | Generated map type name |
//! | `skip_registration` | No | `false` | Keep out of the linked registry |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Container attributes parsed from `#[dynamo(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(dynamo), supports(struct_named))]
pub struct ContainerAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Struct generics; must be empty.
    pub generics: Generics,

    /// Table name.
    #[darling(default)]
    pub table: Option<String>,

    /// Name of the generated map type.
    ///
    /// ```rust,ignore
    /// #[dynamo(map = "LegacyOrderMap")]
    /// ```
    #[darling(default)]
    pub map: Option<Ident>,

    /// Do not register the map in the linked registry.
    #[darling(default)]
    pub skip_registration: bool
}
