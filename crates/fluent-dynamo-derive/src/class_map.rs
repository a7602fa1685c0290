// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! ClassMap derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! class_map.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (MapDef, FieldDef)
//! │
//! └── generate.rs  → {Entity}Map struct, ClassMap impl, registration
//! ```

mod generate;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::MapDef;

/// Main entry point for the ClassMap derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MapDef::from_derive_input(&input) {
        Ok(def) => generate::generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}
