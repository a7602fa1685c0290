// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `#[derive(ClassMap)]`.
//!
//! For `Order` this emits:
//!
//! ```rust,ignore
//! #[derive(Debug, Default, Clone, Copy)]
//! pub struct OrderMap;
//!
//! impl ::fluent_dynamo::ClassMap for OrderMap {
//!     type Entity = Order;
//!
//!     fn configure(&self, map: &mut ::fluent_dynamo::MapBuilder<'_, Order>)
//!         -> ::fluent_dynamo::Result<()>
//!     {
//!         map.table_name("orders");
//!         map.map(::fluent_dynamo::property!(Order, id))?;
//!         map.references(::fluent_dynamo::property!(Order, customer))?;
//!         ::core::result::Result::Ok(())
//!     }
//! }
//!
//! #[::fluent_dynamo::__reexports::ctor::ctor(unsafe, anonymous, crate_path = ...)]
//! fn __register_class_map() {
//!     ::fluent_dynamo::__private::register_linked::<OrderMap>();
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::parse::{Access, FieldDef, FieldRole, MapDef};

/// Generate the map type, its `ClassMap` impl and the registration hook.
pub fn generate(def: &MapDef) -> TokenStream {
    let entity = &def.ident;
    let map_ident = &def.map_ident;
    let vis = &def.vis;
    let doc = format!("Class map for [`{entity}`].");

    let table = def.table.as_ref().map(|table| {
        quote! { map.table_name(#table); }
    });
    let statements = def
        .mapped_fields()
        .map(|field| field_statement(entity, field));
    let registration = def.register.then(|| registration(map_ident));

    quote! {
        #[doc = #doc]
        #[derive(Debug, Default, Clone, Copy)]
        #vis struct #map_ident;

        impl ::fluent_dynamo::ClassMap for #map_ident {
            type Entity = #entity;

            fn configure(
                &self,
                map: &mut ::fluent_dynamo::MapBuilder<'_, #entity>
            ) -> ::fluent_dynamo::Result<()> {
                #table
                #(#statements)*
                ::core::result::Result::Ok(())
            }
        }

        #registration
    }
}

fn field_statement(entity: &Ident, field: &FieldDef) -> TokenStream {
    let ident = &field.ident;
    let property = quote! { ::fluent_dynamo::property!(#entity, #ident) };

    match field.role {
        FieldRole::Skip => TokenStream::new(),
        FieldRole::Reference => quote! { map.references(#property)?; },
        FieldRole::Collection => quote! { map.has_many(#property)?; },
        FieldRole::Scalar if field.converter.is_none() && field.access == Access::Default => {
            quote! { map.map(#property)?; }
        }
        FieldRole::Scalar => {
            let converter = field.converter.as_ref().map(|converter| {
                quote! { .converter(<#converter as ::core::default::Default>::default()) }
            });
            let access = match field.access {
                Access::Default => None,
                Access::ReadOnly => Some(quote! { .read_only() }),
                Access::WriteOnly => Some(quote! { .write_only() })
            };
            quote! {
                map.map_with(
                    #property,
                    ::fluent_dynamo::MapOptions::new() #converter #access
                )?;
            }
        }
    }
}

fn registration(map_ident: &Ident) -> TokenStream {
    quote! {
        #[cfg(not(target_arch = "wasm32"))]
        #[::fluent_dynamo::__reexports::ctor::ctor(
            unsafe,
            anonymous,
            crate_path = ::fluent_dynamo::__reexports::ctor
        )]
        fn __register_class_map() {
            ::fluent_dynamo::__private::register_linked::<#map_ident>();
        }
    }
}
