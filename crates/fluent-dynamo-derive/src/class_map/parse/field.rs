// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! | Key | Effect |
//! |-----|--------|
//! | (none) | scalar field |
//! | `skip` | not mapped |
//! | `references` | nested object |
//! | `has_many` | collection of nested objects |
//! | `read_only` / `write_only` | access strategy |
//! | `converter = "Path"` | converter built with `Default` |

use syn::{Field, Ident, LitStr, Path, meta::ParseNestedMeta};

/// How a field is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRole {
    /// `map(...)`
    #[default]
    Scalar,
    /// `references(...)`
    Reference,
    /// `has_many(...)`
    Collection,
    /// Not mapped.
    Skip
}

/// Access strategy requested for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Read and write.
    #[default]
    Default,
    /// `#[dynamo(read_only)]`
    ReadOnly,
    /// `#[dynamo(write_only)]`
    WriteOnly
}

/// Field definition with parsed `#[dynamo(...)]` keys.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Mapping role.
    pub role: FieldRole,

    /// Access strategy.
    pub access: Access,

    /// Converter type, constructed with `Default`.
    pub converter: Option<Path>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Unknown keys, conflicting keys, or an unnamed field.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("ClassMap fields must be named").with_span(field)
        })?;

        let mut keys = FieldKeys::default();
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("dynamo")) {
            attr.parse_nested_meta(|meta| keys.parse(&meta))?;
        }
        keys.resolve(ident)
    }

    /// Check if the field ends up in the map.
    pub fn is_mapped(&self) -> bool {
        self.role != FieldRole::Skip
    }
}

/// Keys seen on one field, with the path that set them for error spans.
#[derive(Default)]
struct FieldKeys {
    skip:       Option<Path>,
    references: Option<Path>,
    has_many:   Option<Path>,
    read_only:  Option<Path>,
    write_only: Option<Path>,
    converter:  Option<Path>
}

impl FieldKeys {
    fn parse(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let path = meta.path.clone();
        let slot = if path.is_ident("skip") {
            &mut self.skip
        } else if path.is_ident("references") {
            &mut self.references
        } else if path.is_ident("has_many") {
            &mut self.has_many
        } else if path.is_ident("read_only") {
            &mut self.read_only
        } else if path.is_ident("write_only") {
            &mut self.write_only
        } else if path.is_ident("converter") {
            let lit: LitStr = meta.value()?.parse()?;
            self.converter = Some(lit.parse()?);
            return Ok(());
        } else {
            return Err(meta.error(
                "unknown dynamo field attribute, expected one of: skip, references, has_many, \
                 read_only, write_only, converter"
            ));
        };
        *slot = Some(path);
        Ok(())
    }

    fn resolve(self, ident: Ident) -> darling::Result<FieldDef> {
        if let Some(skip) = &self.skip {
            let combined = self.references.is_some()
                || self.has_many.is_some()
                || self.read_only.is_some()
                || self.write_only.is_some()
                || self.converter.is_some();
            if combined {
                return Err(darling::Error::custom(
                    "`skip` cannot be combined with other dynamo attributes"
                )
                .with_span(skip));
            }
            return Ok(FieldDef {
                ident,
                role: FieldRole::Skip,
                access: Access::Default,
                converter: None
            });
        }

        let role = match (&self.references, &self.has_many) {
            (Some(_), Some(has_many)) => {
                return Err(darling::Error::custom(
                    "`references` and `has_many` cannot be used together"
                )
                .with_span(has_many));
            }
            (Some(_), None) => FieldRole::Reference,
            (None, Some(_)) => FieldRole::Collection,
            (None, None) => FieldRole::Scalar
        };

        let access = match (&self.read_only, &self.write_only) {
            (Some(_), Some(write_only)) => {
                return Err(darling::Error::custom(
                    "`read_only` and `write_only` cannot be used together"
                )
                .with_span(write_only));
            }
            (Some(_), None) => Access::ReadOnly,
            (None, Some(_)) => Access::WriteOnly,
            (None, None) => Access::Default
        };

        if role != FieldRole::Scalar {
            if let Some(converter) = &self.converter {
                return Err(darling::Error::custom(
                    "`converter` is only supported on scalar fields"
                )
                .with_span(converter));
            }
            if let Some(strategy) = self.read_only.as_ref().or(self.write_only.as_ref()) {
                return Err(darling::Error::custom(
                    "access strategies are only supported on scalar fields"
                )
                .with_span(strategy));
            }
        }

        Ok(FieldDef {
            ident,
            role,
            access,
            converter: self.converter
        })
    }
}
