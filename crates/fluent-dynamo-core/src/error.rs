// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for mapping construction and value conversion.
//!
//! Every [`MappingError`] is raised while a class map is being configured,
//! before any store operation runs. They describe authoring mistakes and
//! are returned to the caller unchanged.

use thiserror::Error;

/// Result alias used throughout the mapping layer.
pub type Result<T, E = MappingError> = std::result::Result<T, E>;

/// Failure while building a mapping configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The property expression is not a member access (optionally wrapped
    /// in a conversion).
    #[error("invalid mapping expression `{expression}` on `{entity}`: not a member access")]
    InvalidMappingExpression {
        /// Entity the expression was written against.
        entity:     &'static str,
        /// Rendered expression body.
        expression: String
    },

    /// No class map is registered for the entity type.
    #[error("no class map found for `{entity}`")]
    MappingClassNotFound {
        /// Entity that was looked up.
        entity: &'static str
    },

    /// More than one class map is registered for the entity type.
    #[error("ambiguous class map for `{entity}`: {}", .candidates.join(", "))]
    AmbiguousMappingClass {
        /// Entity that was looked up.
        entity:     &'static str,
        /// Every matching map type.
        candidates: Vec<&'static str>
    },

    /// A converter handles a different type than the property it is
    /// attached to. Happens when a converter is combined with a cast.
    #[error(
        "converter for `{converter}` cannot be attached to `{property}` of type `{declared}` on `{entity}`"
    )]
    ConverterTypeMismatch {
        /// Entity owning the property.
        entity:    &'static str,
        /// Property name.
        property:  String,
        /// Declared property type.
        declared:  &'static str,
        /// Value type of the converter.
        converter: &'static str
    },

    /// A nested map declares no fields, so it cannot back a complex field.
    #[error("class map `{map}` for `{entity}` declares no fields")]
    EmptyClassMap {
        /// Nested entity type.
        entity: &'static str,
        /// Map type that produced no fields.
        map:    &'static str
    },

    /// The nested type graph loops back onto a type already being built.
    #[error("recursive class map for `{entity}`: {path}")]
    RecursiveMapping {
        /// Entity that closes the cycle.
        entity: &'static str,
        /// Chain of entity types, outermost first.
        path:   String
    }
}

impl MappingError {
    /// Entity type the error refers to.
    #[must_use]
    pub fn entity(&self) -> &'static str {
        match self {
            Self::InvalidMappingExpression {
                entity, ..
            }
            | Self::MappingClassNotFound {
                entity
            }
            | Self::AmbiguousMappingClass {
                entity, ..
            }
            | Self::ConverterTypeMismatch {
                entity, ..
            }
            | Self::EmptyClassMap {
                entity, ..
            }
            | Self::RecursiveMapping {
                entity, ..
            } => *entity
        }
    }

    /// Check if the error comes from class map discovery rather than from
    /// the map's own declarations.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::MappingClassNotFound { .. } | Self::AmbiguousMappingClass { .. }
        )
    }
}

/// Failure while converting a property value to or from its stored form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The stored attribute has a different type descriptor.
    #[error("expected `{expected}` attribute, found `{found}`")]
    UnexpectedAttribute {
        /// Expected descriptor (`S`, `N`, ...).
        expected: &'static str,
        /// Actual descriptor.
        found:    &'static str
    },

    /// The property value handed to a converter has the wrong Rust type.
    #[error("converter for `{expected}` received `{found}`")]
    TypeMismatch {
        /// Value type the converter handles.
        expected: &'static str,
        /// Type of the value actually passed.
        found:    &'static str
    },

    /// The stored text could not be parsed into the property type.
    #[error("cannot parse `{value}` as `{target}`: {message}")]
    Parse {
        /// Stored text.
        value:   String,
        /// Target type name.
        target:  &'static str,
        /// Parser message.
        message: String
    }
}
