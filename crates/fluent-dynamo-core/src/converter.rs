// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-field value converters.
//!
//! A [`PropertyConverter`] turns one property value into an
//! [`AttributeValue`] and back. The mapper that consumes the configuration
//! tree calls it for leaf fields carrying a converter; this crate only
//! stores it.
//!
//! Converters are typed. [`ConverterRef`] erases the value type so fields
//! of different types can live in the same tree, and checks the type again
//! with [`Any`] at call time.

use std::{any::Any, fmt, sync::Arc};

use crate::{AttributeValue, ConversionError, TypeRef};

/// Conversion between a property value and its stored representation.
///
/// # Example
///
/// ```rust
/// use fluent_dynamo_core::{AttributeValue, ConversionError, PropertyConverter};
///
/// #[derive(Default)]
/// struct CentsConverter;
///
/// impl PropertyConverter for CentsConverter {
///     type Value = u64;
///
///     fn to_stored(&self, value: &u64) -> Result<AttributeValue, ConversionError> {
///         Ok(AttributeValue::S(format!("{}.{:02}", value / 100, value % 100)))
///     }
///
///     fn from_stored(&self, stored: &AttributeValue) -> Result<u64, ConversionError> {
///         let text = stored.as_s().ok_or(ConversionError::UnexpectedAttribute {
///             expected: "S",
///             found:    stored.type_descriptor()
///         })?;
///         let cents: String = text.chars().filter(|c| *c != '.').collect();
///         cents.parse().map_err(|e: std::num::ParseIntError| ConversionError::Parse {
///             value:   text.to_string(),
///             target:  "u64",
///             message: e.to_string()
///         })
///     }
/// }
///
/// let stored = CentsConverter.to_stored(&1050).unwrap();
/// assert_eq!(stored, AttributeValue::S("10.50".into()));
/// assert_eq!(CentsConverter.from_stored(&stored).unwrap(), 1050);
/// ```
pub trait PropertyConverter: Send + Sync + 'static {
    /// Property type handled by this converter.
    type Value: 'static;

    /// Convert a property value into its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value has no stored form.
    fn to_stored(&self, value: &Self::Value) -> Result<AttributeValue, ConversionError>;

    /// Rebuild a property value from its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the attribute cannot be read back.
    fn from_stored(&self, stored: &AttributeValue) -> Result<Self::Value, ConversionError>;
}

trait ErasedConverter: Send + Sync {
    fn converter_type(&self) -> TypeRef;
    fn value_type(&self) -> TypeRef;
    fn to_stored_any(
        &self,
        value: &dyn Any,
        found: &'static str
    ) -> Result<AttributeValue, ConversionError>;
    fn from_stored_any(&self, stored: &AttributeValue) -> Result<Box<dyn Any>, ConversionError>;
}

impl<C: PropertyConverter> ErasedConverter for C {
    fn converter_type(&self) -> TypeRef {
        TypeRef::of::<C>()
    }

    fn value_type(&self) -> TypeRef {
        TypeRef::of::<C::Value>()
    }

    fn to_stored_any(
        &self,
        value: &dyn Any,
        found: &'static str
    ) -> Result<AttributeValue, ConversionError> {
        let value = value
            .downcast_ref::<C::Value>()
            .ok_or(ConversionError::TypeMismatch {
                expected: std::any::type_name::<C::Value>(),
                found
            })?;
        self.to_stored(value)
    }

    fn from_stored_any(&self, stored: &AttributeValue) -> Result<Box<dyn Any>, ConversionError> {
        let value = self.from_stored(stored)?;
        Ok(Box::new(value))
    }
}

/// Shared, type-erased handle to a [`PropertyConverter`].
#[derive(Clone)]
pub struct ConverterRef(Arc<dyn ErasedConverter>);

impl ConverterRef {
    /// Wrap a converter.
    pub fn new<C: PropertyConverter>(converter: C) -> Self {
        Self(Arc::new(converter))
    }

    /// Type of the wrapped converter.
    #[must_use]
    pub fn converter_type(&self) -> TypeRef {
        self.0.converter_type()
    }

    /// Property type the converter handles.
    #[must_use]
    pub fn value_type(&self) -> TypeRef {
        self.0.value_type()
    }

    /// Convert a property value given as [`Any`].
    ///
    /// Prefer [`to_stored_as`](Self::to_stored_as) when the type is known:
    /// a `&dyn Any` carries no type name to report on mismatch.
    ///
    /// # Errors
    ///
    /// [`ConversionError::TypeMismatch`] if `value` is not the converter's
    /// value type, otherwise whatever the converter reports.
    pub fn to_stored(&self, value: &dyn Any) -> Result<AttributeValue, ConversionError> {
        self.0.to_stored_any(value, "an unnamed type")
    }

    /// Convert a property value of type `T`.
    ///
    /// # Errors
    ///
    /// [`ConversionError::TypeMismatch`] naming `T` if it is not the
    /// converter's value type, otherwise whatever the converter reports.
    pub fn to_stored_as<T: 'static>(&self, value: &T) -> Result<AttributeValue, ConversionError> {
        self.0.to_stored_any(value, std::any::type_name::<T>())
    }

    /// Rebuild a property value as a boxed [`Any`].
    ///
    /// # Errors
    ///
    /// Whatever the converter reports.
    pub fn from_stored(&self, stored: &AttributeValue) -> Result<Box<dyn Any>, ConversionError> {
        self.0.from_stored_any(stored)
    }

    /// Rebuild a property value as `T`.
    ///
    /// # Errors
    ///
    /// [`ConversionError::TypeMismatch`] if `T` is not the converter's value
    /// type, otherwise whatever the converter reports.
    pub fn from_stored_as<T: 'static>(&self, stored: &AttributeValue) -> Result<T, ConversionError> {
        let value = self.from_stored(stored)?;
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ConversionError::TypeMismatch {
                expected: self.value_type().name(),
                found:    std::any::type_name::<T>()
            })
    }

    /// Check if both handles point at the same converter instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ConverterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRef")
            .field("converter", &self.converter_type())
            .field("value", &self.value_type())
            .finish()
    }
}
