// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property expressions.
//!
//! A [`PropertyExpr`] is a small expression tree pointing at one property of
//! an entity. The [`property!`](crate::property) macro builds it so the
//! compiler checks the field name and any cast, while the builder still
//! inspects the tree's shape at configuration time:
//!
//! | Macro form                              | Body               | Accepted |
//! |-----------------------------------------|--------------------|----------|
//! | `property!(Foo, name)`                  | `Member`           | yes      |
//! | `property!(Foo, count as i64)`          | `Convert(Member)`  | yes      |
//! | `property!(Foo, \|f\| f.name)`           | `Member`           | yes      |
//! | `property!(Foo, \|f\| f.count as i64)`   | `Convert(Member)`  | yes      |
//! | `property!(Foo, \|f\| f.a + f.b)`        | `Computed`         | no       |
//!
//! Rejected shapes fail with
//! [`MappingError::InvalidMappingExpression`](crate::MappingError).

use std::{fmt, marker::PhantomData};

use crate::{MappingError, Result, TypeRef};

/// Shape of a property expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprBody {
    /// Direct member access: `entity.name`.
    Member {
        /// Member name.
        name: String,
        /// Member type.
        ty:   TypeRef
    },

    /// Conversion wrapping another expression: `entity.count as i64`.
    Convert {
        /// Converted expression.
        operand: Box<ExprBody>,
        /// Conversion target.
        target:  TypeRef
    },

    /// Any other expression, kept as source text.
    Computed {
        /// Source text of the expression.
        source: String
    }
}

impl fmt::Display for ExprBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member {
                name, ..
            } => f.write_str(name),
            Self::Convert {
                operand,
                target
            } => write!(f, "{} as {}", operand, target.short_name()),
            Self::Computed {
                source
            } => f.write_str(source)
        }
    }
}

/// Name and type extracted from a property expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    name:          String,
    declared_type: TypeRef
}

impl PropertyInfo {
    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared property type (the member's own type, before any cast).
    #[must_use]
    pub const fn declared_type(&self) -> TypeRef {
        self.declared_type
    }

    /// Take the name out.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Typed expression selecting a property of `E` that evaluates to `T`.
pub struct PropertyExpr<E, T> {
    body:    ExprBody,
    _marker: PhantomData<fn(&E) -> T>
}

impl<E: 'static, T: 'static> PropertyExpr<E, T> {
    /// Direct member access.
    ///
    /// The accessor is only there for the compiler: it proves the member
    /// exists and fixes `T`.
    pub fn member<F>(name: &str, _accessor: F) -> Self
    where
        F: for<'a> Fn(&'a E) -> &'a T
    {
        Self::from_body(ExprBody::Member {
            name: name.to_string(),
            ty:   TypeRef::of::<T>()
        })
    }

    /// Member access of type `S` converted to `T`.
    pub fn converted<S, M, C>(name: &str, _member: M, _cast: C) -> Self
    where
        S: 'static,
        M: for<'a> Fn(&'a E) -> &'a S,
        C: Fn(&E) -> T
    {
        Self::from_body(ExprBody::Convert {
            operand: Box::new(ExprBody::Member {
                name: name.to_string(),
                ty:   TypeRef::of::<S>()
            }),
            target:  TypeRef::of::<T>()
        })
    }

    /// Arbitrary expression. Never resolves to a property.
    pub fn computed<F>(source: impl Into<String>, _expression: F) -> Self
    where
        F: Fn(&E) -> T
    {
        Self::from_body(ExprBody::Computed {
            source: source.into()
        })
    }

    /// Wrap a prebuilt body.
    #[must_use]
    pub fn from_body(body: ExprBody) -> Self {
        Self {
            body,
            _marker: PhantomData
        }
    }

    /// Expression body.
    #[must_use]
    pub fn body(&self) -> &ExprBody {
        &self.body
    }

    /// Extract the property this expression points at.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidMappingExpression`] unless the body is a
    /// member access, optionally wrapped in a single conversion.
    pub fn resolve(&self) -> Result<PropertyInfo> {
        let member = match &self.body {
            ExprBody::Convert {
                operand, ..
            } => &**operand,
            body => body
        };

        match member {
            ExprBody::Member {
                name,
                ty
            } if !name.is_empty() => Ok(PropertyInfo {
                name:          name.clone(),
                declared_type: *ty
            }),
            _ => Err(MappingError::InvalidMappingExpression {
                entity:     std::any::type_name::<E>(),
                expression: self.body.to_string()
            })
        }
    }
}

impl<E, T> Clone for PropertyExpr<E, T> {
    fn clone(&self) -> Self {
        Self {
            body:    self.body.clone(),
            _marker: PhantomData
        }
    }
}

impl<E, T> fmt::Debug for PropertyExpr<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyExpr")
            .field("entity", &std::any::type_name::<E>())
            .field("body", &self.body)
            .finish()
    }
}

/// Build a [`PropertyExpr`] for a field of an entity.
///
/// ```rust
/// use fluent_dynamo_core::{ExprBody, property};
///
/// struct Order {
///     id:    String,
///     lines: u32
/// }
///
/// let id = property!(Order, id);
/// assert_eq!(id.resolve().unwrap().name(), "id");
///
/// let widened = property!(Order, lines as u64);
/// assert!(matches!(widened.body(), ExprBody::Convert { .. }));
/// assert!(widened.resolve().unwrap().declared_type().is::<u32>());
///
/// let computed = property!(Order, |o| o.lines + 1);
/// assert!(computed.resolve().is_err());
/// ```
#[macro_export]
macro_rules! property {
    ($entity:ty, $field:ident as $target:ty) => {
        $crate::PropertyExpr::<$entity, $target>::converted(
            ::core::stringify!($field),
            |entity: &$entity| &entity.$field,
            |entity: &$entity| entity.$field as $target
        )
    };
    ($entity:ty, |$arg:ident| $recv:ident . $field:ident as $target:ty) => {
        $crate::PropertyExpr::<$entity, $target>::converted(
            ::core::stringify!($field),
            |$arg: &$entity| &$recv.$field,
            |$arg: &$entity| $recv.$field as $target
        )
    };
    ($entity:ty, |$arg:ident| $recv:ident . $field:ident) => {
        $crate::PropertyExpr::<$entity, _>::member(
            ::core::stringify!($field),
            |$arg: &$entity| &$recv.$field
        )
    };
    ($entity:ty, |$arg:ident| $body:expr) => {
        $crate::PropertyExpr::<$entity, _>::computed(
            ::core::stringify!($body),
            |$arg: &$entity| $body
        )
    };
    ($entity:ty, $field:ident) => {
        $crate::PropertyExpr::<$entity, _>::member(
            ::core::stringify!($field),
            |entity: &$entity| &entity.$field
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Foo {
        name:  String,
        count: u32,
        bar:   Bar
    }

    #[allow(dead_code)]
    struct Bar {
        label: String,
        size:  u32
    }

    #[test]
    fn member_resolves_name_and_type() {
        let info = property!(Foo, name).resolve().unwrap();
        assert_eq!(info.name(), "name");
        assert!(info.declared_type().is::<String>());
    }

    #[test]
    fn closure_member_access_resolves_like_field_name() {
        let expr = property!(Foo, |f| f.count);
        assert_eq!(expr.body(), property!(Foo, count).body());
        let info = expr.resolve().unwrap();
        assert_eq!(info.name(), "count");
        assert!(info.declared_type().is::<u32>());
    }

    #[test]
    fn closure_member_cast_is_a_conversion() {
        let expr = property!(Foo, |f| f.count as i64);
        assert!(matches!(expr.body(), ExprBody::Convert { .. }));
        assert_eq!(expr.body().to_string(), "count as i64");
        assert!(expr.resolve().unwrap().declared_type().is::<u32>());
    }

    #[test]
    fn closure_nested_member_is_rejected() {
        let expr = property!(Foo, |f| f.bar.size);
        assert!(matches!(expr.body(), ExprBody::Computed { .. }));
        assert!(expr.resolve().is_err());
    }

    #[test]
    fn conversion_wrapping_member_is_accepted() {
        let expr = property!(Foo, count as i64);
        let info = expr.resolve().unwrap();
        assert_eq!(info.name(), "count");
        assert!(info.declared_type().is::<u32>());
        assert_eq!(expr.body().to_string(), "count as i64");
    }

    #[test]
    fn computed_is_rejected() {
        let expr = property!(Foo, |f| f.bar.label.len() + 1);
        let err = expr.resolve().unwrap_err();
        match err {
            MappingError::InvalidMappingExpression {
                entity,
                expression
            } => {
                assert!(entity.ends_with("Foo"));
                assert!(expression.contains("bar"));
            }
            other => panic!("unexpected error: {other:?}")
        }
    }

    #[test]
    fn conversion_of_computed_is_rejected() {
        let expr = PropertyExpr::<Foo, i64>::from_body(ExprBody::Convert {
            operand: Box::new(ExprBody::Computed {
                source: "f.count * 2".to_string()
            }),
            target:  TypeRef::of::<i64>()
        });
        assert!(expr.resolve().is_err());
    }

    #[test]
    fn nested_conversion_is_rejected() {
        let inner = ExprBody::Convert {
            operand: Box::new(ExprBody::Member {
                name: "count".to_string(),
                ty:   TypeRef::of::<u32>()
            }),
            target:  TypeRef::of::<u64>()
        };
        let expr = PropertyExpr::<Foo, i128>::from_body(ExprBody::Convert {
            operand: Box::new(inner),
            target:  TypeRef::of::<i128>()
        });
        assert!(expr.resolve().is_err());
    }

    #[test]
    fn empty_member_name_is_rejected() {
        let expr = PropertyExpr::<Foo, String>::from_body(ExprBody::Member {
            name: String::new(),
            ty:   TypeRef::of::<String>()
        });
        assert!(expr.resolve().is_err());
    }
}
