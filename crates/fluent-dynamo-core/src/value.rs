// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Store-native attribute values.
//!
//! Mirrors the DynamoDB attribute value model closely enough for
//! [`PropertyConverter`](crate::PropertyConverter) implementations to name
//! their output. Marshaling these values onto the wire is the client SDK's
//! job.

use std::collections::BTreeMap;

/// A single stored attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttributeValue {
    /// String.
    S(String),
    /// Number, kept in its textual form.
    N(String),
    /// Binary.
    B(Vec<u8>),
    /// Boolean.
    Bool(bool),
    /// Explicit null.
    Null,
    /// Ordered list of values.
    L(Vec<AttributeValue>),
    /// Nested document.
    M(BTreeMap<String, AttributeValue>),
    /// String set.
    Ss(Vec<String>),
    /// Number set.
    Ns(Vec<String>),
    /// Binary set.
    Bs(Vec<Vec<u8>>)
}

impl AttributeValue {
    /// DynamoDB type descriptor (`S`, `N`, `BOOL`, ...).
    #[must_use]
    pub const fn type_descriptor(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::B(_) => "B",
            Self::Bool(_) => "BOOL",
            Self::Null => "NULL",
            Self::L(_) => "L",
            Self::M(_) => "M",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS"
        }
    }

    /// Build a number attribute from anything displayable.
    pub fn number(value: impl ToString) -> Self {
        Self::N(value.to_string())
    }

    /// String payload, if this is an `S` attribute.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(value) => Some(value),
            _ => None
        }
    }

    /// Number payload, if this is an `N` attribute.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(value) => Some(value),
            _ => None
        }
    }

    /// Check if this is the explicit null attribute.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::S(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::S(value.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors() {
        assert_eq!(AttributeValue::from("x").type_descriptor(), "S");
        assert_eq!(AttributeValue::number(42).type_descriptor(), "N");
        assert_eq!(AttributeValue::Bool(true).type_descriptor(), "BOOL");
        assert_eq!(AttributeValue::Null.type_descriptor(), "NULL");
        assert_eq!(AttributeValue::M(BTreeMap::new()).type_descriptor(), "M");
    }

    #[test]
    fn accessors() {
        let n = AttributeValue::number(7_i64);
        assert_eq!(n.as_n(), Some("7"));
        assert_eq!(n.as_s(), None);
        assert!(AttributeValue::Null.is_null());
    }
}
