// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level mapping configuration.

use crate::FieldConfiguration;

/// Ordered field configurations of one entity type.
///
/// Order is declaration order and is kept through to the mapper, so
/// reconstruction and serialization downstream are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityConfiguration {
    fields: Vec<FieldConfiguration>
}

impl EntityConfiguration {
    /// Empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new()
        }
    }

    /// Append a field.
    pub fn add_field_configuration(&mut self, field: FieldConfiguration) {
        self.fields.push(field);
    }

    /// All fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldConfiguration] {
        &self.fields
    }

    /// Field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldConfiguration> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Iterate over fields.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldConfiguration> {
        self.fields.iter()
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Take the fields out.
    #[must_use]
    pub fn into_fields(self) -> Vec<FieldConfiguration> {
        self.fields
    }
}

impl From<Vec<FieldConfiguration>> for EntityConfiguration {
    fn from(fields: Vec<FieldConfiguration>) -> Self {
        Self {
            fields
        }
    }
}

impl<'a> IntoIterator for &'a EntityConfiguration {
    type Item = &'a FieldConfiguration;
    type IntoIter = std::slice::Iter<'a, FieldConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Entity configuration plus entity-level metadata.
///
/// This is what a mapper receives for a top-level entity.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootEntityConfiguration {
    table_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "fields"))]
    entity:     EntityConfiguration
}

impl RootEntityConfiguration {
    /// Combine a table name and an entity configuration.
    pub fn new(table_name: Option<String>, entity: EntityConfiguration) -> Self {
        Self {
            table_name,
            entity
        }
    }

    /// Table name, if the map declared one.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Field configuration of the entity.
    #[must_use]
    pub fn entity_configuration(&self) -> &EntityConfiguration {
        &self.entity
    }

    /// Split into table name and entity configuration.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, EntityConfiguration) {
        (self.table_name, self.entity)
    }
}
