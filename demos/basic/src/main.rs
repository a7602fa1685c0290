// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Basic fluent-dynamo example.
//!
//! Declares a small order model with derived class maps, loads the root
//! configuration and prints the field tree.
//!
//! ```sh
//! RUST_LOG=fluent_dynamo_core=trace cargo run -p demo-basic
//! ```

use fluent_dynamo::{
    AttributeValue, ClassMap, ClassMapLoader, CompoundKey, ConversionError, FieldConfiguration,
    PropertyConverter
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// Model
// ============================================================================

/// Order stored in the `orders` table.
#[derive(Debug, ClassMap)]
#[dynamo(table = "orders")]
pub struct Order {
    /// Customer id and order timestamp.
    pub key: CompoundKey<String, u64>,

    /// Total amount in cents, stored as a decimal string.
    #[dynamo(converter = "CentsConverter")]
    pub total_cents: u64,

    /// Shipping address.
    #[dynamo(references)]
    pub ship_to: Address,

    /// Ordered items.
    #[dynamo(has_many)]
    pub lines: Vec<OrderLine>,

    /// Optimistic locking version, maintained by the store.
    #[dynamo(read_only)]
    pub version: u32,

    /// Derived on load, never stored.
    #[dynamo(skip)]
    pub summary: Option<String>
}

/// Postal address.
#[derive(Debug, ClassMap)]
pub struct Address {
    pub street: String,
    pub city:   String
}

/// One line of an order.
#[derive(Debug, ClassMap)]
pub struct OrderLine {
    pub sku:      String,
    pub quantity: u32
}

// ============================================================================
// Converter
// ============================================================================

/// Stores cents as `"12.34"`.
#[derive(Debug, Default)]
pub struct CentsConverter;

impl PropertyConverter for CentsConverter {
    type Value = u64;

    fn to_stored(&self, value: &u64) -> Result<AttributeValue, ConversionError> {
        Ok(AttributeValue::N(format!("{}.{:02}", value / 100, value % 100)))
    }

    fn from_stored(&self, stored: &AttributeValue) -> Result<u64, ConversionError> {
        let text = stored.as_n().ok_or(ConversionError::UnexpectedAttribute {
            expected: "N",
            found:    stored.type_descriptor()
        })?;
        let parse_error = |message: &str| ConversionError::Parse {
            value:   text.to_string(),
            target:  "u64",
            message: message.to_string()
        };
        let (units, cents) = text.split_once('.').unwrap_or((text, "0"));
        let units: u64 = units.parse().map_err(|_| parse_error("invalid units"))?;
        let cents: u64 = cents.parse().map_err(|_| parse_error("invalid cents"))?;
        Ok(units * 100 + cents)
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_fields(fields: &[FieldConfiguration], indent: usize) {
    for field in fields {
        let converter = if field.converter().is_some() {
            " [converter]"
        } else {
            ""
        };
        println!(
            "{:indent$}{} : {} ({:?}){converter}",
            "",
            field.name(),
            field.declared_type().short_name(),
            field.access_strategy(),
            indent = indent * 2
        );
        print_fields(field.children(), indent + 1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loaded = ClassMapLoader::new().load::<Order>()?;
    tracing::info!(
        map = loaded.map_type().short_name(),
        fields = loaded.entity_configuration().len(),
        "loaded order mapping"
    );

    println!("table: {}", loaded.table_name().unwrap_or("<none>"));
    print_fields(loaded.mapping_configuration_fields(), 1);

    let total = loaded
        .entity_configuration()
        .field("total_cents")
        .and_then(FieldConfiguration::converter)
        .ok_or("total_cents has no converter")?;
    let stored = total.to_stored_as(&1234_u64)?;
    println!("1234 cents stored as {stored:?}");
    println!("read back: {}", total.from_stored_as::<u64>(&stored)?);

    println!(
        "{}",
        serde_json::to_string_pretty(loaded.root_configuration())?
    );
    Ok(())
}
