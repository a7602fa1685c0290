// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::{
    AccessStrategy, AttributeValue, ClassMap, ClassMapLoader, ConversionError, PropertyConverter,
};

#[derive(Default)]
pub struct Cents;

impl PropertyConverter for Cents {
    type Value = u64;

    fn to_stored(&self, value: &u64) -> Result<AttributeValue, ConversionError> {
        Ok(AttributeValue::number(value))
    }

    fn from_stored(&self, stored: &AttributeValue) -> Result<u64, ConversionError> {
        let text = stored.as_n().unwrap_or_default();
        text.parse().map_err(|_| ConversionError::Parse {
            value: text.to_string(),
            target: "u64",
            message: "not an integer".to_string(),
        })
    }
}

#[derive(ClassMap)]
#[dynamo(map = "InvoiceMapping")]
pub struct Invoice {
    pub number: String,
    #[dynamo(converter = "Cents", read_only)]
    pub total: u64,
    #[dynamo(write_only)]
    pub note: String,
    #[dynamo(skip)]
    pub cached: Option<String>,
}

fn main() {
    let loaded = ClassMapLoader::new().build(&InvoiceMapping).unwrap();
    let fields = loaded.mapping_configuration_fields();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[1].access_strategy(), AccessStrategy::ReadOnly);
    assert!(fields[1].converter().is_some());
    assert_eq!(fields[2].access_strategy(), AccessStrategy::WriteOnly);
}
