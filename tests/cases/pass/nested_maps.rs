// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::{ClassMap, ClassMapLoader, FieldKind};

#[derive(ClassMap)]
#[dynamo(table = "orders")]
pub struct Order {
    pub id: String,
    #[dynamo(references)]
    pub customer: Customer,
    #[dynamo(has_many)]
    pub lines: Vec<OrderLine>,
}

#[derive(ClassMap)]
pub struct Customer {
    pub email: String,
}

#[derive(ClassMap)]
pub struct OrderLine {
    pub sku: String,
    pub quantity: u32,
}

fn main() {
    let loaded = ClassMapLoader::new().load::<Order>().unwrap();
    let fields = loaded.mapping_configuration_fields();
    assert_eq!(fields[1].kind(), FieldKind::Reference);
    assert!(matches!(fields[2].kind(), FieldKind::Collection { .. }));
    assert_eq!(fields[2].children().len(), 2);
}
