// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::{ClassMap, ClassMapLoader};

#[derive(Debug, Clone, ClassMap)]
#[dynamo(table = "users")]
pub struct User {
    pub id: String,
    pub email: String,
}

fn main() {
    let loaded = ClassMapLoader::new().load::<User>().unwrap();
    assert!(loaded.is::<UserMap>());
    assert_eq!(loaded.table_name(), Some("users"));
    assert_eq!(loaded.mapping_configuration_fields().len(), 2);
}
