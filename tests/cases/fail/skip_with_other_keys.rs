// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::ClassMap;

#[derive(ClassMap)]
pub struct Order {
    id: String,
    #[dynamo(skip, read_only)]
    scratch: String
}

fn main() {}
