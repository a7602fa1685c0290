// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::ClassMap;

#[derive(ClassMap)]
pub struct Order {
    #[dynamo(references, read_only)]
    customer: String
}

fn main() {}
