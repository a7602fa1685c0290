// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::ClassMap;

#[derive(ClassMap)]
pub struct Order {
    #[dynamo(references, has_many)]
    lines: Vec<String>
}

fn main() {}
