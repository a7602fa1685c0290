// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fluent_dynamo::{
    ClassMap, ClassMapLoader, CompoundKey, MapBuilder, MapOptions, MappingRegistry, Result,
    property,
};

pub struct Reading {
    pub key: CompoundKey<String, u64>,
    pub celsius: f32,
}

#[derive(Default)]
pub struct ReadingMap;

impl ClassMap for ReadingMap {
    type Entity = Reading;

    fn configure(&self, map: &mut MapBuilder<'_, Reading>) -> Result<()> {
        map.table_name("readings")
            .map(property!(Reading, key))?
            .map_with(property!(Reading, celsius as f64), MapOptions::new().read_only())?;
        Ok(())
    }
}

fn main() {
    let loader = ClassMapLoader::with_registry(MappingRegistry::new().with::<ReadingMap>());
    let loaded = loader.load::<Reading>().unwrap();
    assert_eq!(loaded.mapping_configuration_fields()[1].name(), "celsius");
    assert!(loaded.mapping_configuration_fields()[1].declared_type().is::<f32>());
}
