//! Demonstrates a settings store built from a map of `AnyValue`s.
//!
//! Run with: cargo run --example settings

use sovran_anyvalue::{AnyValue, ValueError};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
enum LogLevel {
    Info,
    Debug,
}

struct Settings {
    values: BTreeMap<String, AnyValue>,
}

impl Settings {
    fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    fn set<T: sovran_anyvalue::Value>(&mut self, key: &str, value: T) {
        self.values
            .entry(key.to_string())
            .or_default()
            .set(value);
    }

    fn get<T: sovran_anyvalue::Value>(&self, key: &str) -> Result<Option<T>, ValueError> {
        self.values.get(key).map(AnyValue::get::<T>).transpose()
    }
}

fn main() -> Result<(), ValueError> {
    let mut settings = Settings::new();

    settings.set("app.name", "demo");
    settings.set("app.workers", 4usize);
    settings.set("log.level", LogLevel::Info);

    println!("Name: {:?}", settings.get::<String>("app.name")?);
    println!("Workers: {:?}", settings.get::<usize>("app.workers")?);

    // Same type: updated in place
    settings.set("log.level", LogLevel::Debug);
    println!("Level: {:?}", settings.get::<LogLevel>("log.level")?);

    // Missing keys are not errors
    println!("Timeout: {:?}", settings.get::<u64>("net.timeout")?);

    // Reading with the wrong type is
    if let Err(e) = settings.get::<u32>("app.workers") {
        println!("Error: {}", e);
    }

    for (key, value) in &settings.values {
        println!("  {} = <{}>", key, value.type_name());
    }

    Ok(())
}
