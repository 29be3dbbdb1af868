pub mod table;

use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Print a single result, either bare or as `{"<key>": value}`.
pub fn print_value<T: Serialize + Display>(json: bool, key: &str, value: &T) -> Result<()> {
    if json {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), serde_json::to_value(value)?);
        println!("{}", serde_json::Value::Object(object));
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Print a serializable record as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
