//! Conversion from `serde_json` values
//!
//! Lets data-only package descriptors be written with `serde_json::json!`
//! or loaded from a JSON document. Object members follow the iteration
//! order of `serde_json::Map`.

use super::{Container, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let container = Container::object();
                for (key, member) in map {
                    container.set(key, Value::from(member));
                }
                Value::Object(container)
            }
        }
    }
}
