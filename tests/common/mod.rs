//! Common test utilities for installkit integration tests

#![allow(dead_code)]

use installkit::InstallConfig;
use installkit::value::{Container, Value};

/// Default configuration
pub fn config() -> InstallConfig {
    InstallConfig::default()
}

/// A fresh, empty destination
pub fn lib() -> Container {
    Container::object()
}

/// A function that always returns `name`
pub fn returns(name: &str) -> Value {
    let name = name.to_string();
    Value::function(move |_| Value::String(name.clone()))
}

/// Read a member by dotted path
pub fn read(container: &Container, path: &str) -> Option<Value> {
    Value::Object(container.clone()).lookup(path, ".")
}

/// Call the function at a dotted path and return its string result
pub fn call_at(container: &Container, path: &str) -> String {
    let result = read(container, path)
        .unwrap_or_else(|| panic!("nothing installed at {path}"))
        .call(&[])
        .unwrap_or_else(|| panic!("member at {path} is not callable"));
    result
        .as_str()
        .unwrap_or_else(|| panic!("member at {path} did not return a string"))
        .to_string()
}
