//! Compact single-line rendering of mappings.
//!
//! Error messages echo the whole rejected mapping, so the rendering has to
//! fit on one line and show strings unambiguously (quoted and escaped).

use serde_yaml::{Mapping, Value};

/// Quote and escape a string.
pub(crate) fn quoted(s: &str) -> String {
    format!("{s:?}")
}

/// Render an optional root, `null` when absent.
pub(crate) fn optional(root: Option<&str>) -> String {
    root.map_or_else(|| "null".to_string(), quoted)
}

/// Render a list of optional roots as `["a", null]`.
pub(crate) fn root_list(roots: &[Option<String>]) -> String {
    let items: Vec<String> = roots.iter().map(|r| optional(r.as_deref())).collect();
    format!("[{}]", items.join(", "))
}

/// Render an arbitrary YAML mapping.
///
/// String keys are written bare, values use the same quoting as the typed
/// tables.
pub(crate) fn yaml_mapping(mapping: &Mapping) -> String {
    let items: Vec<String> = mapping
        .iter()
        .map(|(key, value)| format!("{}: {}", yaml_key(key), yaml_value(value)))
        .collect();
    format!("{{{}}}", items.join(", "))
}

fn yaml_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => yaml_value(other),
    }
}

fn yaml_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quoted(s),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(yaml_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(mapping) => yaml_mapping(mapping),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, yaml_value(&tagged.value)),
    }
}
