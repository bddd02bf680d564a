//! Small JSON Schema constructors used by route definitions.
//!
//! These build plain `serde_json::Value` fragments; the document generator
//! embeds them as-is.

use serde_json::{Value, json};

pub fn string() -> Value {
    json!({"type": "string"})
}

pub fn boolean() -> Value {
    json!({"type": "boolean"})
}

pub fn string_enum<const N: usize>(values: [&str; N]) -> Value {
    json!({"type": "string", "enum": values.as_slice()})
}

/// An object with the given properties; `required` lists property names.
pub fn object<const P: usize, const R: usize>(
    properties: [(&str, Value); P],
    required: [&str; R],
) -> Value {
    let props: serde_json::Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    let mut out = json!({"type": "object", "properties": props});
    if R > 0 {
        out["required"] = json!(required.as_slice());
    }
    out
}

/// A free-form object (schemaless bag, e.g. per-view-type options).
pub fn free_object() -> Value {
    json!({"type": "object", "additionalProperties": true})
}
