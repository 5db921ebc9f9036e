//! Query string encoding
//!
//! Nested values are flattened the way conventional query-string builders
//! do it: `key[0]=..` for arrays, `key[sub]=..` for objects. `null` values
//! are skipped and booleans become `1`/`0`. `*` is percent-encoded as well,
//! so links match the gateway's reference encoding byte for byte.

use enot_core::Params;
use serde_json::Value;
use url::form_urlencoded;

/// Encode `params` as an `application/x-www-form-urlencoded` query string
pub fn build_query(params: &Params) -> String {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params.iter() {
        flatten(key.clone(), value, &mut pairs);
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    // Every other reserved byte is already escaped at this point.
    serializer.finish().replace('*', "%2A")
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((prefix, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(format!("{}[{}]", prefix, i), item, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(format!("{}[{}]", prefix, key), item, out);
            }
        }
    }
}
