use crate::extract::Discovered;
use crate::utils::resolve_url;
use serde_json::{Deserializer, Value};
use url::Url;

/// A decoded structured-data document.
///
/// Numbers keep their literal text (serde_json is built with
/// `arbitrary_precision`), so nothing is rounded through `f64`.
pub type MetadataNode = Value;

/// Field names whose string value is taken as a video URL
pub const URL_FIELDS: [&str; 2] = ["contentUrl", "url"];

/// Decodes the first JSON value in a JSON-LD block.
/// Trailing content after that value is ignored.
pub fn decode(text: &str) -> Result<MetadataNode, serde_json::Error> {
    let mut values = Deserializer::from_str(text).into_iter::<Value>();
    match values.next() {
        Some(value) => value,
        // An empty or whitespace-only block: report it the way serde does
        None => serde_json::from_str::<Value>(text),
    }
}

/// Decodes one JSON-LD block and scans it. A block that does not decode is
/// skipped without affecting the rest of the page.
pub fn scan_block(text: &str, base: &Url, discovered: &mut Discovered) {
    match decode(text) {
        Ok(node) => scan(&node, base, discovered),
        Err(e) => ::log::debug!("Skipping undecodable JSON-LD block: {}", e),
    }
}

/// Recursively collects `contentUrl` and `url` string fields from `node`.
///
/// A URL field holding something other than a string is searched like any
/// other field.
pub fn scan(node: &MetadataNode, base: &Url, discovered: &mut Discovered) {
    match node {
        Value::Object(fields) => {
            for (name, value) in fields {
                match value {
                    Value::String(s) if URL_FIELDS.contains(&name.as_str()) => {
                        discovered.insert(resolve_url(base, s));
                    }
                    _ => scan(value, base, discovered),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                scan(item, base, discovered);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}
