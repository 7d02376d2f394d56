//! Helpers shared by the request builders and response mappers

use quick_xml::events::Event;
use quick_xml::Reader;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use serde_json::Value;

use crate::carriers::traits::ApiError;

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>";

/// Drop `null` and blank-string fields, recursively
pub fn compact(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !is_blank(v))
                .map(|(k, v)| (k, compact(v)))
                .collect(),
        ),
        Value::Array(values) => Value::Array(values.into_iter().map(compact).collect()),
        other => other,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Decimal as a JSON number rounded to two places
pub fn decimal_number(value: Decimal) -> Value {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .map(Value::from)
        .unwrap_or(Value::Null)
}

/// Round up to a whole number (carriers bill by whole pounds)
pub fn ceil_whole(value: Decimal) -> i64 {
    value.ceil().to_i64().unwrap_or_default()
}

/// Decimal formatted with a fixed number of places
pub fn fixed(value: Decimal, places: u32) -> String {
    format!(
        "{:.*}",
        places as usize,
        value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Group values by key, keeping first-seen key order
pub fn group_by<K: PartialEq, V>(entries: impl IntoIterator<Item = (K, V)>) -> Vec<(K, Vec<V>)> {
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for (key, value) in entries {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => groups.push((key, vec![value])),
        }
    }
    groups
}

/// Serialize a request struct as an XML document with the given root element
pub fn to_xml<T: Serialize>(root: &str, value: &T) -> Result<String, ApiError> {
    let body = quick_xml::se::to_string_with_root(root, value).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(format!("{}{}", XML_DECLARATION, body))
}

/// Name of the first element in an XML document
pub fn root_element(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_drops_null_and_blank() {
        let value = json!({
            "City": "Durham",
            "Address2": null,
            "Phone": "  ",
            "Items": [{"Class": null, "Weight": 10}],
            "Flags": []
        });

        assert_eq!(
            compact(value),
            json!({"City": "Durham", "Items": [{"Weight": 10}], "Flags": []})
        );
    }

    #[test]
    fn test_fixed_and_ceil() {
        assert_eq!(fixed(Decimal::new(12345, 3), 2), "12.35");
        assert_eq!(fixed(Decimal::from(3), 1), "3.0");
        assert_eq!(ceil_whole(Decimal::new(1201, 2)), 13);
    }

    #[test]
    fn test_group_by_keeps_order() {
        let groups = group_by(vec![("b", 1), ("a", 2), ("b", 3)]);
        assert_eq!(groups, vec![("b", vec![1, 3]), ("a", vec![2])]);
    }

    #[test]
    fn test_root_element() {
        let xml = "<?xml version=\"1.0\"?><Error><Number>1</Number></Error>";
        assert_eq!(root_element(xml).as_deref(), Some("Error"));
        assert_eq!(root_element("not xml at all"), None);
    }
}
