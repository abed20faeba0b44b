//! Field projection over upstream JSON records.

use serde_json::{Map, Value};

use crate::{Result, StockXError};

/// Copies exactly `fields` out of `record` into a new map.
///
/// Every requested field must be present. A missing key fails the whole
/// projection with [`StockXError::MissingField`]; nothing is defaulted.
pub fn project<S: AsRef<str>>(record: &Value, fields: &[S]) -> Result<Map<String, Value>> {
    let object = record
        .as_object()
        .ok_or_else(|| StockXError::Shape(format!("expected an object, got {}", kind(record))))?;

    fields
        .iter()
        .map(|field| {
            let name = field.as_ref();
            object
                .get(name)
                .map(|value| (name.to_string(), value.clone()))
                .ok_or_else(|| StockXError::MissingField(name.to_string()))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sneaker() -> Value {
        json!({
            "title": "Air Jordan 1",
            "id": "abc",
            "brand": "Jordan",
            "retailPrice": 170,
            "urlKey": "aj1",
            "market": {"lastSale": 160},
            "colorway": "Chicago",
            "releaseDate": "2015-05-30"
        })
    }

    #[test]
    fn keeps_only_requested_fields() {
        let projected = project(&sneaker(), &["title", "market"]).unwrap();

        let expected = json!({"title": "Air Jordan 1", "market": {"lastSale": 160}});
        assert_eq!(Value::Object(projected), expected);
    }

    #[test]
    fn empty_field_set_yields_empty_map() {
        let projected = project::<&str>(&sneaker(), &[]).unwrap();
        assert!(projected.is_empty());
    }

    #[test]
    fn null_values_are_copied_not_dropped() {
        let record = json!({"title": null, "id": "x"});
        let projected = project(&record, &["title"]).unwrap();
        assert_eq!(projected.get("title"), Some(&Value::Null));
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = project(&sneaker(), &["title", "nonexistentField"]).unwrap_err();
        assert!(matches!(err, StockXError::MissingField(ref f) if f == "nonexistentField"));
        assert!(err.is_shape());
    }

    #[test]
    fn non_object_record_is_a_shape_error() {
        let err = project(&json!([1, 2, 3]), &["title"]).unwrap_err();
        assert!(matches!(err, StockXError::Shape(_)));
    }

    #[test]
    fn owned_field_names_are_accepted() {
        let fields = vec!["id".to_string(), "brand".to_string()];
        let projected = project(&sneaker(), &fields).unwrap();
        assert_eq!(projected.len(), 2);
        assert_eq!(projected["brand"], json!("Jordan"));
    }
}
