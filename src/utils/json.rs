use rust_decimal::Decimal;
use serde_json::Value;

/// Reads a numeric field the indexer may serialize as a number, a string,
/// or omit entirely. Absent or unparsable values become zero.
pub fn decimal_field(value: &Value, key: &str) -> Decimal {
    match value.get(key) {
        Some(Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(Value::String(s)) => s.parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

pub fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_numbers_strings_and_defaults() {
        let value = json!({ "a": 1500, "b": "250.5", "c": null, "d": "not a number" });
        assert_eq!(decimal_field(&value, "a"), Decimal::from(1500));
        assert_eq!(decimal_field(&value, "b"), "250.5".parse().unwrap());
        assert_eq!(decimal_field(&value, "c"), Decimal::ZERO);
        assert_eq!(decimal_field(&value, "d"), Decimal::ZERO);
        assert_eq!(decimal_field(&value, "missing"), Decimal::ZERO);
    }

    #[test]
    fn reads_strings_with_default() {
        let value = json!({ "address": "tz1abc" });
        assert_eq!(string_field(&value, "address"), "tz1abc");
        assert_eq!(string_field(&value, "missing"), "");
    }
}
