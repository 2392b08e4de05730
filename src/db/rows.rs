//! Row-to-JSON conversion helpers.
//!
//! Result rows are surfaced to callers as JSON objects keyed by column
//! name. Column order is preserved (serde_json is built with
//! `preserve_order`), matching the order the store returns them in.

use serde_json::{Map, Value};

use super::errors::DatabaseError;

/// A single result row: column name to value, in store column order.
pub type JsonRow = Map<String, Value>;

/// Convert a libSQL value into a JSON value.
///
/// Blobs do not occur in this schema; if one ever does, it is surfaced
/// as a lossy UTF-8 string rather than failing the whole row.
pub fn value_to_json(value: libsql::Value) -> Value {
    match value {
        libsql::Value::Null => Value::Null,
        libsql::Value::Integer(i) => Value::from(i),
        libsql::Value::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        libsql::Value::Text(s) => Value::String(s),
        libsql::Value::Blob(b) => Value::String(String::from_utf8_lossy(&b).into_owned()),
    }
}

/// Drain a result set into JSON rows, preserving column order.
pub async fn collect_rows(mut rows: libsql::Rows) -> Result<Vec<JsonRow>, DatabaseError> {
    let column_count = rows.column_count();
    let columns: Vec<String> = (0..column_count)
        .map(|i| {
            rows.column_name(i)
                .map(str::to_string)
                .unwrap_or_else(|| format!("column_{}", i))
        })
        .collect();

    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        let mut object = JsonRow::new();
        for (i, name) in columns.iter().enumerate() {
            let value = row.get_value(i as i32)?;
            object.insert(name.clone(), value_to_json(value));
        }
        out.push(object);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_text_conversion() {
        assert_eq!(value_to_json(libsql::Value::Integer(42)), Value::from(42));
        assert_eq!(
            value_to_json(libsql::Value::Text("hi".to_string())),
            Value::String("hi".to_string())
        );
        assert_eq!(value_to_json(libsql::Value::Null), Value::Null);
    }

    #[test]
    fn test_real_conversion() {
        assert_eq!(
            value_to_json(libsql::Value::Real(8.326)),
            serde_json::json!(8.326)
        );
        // NaN has no JSON representation
        assert_eq!(value_to_json(libsql::Value::Real(f64::NAN)), Value::Null);
    }
}
