//! Field decoders that never fail.
//!
//! Used via `#[serde(default, deserialize_with = "...")]` on payloads produced
//! by the external agent. A value of the wrong JSON type decodes as `None`
//! (or an empty collection) instead of rejecting the whole document. These
//! decoders buffer through [`serde_json::Value`] and so require a
//! self-describing format.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Free text. Numbers are rendered to text; anything else is absent.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Free text defaulting to empty, for fields that are always displayed.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

/// Record identifier. Strings and numbers are accepted.
///
/// # Errors
///
/// Fails on any other JSON type, so the enclosing record is rejected (and
/// skipped by [`objects`]).
pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string(deserializer)?
        .filter(|id| !id.is_empty())
        .ok_or_else(|| D::Error::custom("expected a non-empty string or numeric id"))
}

/// Non-negative count. Accepts integers, whole floats, and numeric strings.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(float_to_count)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_count))
        }
        _ => None,
    })
}

/// Boolean flag. Accepts `true`/`false` and their string spellings.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Like [`flag`], defaulting to `false`.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flag(deserializer)?.unwrap_or(false))
}

/// Floating-point score. Accepts numbers and numeric strings.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|f| f.is_finite()))
}

/// Sequence of objects. A non-array decodes as empty; elements that are not
/// objects or fail to decode are dropped.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(object_list(deserializer)?.unwrap_or_default())
}

/// Like [`objects`], but anything other than an array is `None`, so callers
/// can tell an absent list from an empty one.
///
/// # Errors
///
/// Only propagates errors from the underlying deserializer itself.
pub fn object_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn float_to_count(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then(|| f as u64)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::count")]
        count: Option<u64>,
        #[serde(default, deserialize_with = "super::flag")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "super::number")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "super::objects")]
        items: Vec<Item>,
    }

    #[derive(Debug, Deserialize)]
    struct Item {
        #[serde(default, deserialize_with = "super::string")]
        name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(deserialize_with = "super::identifier")]
        id: String,
        #[serde(default, deserialize_with = "super::text")]
        label: String,
        #[serde(default, deserialize_with = "super::truthy")]
        on: bool,
    }

    #[derive(Debug, Deserialize)]
    struct Page {
        #[serde(default, deserialize_with = "super::object_list")]
        records: Option<Vec<Record>>,
    }

    fn fields(json: serde_json::Value) -> Fields {
        serde_json::from_value(json).expect("lenient decode must not fail")
    }

    #[test]
    fn missing_fields_are_absent() {
        let p = fields(serde_json::json!({}));
        assert!(p.text.is_none());
        assert!(p.count.is_none());
        assert!(p.flag.is_none());
        assert!(p.score.is_none());
        assert!(p.items.is_empty());
    }

    #[test]
    fn wrong_types_are_absent() {
        let p = fields(serde_json::json!({
            "text": {"nested": true},
            "count": [1, 2],
            "flag": 1,
            "score": "high",
            "items": "none"
        }));
        assert!(p.text.is_none());
        assert!(p.count.is_none());
        assert!(p.flag.is_none());
        assert!(p.score.is_none());
        assert!(p.items.is_empty());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let p = fields(serde_json::json!({
            "count": " 12 ",
            "flag": "TRUE",
            "score": "0.5"
        }));
        assert_eq!(p.count, Some(12));
        assert_eq!(p.flag, Some(true));
        assert_eq!(p.score, Some(0.5));
    }

    #[test]
    fn counts_reject_negative_and_fractional_values() {
        assert!(fields(serde_json::json!({"count": -3})).count.is_none());
        assert!(fields(serde_json::json!({"count": 2.5})).count.is_none());
        assert_eq!(fields(serde_json::json!({"count": 4.0})).count, Some(4));
    }

    #[test]
    fn objects_skips_non_object_elements() {
        let p = fields(serde_json::json!({
            "items": [{"name": "a"}, 7, null, {"name": 3}, "x"]
        }));
        assert_eq!(p.items.len(), 2);
        assert_eq!(p.items[0].name.as_deref(), Some("a"));
        assert_eq!(p.items[1].name.as_deref(), Some("3"));
    }

    #[test]
    fn identifiers_accept_numbers_and_reject_other_types() {
        let page: Page = serde_json::from_value(serde_json::json!({
            "records": [
                {"id": 42, "label": null, "on": "true"},
                {"id": null, "label": "dropped"},
                {"label": "no id"},
                {"id": "", "label": "blank id"},
                {"id": "r-2", "label": 7}
            ]
        }))
        .expect("lenient decode must not fail");
        let records = page.records.expect("array present");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "42");
        assert_eq!(records[0].label, "");
        assert!(records[0].on);
        assert_eq!(records[1].id, "r-2");
        assert_eq!(records[1].label, "7");
        assert!(!records[1].on);
    }

    #[test]
    fn object_list_distinguishes_absent_from_empty() {
        let absent: Page = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(absent.records.is_none());
        let wrong: Page = serde_json::from_value(serde_json::json!({"records": {}})).unwrap();
        assert!(wrong.records.is_none());
        let empty: Page = serde_json::from_value(serde_json::json!({"records": []})).unwrap();
        assert_eq!(empty.records.map(|r| r.len()), Some(0));
    }
}
