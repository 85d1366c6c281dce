use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient deserializer for `timestamp_ms`.
///
/// Integers (and integral floats) are accepted; anything else becomes `None` so the
/// message is simply left out of the daily series rather than failing the load.
pub fn deserialize_timestamp_ms<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let timestamp = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };
    Ok(timestamp)
}

/// Lenient deserializer for `content`: only strings count as a text body.
pub fn deserialize_content<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
