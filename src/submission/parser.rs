use serde_json::{Map, Value};

pub const NO_DATA: &str = "No data provided";

/// Parse a submission body based on the Content-Type header.
///
/// The result is always a non-empty JSON object; anything else is rejected
/// with a message suitable for the client.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Map<String, Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(NO_DATA.to_string());
    }

    let ct = content_type.unwrap_or("application/json");

    // Only urlencoded forms get special treatment; every other type must be JSON.
    let value = if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)?
    } else {
        serde_json::from_slice(body).map_err(|e| format!("Invalid data: {e}"))?
    };

    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        Value::Object(_) | Value::Null => Err(NO_DATA.to_string()),
        _ => Err("Invalid data: expected a JSON object".to_string()),
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}
