use serde_json::{Map, Value};

/// One matched offering as returned by the search endpoint.
///
/// Text fields keep scalar values in their textual form; `price` keeps the raw
/// JSON value so that non-numeric prices can still be shown verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRecord {
    pub shop: Option<String>,
    pub title: Option<String>,
    pub price: Option<Value>,
    pub url: Option<String>,
}

impl ResultRecord {
    /// Price as a finite number, if it coerces to one. A `null` price counts
    /// as zero; a missing price has no numeric value.
    pub fn numeric_price(&self) -> Option<f64> {
        self.price
            .as_ref()
            .map(to_number)
            .filter(|value| value.is_finite())
    }

    /// Trimmed outbound link, if non-empty.
    pub fn link(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            shop: text_field(object, "shop"),
            title: text_field(object, "title"),
            price: object.get("price").cloned(),
            url: text_field(object, "url"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticePayload {
    pub kind: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    ResultList(Vec<ResultRecord>),
    Notice(NoticePayload),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a JSON array, found {found}")]
pub struct ShapeError {
    pub found: &'static str,
}

/// Classify a parsed response body.
///
/// The body is a notice when it is a non-empty array whose first element is
/// an object with a truthy `type`. Only the first element is inspected, so a
/// result list whose first record carries a truthy `type` is read as a notice.
pub fn decode_response(body: &Value) -> Result<SearchResponse, ShapeError> {
    let items = body.as_array().ok_or(ShapeError {
        found: json_kind(body),
    })?;

    if let Some(first) = items.first().and_then(Value::as_object) {
        if let Some(kind) = first.get("type").filter(|kind| is_truthy(kind)) {
            return Ok(SearchResponse::Notice(NoticePayload {
                kind: display_text(kind),
                message: first
                    .get("message")
                    .filter(|message| is_truthy(message))
                    .map(display_text),
            }));
        }
    }

    Ok(SearchResponse::ResultList(
        items.iter().map(ResultRecord::from_value).collect(),
    ))
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric coercion of a JSON value; `NaN` when it does not coerce.
///
/// Strings are trimmed; an empty string is zero. Decimal literals and
/// `0x`/`0o`/`0b` integer literals are accepted. Arrays and objects never
/// coerce.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_numeric_text(text),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust also accepts "inf"/"nan" spellings; those are non-finite either way.
    if text.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) {
        text.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Text form of a scalar JSON value; `None` for `null`.
fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .filter(|value| !value.is_null())
        .map(display_text)
}

pub(crate) fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
