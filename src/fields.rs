use crate::result::{Result, ValuesError};
use regex::Regex;
use serde::{Serialize, Serializer};

static INTEGER_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());
static FLOAT_REGEX: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?$").unwrap()
});
static HEX_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"^(?:[xX]'([^']*)'|0x(\w*))$").unwrap());

/// A single literal value from a VALUES tuple
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SqlValue {
    Null,
    Integer(i64),
    Float(f64),
    /// Quoted string with escapes resolved
    Text(String),
    /// `X'..'` or `0x..` literal
    Hex(#[serde(serialize_with = "serialize_hex")] Vec<u8>),
    /// Anything else, kept verbatim (function calls, keywords, expressions)
    Raw(String),
}

impl SqlValue {
    /// Hex bytes read as UTF-8 text.
    ///
    /// MySQL dumps binary UUID columns as `X'3030..'`, the ASCII form of the UUID.
    pub fn hex_as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Hex(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let encoded: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
    serializer.serialize_str(&encoded)
}

/// Split a tuple interior into its top-level fields.
///
/// Commas inside `'`/`"` strings or nested parentheses do not split. Doubled
/// quotes and backslash escapes stay inside the string. Fields are trimmed.
pub fn split_fields(tuple: &str) -> Vec<&str> {
    if tuple.trim().is_empty() {
        return Vec::new();
    }

    let bytes = tuple.as_bytes();
    let mut fields = Vec::new();
    let mut quote: Option<u8> = None;
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        match quote {
            Some(_) if byte == b'\\' => i += 1,
            Some(q) if byte == q => {
                if bytes.get(i + 1) == Some(&q) {
                    i += 1;
                } else {
                    quote = None;
                }
            }
            Some(_) => {}
            None => match byte {
                b'\'' | b'"' => quote = Some(byte),
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b',' if depth == 0 => {
                    fields.push(tuple[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            },
        }
        i += 1;
    }

    fields.push(tuple[start..].trim());
    fields
}

fn quoted_body(field: &str) -> Option<(&str, char)> {
    let quote = field.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    if field.len() >= 2 && field.ends_with(quote) {
        Some((&field[1..field.len() - 1], quote))
    } else {
        None
    }
}

/// Resolve MySQL string escapes and doubled quotes
pub fn unescape_string(body: &str, quote: char) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('0') => out.push('\0'),
                Some('b') => out.push('\u{8}'),
                Some('Z') => out.push('\u{1a}'),
                // LIKE wildcards keep their backslash
                Some(wildcard @ ('%' | '_')) => {
                    out.push('\\');
                    out.push(wildcard);
                }
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else if ch == quote && chars.peek() == Some(&quote) {
            chars.next();
            out.push(quote);
        } else {
            out.push(ch);
        }
    }

    out
}

/// Decode a string of hex digit pairs into bytes
pub fn decode_hex(digits: &str) -> Result<Vec<u8>> {
    let invalid = || ValuesError::InvalidHexLiteral(digits.to_string());
    if digits.len() % 2 != 0 {
        return Err(invalid());
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        })
        .collect()
}

/// Classify one raw field
pub fn parse_field(raw: &str) -> Result<SqlValue> {
    let field = raw.trim();

    if field.eq_ignore_ascii_case("NULL") {
        return Ok(SqlValue::Null);
    }
    if let Some(caps) = HEX_REGEX.captures(field) {
        let digits = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        return decode_hex(digits).map(SqlValue::Hex);
    }
    if let Some((body, quote)) = quoted_body(field) {
        return Ok(SqlValue::Text(unescape_string(body, quote)));
    }
    if INTEGER_REGEX.is_match(field) {
        if let Ok(n) = field.parse::<i64>() {
            return Ok(SqlValue::Integer(n));
        }
    }
    if FLOAT_REGEX.is_match(field) {
        if let Ok(f) = field.parse::<f64>() {
            return Ok(SqlValue::Float(f));
        }
    }

    Ok(SqlValue::Raw(field.to_string()))
}

/// Split and classify every field of a tuple interior
pub fn parse_tuple(tuple: &str) -> Result<Vec<SqlValue>> {
    split_fields(tuple).into_iter().map(parse_field).collect()
}
