//! Literals on the right-hand side of set expressions.

use log::trace;

use crate::value::Value;

/// Interpret the value side of a set expression.
///
/// Never fails: first match wins among a quoted string (`"..."` or
/// `'...'`, no escape processing), `true`/`false`, a number, and finally
/// the raw text as a bare-word string.
///
/// A number without a `.` becomes an integer (`1e3` is `1000`); one with a
/// `.` stays a float. Non-finite spellings such as `inf` or `nan` are bare
/// words.
pub fn parse_literal(text: &str) -> Value {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' || first == b'\'') && first == last {
            trace!("literal {:?}: quoted string", text);
            return Value::String(text[1..text.len() - 1].to_string());
        }
    }

    match text {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }

    if let Some(number) = parse_number(text) {
        trace!("literal {:?}: {}", text, number.type_name());
        return number;
    }

    Value::String(text.to_string())
}

fn parse_number(text: &str) -> Option<Value> {
    let f = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if text.contains('.') {
        return Some(Value::Float(f));
    }
    // Exact when it fits; otherwise truncate the float.
    Some(Value::Integer(text.parse::<i64>().unwrap_or(f as i64)))
}
