//! Attribute emission helpers for the toast XML schema
//!
//! One rule applies everywhere: an attribute is written only when its
//! backing field carries a value. Optional strings that are empty count
//! as unset; required strings are written verbatim even when empty.
//! Values are copied into the output without escaping.

/// Append ` name="value"` unconditionally (required attributes).
pub(crate) fn attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

/// Append ` name="value"` when the optional string is set and non-empty.
pub(crate) fn opt_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            attr(out, name, value);
        }
    }
}

/// Append ` name="token"` when an enum field is set.
pub(crate) fn opt_token_attr(out: &mut String, name: &str, value: Option<&'static str>) {
    if let Some(token) = value {
        attr(out, name, token);
    }
}

/// Append ` name="true"` / ` name="false"` for an explicitly-set boolean.
///
/// `Some(false)` is a set value and is written; only `None` is omitted.
pub(crate) fn opt_bool_attr(out: &mut String, name: &str, value: Option<bool>) {
    if let Some(value) = value {
        attr(out, name, if value { "true" } else { "false" });
    }
}
