//! Appointment field validators.
//!
//! Pure string checks, so both the per-field blur/input indicators and the
//! submit-time re-validation share one definition. Empty phone/email values
//! are valid here: presence is the `Required` rule's job.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Which rule a field is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Required,
    Phone,
    Email,
}

/// Validate `value` against the rule for `kind`.
#[must_use]
pub fn validate_field(kind: FieldKind, value: &str) -> bool {
    match kind {
        FieldKind::Required => is_filled(value),
        FieldKind::Phone => is_valid_phone(value),
        FieldKind::Email => is_valid_email(value),
    }
}

/// Whitespace as JavaScript's `\s` sees it, which also covers U+FEFF.
fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Optional leading `+`, then one or more digits, whitespace, `-`, `(` or `)`.
///
/// Punctuation-only values such as `"--"` pass; the page has always accepted
/// them and tightening would reject numbers users can submit today.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let body = value.strip_prefix('+').unwrap_or(value);
    !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || is_js_whitespace(c) || matches!(c, '-' | '(' | ')'))
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and a `.` in
/// the domain with at least one character on each side.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if value.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
