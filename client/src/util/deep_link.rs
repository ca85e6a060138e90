//! WhatsApp booking link composed from the current form values.

#[cfg(test)]
#[path = "deep_link_test.rs"]
mod deep_link_test;

use crate::net::appointment::TimeSlot;
use crate::state::form::FormValues;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Human label for a `<select>` time code; empty for anything unknown.
#[must_use]
pub fn time_slot_label(code: &str) -> &'static str {
    TimeSlot::from_code(code).map_or("", TimeSlot::label)
}

/// Pre-filled chat message for the given form values.
#[must_use]
pub fn compose_message(values: &FormValues) -> String {
    format!(
        "Hello Doctor,\nI would like to book an appointment.\nName: {}\nPreferred Date: {}\nPreferred Time: {}\nReason for Visit: {}",
        values.name,
        values.date,
        time_slot_label(&values.time),
        values.message,
    )
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        let unreserved = byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if unreserved {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

/// `wa.me` link for `number` carrying `message` as the `text` parameter.
#[must_use]
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("{WHATSAPP_BASE_URL}/{number}?text={}", encode_uri_component(message))
}

/// Link the WhatsApp button should follow for the current form.
#[must_use]
pub fn appointment_link(number: &str, values: &FormValues) -> String {
    whatsapp_url(number, &compose_message(values))
}

/// Console record of a button click.
#[must_use]
pub fn click_record(timestamp: &str, page_url: &str) -> serde_json::Value {
    serde_json::json!({
        "timestamp": timestamp,
        "action": "whatsapp_click",
        "url": page_url,
    })
}
