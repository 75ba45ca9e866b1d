//! Display formatting for contact fields.
//!
//! Pure functions only. Everything that ends up on the terminal goes through
//! [`sanitize`] first so contact data cannot smuggle escape sequences.

use crate::models::Contact;
use crate::view::ConnectionStatus;
use chrono::{DateTime, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

static TEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{3})([0-9]{3})([0-9]{4})$").expect("valid regex"));

/// Format a ten-digit number as `(555) 123-4567`.
///
/// Anything that does not reduce to exactly ten digits is returned as-is.
///
/// ```
/// use contactbook_client::formatter::format_phone_number;
///
/// assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
/// assert_eq!(format_phone_number("+44 20 7946 0958"), "+44 20 7946 0958");
/// ```
pub fn format_phone_number(raw: &str) -> String {
    let cleaned = NON_DIGIT.replace_all(raw, "");

    match TEN_DIGITS.captures(&cleaned) {
        Some(caps) => format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_string(),
    }
}

/// Label for the connectivity indicator.
pub fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Unknown => "Connecting",
        ConnectionStatus::Online => "Online",
        ConnectionStatus::Offline => "Offline",
    }
}

/// Render the server's creation timestamp as `Mar 01, 2024`.
///
/// The API emits naive timestamps with optional fractional seconds; RFC 3339
/// is accepted too. Returns `None` for anything else.
pub fn format_created_at(raw: &str) -> Option<String> {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })?;

    Some(parsed.format("%b %d, %Y").to_string())
}

/// Strip control characters (including ESC) from user-provided text.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// One list line for a contact: `#id  name  phone  [email]  [added date]`.
pub fn render_contact_line(contact: &Contact) -> String {
    let mut line = format!(
        "#{:<4} {:<24} {}",
        contact.id,
        sanitize(&contact.name),
        sanitize(&format_phone_number(&contact.phone))
    );

    if let Some(ref email) = contact.email {
        line.push_str("  ");
        line.push_str(&sanitize(email));
    }

    if let Some(added) = contact.created_at.as_deref().and_then(format_created_at) {
        line.push_str(&format!("  (added {})", added));
    }

    line
}
