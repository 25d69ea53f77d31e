//! Phone number utilities
//!
//! Users type phone numbers in many shapes. With a single default country
//! configured, [`normalize_phone_number`] repairs the common variants into the
//! dialable form the gateway expects (country code followed by the subscriber
//! number, no `+` or `00`). It is a heuristic, not a full numbering-plan parser.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static LOCAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{9,10}$").expect("local number pattern is valid")
});

/// Normalize a phone number against a default country code
///
/// Rules, first match wins:
/// 1. empty `country_code`: returned unchanged
/// 2. exactly 9 or 10 ASCII digits: `country_code` is prepended
/// 3. starts with `+<country_code>`: the `+` is dropped
/// 4. starts with `00<country_code>`: the `00` is dropped
/// 5. anything else: returned unchanged
///
/// # Example
///
/// ```
/// use ca_shared::phone::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("15112345678", "49"), "4915112345678");
/// assert_eq!(normalize_phone_number("+39123456789", "39"), "39123456789");
/// ```
pub fn normalize_phone_number(raw: &str, country_code: &str) -> String {
    if country_code.is_empty() {
        debug!(phone = raw, "no country code set, phone number left as is");
        return raw.to_string();
    }

    if LOCAL_NUMBER_REGEX.is_match(raw) {
        let normalized = format!("{}{}", country_code, raw);
        debug!(phone = %normalized, country_code, "added country code");
        return normalized;
    }

    if let Some(rest) = raw
        .strip_prefix('+')
        .and_then(|tail| tail.strip_prefix(country_code))
    {
        let normalized = format!("{}{}", country_code, rest);
        debug!(phone = %normalized, "replaced +{} with {}", country_code, country_code);
        return normalized;
    }

    if let Some(rest) = raw
        .strip_prefix("00")
        .and_then(|tail| tail.strip_prefix(country_code))
    {
        let normalized = format!("{}{}", country_code, rest);
        debug!(phone = %normalized, "replaced 00{} with {}", country_code, country_code);
        return normalized;
    }

    debug!(phone = raw, "no changes needed");
    raw.to_string()
}

/// Mask a phone number for display, keeping the last four characters (e.g. +*******5678)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(chars.len() - 5), visible)
    } else {
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}
