//! Coercion of raw fare text into yen
//!
//! The calculator only accepts non-negative integers, so whatever the user typed
//! is reduced to one here. Anything that does not start with digits becomes 0.

use waribiki_types::Yen;

/// Parse fare text the way a form field is read.
///
/// Leading digits are taken (an optional `+` may precede them) and the rest is
/// ignored: `"12ab"` is 12, `"abc"` and `"-5"` are 0. Full-width digits and
/// thousands separators inside the digit run are accepted (`"６,３８０"` is 6380).
/// Overflow yields 0.
pub fn parse_fare_input(text: &str) -> Yen {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);

    let mut value: Yen = 0;
    let mut seen_digit = false;
    for c in text.chars() {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            ',' | '，' if seen_digit => continue,
            _ => break,
        };
        seen_digit = true;
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(Yen::from(digit)))
        {
            Some(v) => v,
            None => return 0,
        };
    }
    value
}
