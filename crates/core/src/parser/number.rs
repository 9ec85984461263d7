//! Numeric literal grammar for calculator programs.
//!
//! Only plain decimal literals are recognized: an optional sign, digits, and
//! an optional fractional part. Exponents, radix numbers and hex are not.

/// Parses a numeric literal, returning `None` if the word is not one.
pub fn parse_number(word: &[u8]) -> Option<f32> {
    let digits = match word.first() {
        Some(b'+' | b'-') => &word[1..],
        _ => word,
    };
    let (int_part, frac_part) = match digits.iter().position(|&b| b == b'.') {
        Some(dot) => (&digits[..dot], Some(&digits[dot + 1..])),
        None => (digits, None),
    };
    let frac_len = frac_part.map_or(0, <[u8]>::len);
    if int_part.is_empty() && frac_len == 0 {
        return None;
    }
    let all_digits = |s: &[u8]| s.iter().all(u8::is_ascii_digit);
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return None;
    }
    // The checks above leave only ASCII that Rust's float grammar accepts.
    std::str::from_utf8(word).ok()?.parse::<f32>().ok()
}

/// Formats a number in its shortest canonical form (`55`, `123.4`, `-5`).
pub fn format_number(value: f32) -> String {
    if value == 0.0 {
        // Avoid printing "-0"
        return "0".to_string();
    }
    format!("{value}")
}
