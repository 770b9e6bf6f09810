//! file: input.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:40:55 Monday
//! brief: forgiving integer parsing for the numeric fields

/// Reads the leading integer of `text`: whitespace is skipped, one sign is
/// allowed, then digits are taken until the first non-digit. Returns `None`
/// when no digit follows or the value does not fit in an `i64`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for digit in rest.as_bytes()[..digits].iter().map(|b| i64::from(b - b'0')) {
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

/// Initial score field: anything unreadable starts the game at zero.
pub fn score_or_zero(text: &str) -> i64 {
    parse_leading_int(text).unwrap_or(0)
}

/// Step field: unreadable input and zero both mean a single step.
pub fn step_or_one(text: &str) -> i64 {
    parse_leading_int(text)
        .filter(|step| *step != 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_leading_digits() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("-7x"), Some(-7));
        assert_eq!(parse_leading_int("007"), Some(7));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x12"), None);
        assert_eq!(parse_leading_int("- 3"), None);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775808"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn defaults_follow_the_fields() {
        assert_eq!(score_or_zero("banana"), 0);
        assert_eq!(score_or_zero("1500000"), 1_500_000);
        assert_eq!(step_or_one("banana"), 1);
        assert_eq!(step_or_one("0"), 1);
        assert_eq!(step_or_one("4"), 4);
        assert_eq!(step_or_one("-2"), -2);
    }
}
