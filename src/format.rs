//! file: format.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:21:09 Monday
//! brief: Indian digit grouping for displayed scores

/// Formats `value` with the last three digits grouped together and every two
/// digits before them, e.g. `1020000` becomes `10,20,000`.
pub fn format_score(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if value < 0 {
        out.push('-');
    }

    let split = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(split);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !head.is_empty() {
        out.push(',');
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::format_score;

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(7), "7");
        assert_eq!(format_score(999), "999");
        assert_eq!(format_score(-999), "-999");
    }

    #[test]
    fn groups_by_two_after_thousands() {
        assert_eq!(format_score(1_000), "1,000");
        assert_eq!(format_score(12_345), "12,345");
        assert_eq!(format_score(600_000), "6,00,000");
        assert_eq!(format_score(1_020_000), "10,20,000");
        assert_eq!(format_score(123_456_789), "12,34,56,789");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_score(-1_000_000), "-10,00,000");
        assert_eq!(format_score(-300_000), "-3,00,000");
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(format_score(i64::MIN), "-92,23,37,20,36,85,47,75,808");
        assert_eq!(format_score(i64::MAX), "92,23,37,20,36,85,47,75,807");
    }
}
