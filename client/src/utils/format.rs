//! # Input Masks and Display Formatting
//!
//! Pure, stateless text transforms for the card-entry fields and the
//! balance display. Each mask comes with a pair of cursor-offset mapping
//! functions between the raw digit string and the masked string; the
//! mapping round-trips for every offset in `[0, digit_len]` so an edit
//! box can keep the caret stable while the mask is applied.

/// Maximum number of digits in a card number.
pub const CARD_NUMBER_MAX_DIGITS: usize = 16;

/// Maximum number of digits in an expiry date (`MMYY`).
pub const EXPIRY_MAX_DIGITS: usize = 4;

/// Separator inserted between card-number groups.
pub const CARD_GROUP_SEPARATOR: char = ' ';

/// Keep only digits from raw input, truncated to the card-number maximum.
pub fn card_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CARD_NUMBER_MAX_DIGITS)
        .collect()
}

/// Keep only digits from raw input, truncated to the expiry maximum.
pub fn expiry_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(EXPIRY_MAX_DIGITS)
        .collect()
}

/// Mask a card number into groups of four digits.
///
/// Non-digits are dropped and the input is truncated to 16 digits before
/// grouping. No trailing separator is emitted after the last digit.
///
/// ```
/// use client::utils::format::mask_card_number;
///
/// assert_eq!(mask_card_number("8600123412341234"), "8600 1234 1234 1234");
/// assert_eq!(mask_card_number("8600 12"), "8600 12");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digits = card_digits(input);
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    let last = digits.len().saturating_sub(1);
    for (i, ch) in digits.chars().enumerate() {
        out.push(ch);
        if i % 4 == 3 && i != last {
            out.push(CARD_GROUP_SEPARATOR);
        }
    }
    out
}

/// Mask an expiry date as `MM/YY`.
///
/// The slash appears as soon as two digits are present, so `"12"` masks
/// to `"12/"` and typing continues after the separator.
pub fn mask_expiry(input: &str) -> String {
    let digits = expiry_digits(input);
    let mut out = String::with_capacity(digits.len() + 1);
    out.push_str(&digits[..digits.len().min(2)]);
    if digits.len() >= 2 {
        out.push('/');
        out.push_str(&digits[2..]);
    }
    out
}

/// Length of the masked card number for a given digit count.
fn masked_card_len(digit_len: usize) -> usize {
    match digit_len {
        0 => 0,
        n => n + (n - 1) / 4,
    }
}

/// Length of the masked expiry for a given digit count.
fn masked_expiry_len(digit_len: usize) -> usize {
    if digit_len >= 2 {
        digit_len + 1
    } else {
        digit_len
    }
}

/// Map a caret offset in the raw card digits to the masked string.
pub fn card_offset_to_display(offset: usize, digit_len: usize) -> usize {
    let digit_len = digit_len.min(CARD_NUMBER_MAX_DIGITS);
    let offset = offset.min(digit_len);
    let separators = offset.saturating_sub(1) / 4;
    (offset + separators).min(masked_card_len(digit_len))
}

/// Map a caret offset in the masked card string back to the raw digits.
pub fn card_offset_to_raw(offset: usize, digit_len: usize) -> usize {
    let digit_len = digit_len.min(CARD_NUMBER_MAX_DIGITS);
    let offset = offset.min(masked_card_len(digit_len));
    // A full group occupies five masked positions: four digits plus one separator.
    let separators = offset.saturating_sub(1) / 5;
    (offset - separators).min(digit_len)
}

/// Map a caret offset in the raw expiry digits to the masked string.
pub fn expiry_offset_to_display(offset: usize, digit_len: usize) -> usize {
    let digit_len = digit_len.min(EXPIRY_MAX_DIGITS);
    let offset = offset.min(digit_len);
    let mapped = if offset >= 2 { offset + 1 } else { offset };
    mapped.min(masked_expiry_len(digit_len))
}

/// Map a caret offset in the masked expiry string back to the raw digits.
pub fn expiry_offset_to_raw(offset: usize, digit_len: usize) -> usize {
    let digit_len = digit_len.min(EXPIRY_MAX_DIGITS);
    let offset = offset.min(masked_expiry_len(digit_len));
    let mapped = if offset >= 3 { offset - 1 } else { offset };
    mapped.min(digit_len)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    // Add commas to integer part
    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut result: String = grouped.chars().rev().collect();

    if value.is_sign_negative() && formatted.chars().any(|c| c != '0' && c.is_ascii_digit()) {
        result.insert(0, '-');
    }
    if !decimal_part.is_empty() {
        result.push('.');
        result.push_str(decimal_part);
    }
    result
}

/// Format a wallet balance for display.
///
/// Grouped amount with the currency suffix; a non-finite amount falls
/// back to the raw numeric string.
pub fn format_balance(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    format!("{} UZS", format_number(amount, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Mask Tests ==========

    #[test]
    fn test_card_mask_groups_of_four() {
        assert_eq!(mask_card_number(""), "");
        assert_eq!(mask_card_number("8600"), "8600");
        assert_eq!(mask_card_number("86001"), "8600 1");
        assert_eq!(mask_card_number("8600123412341234"), "8600 1234 1234 1234");
    }

    #[test]
    fn test_card_mask_drops_non_digits_and_truncates() {
        assert_eq!(mask_card_number("8600-1234 abc 1234"), "8600 1234 1234");
        // 20 digits in, 16 digits out
        let masked = mask_card_number("86001234123412349999");
        assert_eq!(masked, "8600 1234 1234 1234");
        assert_eq!(masked.chars().filter(|c| c.is_ascii_digit()).count(), 16);
    }

    #[test]
    fn test_card_mask_group_shape() {
        // Every group except a possibly shorter final one has exactly 4 digits
        for len in 0..=20 {
            let raw: String = std::iter::repeat('9').take(len).collect();
            let masked = mask_card_number(&raw);
            let groups: Vec<&str> = masked.split(CARD_GROUP_SEPARATOR).collect();
            for (i, group) in groups.iter().enumerate() {
                if i + 1 < groups.len() {
                    assert_eq!(group.len(), 4);
                } else {
                    assert!(group.len() <= 4);
                }
            }
        }
    }

    #[test]
    fn test_expiry_mask() {
        assert_eq!(mask_expiry(""), "");
        assert_eq!(mask_expiry("1"), "1");
        assert_eq!(mask_expiry("12"), "12/");
        assert_eq!(mask_expiry("123"), "12/3");
        assert_eq!(mask_expiry("1234"), "12/34");
        assert_eq!(mask_expiry("12345"), "12/34");
        assert_eq!(mask_expiry("1a2b3"), "12/3");
    }

    // ========== Cursor Mapping Tests ==========

    #[test]
    fn test_card_cursor_round_trip() {
        for digit_len in 0..=CARD_NUMBER_MAX_DIGITS {
            for offset in 0..=digit_len {
                let display = card_offset_to_display(offset, digit_len);
                let back = card_offset_to_raw(display, digit_len);
                assert_eq!(back, offset, "digit_len={} offset={}", digit_len, offset);
            }
        }
    }

    #[test]
    fn test_expiry_cursor_round_trip() {
        for digit_len in 0..=EXPIRY_MAX_DIGITS {
            for offset in 0..=digit_len {
                let display = expiry_offset_to_display(offset, digit_len);
                let back = expiry_offset_to_raw(display, digit_len);
                assert_eq!(back, offset, "digit_len={} offset={}", digit_len, offset);
            }
        }
    }

    #[test]
    fn test_card_cursor_skips_separators() {
        // Caret after the 5th digit sits past the first separator: "8600 1|"
        assert_eq!(card_offset_to_display(5, 6), 6);
        // End of a full card: 16 digits + 3 separators
        assert_eq!(card_offset_to_display(16, 16), 19);
        assert_eq!(card_offset_to_raw(19, 16), 16);
    }

    #[test]
    fn test_expiry_cursor_skips_slash() {
        // "12/|34": raw offset 2 lands after the slash
        assert_eq!(expiry_offset_to_display(2, 4), 3);
        assert_eq!(expiry_offset_to_raw(3, 4), 2);
        assert_eq!(expiry_offset_to_display(4, 4), 5);
    }

    #[test]
    fn test_cursor_clamps_out_of_range() {
        assert_eq!(card_offset_to_display(99, 4), 4);
        assert_eq!(card_offset_to_raw(99, 4), 4);
        assert_eq!(expiry_offset_to_display(99, 2), 3);
        assert_eq!(expiry_offset_to_raw(99, 2), 2);
    }

    // ========== Balance Formatting Tests ==========

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(12500.5), "12,500.50 UZS");
        assert_eq!(format_balance(0.0), "0.00 UZS");
    }

    #[test]
    fn test_format_balance_non_finite_falls_back() {
        assert_eq!(format_balance(f64::NAN), "NaN");
        assert_eq!(format_balance(f64::INFINITY), "inf");
    }
}
