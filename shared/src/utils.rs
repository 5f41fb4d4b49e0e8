//! # Shared Utility Functions
//!
//! Display helpers used across screens.
//!
//! - [`format_amount`] - Group an integer amount with thousands separators
//! - [`mask_card`] - Render the visible part of a card number
//!
//! ```rust
//! use shared::utils::{format_amount, mask_card};
//!
//! assert_eq!(format_amount(450000), "450,000");
//! assert_eq!(mask_card("1234"), "**** 1234");
//! ```

/// Format an integer amount with `,` thousands separators.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Mask a card number, showing only its last four digits.
pub fn mask_card(last4: &str) -> String {
    format!("**** {}", last4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1,000");
        assert_eq!(format_amount(450000), "450,000");
        assert_eq!(format_amount(1234567), "1,234,567");
        assert_eq!(format_amount(-780000), "-780,000");
    }

    #[test]
    fn test_mask_card() {
        assert_eq!(mask_card("9876"), "**** 9876");
    }
}
