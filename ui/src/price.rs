//! Whole-rupee price formatting with Indian digit grouping.

/// Format an amount as `₹1,80,000`: last three digits, then groups of two.
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts = Vec::new();
        let head_bytes = head.as_bytes();
        let mut index = head_bytes.len();
        while index > 2 {
            parts.push(&head[index - 2..index]);
            index -= 2;
        }
        parts.push(&head[..index]);
        parts.reverse();
        format!("{},{tail}", parts.join(","))
    };

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(45_000), "₹45,000");
        assert_eq!(format_inr(180_000), "₹1,80,000");
        assert_eq!(format_inr(1_234_567), "₹12,34,567");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_inr(-45_000), "-₹45,000");
    }
}
