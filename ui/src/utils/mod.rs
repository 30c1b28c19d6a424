pub mod time;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount in Naira with thousands separators, e.g. `₦135,000` or
/// `₦72,500.5`. A missing price shows as `₦0`.
pub fn format_naira(amount: Option<Decimal>) -> String {
    let amount = amount
        .unwrap_or_default()
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = amount.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}₦{grouped}.{fraction}"),
        None => format!("{sign}₦{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_naira(Some(Decimal::from(135_000))), "₦135,000");
        assert_eq!(format_naira(Some(Decimal::from(1_234_567))), "₦1,234,567");
        assert_eq!(format_naira(Some(Decimal::from(999))), "₦999");
    }

    #[test]
    fn keeps_up_to_three_decimals() {
        assert_eq!(format_naira(Some(Decimal::new(7_250_050, 2))), "₦72,500.5");
        assert_eq!(format_naira(Some(Decimal::new(12_345_678, 4))), "₦1,234.568");
    }

    #[test]
    fn missing_price_is_zero() {
        assert_eq!(format_naira(None), "₦0");
    }
}
