use rust_decimal::Decimal;
use std::str::FromStr;
use tripsplit_domain::Money;

/// Converts raw field input into a non-negative amount.
///
/// Empty, non-numeric, negative and implausibly large input (above
/// [`Money::MAX_FIELD_UNITS`]) all become zero. Digit grouping with `,` or `_` is
/// accepted, so `12,000` reads as twelve thousand.
pub fn coerce_amount(raw: &str) -> Money {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Money::ZERO;
    }

    let cleaned: String = trimmed.chars().filter(|c| !matches!(c, ',' | '_')).collect();
    let parsed = Decimal::from_str(&cleaned).or_else(|_| Decimal::from_scientific(&cleaned));

    match parsed {
        Ok(value) if value.is_sign_negative() && !value.is_zero() => {
            tracing::warn!(input = raw, "Negative amount coerced to zero");
            Money::ZERO
        }
        Ok(value) if Money::from_decimal(value).exceeds_field_limit() => {
            tracing::warn!(input = raw, "Oversized amount coerced to zero");
            Money::ZERO
        }
        Ok(value) => Money::from_decimal(value),
        Err(_) => {
            tracing::warn!(input = raw, "Non-numeric amount coerced to zero");
            Money::ZERO
        }
    }
}
