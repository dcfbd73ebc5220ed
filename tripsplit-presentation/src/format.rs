use tripsplit_domain::{Money, TransportMethod};
use tripsplit_i18n as i18n;

/// Whole-unit amount with `,` thousands separators, e.g. `-1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Rounds half-up to whole units and groups thousands.
pub fn format_amount(money: Money) -> String {
    group_thousands(money.round_half_up())
}

/// [`format_amount`] followed by the locale's currency suffix.
pub fn format_currency(money: Money) -> String {
    format!("{}{}", format_amount(money), i18n::CURRENCY_SUFFIX)
}

pub fn transport_label(method: TransportMethod) -> &'static str {
    match method {
        TransportMethod::PublicTransit => i18n::PUBLIC_TRANSIT,
        TransportMethod::SelfDriven => i18n::SELF_DRIVEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "0")]
    #[case::small(999, "999")]
    #[case::thousand(1_000, "1,000")]
    #[case::millions(12_345_678, "12,345,678")]
    #[case::negative(-45_000, "-45,000")]
    #[case::negative_small(-7, "-7")]
    #[case::min(i64::MIN, "-9,223,372,036,854,775,808")]
    fn groups_thousands(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(group_thousands(value), expected);
    }

    #[rstest]
    #[case::rounds_up(Money::new(333_335, 1), "33,334")]
    #[case::rounds_down(Money::from_i64(100).split(3), "33")]
    fn formats_money(#[case] money: Money, #[case] expected: &str) {
        assert_eq!(format_amount(money), expected);
    }
}
