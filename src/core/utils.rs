use rust_decimal::Decimal;

/// `part / whole * 100`, or zero when `whole` is zero.
///
/// Every percentage in the crate goes through here so no caller ever sees a
/// division by zero. Results too large for a `Decimal` saturate at
/// `Decimal::MAX` (or `Decimal::MIN` for opposite signs).
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    let saturated = if part.is_sign_negative() != whole.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    };
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(saturated)
}

/// Sums amounts without risking overflow panics on absurd inputs.
pub fn saturating_sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent_of(dec!(50), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn percent_of_saturates_instead_of_reporting_zero() {
        let huge = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        assert_eq!(percent_of(huge, Decimal::ONE), Decimal::MAX);
        assert_eq!(percent_of(Decimal::MAX, dec!(0.5)), Decimal::MAX);
        assert_eq!(percent_of(-huge, Decimal::ONE), Decimal::MIN);
    }

    #[test]
    fn percent_of_is_exact_for_simple_ratios() {
        assert_eq!(percent_of(dec!(100), dec!(200)), dec!(50));
        assert_eq!(percent_of(dec!(300), dec!(200)), dec!(150));
    }

    #[test]
    fn saturating_sum_adds_everything() {
        assert_eq!(saturating_sum([dec!(1.10), dec!(2.20), dec!(3.30)]), dec!(6.60));
        assert_eq!(saturating_sum(Vec::<Decimal>::new()), Decimal::ZERO);
        assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
    }
}
