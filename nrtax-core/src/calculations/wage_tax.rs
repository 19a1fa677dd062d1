//! Progressive bracket tax on effectively-connected wage income.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::reference::brackets::TaxBracket;

/// Calculator over a borrowed, year-specific bracket ladder.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use nrtax_core::calculations::wage_tax::WageTaxCalculator;
/// use nrtax_core::reference::brackets;
///
/// let ladder = brackets::for_year(2025).unwrap();
/// let calculator = WageTaxCalculator::new(ladder);
///
/// // 10% of 11,925 plus 12% of 22,325.
/// assert_eq!(calculator.calculate(dec!(34250)), dec!(3871.50));
/// ```
#[derive(Debug, Clone)]
pub struct WageTaxCalculator<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> WageTaxCalculator<'a> {
    /// Creates a calculator for a ladder sorted by `min_income` ascending
    /// and terminating in an unbounded top bracket, as the reference
    /// tables guarantee.
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Walks the ladder, taxing each slice of income at its marginal rate.
    ///
    /// Income exactly at a bracket boundary is taxed entirely by the lower
    /// brackets, consistent with IRS published examples. The accumulated
    /// tax is rounded to cents once, at the end.
    pub fn calculate(&self, taxable_income: Decimal) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if taxable_income <= bracket.min_income {
                break;
            }
            let upper = match bracket.max_income {
                Some(max) => taxable_income.min(max),
                None => taxable_income,
            };
            tax += (upper - bracket.min_income) * bracket.rate;
        }

        round_half_up(tax)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::reference::brackets;

    fn calculator_2025() -> WageTaxCalculator<'static> {
        WageTaxCalculator::new(brackets::for_year(2025).unwrap())
    }

    #[test]
    fn zero_income_is_zero_tax() {
        assert_eq!(calculator_2025().calculate(dec!(0)), dec!(0));
    }

    #[test]
    fn first_bracket_income_is_taxed_at_the_first_rate() {
        assert_eq!(calculator_2025().calculate(dec!(10000)), dec!(1000.00));
        assert_eq!(calculator_2025().calculate(dec!(1055)), dec!(105.50));
    }

    #[test]
    fn boundary_income_is_taxed_entirely_by_the_lower_bracket() {
        // Exactly the first bracket's upper bound: all at 10%.
        assert_eq!(calculator_2025().calculate(dec!(11925)), dec!(1192.50));
    }

    #[test]
    fn tax_is_continuous_across_the_boundary() {
        let at_boundary = calculator_2025().calculate(dec!(11925));
        let just_above = calculator_2025().calculate(dec!(11925.01));

        // One extra cent of income at 12%.
        assert_eq!(just_above - at_boundary, dec!(0.00));
        assert_eq!(
            calculator_2025().calculate(dec!(11926)) - at_boundary,
            dec!(0.12)
        );
    }

    #[test]
    fn second_bracket_accumulates_the_first() {
        // 1192.50 + 12% of 22,325.
        assert_eq!(calculator_2025().calculate(dec!(34250)), dec!(3871.50));
    }

    #[test]
    fn top_bracket_is_unbounded() {
        // 2025 ladder: cumulative tax to 626,350 is 188,769.75, then 37%.
        assert_eq!(calculator_2025().calculate(dec!(700000)), dec!(216020.25));
    }

    #[test]
    fn tax_is_non_decreasing_in_income() {
        let calculator = calculator_2025();
        let mut previous = Decimal::ZERO;
        for income in [0, 500, 11925, 11926, 48475, 103350, 197300, 626350, 900000] {
            let tax = calculator.calculate(Decimal::from(income));
            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
        }
    }

    #[test]
    fn each_year_uses_its_own_ladder() {
        // 40,000 of taxable income lands in the 12% bracket every year, but
        // the first-bracket width differs.
        let tax_2023 =
            WageTaxCalculator::new(brackets::for_year(2023).unwrap()).calculate(dec!(40000));
        let tax_2024 =
            WageTaxCalculator::new(brackets::for_year(2024).unwrap()).calculate(dec!(40000));
        let tax_2025 = calculator_2025().calculate(dec!(40000));

        // 2023: 1100 + 12% of 29,000 = 4580.
        assert_eq!(tax_2023, dec!(4580.00));
        // 2024: 1160 + 12% of 28,400 = 4568.
        assert_eq!(tax_2024, dec!(4568.00));
        // 2025: 1192.50 + 12% of 28,075 = 4561.50.
        assert_eq!(tax_2025, dec!(4561.50));
    }
}
