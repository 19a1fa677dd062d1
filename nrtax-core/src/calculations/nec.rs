//! Schedule NEC: flat-rate tax on passive income not effectively connected
//! with a US trade or business.
//!
//! Dividends are taxed at the treaty withholding rate (statutory 30%
//! otherwise). Interest is always taxed at the flat 30% — the treaty
//! portfolio-interest exemption is a known simplification left unmodeled.
//! Capital gains are taxed only when the taxpayer was present at least 183
//! days in the filing year; that presence threshold is independent of the
//! Substantial Presence Test and applies even to SPT-exempt individuals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_half_up;

/// Flat statutory rate on interest income.
pub const INTEREST_RATE: Decimal = dec!(0.30);

/// Flat statutory rate on net capital gains.
pub const CAPITAL_GAINS_RATE: Decimal = dec!(0.30);

/// Days of filing-year presence at or above which an NRA's capital gains
/// become taxable.
pub const CAPITAL_GAINS_PRESENCE_THRESHOLD: u16 = 183;

/// Inputs for the Schedule NEC computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NecInput {
    pub dividend_income: Decimal,
    pub interest_income: Decimal,
    pub capital_gains: Decimal,
    pub capital_losses: Decimal,
    /// Days physically present in the filing year.
    pub days_present: u16,
    /// Treaty dividend withholding rate, in percent.
    pub dividend_rate: Decimal,
}

/// Schedule NEC result.
///
/// The component fields stay unrounded; only [`NecResult::total`] is
/// rounded, so the subtotal is never accumulated from pre-rounded parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NecResult {
    pub dividend_tax: Decimal,
    pub interest_tax: Decimal,
    pub capital_gains_tax: Decimal,
    /// Sum of the three components, rounded to cents once.
    pub total: Decimal,
}

/// Computes the flat-rate tax on the passive income streams.
pub fn calculate(input: &NecInput) -> NecResult {
    let dividend_tax = input.dividend_income * (input.dividend_rate / dec!(100));
    let interest_tax = input.interest_income * INTEREST_RATE;

    let net_gain = (input.capital_gains - input.capital_losses).max(Decimal::ZERO);
    let capital_gains_tax = if input.days_present >= CAPITAL_GAINS_PRESENCE_THRESHOLD {
        net_gain * CAPITAL_GAINS_RATE
    } else {
        if net_gain > Decimal::ZERO {
            debug!(
                %net_gain,
                days_present = input.days_present,
                "capital gains not taxable below the 183-day presence threshold"
            );
        }
        Decimal::ZERO
    };

    let total = round_half_up(dividend_tax + interest_tax + capital_gains_tax);

    NecResult {
        dividend_tax,
        interest_tax,
        capital_gains_tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input() -> NecInput {
        NecInput {
            dividend_income: dec!(0),
            interest_income: dec!(0),
            capital_gains: dec!(0),
            capital_losses: dec!(0),
            days_present: 365,
            dividend_rate: dec!(30),
        }
    }

    #[test]
    fn dividends_use_the_treaty_rate() {
        let mut i = input();
        i.dividend_income = dec!(200);
        i.dividend_rate = dec!(10);

        assert_eq!(calculate(&i).total, dec!(20.00));
    }

    #[test]
    fn interest_is_always_taxed_at_thirty_percent() {
        let mut i = input();
        i.interest_income = dec!(200);
        i.dividend_rate = dec!(10); // treaty rate must not leak onto interest

        assert_eq!(calculate(&i).total, dec!(60.00));
    }

    #[test]
    fn gains_are_taxed_at_thirty_percent_when_present_long_enough() {
        // The treaty dividend rate never applies to gains.
        let mut i = input();
        i.dividend_income = dec!(200);
        i.dividend_rate = dec!(10);
        i.capital_gains = dec!(500);
        i.days_present = 183;

        let result = calculate(&i);

        assert_eq!(result.dividend_tax, dec!(20));
        assert_eq!(result.capital_gains_tax, dec!(150));
        assert_eq!(result.total, dec!(170.00));
    }

    #[test]
    fn gains_are_untaxed_below_the_presence_threshold() {
        let mut i = input();
        i.dividend_income = dec!(200);
        i.dividend_rate = dec!(10);
        i.capital_gains = dec!(500);
        i.days_present = 182;

        let result = calculate(&i);

        assert_eq!(result.capital_gains_tax, dec!(0));
        assert_eq!(result.total, dec!(20.00));
    }

    #[test]
    fn losses_offset_gains_but_never_go_negative() {
        let mut i = input();
        i.capital_gains = dec!(500);
        i.capital_losses = dec!(200);

        assert_eq!(calculate(&i).capital_gains_tax, dec!(90));

        i.capital_losses = dec!(800);
        assert_eq!(calculate(&i).capital_gains_tax, dec!(0));
        assert_eq!(calculate(&i).total, dec!(0.00));
    }

    #[test]
    fn total_is_rounded_once_not_per_component() {
        // 33.335 + 33.335 = 66.67; rounding each component first would
        // accumulate 33.34 + 33.34 = 66.68.
        let mut i = input();
        i.dividend_income = dec!(333.35);
        i.dividend_rate = dec!(10); // 33.335
        i.interest_income = dec!(111.116666667); // ~33.335 at 30%

        let result = calculate(&i);

        assert_eq!(result.total, dec!(66.67));
    }
}
