//! Deduction resolution: itemized vs treaty-permitted standard deduction.
//!
//! A nonresident alien may claim either itemized deductions (state tax
//! withheld plus charitable contributions) or — only where a treaty grants
//! it — the full US standard deduction. Never both; the resolver picks
//! whichever is greater among the options actually available.

use rust_decimal::Decimal;

/// Resolved deduction plus the advisories it generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionOutcome {
    /// The amount to subtract from taxable wages.
    pub amount: Decimal,
    /// Whether the treaty standard deduction was selected.
    pub used_standard_deduction: bool,
    /// The itemized total, kept for auditability regardless of the path.
    pub itemized: Decimal,
    pub advisories: Vec<String>,
}

/// Picks the larger of the deductions available to the taxpayer.
///
/// The standard path is taken only when the treaty standard deduction is
/// nonzero and strictly exceeds the itemized total. The itemized path with
/// a positive amount carries the Schedule A substantiation advisory.
pub fn resolve(
    state_tax_withheld: Decimal,
    charitable_contributions: Decimal,
    standard_deduction: Decimal,
) -> DeductionOutcome {
    let itemized = state_tax_withheld + charitable_contributions;

    if standard_deduction > Decimal::ZERO && standard_deduction > itemized {
        return DeductionOutcome {
            amount: standard_deduction,
            used_standard_deduction: true,
            itemized,
            advisories: Vec::new(),
        };
    }

    let mut advisories = Vec::new();
    if itemized > Decimal::ZERO {
        advisories.push(format!(
            "NOTE: You are claiming Itemized Deductions (${itemized:.2}). You MUST \
             file Schedule A (Form 1040-NR) with your return.",
        ));
    }

    DeductionOutcome {
        amount: itemized,
        used_standard_deduction: false,
        itemized,
        advisories,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn standard_deduction_wins_when_strictly_greater() {
        let outcome = resolve(dec!(2000), dec!(0), dec!(15750));

        assert_eq!(outcome.amount, dec!(15750));
        assert!(outcome.used_standard_deduction);
        assert!(outcome.advisories.is_empty());
    }

    #[test]
    fn itemized_wins_when_standard_is_zero() {
        let outcome = resolve(dec!(2000), dec!(300), dec!(0));

        assert_eq!(outcome.amount, dec!(2300));
        assert!(!outcome.used_standard_deduction);
        assert!(outcome.advisories[0].contains("Schedule A"));
        assert!(outcome.advisories[0].contains("$2300.00"));
    }

    #[test]
    fn itemized_wins_ties_against_the_standard_deduction() {
        let outcome = resolve(dec!(15750), dec!(0), dec!(15750));

        assert_eq!(outcome.amount, dec!(15750));
        assert!(!outcome.used_standard_deduction);
    }

    #[test]
    fn zero_everything_resolves_to_zero_without_advisories() {
        let outcome = resolve(dec!(0), dec!(0), dec!(0));

        assert_eq!(outcome.amount, dec!(0));
        assert!(!outcome.used_standard_deduction);
        assert!(outcome.advisories.is_empty());
    }

    #[test]
    fn itemized_total_is_reported_on_the_standard_path_too() {
        let outcome = resolve(dec!(1200), dec!(100), dec!(15750));

        assert_eq!(outcome.itemized, dec!(1300));
    }
}
