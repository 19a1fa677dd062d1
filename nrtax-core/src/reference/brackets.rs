//! Progressive rate ladders for effectively-connected wage income.
//!
//! Nonresident aliens filing Form 1040-NR use the Single rate schedule.
//! Each ladder is a literal table from the IRS revenue procedure for that
//! year; values are never derived from a formula or extrapolated across
//! years. Adding a year means appending a table and an arm in [`for_year`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One rung of a progressive rate ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket. Income exactly at this amount is fully
    /// taxed by the brackets below it.
    pub min_income: Decimal,

    /// Upper bound, inclusive; `None` marks the unbounded top bracket.
    pub max_income: Option<Decimal>,

    /// Marginal rate applied between the bounds.
    pub rate: Decimal,
}

// Rev. Proc. 2022-38.
static BRACKETS_2023: [TaxBracket; 7] = [
    TaxBracket { min_income: dec!(0), max_income: Some(dec!(11000)), rate: dec!(0.10) },
    TaxBracket { min_income: dec!(11000), max_income: Some(dec!(44725)), rate: dec!(0.12) },
    TaxBracket { min_income: dec!(44725), max_income: Some(dec!(95375)), rate: dec!(0.22) },
    TaxBracket { min_income: dec!(95375), max_income: Some(dec!(182100)), rate: dec!(0.24) },
    TaxBracket { min_income: dec!(182100), max_income: Some(dec!(231250)), rate: dec!(0.32) },
    TaxBracket { min_income: dec!(231250), max_income: Some(dec!(578125)), rate: dec!(0.35) },
    TaxBracket { min_income: dec!(578125), max_income: None, rate: dec!(0.37) },
];

// Rev. Proc. 2023-34.
static BRACKETS_2024: [TaxBracket; 7] = [
    TaxBracket { min_income: dec!(0), max_income: Some(dec!(11600)), rate: dec!(0.10) },
    TaxBracket { min_income: dec!(11600), max_income: Some(dec!(47150)), rate: dec!(0.12) },
    TaxBracket { min_income: dec!(47150), max_income: Some(dec!(100525)), rate: dec!(0.22) },
    TaxBracket { min_income: dec!(100525), max_income: Some(dec!(191950)), rate: dec!(0.24) },
    TaxBracket { min_income: dec!(191950), max_income: Some(dec!(243725)), rate: dec!(0.32) },
    TaxBracket { min_income: dec!(243725), max_income: Some(dec!(609350)), rate: dec!(0.35) },
    TaxBracket { min_income: dec!(609350), max_income: None, rate: dec!(0.37) },
];

// Rev. Proc. 2024-40.
static BRACKETS_2025: [TaxBracket; 7] = [
    TaxBracket { min_income: dec!(0), max_income: Some(dec!(11925)), rate: dec!(0.10) },
    TaxBracket { min_income: dec!(11925), max_income: Some(dec!(48475)), rate: dec!(0.12) },
    TaxBracket { min_income: dec!(48475), max_income: Some(dec!(103350)), rate: dec!(0.22) },
    TaxBracket { min_income: dec!(103350), max_income: Some(dec!(197300)), rate: dec!(0.24) },
    TaxBracket { min_income: dec!(197300), max_income: Some(dec!(250525)), rate: dec!(0.32) },
    TaxBracket { min_income: dec!(250525), max_income: Some(dec!(626350)), rate: dec!(0.35) },
    TaxBracket { min_income: dec!(626350), max_income: None, rate: dec!(0.37) },
];

/// Bracket ladder for `year`, or `None` when the year is not tabulated.
///
/// Callers must treat a missing year as an error rather than borrowing an
/// adjacent year's ladder; tax law differs materially year to year.
pub fn for_year(year: i32) -> Option<&'static [TaxBracket]> {
    match year {
        2023 => Some(&BRACKETS_2023),
        2024 => Some(&BRACKETS_2024),
        2025 => Some(&BRACKETS_2025),
        _ => None,
    }
}
