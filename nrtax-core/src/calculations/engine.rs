//! Result assembly for a complete Form 1040-NR calculation.
//!
//! The engine is a pure function of the profile and the static reference
//! tables: no I/O, no shared mutable state, safe to call concurrently for
//! different taxpayers. Residency classification runs first because it
//! gates which deductions are legal; the wage-bracket and Schedule NEC
//! taxes are computed independently, each rounded to cents, and combined
//! into a whole-dollar total with half-up rounding.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_to_whole_dollar;
use crate::calculations::nec::{self, NecInput};
use crate::calculations::wage_tax::WageTaxCalculator;
use crate::calculations::{deduction, residency};
use crate::models::{Balance, TaxResult, TaxpayerProfile};
use crate::reference::treaty::{self, BenefitKind, TreatyCountry};
use crate::reference::brackets;

/// Errors the engine surfaces at its boundary.
///
/// Only invariant violations and a missing bracket year abort a
/// calculation. Unknown countries and malformed entry dates are not
/// errors: they degrade to default benefits and the non-exempt path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A monetary profile field is negative.
    #[error("{field} must be non-negative, got {amount}")]
    NegativeAmount { field: &'static str, amount: Decimal },

    /// A day-count field exceeds a calendar year.
    #[error("{field} must be between 0 and 366, got {days}")]
    DayCountOutOfRange { field: &'static str, days: u16 },

    /// No bracket ladder is tabulated for the requested year. The engine
    /// fails loudly rather than silently reusing an adjacent year.
    #[error("no tax bracket table for tax year {0}")]
    UnsupportedYear(i32),
}

/// States with no income tax; state withholding there is probably a W-2
/// transcription error.
const NO_INCOME_TAX_STATES: [&str; 9] =
    ["TX", "FL", "WA", "TN", "NH", "NV", "SD", "WY", "AK"];

/// High-tax states where zero withholding usually means a state balance due.
const HIGH_TAX_STATES: [&str; 6] = ["CA", "NY", "NJ", "OR", "MN", "HI"];

/// Federal tax engine for nonresident-alien (Form 1040-NR) returns.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use nrtax_core::{Balance, TaxEngine, TaxpayerProfile, VisaCategory};
///
/// let profile = TaxpayerProfile {
///     tax_year: 2025,
///     country_of_residence: "India".to_string(),
///     visa: VisaCategory::F1,
///     entry_date: Some("2022-08-15".to_string()),
///     state: None,
///     days_present: 365,
///     days_present_prior_year: 365,
///     days_present_two_years_prior: 120,
///     wages: dec!(50000),
///     federal_tax_withheld: dec!(5000),
///     social_security_tax_withheld: dec!(0),
///     medicare_tax_withheld: dec!(0),
///     state_tax_withheld: dec!(2000),
///     charitable_contributions: dec!(0),
///     dividend_income: dec!(0),
///     interest_income: dec!(0),
///     capital_gains: dec!(0),
///     capital_losses: dec!(0),
/// };
///
/// let result = TaxEngine::new().calculate(&profile).unwrap();
///
/// // Standard deduction 15,750 (India treaty) beats itemized 2,000.
/// assert_eq!(result.taxable_income, dec!(34250));
/// assert_eq!(result.wage_tax, dec!(3871.50));
/// assert_eq!(result.total_tax, dec!(3872));
/// assert_eq!(result.balance, Balance::Refund(dec!(1128)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxEngine;

impl TaxEngine {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the complete return for one taxpayer profile.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when a profile field violates its invariant
    /// or no bracket table exists for the filing year. No partial result
    /// is produced in either case.
    pub fn calculate(&self, profile: &TaxpayerProfile) -> Result<TaxResult, EngineError> {
        validate(profile)?;
        let ladder = brackets::for_year(profile.tax_year)
            .ok_or(EngineError::UnsupportedYear(profile.tax_year))?;

        let mut warnings = Vec::new();

        // Residency first: it gates which deductions are legal and carries
        // the hard Form 1040 boundary warning.
        let residency = residency::classify(profile);
        warnings.extend(residency.advisories);

        let country = TreatyCountry::parse(&profile.country_of_residence);
        if country.is_none() && !profile.country_of_residence.is_empty() {
            debug!(
                country = %profile.country_of_residence,
                "no treaty on file; default benefits apply"
            );
        }

        // Treaty income exemption, capped at actual wages so taxable wages
        // never go negative.
        let treaty_exemption = treaty::income_exemption(country).min(profile.wages);
        let taxable_wages = profile.wages - treaty_exemption;

        state_withholding_advisories(profile, &mut warnings);

        let standard_deduction = treaty::standard_deduction(country, profile.tax_year);
        let mut deduction = deduction::resolve(
            profile.state_tax_withheld,
            profile.charitable_contributions,
            standard_deduction,
        );
        warnings.append(&mut deduction.advisories);

        let taxable_income = (taxable_wages - deduction.amount).max(Decimal::ZERO);
        let wage_tax = WageTaxCalculator::new(ladder).calculate(taxable_income);

        let dividend_rate = treaty::dividend_rate(country);
        let nec = nec::calculate(&NecInput {
            dividend_income: profile.dividend_income,
            interest_income: profile.interest_income,
            capital_gains: profile.capital_gains,
            capital_losses: profile.capital_losses,
            days_present: profile.days_present,
            dividend_rate,
        });

        let total_tax = round_to_whole_dollar(wage_tax + nec.total);
        let balance = Balance::settle(profile.federal_tax_withheld, total_tax);

        // Trailing advisory block, fixed order.
        if let Some(country) = country {
            if treaty_exemption > Decimal::ZERO {
                let citation = treaty::treaty_article(Some(country), BenefitKind::IncomeExemption)
                    .map(|article| format!(" (Article {article})"))
                    .unwrap_or_default();
                warnings.push(format!(
                    "SUCCESS: Applied ${treaty_exemption:.2} income exemption based on \
                     {} tax treaty{citation}.",
                    country.name(),
                ));
            }
            if deduction.used_standard_deduction {
                let citation =
                    treaty::treaty_article(Some(country), BenefitKind::StandardDeduction)
                        .map(|article| format!(" (Article {article})"))
                        .unwrap_or_default();
                warnings.push(format!(
                    "SUCCESS: Applied Standard Deduction of ${standard_deduction:.2} \
                     based on {} tax treaty{citation}.",
                    country.name(),
                ));
            }
        }
        if nec.total > Decimal::ZERO {
            warnings.push(format!(
                "NOTE: You have ${:.2} in tax on passive income (Schedule NEC). This \
                 is added to your total tax liability.",
                nec.total,
            ));
        }

        Ok(TaxResult {
            taxable_wages,
            treaty_exemption,
            deduction: deduction.amount,
            used_standard_deduction: deduction.used_standard_deduction,
            taxable_income,
            wage_tax,
            nec_tax: nec.total,
            total_tax,
            balance,
            warnings,
            dividend_rate,
        })
    }
}

/// Enforces the profile's numeric invariants at the engine boundary.
fn validate(profile: &TaxpayerProfile) -> Result<(), EngineError> {
    let money = [
        ("wages", profile.wages),
        ("federal_tax_withheld", profile.federal_tax_withheld),
        (
            "social_security_tax_withheld",
            profile.social_security_tax_withheld,
        ),
        ("medicare_tax_withheld", profile.medicare_tax_withheld),
        ("state_tax_withheld", profile.state_tax_withheld),
        (
            "charitable_contributions",
            profile.charitable_contributions,
        ),
        ("dividend_income", profile.dividend_income),
        ("interest_income", profile.interest_income),
        ("capital_gains", profile.capital_gains),
        ("capital_losses", profile.capital_losses),
    ];
    for (field, amount) in money {
        if amount < Decimal::ZERO {
            return Err(EngineError::NegativeAmount { field, amount });
        }
    }

    let day_counts = [
        ("days_present", profile.days_present),
        ("days_present_prior_year", profile.days_present_prior_year),
        (
            "days_present_two_years_prior",
            profile.days_present_two_years_prior,
        ),
    ];
    for (field, days) in day_counts {
        if days > 366 {
            return Err(EngineError::DayCountOutOfRange { field, days });
        }
    }

    Ok(())
}

/// W-2 Box 17 sanity advisories; purely informational, never affects the
/// federal figures.
fn state_withholding_advisories(profile: &TaxpayerProfile, warnings: &mut Vec<String>) {
    let Some(state) = profile.state.as_deref() else {
        return;
    };
    let state = state.to_ascii_uppercase();

    if NO_INCOME_TAX_STATES.contains(&state.as_str())
        && profile.state_tax_withheld > Decimal::ZERO
    {
        warnings.push(format!(
            "WARNING: You entered ${:.2} state tax withheld, but {state} has NO state \
             income tax. Please verify Box 17 of your W-2.",
            profile.state_tax_withheld,
        ));
    }

    if HIGH_TAX_STATES.contains(&state.as_str()) && profile.state_tax_withheld == Decimal::ZERO {
        warnings.push(format!(
            "WARNING: You live in {state} (a high-tax state) but entered $0 state tax \
             withheld. You likely owe state taxes. Check your W-2 Box 17.",
        ));
    }
}
