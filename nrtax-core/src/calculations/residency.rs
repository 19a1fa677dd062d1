//! Residency classification: FICA exemption and the Substantial Presence
//! Test (SPT).
//!
//! F-1 and J-1 holders can be "exempt individuals" — excluded from the SPT
//! day count (and from FICA withholding) for a fixed number of calendar
//! years after entry. Everyone else is tested against the weighted
//! three-year day count; meeting it makes the taxpayer a resident alien,
//! which puts them outside this engine's Form 1040-NR scope entirely.
//!
//! A malformed or absent entry date never raises: it degrades to the
//! conservative non-exempt path with an advisory, preserving the original
//! filing behavior.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::models::{ResidencyDetermination, TaxpayerProfile, VisaCategory};

/// Minimum days of presence in the filing year before the SPT can be met.
const SPT_CURRENT_YEAR_MINIMUM: u16 = 31;

/// Weighted-day threshold of the Substantial Presence Test.
const SPT_THRESHOLD: Decimal = dec!(183);

/// Classification plus the advisories it generated, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidencyOutcome {
    pub determination: ResidencyDetermination,
    pub advisories: Vec<String>,
}

/// Classifies the taxpayer for the profile's filing year.
pub fn classify(profile: &TaxpayerProfile) -> ResidencyOutcome {
    let mut advisories = Vec::new();
    let total_fica = profile.total_fica_withheld();

    let is_exempt_individual = match years_in_us(profile, &mut advisories) {
        Some(years) => exempt_window(profile.visa)
            .is_some_and(|window| years >= 1 && years <= window),
        None => false,
    };

    if is_exempt_individual && total_fica > Decimal::ZERO {
        advisories.push(format!(
            "WARNING: You had ${total_fica:.2} in FICA taxes withheld. Based on your \
             entry date ({}), you are an Exempt Individual and should not pay FICA. \
             Ask your employer for a refund.",
            profile.entry_date.as_deref().unwrap_or(""),
        ));
    }

    // Exempt individuals are excluded from the SPT count entirely.
    let mut is_resident_alien = false;
    let mut weighted_presence_days = Decimal::ZERO;
    if !is_exempt_individual {
        weighted_presence_days = weighted_presence(profile);
        if profile.days_present >= SPT_CURRENT_YEAR_MINIMUM
            && weighted_presence_days >= SPT_THRESHOLD
        {
            is_resident_alien = true;
            advisories.push(format!(
                "CRITICAL: You meet the Substantial Presence Test \
                 ({weighted_presence_days:.1} weighted days). You are likely a \
                 Resident Alien for Tax Purposes. This tool (1040-NR) is NOT for \
                 you. You should file Form 1040.",
            ));
        }
    }

    if is_resident_alien && total_fica == Decimal::ZERO {
        advisories.push(
            "WARNING: You are a Resident Alien (SPT met) but had $0 FICA withheld. \
             You likely owe FICA taxes (Social Security + Medicare)."
                .to_string(),
        );
    }

    ResidencyOutcome {
        determination: ResidencyDetermination {
            is_exempt_individual,
            is_resident_alien,
            weighted_presence_days,
        },
        advisories,
    }
}

/// Exempt-individual window in calendar years, counted inclusively from
/// the entry year. `None` means the category is never exempt.
fn exempt_window(visa: VisaCategory) -> Option<i32> {
    match visa {
        VisaCategory::F1 => Some(5),
        VisaCategory::J1Student => Some(5),
        VisaCategory::J1NonStudent => Some(2),
        VisaCategory::Other => None,
    }
}

/// Calendar years in the US including the partial entry year, or `None`
/// when the entry date is absent or malformed.
fn years_in_us(profile: &TaxpayerProfile, advisories: &mut Vec<String>) -> Option<i32> {
    let raw = profile.entry_date.as_deref()?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(entry) => Some(profile.tax_year - entry.year() + 1),
        Err(error) => {
            warn!(
                entry_date = raw,
                %error,
                "malformed entry date; degrading to the non-exempt path"
            );
            advisories.push(format!(
                "NOTE: Entry date '{raw}' could not be parsed. Treating you as not \
                 exempt from the Substantial Presence Test.",
            ));
            None
        }
    }
}

/// Weighted SPT count: current-year days, one third of the prior year,
/// one sixth of the year before that, in exact decimal arithmetic.
fn weighted_presence(profile: &TaxpayerProfile) -> Decimal {
    Decimal::from(profile.days_present)
        + Decimal::from(profile.days_present_prior_year) / dec!(3)
        + Decimal::from(profile.days_present_two_years_prior) / dec!(6)
}
