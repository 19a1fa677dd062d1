//! Bilateral tax-treaty benefit table.
//!
//! Supported countries are a closed enum, so adding one is a
//! compile-time-checked table edit: every lookup below matches
//! exhaustively. An unrecognized country name is not an error — it simply
//! yields the default benefits (no standard deduction, no wage exemption,
//! the statutory 30% dividend rate).
//!
//! All lookups are pure; the table is static and never mutated at runtime.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Statutory dividend withholding rate, in percent, absent a treaty.
pub const DEFAULT_DIVIDEND_RATE: Decimal = dec!(30);

/// Countries with tabulated treaty benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatyCountry {
    India,
    China,
    Canada,
    SouthKorea,
    Japan,
}

impl TreatyCountry {
    /// Matches a country-of-residence name as entered on the return.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "India" => Some(Self::India),
            "China" => Some(Self::China),
            "Canada" => Some(Self::Canada),
            "South Korea" => Some(Self::SouthKorea),
            "Japan" => Some(Self::Japan),
            _ => None,
        }
    }

    /// Display name used in advisory messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::China => "China",
            Self::Canada => "Canada",
            Self::SouthKorea => "South Korea",
            Self::Japan => "Japan",
        }
    }
}

/// Which treaty benefit an article citation is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenefitKind {
    StandardDeduction,
    IncomeExemption,
}

/// Single-filer standard deduction for a tax year, per the IRS revenue
/// procedure for that year. Years outside the table fall back to the most
/// recent tabulated amount — a documented fallback, never a silent zero.
fn standard_deduction_amount(year: i32) -> Decimal {
    match year {
        2023 => dec!(13850),
        2024 => dec!(14600),
        2025 => dec!(15750),
        other => {
            warn!(
                year = other,
                "no standard deduction tabulated for year; using the 2025 amount"
            );
            dec!(15750)
        }
    }
}

/// Treaty-permitted standard deduction for `country` in `year`.
///
/// Only India's treaty (Article 21(2)) extends the US standard deduction to
/// nonresident students; every other country yields zero.
pub fn standard_deduction(country: Option<TreatyCountry>, year: i32) -> Decimal {
    match country {
        Some(TreatyCountry::India) => standard_deduction_amount(year),
        _ => Decimal::ZERO,
    }
}

/// Flat treaty exemption on wage income, before the cap at actual wages.
pub fn income_exemption(country: Option<TreatyCountry>) -> Decimal {
    match country {
        // Article 21(2) grants deductions rather than a wage exemption.
        Some(TreatyCountry::India) => Decimal::ZERO,
        Some(TreatyCountry::China) => dec!(5000),
        Some(TreatyCountry::Canada) => dec!(10000),
        Some(TreatyCountry::SouthKorea) => dec!(2000),
        Some(TreatyCountry::Japan) => dec!(2000),
        None => Decimal::ZERO,
    }
}

/// Dividend withholding rate, in percent.
pub fn dividend_rate(country: Option<TreatyCountry>) -> Decimal {
    match country {
        Some(TreatyCountry::India) => dec!(25),
        Some(TreatyCountry::China) => dec!(10),
        Some(TreatyCountry::Canada) => dec!(15),
        Some(TreatyCountry::SouthKorea) => dec!(10),
        Some(TreatyCountry::Japan) => dec!(10),
        None => DEFAULT_DIVIDEND_RATE,
    }
}

/// Treaty article granting the benefit, retained for citation on the
/// return and in advisories.
pub fn treaty_article(
    country: Option<TreatyCountry>,
    kind: BenefitKind,
) -> Option<&'static str> {
    match (country?, kind) {
        (TreatyCountry::India, BenefitKind::StandardDeduction) => Some("21(2)"),
        (TreatyCountry::China, BenefitKind::IncomeExemption) => Some("20(c)"),
        (TreatyCountry::Canada, BenefitKind::IncomeExemption) => Some("XV"),
        (TreatyCountry::SouthKorea, BenefitKind::IncomeExemption) => Some("21"),
        (TreatyCountry::Japan, BenefitKind::IncomeExemption) => Some("20"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_matches_supported_countries() {
        assert_eq!(TreatyCountry::parse("India"), Some(TreatyCountry::India));
        assert_eq!(
            TreatyCountry::parse("South Korea"),
            Some(TreatyCountry::SouthKorea)
        );
        assert_eq!(TreatyCountry::parse("Germany"), None);
        assert_eq!(TreatyCountry::parse(""), None);
    }

    #[test]
    fn india_standard_deduction_tracks_the_tax_year() {
        let india = Some(TreatyCountry::India);

        assert_eq!(standard_deduction(india, 2023), dec!(13850));
        assert_eq!(standard_deduction(india, 2024), dec!(14600));
        assert_eq!(standard_deduction(india, 2025), dec!(15750));
    }

    #[test]
    fn missing_year_falls_back_to_most_recent_amount() {
        let india = Some(TreatyCountry::India);

        assert_eq!(standard_deduction(india, 2026), dec!(15750));
        assert_eq!(standard_deduction(india, 2019), dec!(15750));
    }

    #[test]
    fn only_india_gets_the_standard_deduction() {
        for country in [
            TreatyCountry::China,
            TreatyCountry::Canada,
            TreatyCountry::SouthKorea,
            TreatyCountry::Japan,
        ] {
            assert_eq!(standard_deduction(Some(country), 2025), dec!(0));
        }
        assert_eq!(standard_deduction(None, 2025), dec!(0));
    }

    #[test]
    fn income_exemptions_match_treaty_articles() {
        assert_eq!(income_exemption(Some(TreatyCountry::China)), dec!(5000));
        assert_eq!(income_exemption(Some(TreatyCountry::Canada)), dec!(10000));
        assert_eq!(income_exemption(Some(TreatyCountry::SouthKorea)), dec!(2000));
        assert_eq!(income_exemption(Some(TreatyCountry::Japan)), dec!(2000));
        assert_eq!(income_exemption(Some(TreatyCountry::India)), dec!(0));
        assert_eq!(income_exemption(None), dec!(0));
    }

    #[test]
    fn dividend_rates_default_to_thirty_percent() {
        assert_eq!(dividend_rate(Some(TreatyCountry::India)), dec!(25));
        assert_eq!(dividend_rate(Some(TreatyCountry::China)), dec!(10));
        assert_eq!(dividend_rate(Some(TreatyCountry::Canada)), dec!(15));
        assert_eq!(dividend_rate(None), dec!(30));
    }

    #[test]
    fn article_citations_match_benefit_kind() {
        assert_eq!(
            treaty_article(Some(TreatyCountry::India), BenefitKind::StandardDeduction),
            Some("21(2)")
        );
        assert_eq!(
            treaty_article(Some(TreatyCountry::India), BenefitKind::IncomeExemption),
            None
        );
        assert_eq!(
            treaty_article(Some(TreatyCountry::China), BenefitKind::IncomeExemption),
            Some("20(c)")
        );
        assert_eq!(
            treaty_article(Some(TreatyCountry::China), BenefitKind::StandardDeduction),
            None
        );
        assert_eq!(treaty_article(None, BenefitKind::IncomeExemption), None);
    }
}
