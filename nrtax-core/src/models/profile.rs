use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Visa category of the taxpayer.
///
/// J-1 visas are split by student status because the exempt-individual
/// window differs: five calendar years for students, two for other
/// exchange visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisaCategory {
    F1,
    J1Student,
    J1NonStudent,
    Other,
}

impl VisaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F1 => "F1",
            Self::J1Student => "J1-student",
            Self::J1NonStudent => "J1-non-student",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "F1" => Some(Self::F1),
            "J1-student" => Some(Self::J1Student),
            "J1-non-student" => Some(Self::J1NonStudent),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Validated per-calculation input for one taxpayer and one tax year.
///
/// The profile is consumed exactly once per calculation and never mutated.
/// Field presence is the caller's responsibility; the engine only enforces
/// the numeric invariants (non-negative money, day counts within 0–366) at
/// its boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    /// Filing year the calculation applies to.
    pub tax_year: i32,

    /// Country of tax residence as entered on the return. Matched against
    /// the treaty table; an unrecognized name means no treaty benefits.
    pub country_of_residence: String,

    /// Visa category, including the J-1 student distinction.
    pub visa: VisaCategory,

    /// First date of US entry, `YYYY-MM-DD`. Kept as the raw string so a
    /// malformed value degrades to the non-exempt path inside the residency
    /// classifier instead of failing upstream deserialization.
    pub entry_date: Option<String>,

    /// US state code from the W-2, used only for withholding advisories.
    pub state: Option<String>,

    /// Days physically present in the filing year.
    pub days_present: u16,

    /// Days physically present in the year before the filing year.
    pub days_present_prior_year: u16,

    /// Days physically present two years before the filing year.
    pub days_present_two_years_prior: u16,

    /// W-2 Box 1 wages.
    pub wages: Decimal,

    /// W-2 Box 2 federal income tax withheld.
    pub federal_tax_withheld: Decimal,

    /// W-2 Box 4 social security tax withheld.
    pub social_security_tax_withheld: Decimal,

    /// W-2 Box 6 Medicare tax withheld.
    pub medicare_tax_withheld: Decimal,

    /// W-2 Box 17 state income tax withheld (itemizable).
    pub state_tax_withheld: Decimal,

    /// Charitable contributions (itemizable).
    pub charitable_contributions: Decimal,

    /// 1099-DIV ordinary dividends.
    pub dividend_income: Decimal,

    /// 1099-INT interest income.
    pub interest_income: Decimal,

    /// 1099-B gross capital gains, short and long term combined.
    pub capital_gains: Decimal,

    /// 1099-B capital losses, entered as a positive amount.
    pub capital_losses: Decimal,
}

impl TaxpayerProfile {
    /// Combined FICA withholding (social security + Medicare).
    pub fn total_fica_withheld(&self) -> Decimal {
        self.social_security_tax_withheld + self.medicare_tax_withheld
    }
}
