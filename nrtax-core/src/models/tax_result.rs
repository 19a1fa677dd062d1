use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement of the total tax against federal withholding.
///
/// Modeled as a sum type so a result can never carry both a positive refund
/// and a positive balance due. Withholding that exactly covers the tax is a
/// zero refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    /// Withholding met or exceeded the total tax.
    Refund(Decimal),
    /// Total tax exceeded withholding.
    Due(Decimal),
}

impl Balance {
    /// Settles the total tax against the amount withheld.
    pub fn settle(withheld: Decimal, total_tax: Decimal) -> Self {
        let difference = withheld - total_tax;
        if difference >= Decimal::ZERO {
            Self::Refund(difference)
        } else {
            Self::Due(-difference)
        }
    }

    /// Refund amount; zero when a balance is due.
    pub fn refund(&self) -> Decimal {
        match self {
            Self::Refund(amount) => *amount,
            Self::Due(_) => Decimal::ZERO,
        }
    }

    /// Amount owed; zero when a refund is due.
    pub fn owed(&self) -> Decimal {
        match self {
            Self::Refund(_) => Decimal::ZERO,
            Self::Due(amount) => *amount,
        }
    }
}

/// Final output of one calculation, produced once and never mutated.
///
/// Monetary fields are plain decimal values: `wage_tax` and `nec_tax` are
/// rounded to cents, `total_tax` to the nearest whole dollar (half-up, as
/// IRS forms specify for whole-dollar lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Wages remaining after the treaty income exemption.
    pub taxable_wages: Decimal,

    /// Treaty income exemption actually applied (capped at wages).
    pub treaty_exemption: Decimal,

    /// Deduction applied, whichever of itemized or treaty standard
    /// deduction was selected.
    pub deduction: Decimal,

    /// Whether the treaty standard deduction was selected over itemized.
    pub used_standard_deduction: bool,

    /// Taxable income after exemption and deduction, floored at zero.
    pub taxable_income: Decimal,

    /// Progressive bracket tax on wage income, in cents precision.
    pub wage_tax: Decimal,

    /// Flat-rate Schedule NEC tax on passive income, in cents precision.
    pub nec_tax: Decimal,

    /// Combined liability, rounded to the nearest whole dollar.
    pub total_tax: Decimal,

    /// Refund or balance due against federal withholding.
    pub balance: Balance,

    /// Advisory messages in deterministic order.
    pub warnings: Vec<String>,

    /// Dividend withholding rate applied, in percent.
    pub dividend_rate: Decimal,
}
