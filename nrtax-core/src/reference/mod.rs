pub mod brackets;
pub mod treaty;

pub use brackets::TaxBracket;
pub use treaty::{BenefitKind, TreatyCountry};
