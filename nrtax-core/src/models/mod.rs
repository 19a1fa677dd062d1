mod profile;
mod residency;
mod tax_result;

pub use profile::{TaxpayerProfile, VisaCategory};
pub use residency::ResidencyDetermination;
pub use tax_result::{Balance, TaxResult};
