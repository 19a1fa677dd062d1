pub mod calculations;
pub mod models;
pub mod reference;

pub use calculations::engine::{EngineError, TaxEngine};
pub use models::*;
