//! Calculation modules for the Form 1040-NR engine.
//!
//! Residency classification runs first (it gates which deductions are
//! legal); the wage-bracket and Schedule NEC calculators then run
//! independently on their income streams, and the engine assembles the
//! rounded total and the advisory list.

pub mod common;
pub mod deduction;
pub mod engine;
pub mod nec;
pub mod residency;
pub mod wage_tax;

pub use engine::{EngineError, TaxEngine};
