use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum SimulationError {
    /// expected business outcome, not a defect
    #[error("no eligible product for principal {principal} over {term} months")]
    NoEligibleProduct {
        principal: Money,
        term: u32,
    },

    #[error("principal must be positive, got {principal}")]
    InvalidPrincipal {
        principal: Money,
    },

    #[error("term must be at least one month, got {term}")]
    InvalidTerm {
        term: u32,
    },

    #[error("monthly rate must not be negative, got {rate}")]
    NegativeRate {
        rate: Rate,
    },
}

impl SimulationError {
    /// true for the "no compatible product" business outcome, false for
    /// caller contract violations
    pub fn is_not_found(&self) -> bool {
        matches!(self, SimulationError::NoEligibleProduct { .. })
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
