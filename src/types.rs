use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;

/// product identifier as issued by the catalog owner
pub type ProductCode = i32;

/// amortization method for a quoted schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmortizationMethod {
    /// constant amortization, declining interest and payment
    Sac,
    /// fixed installment (french system), growing amortization
    Price,
}

impl fmt::Display for AmortizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmortizationMethod::Sac => write!(f, "SAC"),
            AmortizationMethod::Price => write!(f, "PRICE"),
        }
    }
}

/// single installment of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based sequence number
    pub number: u32,
    pub amortization: Money,
    pub interest: Money,
    /// amortization + interest for the period
    pub payment: Money,
}

/// complete schedule produced under one amortization method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub method: AmortizationMethod,
    pub installments: Vec<Installment>,
}

impl AmortizationResult {
    /// sum of all installment payments
    pub fn total_paid(&self) -> Money {
        self.installments
            .iter()
            .map(|i| i.payment)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// sum of all interest portions
    pub fn total_interest(&self) -> Money {
        self.installments
            .iter()
            .map(|i| i.interest)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// sum of all amortization portions
    pub fn total_amortized(&self) -> Money {
        self.installments
            .iter()
            .map(|i| i.amortization)
            .fold(Money::ZERO, |acc, x| acc + x)
    }
}

/// outcome of a full simulation: the selected product plus both schedules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub product_name: String,
    pub sac: AmortizationResult,
    pub price: AmortizationResult,
}

impl SimulationOutcome {
    /// both schedules, sac first
    pub fn results(&self) -> [&AmortizationResult; 2] {
        [&self.sac, &self.price]
    }
}
