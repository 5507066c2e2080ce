use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::store::SimulationStore;
use crate::types::ProductCode;

/// per-product usage volume within a telemetry report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVolume {
    pub product_code: ProductCode,
    pub product_name: String,
    pub simulation_count: u32,
    pub total_principal: Money,
    pub total_paid: Money,
}

/// Usage summary for one calendar date, aggregated from the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryReport {
    pub reference_date: NaiveDate,
    pub simulation_count: u32,
    pub products: Vec<ProductVolume>,
}

impl TelemetryReport {
    /// aggregate the day's recorded simulations, products in first-seen order
    pub fn for_date(store: &SimulationStore, date: NaiveDate) -> Self {
        let mut simulation_count = 0u32;
        let mut products: Vec<ProductVolume> = Vec::new();

        for record in store.iter().filter(|r| r.simulated_at.date_naive() == date) {
            simulation_count += 1;
            match products.iter_mut().find(|v| v.product_code == record.product_code) {
                Some(volume) => {
                    volume.simulation_count += 1;
                    volume.total_principal += record.principal;
                    volume.total_paid += record.total_paid;
                }
                None => products.push(ProductVolume {
                    product_code: record.product_code,
                    product_name: record.product_name.clone(),
                    simulation_count: 1,
                    total_principal: record.principal,
                    total_paid: record.total_paid,
                }),
            }
        }

        Self {
            reference_date: date,
            simulation_count,
            products,
        }
    }
}
