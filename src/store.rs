use chrono::{DateTime, NaiveDate, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::product::Product;
use crate::simulation::SimulationRequest;
use crate::types::{ProductCode, SimulationOutcome};

/// Immutable record of one completed simulation: the request parameters, a
/// snapshot of the selected product and the totals of the sac schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    pub id: Uuid,
    pub principal: Money,
    pub term_months: u32,
    pub product_code: ProductCode,
    pub product_name: String,
    pub monthly_rate: Rate,
    pub total_amortized: Money,
    pub total_interest: Money,
    pub total_paid: Money,
    pub simulated_at: DateTime<Utc>,
}

/// Append-only in-memory history of simulations. Owned by whoever
/// orchestrates the quoting; the engines never touch it.
#[derive(Debug, Clone, Default)]
pub struct SimulationStore {
    records: Vec<SimulationRecord>,
}

impl SimulationStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// append a record for a completed simulation; totals are taken from the
    /// sac schedule
    pub fn record(
        &mut self,
        request: &SimulationRequest,
        product: &Product,
        outcome: &SimulationOutcome,
        time: &SafeTimeProvider,
    ) -> &SimulationRecord {
        let record = SimulationRecord {
            id: Uuid::new_v4(),
            principal: request.principal,
            term_months: request.term_months,
            product_code: product.code,
            product_name: product.name.clone(),
            monthly_rate: product.monthly_rate,
            total_amortized: outcome.sac.total_amortized(),
            total_interest: outcome.sac.total_interest(),
            total_paid: outcome.sac.total_paid(),
            simulated_at: time.now(),
        };

        log::debug!(
            "recorded simulation {} for product {} at {}",
            record.id,
            record.product_code,
            record.simulated_at
        );

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationRecord> {
        self.records.iter()
    }

    /// lookup by record id
    pub fn find(&self, id: Uuid) -> Option<&SimulationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// all records for a product on one calendar date, newest first
    pub fn by_product_on(&self, code: ProductCode, date: NaiveDate) -> Vec<&SimulationRecord> {
        let mut hits: Vec<&SimulationRecord> = self
            .records
            .iter()
            .filter(|r| r.product_code == code && r.simulated_at.date_naive() == date)
            .collect();
        hits.sort_by(|a, b| b.simulated_at.cmp(&a.simulated_at));
        hits
    }
}
