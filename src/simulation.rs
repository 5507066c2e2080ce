use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};
use crate::product::{Product, ProductCatalog};
use crate::schedule::ScheduleCalculator;
use crate::store::{SimulationRecord, SimulationStore};
use crate::telemetry::TelemetryReport;
use crate::types::{AmortizationMethod, ProductCode, SimulationOutcome};

/// Requested principal and term for a quote. Validated at the ingress
/// boundary; the engines treat violations as contract errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub principal: Money,
    pub term_months: u32,
}

impl SimulationRequest {
    pub fn new(principal: Money, term_months: u32) -> Self {
        Self {
            principal,
            term_months,
        }
    }

    /// ingress contract: positive principal, at least one month
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(SimulationError::InvalidPrincipal {
                principal: self.principal,
            });
        }
        if self.term_months == 0 {
            return Err(SimulationError::InvalidTerm {
                term: self.term_months,
            });
        }
        Ok(())
    }
}

/// quote both schedules against the first eligible product in the catalog
pub fn simulate(request: &SimulationRequest, catalog: &ProductCatalog) -> Result<SimulationOutcome> {
    request.validate()?;

    let product = catalog
        .find_eligible(request)
        .ok_or(SimulationError::NoEligibleProduct {
            principal: request.principal,
            term: request.term_months,
        })?;

    log::debug!(
        "product {} ({}) selected for {} over {} months",
        product.code,
        product.name,
        request.principal,
        request.term_months
    );

    simulate_with(request, product)
}

/// quote both schedules for an already-selected product, sac first
pub fn simulate_with(request: &SimulationRequest, product: &Product) -> Result<SimulationOutcome> {
    let sac = ScheduleCalculator::new(AmortizationMethod::Sac).calculate(
        request.principal,
        request.term_months,
        product.monthly_rate,
    )?;
    let price = ScheduleCalculator::new(AmortizationMethod::Price).calculate(
        request.principal,
        request.term_months,
        product.monthly_rate,
    )?;

    Ok(SimulationOutcome {
        product_name: product.name.clone(),
        sac,
        price,
    })
}

/// Simulation service owning the catalog, the history store and the clock.
/// The quoting itself stays pure; the service adds recording on top.
pub struct SimulationService {
    catalog: ProductCatalog,
    store: SimulationStore,
    time: SafeTimeProvider,
}

impl SimulationService {
    pub fn new(catalog: ProductCatalog, time: SafeTimeProvider) -> Self {
        Self {
            catalog,
            store: SimulationStore::new(),
            time,
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &SimulationStore {
        &self.store
    }

    /// full flow: match, quote both schedules, record the result
    pub fn simulate(&mut self, request: &SimulationRequest) -> Result<SimulationOutcome> {
        request.validate()?;

        let product = self
            .catalog
            .find_eligible(request)
            .ok_or(SimulationError::NoEligibleProduct {
                principal: request.principal,
                term: request.term_months,
            })?
            .clone();

        let outcome = simulate_with(request, &product)?;
        self.store.record(request, &product, &outcome, &self.time);

        Ok(outcome)
    }

    /// history for one product on one calendar date, newest first
    pub fn simulations_for(&self, code: ProductCode, date: NaiveDate) -> Vec<&SimulationRecord> {
        self.store.by_product_on(code, date)
    }

    /// usage summary for one calendar date
    pub fn telemetry(&self, date: NaiveDate) -> TelemetryReport {
        TelemetryReport::for_date(&self.store, date)
    }
}
