pub mod decimal;
pub mod errors;
pub mod product;
pub mod schedule;
pub mod simulation;
pub mod store;
pub mod telemetry;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, SimulationError};
pub use product::{Product, ProductCatalog};
pub use schedule::{payment_amount, ScheduleCalculator};
pub use simulation::{simulate, simulate_with, SimulationRequest, SimulationService};
pub use store::{SimulationRecord, SimulationStore};
pub use telemetry::{ProductVolume, TelemetryReport};
pub use types::{
    AmortizationMethod, AmortizationResult, Installment, ProductCode, SimulationOutcome,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
