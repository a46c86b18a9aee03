//! Tariff calculator
//!
//! Connection classes, their marginal rate schedules and the bill amount
//! calculation (tiered energy charge, surcharge, fixed charge).

pub mod model;

pub use model::{
    compute_amount, cost_breakdown, ConnectionType, CostBreakdown, TariffSchedule, Tier,
    FIXED_CHARGE, SURCHARGE_RATE,
};
