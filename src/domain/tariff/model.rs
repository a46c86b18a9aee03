//! Tariff domain: connection classes and tiered pricing

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::shared::errors::DomainError;

/// Surcharge applied to the tiered energy charge (18%).
pub const SURCHARGE_RATE: Decimal = dec!(0.18);

/// Flat charge added after the surcharge. Not itself surcharged.
pub const FIXED_CHARGE: Decimal = dec!(50);

/// Tariff category of a consumer connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    Domestic,
    Commercial,
}

impl ConnectionType {
    /// Marginal rate schedule for this connection class.
    pub fn schedule(&self) -> TariffSchedule {
        match self {
            Self::Domestic => TariffSchedule::new([
                Tier::bounded(100, dec!(3.0)),
                Tier::bounded(200, dec!(5.0)),
                Tier::unbounded(dec!(7.0)),
            ]),
            Self::Commercial => TariffSchedule::new([
                Tier::bounded(100, dec!(5.0)),
                Tier::bounded(200, dec!(8.0)),
                Tier::unbounded(dec!(10.0)),
            ]),
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "Domestic"),
            Self::Commercial => write!(f, "Commercial"),
        }
    }
}

impl FromStr for ConnectionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Domestic" => Ok(Self::Domestic),
            "Commercial" => Ok(Self::Commercial),
            other => Err(DomainError::Validation(format!(
                "Invalid connection type: {} (expected Domestic or Commercial)",
                other
            ))),
        }
    }
}

/// A contiguous block of units billed at one marginal rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Number of units in this tier; `None` for the open-ended last tier
    pub width: Option<u64>,
    /// Price per unit
    pub rate: Decimal,
}

impl Tier {
    pub const fn bounded(width: u64, rate: Decimal) -> Self {
        Self {
            width: Some(width),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self { width: None, rate }
    }
}

/// Ordered marginal tiers. Units fill each tier before spilling into the next.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffSchedule {
    tiers: [Tier; 3],
}

impl TariffSchedule {
    pub const fn new(tiers: [Tier; 3]) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Tiered energy charge before surcharge and fixed charge.
    pub fn energy_charge(&self, units: u64) -> Decimal {
        let mut remaining = units;
        let mut charge = Decimal::ZERO;

        for tier in &self.tiers {
            if remaining == 0 {
                break;
            }
            let billed = match tier.width {
                Some(width) => remaining.min(width),
                None => remaining,
            };
            charge += Decimal::from(billed) * tier.rate;
            remaining -= billed;
        }

        charge
    }
}

/// Itemised amount for a number of units
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub units_consumed: u64,
    pub connection_type: ConnectionType,
    pub energy_charge: Decimal,
    pub surcharge: Decimal,
    pub fixed_charge: Decimal,
    /// Rounded to 2 decimal places, half away from zero
    pub total: Decimal,
}

/// Calculate the itemised bill for `units` consumed on a connection class.
pub fn cost_breakdown(units: u64, connection_type: ConnectionType) -> CostBreakdown {
    let energy_charge = connection_type.schedule().energy_charge(units);
    let surcharge = energy_charge * SURCHARGE_RATE;
    let total = round_money(energy_charge + surcharge + FIXED_CHARGE);

    CostBreakdown {
        units_consumed: units,
        connection_type,
        energy_charge: round_money(energy_charge),
        surcharge: round_money(surcharge),
        fixed_charge: FIXED_CHARGE,
        total,
    }
}

/// Billed amount for `units` consumed, rounded to 2 decimal places.
pub fn compute_amount(units: u64, connection_type: ConnectionType) -> Decimal {
    cost_breakdown(units, connection_type).total
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ── Tests ──────────────────────────────────────────────────────
