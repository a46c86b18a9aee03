//! Bill domain entity

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::shared::errors::DomainError;

/// Settlement status of a bill. A bill only moves from `Pending` to `Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for BillStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Paid" => Ok(Self::Paid),
            other => Err(DomainError::Validation(format!(
                "Invalid bill status: {} (expected Pending or Paid)",
                other
            ))),
        }
    }
}

/// Meter readings bounding one billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterReadings {
    pub previous: i64,
    pub current: i64,
}

impl MeterReadings {
    pub fn new(previous: i64, current: i64) -> Self {
        Self { previous, current }
    }

    /// Units consumed in the period. Fails if the meter went backwards.
    pub fn units_consumed(&self) -> Result<u64, DomainError> {
        self.current
            .checked_sub(self.previous)
            .and_then(|units| u64::try_from(units).ok())
            .ok_or_else(|| {
                DomainError::Validation(
                    "Current reading must be greater than previous reading".to_string(),
                )
            })
    }
}

/// A persisted bill
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i32,
    pub consumer_id: i32,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub previous_reading: i64,
    pub current_reading: i64,
    /// Always `current_reading - previous_reading`
    pub units_consumed: i64,
    pub amount: f64,
    pub status: BillStatus,
}

/// A bill together with the identity of the consumer it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct BillDetails {
    pub bill: Bill,
    pub consumer_name: String,
    pub meter_number: String,
}

/// A priced bill ready to be persisted as `Pending`
#[derive(Debug, Clone, PartialEq)]
pub struct NewBill {
    pub consumer_id: i32,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub readings: MeterReadings,
    pub units_consumed: u64,
    pub amount: Decimal,
}
