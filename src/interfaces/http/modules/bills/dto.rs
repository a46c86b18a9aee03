//! Bill DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::GenerateBill;
use crate::domain::{BillDetails, BillStatus, DomainError, MeterReadings};
use crate::interfaces::http::common::RequiredFields;

/// Bill annotated with its consumer's identity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillDto {
    pub bill_id: i32,
    pub consumer_id: i32,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub units_consumed: i64,
    pub amount: f64,
    /// `Pending` or `Paid`
    pub status: String,
    pub consumer_name: String,
    pub meter_number: String,
}

impl From<BillDetails> for BillDto {
    fn from(d: BillDetails) -> Self {
        let b = d.bill;
        Self {
            bill_id: b.id,
            consumer_id: b.consumer_id,
            bill_date: b.bill_date,
            due_date: b.due_date,
            previous_reading: b.previous_reading,
            current_reading: b.current_reading,
            units_consumed: b.units_consumed,
            amount: b.amount,
            status: b.status.to_string(),
            consumer_name: d.consumer_name,
            meter_number: d.meter_number,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BillListQuery {
    /// `Pending` or `Paid`
    pub status: Option<String>,
}

impl BillListQuery {
    pub fn status(&self) -> Result<Option<BillStatus>, DomainError> {
        self.status.as_deref().map(str::parse).transpose()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateBillRequest {
    pub consumer_id: Option<i32>,
    /// ISO date, e.g. `2024-04-01`
    pub bill_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "previous_reading must not be negative"))]
    pub previous_reading: Option<i64>,
    #[validate(range(min = 0, message = "current_reading must not be negative"))]
    pub current_reading: Option<i64>,
}

impl RequiredFields for GenerateBillRequest {
    fn first_missing(&self) -> Option<&'static str> {
        [
            ("consumer_id", self.consumer_id.is_none()),
            ("bill_date", self.bill_date.is_none()),
            ("due_date", self.due_date.is_none()),
            ("previous_reading", self.previous_reading.is_none()),
            ("current_reading", self.current_reading.is_none()),
        ]
        .into_iter()
        .find_map(|(field, missing)| missing.then_some(field))
    }
}

impl TryFrom<GenerateBillRequest> for GenerateBill {
    type Error = DomainError;

    fn try_from(req: GenerateBillRequest) -> Result<Self, Self::Error> {
        let missing = DomainError::missing_field;
        Ok(Self {
            consumer_id: req.consumer_id.ok_or_else(|| missing("consumer_id"))?,
            bill_date: req.bill_date.ok_or_else(|| missing("bill_date"))?,
            due_date: req.due_date.ok_or_else(|| missing("due_date"))?,
            readings: MeterReadings::new(
                req.previous_reading
                    .ok_or_else(|| missing("previous_reading"))?,
                req.current_reading.ok_or_else(|| missing("current_reading"))?,
            ),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateBillResponse {
    pub message: String,
    pub bill_id: i32,
    pub units_consumed: i64,
    pub amount: f64,
}
