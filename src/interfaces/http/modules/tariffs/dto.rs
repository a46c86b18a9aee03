//! Tariff preview DTOs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ConnectionType, CostBreakdown, DomainError};
use crate::interfaces::http::common::RequiredFields;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TariffPreviewRequest {
    #[validate(range(min = 0, message = "units_consumed must not be negative"))]
    pub units_consumed: Option<i64>,
    /// "Domestic" or "Commercial"
    pub connection_type: Option<String>,
}

impl RequiredFields for TariffPreviewRequest {
    fn first_missing(&self) -> Option<&'static str> {
        if self.units_consumed.is_none() {
            Some("units_consumed")
        } else if self.connection_type.is_none() {
            Some("connection_type")
        } else {
            None
        }
    }
}

impl TariffPreviewRequest {
    /// Units and connection class, checked.
    pub fn parts(&self) -> Result<(u64, ConnectionType), DomainError> {
        let units = self
            .units_consumed
            .ok_or_else(|| DomainError::missing_field("units_consumed"))?;
        let units = u64::try_from(units).map_err(|_| {
            DomainError::Validation("units_consumed must not be negative".to_string())
        })?;
        let connection_type = self
            .connection_type
            .as_deref()
            .ok_or_else(|| DomainError::missing_field("connection_type"))?
            .parse()?;
        Ok((units, connection_type))
    }
}

/// Itemised amount, every money field rounded to 2 decimals
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TariffPreviewResponse {
    pub units_consumed: u64,
    pub connection_type: String,
    pub energy_charge: f64,
    pub surcharge: f64,
    pub fixed_charge: f64,
    pub amount: f64,
}

fn money(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

impl From<CostBreakdown> for TariffPreviewResponse {
    fn from(b: CostBreakdown) -> Self {
        Self {
            units_consumed: b.units_consumed,
            connection_type: b.connection_type.to_string(),
            energy_charge: money(b.energy_charge),
            surcharge: money(b.surcharge),
            fixed_charge: money(b.fixed_charge),
            amount: money(b.total),
        }
    }
}
