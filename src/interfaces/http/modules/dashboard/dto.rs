//! Dashboard DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DashboardStats;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    /// Active consumers only
    pub total_consumers: u64,
    pub total_bills: u64,
    /// Sum of all payments received
    pub total_revenue: f64,
    pub pending_bills: u64,
    /// Percent of bills paid, 2 decimals
    pub collection_rate: f64,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(s: DashboardStats) -> Self {
        Self {
            total_consumers: s.total_consumers,
            total_bills: s.total_bills,
            total_revenue: s.total_revenue,
            pending_bills: s.pending_bills,
            collection_rate: s.collection_rate,
        }
    }
}
