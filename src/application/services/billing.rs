//! Billing ledger service: prices meter readings into bills

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{
    compute_amount, cost_breakdown, Bill, BillDetails, BillStatus, ConnectionType, CostBreakdown,
    DomainError, DomainResult, MeterReadings, NewBill, RepositoryProvider,
};

/// Request to bill one consumer for one period
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateBill {
    pub consumer_id: i32,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub readings: MeterReadings,
}

/// Service for bill generation and lookup
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Bills with consumer identity, most recent first
    pub async fn list(&self, status: Option<BillStatus>) -> DomainResult<Vec<BillDetails>> {
        self.repos.bills().find_all(status).await
    }

    pub async fn get(&self, bill_id: i32) -> DomainResult<BillDetails> {
        self.repos
            .bills()
            .find_by_id(bill_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Bill", "bill_id", bill_id))
    }

    /// Price the readings with the consumer's tariff and store a `Pending` bill.
    ///
    /// The consumer must exist and the meter must not have gone backwards;
    /// nothing is stored otherwise.
    pub async fn generate(&self, request: GenerateBill) -> DomainResult<Bill> {
        let consumer = self
            .repos
            .consumers()
            .find_by_id(request.consumer_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found("Consumer", "consumer_id", request.consumer_id)
            })?;

        let units = request.readings.units_consumed()?;
        let amount = compute_amount(units, consumer.connection_type);

        let bill = self
            .repos
            .bills()
            .save(NewBill {
                consumer_id: consumer.id,
                bill_date: request.bill_date,
                due_date: request.due_date,
                readings: request.readings,
                units_consumed: units,
                amount,
            })
            .await?;

        metrics::counter!(
            "bills_generated_total",
            "connection_type" => consumer.connection_type.to_string()
        )
        .increment(1);
        info!(
            bill_id = bill.id,
            consumer_id = consumer.id,
            units,
            amount = %amount,
            "Bill generated"
        );

        Ok(bill)
    }

    /// Price `units` without storing anything.
    pub fn preview(&self, units: u64, connection_type: ConnectionType) -> CostBreakdown {
        cost_breakdown(units, connection_type)
    }
}
