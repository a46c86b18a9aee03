//! Dashboard aggregator

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DashboardStats, DomainResult, RepositoryProvider};

pub struct DashboardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DashboardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn stats(&self) -> DomainResult<DashboardStats> {
        let snapshot = self.repos.dashboard().snapshot().await?;
        debug!(?snapshot, "Dashboard snapshot");
        Ok(DashboardStats::from(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::services::{BillingService, GenerateBill, PaymentService};
    use crate::domain::{ConnectionType, MeterReadings, NewConsumer, NewPayment};
    use crate::infrastructure::database::test_connection;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    async fn repos() -> Arc<dyn RepositoryProvider> {
        Arc::new(SeaOrmRepositoryProvider::new(test_connection().await))
    }

    #[tokio::test]
    async fn no_bills_means_zero_collection_rate() {
        let stats = DashboardService::new(repos().await).stats().await.unwrap();
        assert_eq!(stats.total_consumers, 0);
        assert_eq!(stats.total_bills, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.collection_rate, 0.0);
    }

    #[tokio::test]
    async fn stats_follow_bills_and_payments() {
        let repos = repos().await;
        let consumer = repos
            .consumers()
            .save(
                NewConsumer {
                    name: "Omar Sheikh".to_string(),
                    address: "5 Fort Road".to_string(),
                    meter_number: "MTR-900".to_string(),
                    connection_type: ConnectionType::Commercial,
                    email: None,
                    phone: None,
                },
                date(1),
            )
            .await
            .unwrap();

        let billing = BillingService::new(repos.clone());
        let mut bill_ids = Vec::new();
        for (previous, current) in [(0, 100), (100, 150), (150, 300)] {
            let bill = billing
                .generate(GenerateBill {
                    consumer_id: consumer.id,
                    bill_date: date(1),
                    due_date: date(15),
                    readings: MeterReadings::new(previous, current),
                })
                .await
                .unwrap();
            bill_ids.push(bill.id);
        }

        PaymentService::new(repos.clone())
            .record(NewPayment {
                bill_id: bill_ids[0],
                payment_date: date(5),
                amount_paid: 640.0,
                payment_method: "Card".to_string(),
                transaction_id: Some("CARD-1".to_string()),
                received_by: "desk-3".to_string(),
            })
            .await
            .unwrap();

        let stats = DashboardService::new(repos).stats().await.unwrap();
        assert_eq!(stats.total_consumers, 1);
        assert_eq!(stats.total_bills, 3);
        assert_eq!(stats.pending_bills, 2);
        assert_eq!(stats.total_revenue, 640.0);
        assert_eq!(stats.collection_rate, 33.33);
    }
}
