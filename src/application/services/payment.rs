//! Payment recorder service

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, NewPayment, Payment, PaymentDetails, RepositoryProvider};

pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Payments with the paying consumer, most recent first
    pub async fn list(&self) -> DomainResult<Vec<PaymentDetails>> {
        self.repos.payments().find_all().await
    }

    /// Store the payment and settle its bill atomically.
    ///
    /// Amounts are taken as given: partial, excess and repeat payments
    /// are all accepted.
    pub async fn record(&self, payment: NewPayment) -> DomainResult<Payment> {
        let method = payment.payment_method.clone();
        let stored = self.repos.payments().record(payment).await?;

        metrics::counter!("payments_recorded_total", "payment_method" => method).increment(1);
        info!(
            payment_id = stored.id,
            bill_id = stored.bill_id,
            amount_paid = stored.amount_paid,
            received_by = %stored.received_by,
            "Payment recorded"
        );

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::services::{BillingService, GenerateBill};
    use crate::domain::{BillStatus, ConnectionType, DomainError, MeterReadings, NewConsumer};
    use crate::infrastructure::database::test_connection;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
    }

    async fn setup() -> (PaymentService, BillingService, i32) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(test_connection().await));
        let consumer = repos
            .consumers()
            .save(
                NewConsumer {
                    name: "Leela Nair".to_string(),
                    address: "8 Beach Road".to_string(),
                    meter_number: "MTR-700".to_string(),
                    connection_type: ConnectionType::Domestic,
                    email: None,
                    phone: None,
                },
                date(1),
            )
            .await
            .unwrap();

        let billing = BillingService::new(repos.clone());
        let bill = billing
            .generate(GenerateBill {
                consumer_id: consumer.id,
                bill_date: date(1),
                due_date: date(20),
                readings: MeterReadings::new(0, 100),
            })
            .await
            .unwrap();

        (PaymentService::new(repos), billing, bill.id)
    }

    fn payment(bill_id: i32, amount_paid: f64) -> NewPayment {
        NewPayment {
            bill_id,
            payment_date: date(12),
            amount_paid,
            payment_method: "Cash".to_string(),
            transaction_id: None,
            received_by: "desk-1".to_string(),
        }
    }

    #[tokio::test]
    async fn recording_settles_the_bill() {
        let (svc, billing, bill_id) = setup().await;

        let stored = svc.record(payment(bill_id, 404.0)).await.unwrap();
        assert_eq!(stored.bill_id, bill_id);
        assert_eq!(billing.get(bill_id).await.unwrap().bill.status, BillStatus::Paid);

        let listed = svc.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].consumer_name, "Leela Nair");
    }

    #[tokio::test]
    async fn partial_payment_still_settles() {
        let (svc, billing, bill_id) = setup().await;

        svc.record(payment(bill_id, 10.0)).await.unwrap();
        assert_eq!(billing.get(bill_id).await.unwrap().bill.status, BillStatus::Paid);
    }

    #[tokio::test]
    async fn unknown_bill_is_not_found() {
        let (svc, _, bill_id) = setup().await;

        let err = svc.record(payment(bill_id + 100, 1.0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Bill not found");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(svc.list().await.unwrap().is_empty());
    }
}
