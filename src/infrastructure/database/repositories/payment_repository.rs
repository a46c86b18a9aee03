//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{info, warn};

use crate::domain::payment::{NewPayment, Payment, PaymentDetails, PaymentRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{bill, consumer, payment};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(p: payment::Model) -> Payment {
    Payment {
        id: p.payment_id,
        bill_id: p.bill_id,
        payment_date: p.payment_date,
        amount_paid: p.amount_paid,
        payment_method: p.payment_method,
        transaction_id: p.transaction_id,
        received_by: p.received_by,
    }
}

/// A payment row joined through its bill to the owning consumer
#[derive(Debug, FromQueryResult)]
struct PaymentRow {
    payment_id: i32,
    bill_id: i32,
    payment_date: NaiveDate,
    amount_paid: f64,
    payment_method: String,
    transaction_id: Option<String>,
    received_by: String,
    consumer_name: String,
}

impl From<PaymentRow> for PaymentDetails {
    fn from(r: PaymentRow) -> Self {
        Self {
            payment: Payment {
                id: r.payment_id,
                bill_id: r.bill_id,
                payment_date: r.payment_date,
                amount_paid: r.amount_paid,
                payment_method: r.payment_method,
                transaction_id: r.transaction_id,
                received_by: r.received_by,
            },
            consumer_name: r.consumer_name,
        }
    }
}

// ── SeaOrmPaymentRepository ─────────────────────────────────────

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn find_all(&self) -> DomainResult<Vec<PaymentDetails>> {
        let rows = payment::Entity::find()
            .column_as(consumer::Column::Name, "consumer_name")
            .join(JoinType::InnerJoin, payment::Relation::Bill.def())
            .join(JoinType::InnerJoin, bill::Relation::Consumer.def())
            .order_by_desc(payment::Column::PaymentId)
            .into_model::<PaymentRow>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(PaymentDetails::from).collect())
    }

    async fn record(&self, p: NewPayment) -> DomainResult<Payment> {
        // Dropping `txn` without commit rolls back both writes.
        let txn = self.db.begin().await?;

        let Some(settled) = bill::Entity::find_by_id(p.bill_id).one(&txn).await? else {
            return Err(DomainError::not_found("Bill", "bill_id", p.bill_id));
        };

        if settled.status == bill::BillStatus::Paid {
            warn!(bill_id = settled.bill_id, "Recording another payment on a bill already paid");
        }

        let stored = payment::ActiveModel {
            bill_id: Set(p.bill_id),
            payment_date: Set(p.payment_date),
            amount_paid: Set(p.amount_paid),
            payment_method: Set(p.payment_method),
            transaction_id: Set(p.transaction_id),
            received_by: Set(p.received_by),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut settled: bill::ActiveModel = settled.into();
        settled.status = Set(bill::BillStatus::Paid);
        settled.update(&txn).await?;

        txn.commit().await?;

        info!(
            payment_id = stored.payment_id,
            bill_id = stored.bill_id,
            amount_paid = stored.amount_paid,
            "Payment recorded, bill marked Paid"
        );
        Ok(entity_to_domain(stored))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use sea_orm::{ConnectionTrait, DatabaseConnection};

    use super::*;
    use crate::domain::bill::{BillRepository, BillStatus, MeterReadings, NewBill};
    use crate::domain::consumer::{ConsumerRepository, NewConsumer};
    use crate::domain::tariff::ConnectionType;
    use crate::infrastructure::database::repositories::{
        SeaOrmBillRepository, SeaOrmConsumerRepository,
    };
    use crate::infrastructure::database::test_connection;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    async fn seed_bill(db: &DatabaseConnection) -> i32 {
        let consumer = SeaOrmConsumerRepository::new(db.clone())
            .save(
                NewConsumer {
                    name: "Kiran Rao".to_string(),
                    address: "9 Hill Street".to_string(),
                    meter_number: "MTR-9".to_string(),
                    connection_type: ConnectionType::Domestic,
                    email: None,
                    phone: None,
                },
                date(1),
            )
            .await
            .unwrap();

        SeaOrmBillRepository::new(db.clone())
            .save(NewBill {
                consumer_id: consumer.id,
                bill_date: date(1),
                due_date: date(15),
                readings: MeterReadings::new(0, 100),
                units_consumed: 100,
                amount: dec!(404.00),
            })
            .await
            .unwrap()
            .id
    }

    fn new_payment(bill_id: i32) -> NewPayment {
        NewPayment {
            bill_id,
            payment_date: date(10),
            amount_paid: 404.0,
            payment_method: "UPI".to_string(),
            transaction_id: Some("UPI-7781".to_string()),
            received_by: "counter-2".to_string(),
        }
    }

    #[tokio::test]
    async fn record_marks_bill_paid() {
        let db = test_connection().await;
        let bill_id = seed_bill(&db).await;
        let repo = SeaOrmPaymentRepository::new(db.clone());

        let stored = repo.record(new_payment(bill_id)).await.unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.bill_id, bill_id);
        assert_eq!(stored.transaction_id.as_deref(), Some("UPI-7781"));

        let bill = SeaOrmBillRepository::new(db)
            .find_by_id(bill_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bill.bill.status, BillStatus::Paid);

        let listed = repo.find_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].payment, stored);
        assert_eq!(listed[0].consumer_name, "Kiran Rao");
    }

    #[tokio::test]
    async fn unknown_bill_writes_nothing() {
        let db = test_connection().await;
        let repo = SeaOrmPaymentRepository::new(db);

        let err = repo.record(new_payment(77)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Bill", .. }));
        assert_eq!(err.to_string(), "Bill not found");
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_payment_on_paid_bill_is_accepted() {
        let db = test_connection().await;
        let bill_id = seed_bill(&db).await;
        let repo = SeaOrmPaymentRepository::new(db);

        repo.record(new_payment(bill_id)).await.unwrap();
        repo.record(new_payment(bill_id)).await.unwrap();

        let listed = repo.find_all().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].payment.id > listed[1].payment.id);
    }

    #[tokio::test]
    async fn failed_bill_update_rolls_back_payment() {
        let db = test_connection().await;
        let bill_id = seed_bill(&db).await;

        // Make the status update fail after the payment insert has run.
        db.execute_unprepared(
            "CREATE TRIGGER reject_paid BEFORE UPDATE ON bills \
             BEGIN SELECT RAISE(ABORT, 'bills are frozen'); END;",
        )
        .await
        .unwrap();

        let repo = SeaOrmPaymentRepository::new(db.clone());
        let err = repo.record(new_payment(bill_id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert!(repo.find_all().await.unwrap().is_empty());

        let bill = SeaOrmBillRepository::new(db)
            .find_by_id(bill_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bill.bill.status, BillStatus::Pending);
    }
}
