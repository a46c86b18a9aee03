//! SeaORM implementation of DashboardRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::domain::dashboard::{BillingSnapshot, DashboardRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{bill, consumer, payment};

pub struct SeaOrmDashboardRepository {
    db: DatabaseConnection,
}

impl SeaOrmDashboardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn count_bills(&self, status: Option<bill::BillStatus>) -> DomainResult<u64> {
        let mut query = bill::Entity::find();
        if let Some(status) = status {
            query = query.filter(bill::Column::Status.eq(status));
        }
        Ok(query.count(&self.db).await?)
    }

    async fn total_revenue(&self) -> DomainResult<f64> {
        // SUM over no rows is NULL
        let total: Option<Option<f64>> = payment::Entity::find()
            .select_only()
            .column_as(
                Expr::col((payment::Entity, payment::Column::AmountPaid)).sum(),
                "total_revenue",
            )
            .into_tuple()
            .one(&self.db)
            .await?;
        Ok(total.flatten().unwrap_or(0.0))
    }
}

#[async_trait]
impl DashboardRepository for SeaOrmDashboardRepository {
    async fn snapshot(&self) -> DomainResult<BillingSnapshot> {
        let active_consumers = consumer::Entity::find()
            .filter(consumer::Column::Status.eq(consumer::ConsumerStatus::Active))
            .count(&self.db)
            .await?;

        Ok(BillingSnapshot {
            active_consumers,
            total_bills: self.count_bills(None).await?,
            pending_bills: self.count_bills(Some(bill::BillStatus::Pending)).await?,
            paid_bills: self.count_bills(Some(bill::BillStatus::Paid)).await?,
            total_revenue: self.total_revenue().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{ActiveModelTrait, Set};

    use super::*;
    use crate::infrastructure::database::test_connection;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    async fn insert_consumer(
        db: &DatabaseConnection,
        meter: &str,
        status: consumer::ConsumerStatus,
    ) -> i32 {
        consumer::ActiveModel {
            name: Set(format!("Consumer {}", meter)),
            address: Set("1 Main Road".to_string()),
            meter_number: Set(meter.to_string()),
            connection_type: Set(consumer::ConnectionType::Domestic),
            email: Set(None),
            phone: Set(None),
            registration_date: Set(day()),
            status: Set(status),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .consumer_id
    }

    async fn insert_bill(db: &DatabaseConnection, consumer_id: i32, status: bill::BillStatus) -> i32 {
        bill::ActiveModel {
            consumer_id: Set(consumer_id),
            bill_date: Set(day()),
            due_date: Set(day()),
            previous_reading: Set(0),
            current_reading: Set(100),
            units_consumed: Set(100),
            amount: Set(404.0),
            status: Set(status),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .bill_id
    }

    async fn insert_payment(db: &DatabaseConnection, bill_id: i32, amount: f64) {
        payment::ActiveModel {
            bill_id: Set(bill_id),
            payment_date: Set(day()),
            amount_paid: Set(amount),
            payment_method: Set("Cash".to_string()),
            transaction_id: Set(None),
            received_by: Set("clerk".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn empty_database_snapshot_is_zero() {
        let repo = SeaOrmDashboardRepository::new(test_connection().await);
        assert_eq!(repo.snapshot().await.unwrap(), BillingSnapshot::default());
    }

    #[tokio::test]
    async fn snapshot_counts_and_sums() {
        let db = test_connection().await;
        let a = insert_consumer(&db, "MTR-A", consumer::ConsumerStatus::Active).await;
        insert_consumer(&db, "MTR-B", consumer::ConsumerStatus::Active).await;
        insert_consumer(&db, "MTR-C", consumer::ConsumerStatus::Inactive).await;

        let paid = insert_bill(&db, a, bill::BillStatus::Paid).await;
        insert_bill(&db, a, bill::BillStatus::Pending).await;
        insert_bill(&db, a, bill::BillStatus::Pending).await;
        insert_payment(&db, paid, 404.0).await;
        insert_payment(&db, paid, 100.5).await;

        let snapshot = SeaOrmDashboardRepository::new(db).snapshot().await.unwrap();
        assert_eq!(snapshot.active_consumers, 2);
        assert_eq!(snapshot.total_bills, 3);
        assert_eq!(snapshot.pending_bills, 2);
        assert_eq!(snapshot.paid_bills, 1);
        assert_eq!(snapshot.total_revenue, 504.5);
    }
}
