//! SeaORM implementation of BillRepository

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::bill::{Bill, BillDetails, BillRepository, BillStatus, NewBill};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{bill, consumer};

// ── Conversion helpers ──────────────────────────────────────────

fn status_from_entity(s: bill::BillStatus) -> BillStatus {
    match s {
        bill::BillStatus::Pending => BillStatus::Pending,
        bill::BillStatus::Paid => BillStatus::Paid,
    }
}

fn status_to_entity(s: BillStatus) -> bill::BillStatus {
    match s {
        BillStatus::Pending => bill::BillStatus::Pending,
        BillStatus::Paid => bill::BillStatus::Paid,
    }
}

fn entity_to_domain(b: bill::Model) -> Bill {
    Bill {
        id: b.bill_id,
        consumer_id: b.consumer_id,
        bill_date: b.bill_date,
        due_date: b.due_date,
        previous_reading: b.previous_reading,
        current_reading: b.current_reading,
        units_consumed: b.units_consumed,
        amount: b.amount,
        status: status_from_entity(b.status),
    }
}

/// Bills whose consumer row is missing are dropped, as an inner join would.
fn with_consumer(row: (bill::Model, Option<consumer::Model>)) -> Option<BillDetails> {
    let (b, c) = row;
    let c = c?;
    Some(BillDetails {
        bill: entity_to_domain(b),
        consumer_name: c.name,
        meter_number: c.meter_number,
    })
}

// ── SeaOrmBillRepository ────────────────────────────────────────

pub struct SeaOrmBillRepository {
    db: DatabaseConnection,
}

impl SeaOrmBillRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillRepository for SeaOrmBillRepository {
    async fn find_all(&self, status: Option<BillStatus>) -> DomainResult<Vec<BillDetails>> {
        let mut query = bill::Entity::find();
        if let Some(status) = status {
            query = query.filter(bill::Column::Status.eq(status_to_entity(status)));
        }

        let rows = query
            .find_also_related(consumer::Entity)
            .order_by_desc(bill::Column::BillId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().filter_map(with_consumer).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillDetails>> {
        let row = bill::Entity::find_by_id(id)
            .find_also_related(consumer::Entity)
            .one(&self.db)
            .await?;
        Ok(row.and_then(with_consumer))
    }

    async fn save(&self, b: NewBill) -> DomainResult<Bill> {
        let units = i64::try_from(b.units_consumed).map_err(|_| {
            DomainError::Validation(format!("Units consumed out of range: {}", b.units_consumed))
        })?;
        let amount = b
            .amount
            .to_f64()
            .ok_or_else(|| DomainError::Validation(format!("Amount out of range: {}", b.amount)))?;

        let model = bill::ActiveModel {
            consumer_id: Set(b.consumer_id),
            bill_date: Set(b.bill_date),
            due_date: Set(b.due_date),
            previous_reading: Set(b.readings.previous),
            current_reading: Set(b.readings.current),
            units_consumed: Set(units),
            amount: Set(amount),
            status: Set(bill::BillStatus::Pending),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        info!(
            bill_id = result.bill_id,
            consumer_id = result.consumer_id,
            units = result.units_consumed,
            amount = result.amount,
            "Bill saved"
        );
        Ok(entity_to_domain(result))
    }
}
