//! SeaORM implementation of ConsumerRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use tracing::info;

use crate::domain::consumer::{Consumer, ConsumerRepository, ConsumerStatus, NewConsumer};
use crate::domain::tariff::ConnectionType;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::consumer;

const METER_NUMBER_TAKEN: &str = "Meter number already exists";

// ── Conversion helpers ──────────────────────────────────────────

fn connection_type_from_entity(t: consumer::ConnectionType) -> ConnectionType {
    match t {
        consumer::ConnectionType::Domestic => ConnectionType::Domestic,
        consumer::ConnectionType::Commercial => ConnectionType::Commercial,
    }
}

fn connection_type_to_entity(t: ConnectionType) -> consumer::ConnectionType {
    match t {
        ConnectionType::Domestic => consumer::ConnectionType::Domestic,
        ConnectionType::Commercial => consumer::ConnectionType::Commercial,
    }
}

fn status_from_entity(s: consumer::ConsumerStatus) -> ConsumerStatus {
    match s {
        consumer::ConsumerStatus::Active => ConsumerStatus::Active,
        consumer::ConsumerStatus::Inactive => ConsumerStatus::Inactive,
    }
}

fn entity_to_domain(c: consumer::Model) -> Consumer {
    Consumer {
        id: c.consumer_id,
        name: c.name,
        address: c.address,
        meter_number: c.meter_number,
        connection_type: connection_type_from_entity(c.connection_type),
        email: c.email,
        phone: c.phone,
        registration_date: c.registration_date,
        status: status_from_entity(c.status),
    }
}

fn insert_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict(METER_NUMBER_TAKEN.to_string())
        }
        _ => DomainError::from(e),
    }
}

// ── SeaOrmConsumerRepository ────────────────────────────────────

pub struct SeaOrmConsumerRepository {
    db: DatabaseConnection,
}

impl SeaOrmConsumerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConsumerRepository for SeaOrmConsumerRepository {
    async fn find_all(&self) -> DomainResult<Vec<Consumer>> {
        let models = consumer::Entity::find()
            .order_by_desc(consumer::Column::ConsumerId)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Consumer>> {
        let model = consumer::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_meter_number(&self, meter_number: &str) -> DomainResult<Option<Consumer>> {
        let model = consumer::Entity::find()
            .filter(consumer::Column::MeterNumber.eq(meter_number))
            .one(&self.db)
            .await?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(
        &self,
        c: NewConsumer,
        registration_date: NaiveDate,
    ) -> DomainResult<Consumer> {
        if self.find_by_meter_number(&c.meter_number).await?.is_some() {
            return Err(DomainError::Conflict(METER_NUMBER_TAKEN.to_string()));
        }

        // The unique index still catches a concurrent registration of the same meter.
        let model = consumer::ActiveModel {
            name: Set(c.name),
            address: Set(c.address),
            meter_number: Set(c.meter_number),
            connection_type: Set(connection_type_to_entity(c.connection_type)),
            email: Set(c.email),
            phone: Set(c.phone),
            registration_date: Set(registration_date),
            status: Set(consumer::ConsumerStatus::Active),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(insert_err)?;
        info!(
            consumer_id = result.consumer_id,
            meter_number = %result.meter_number,
            "Consumer saved"
        );
        Ok(entity_to_domain(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_connection;

    fn new_consumer(meter: &str) -> NewConsumer {
        NewConsumer {
            name: "Asha Verma".to_string(),
            address: "12 MG Road".to_string(),
            meter_number: meter.to_string(),
            connection_type: ConnectionType::Commercial,
            email: Some("asha@example.com".to_string()),
            phone: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn save_assigns_id_and_defaults() {
        let repo = SeaOrmConsumerRepository::new(test_connection().await);

        let saved = repo.save(new_consumer("MTR-1"), today()).await.unwrap();
        assert!(saved.id > 0);
        assert_eq!(saved.status, ConsumerStatus::Active);
        assert_eq!(saved.registration_date, today());
        assert_eq!(saved.connection_type, ConnectionType::Commercial);

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn duplicate_meter_number_is_conflict() {
        let repo = SeaOrmConsumerRepository::new(test_connection().await);
        repo.save(new_consumer("MTR-1"), today()).await.unwrap();

        let err = repo.save(new_consumer("MTR-1"), today()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(err.to_string(), "Meter number already exists");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_all_lists_newest_first() {
        let repo = SeaOrmConsumerRepository::new(test_connection().await);
        repo.save(new_consumer("MTR-1"), today()).await.unwrap();
        repo.save(new_consumer("MTR-2"), today()).await.unwrap();
        repo.save(new_consumer("MTR-3"), today()).await.unwrap();

        let meters: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.meter_number)
            .collect();
        assert_eq!(meters, vec!["MTR-3", "MTR-2", "MTR-1"]);
    }

    #[tokio::test]
    async fn lookups_miss_cleanly() {
        let repo = SeaOrmConsumerRepository::new(test_connection().await);
        assert!(repo.find_by_id(42).await.unwrap().is_none());
        assert!(repo.find_by_meter_number("nope").await.unwrap().is_none());
    }

    #[test]
    fn other_insert_errors_stay_storage_errors() {
        let err = insert_err(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
