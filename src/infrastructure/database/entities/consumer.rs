//! Consumer entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tariff category of the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ConnectionType {
    #[sea_orm(string_value = "Domestic")]
    Domestic,
    #[sea_orm(string_value = "Commercial")]
    Commercial,
}

/// Consumer account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ConsumerStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

impl Default for ConsumerStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Consumer model - a metered customer
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "consumers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub consumer_id: i32,

    pub name: String,

    pub address: String,

    /// Meter serial number, unique per consumer
    #[sea_orm(unique)]
    pub meter_number: String,

    pub connection_type: ConnectionType,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub registration_date: NaiveDate,

    pub status: ConsumerStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bill::Entity")]
    Bills,
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
