//! Bill entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum BillStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Paid")]
    Paid,
}

impl Default for BillStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Bill model - one billing period for a consumer
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub bill_id: i32,

    pub consumer_id: i32,

    pub bill_date: NaiveDate,

    pub due_date: NaiveDate,

    pub previous_reading: i64,

    pub current_reading: i64,

    /// current_reading - previous_reading
    pub units_consumed: i64,

    /// Billed amount, 2 decimal places
    #[sea_orm(column_type = "Double")]
    pub amount: f64,

    pub status: BillStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::consumer::Entity",
        from = "Column::ConsumerId",
        to = "super::consumer::Column::ConsumerId",
        on_delete = "Cascade"
    )]
    Consumer,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::consumer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consumer.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
