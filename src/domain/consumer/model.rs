//! Consumer domain entity

use chrono::NaiveDate;

use crate::domain::tariff::ConnectionType;

/// Account status of a consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsumerStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for ConsumerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A billed customer, identified by a unique meter number
#[derive(Debug, Clone, PartialEq)]
pub struct Consumer {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Unique across all consumers, fixed after registration
    pub meter_number: String,
    pub connection_type: ConnectionType,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_date: NaiveDate,
    pub status: ConsumerStatus,
}

/// Registration data for a new consumer
#[derive(Debug, Clone, PartialEq)]
pub struct NewConsumer {
    pub name: String,
    pub address: String,
    pub meter_number: String,
    pub connection_type: ConnectionType,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewConsumer {
    /// Finalise registration: the consumer starts `Active` on `registration_date`.
    pub fn into_consumer(self, id: i32, registration_date: NaiveDate) -> Consumer {
        Consumer {
            id,
            name: self.name,
            address: self.address,
            meter_number: self.meter_number,
            connection_type: self.connection_type,
            email: self.email,
            phone: self.phone,
            registration_date,
            status: ConsumerStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_starts_active() {
        let new = NewConsumer {
            name: "Asha Verma".into(),
            address: "12 MG Road".into(),
            meter_number: "MTR-0001".into(),
            connection_type: ConnectionType::Domestic,
            email: None,
            phone: Some("9876543210".into()),
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let consumer = new.into_consumer(7, date);

        assert_eq!(consumer.id, 7);
        assert_eq!(consumer.status, ConsumerStatus::Active);
        assert_eq!(consumer.registration_date, date);
        assert_eq!(consumer.meter_number, "MTR-0001");
    }

    #[test]
    fn status_display() {
        assert_eq!(ConsumerStatus::Active.to_string(), "Active");
        assert_eq!(ConsumerStatus::Inactive.to_string(), "Inactive");
    }
}
