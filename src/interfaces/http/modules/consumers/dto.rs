//! Consumer DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::{Consumer, DomainError, NewConsumer};
use crate::interfaces::http::common::RequiredFields;

/// Consumer as listed by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConsumerDto {
    pub consumer_id: i32,
    pub name: String,
    pub address: String,
    pub meter_number: String,
    /// `Domestic` or `Commercial`
    pub connection_type: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_date: NaiveDate,
    /// `Active` or `Inactive`
    pub status: String,
}

impl From<Consumer> for ConsumerDto {
    fn from(c: Consumer) -> Self {
        Self {
            consumer_id: c.id,
            name: c.name,
            address: c.address,
            meter_number: c.meter_number,
            connection_type: c.connection_type.to_string(),
            email: c.email,
            phone: c.phone,
            registration_date: c.registration_date,
            status: c.status.to_string(),
        }
    }
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || email.validate_email() {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some("email must be a valid address".into());
        Err(err)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConsumerRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 50, message = "meter_number must be 1-50 characters"))]
    pub meter_number: Option<String>,
    /// `Domestic` or `Commercial`
    pub connection_type: Option<String>,
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

impl RequiredFields for CreateConsumerRequest {
    fn first_missing(&self) -> Option<&'static str> {
        [
            ("name", self.name.is_none()),
            ("address", self.address.is_none()),
            ("meter_number", self.meter_number.is_none()),
            ("connection_type", self.connection_type.is_none()),
        ]
        .into_iter()
        .find_map(|(field, missing)| missing.then_some(field))
    }
}

/// Blank optional contact fields are stored as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<CreateConsumerRequest> for NewConsumer {
    type Error = DomainError;

    fn try_from(req: CreateConsumerRequest) -> Result<Self, Self::Error> {
        let connection_type = req
            .connection_type
            .ok_or_else(|| DomainError::missing_field("connection_type"))?
            .parse()?;

        Ok(Self {
            name: req.name.ok_or_else(|| DomainError::missing_field("name"))?,
            address: req.address.ok_or_else(|| DomainError::missing_field("address"))?,
            meter_number: req
                .meter_number
                .ok_or_else(|| DomainError::missing_field("meter_number"))?,
            connection_type,
            email: non_blank(req.email),
            phone: non_blank(req.phone),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateConsumerResponse {
    pub message: String,
    pub consumer_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionType;

    fn request() -> CreateConsumerRequest {
        CreateConsumerRequest {
            name: Some("Asha".into()),
            address: Some("12 MG Road".into()),
            meter_number: Some("MTR-1".into()),
            connection_type: Some("Commercial".into()),
            email: Some("".into()),
            phone: Some("  ".into()),
        }
    }

    #[test]
    fn converts_and_drops_blank_contacts() {
        let consumer = NewConsumer::try_from(request()).unwrap();
        assert_eq!(consumer.connection_type, ConnectionType::Commercial);
        assert_eq!(consumer.email, None);
        assert_eq!(consumer.phone, None);
    }

    #[test]
    fn unknown_connection_type_is_rejected() {
        let mut req = request();
        req.connection_type = Some("Industrial".into());
        let err = NewConsumer::try_from(req).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn presence_is_checked_in_order() {
        let mut req = request();
        req.meter_number = None;
        req.address = None;
        assert_eq!(req.first_missing(), Some("address"));
    }

    #[test]
    fn email_format_is_validated_when_given() {
        let mut req = request();
        assert!(req.validate().is_ok());
        req.email = Some("not-an-email".into());
        assert!(req.validate().is_err());
        req.email = Some("asha@example.com".into());
        assert!(req.validate().is_ok());
    }
}
