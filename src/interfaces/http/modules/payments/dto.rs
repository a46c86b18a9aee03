//! Payment DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{DomainError, NewPayment, PaymentDetails};
use crate::interfaces::http::common::RequiredFields;

/// Payment annotated with the consumer who paid
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub payment_id: i32,
    pub bill_id: i32,
    pub payment_date: NaiveDate,
    pub amount_paid: f64,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub received_by: String,
    pub consumer_name: String,
}

impl From<PaymentDetails> for PaymentDto {
    fn from(d: PaymentDetails) -> Self {
        let p = d.payment;
        Self {
            payment_id: p.id,
            bill_id: p.bill_id,
            payment_date: p.payment_date,
            amount_paid: p.amount_paid,
            payment_method: p.payment_method,
            transaction_id: p.transaction_id,
            received_by: p.received_by,
            consumer_name: d.consumer_name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentRequest {
    pub bill_id: Option<i32>,
    pub payment_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "amount_paid must not be negative"))]
    pub amount_paid: Option<f64>,
    /// Cash, Card, UPI, Bank Transfer...
    #[validate(length(min = 1, max = 50, message = "payment_method must be 1-50 characters"))]
    pub payment_method: Option<String>,
    #[validate(length(min = 1, max = 100, message = "received_by must be 1-100 characters"))]
    pub received_by: Option<String>,
    pub transaction_id: Option<String>,
}

impl RequiredFields for RecordPaymentRequest {
    fn first_missing(&self) -> Option<&'static str> {
        [
            ("bill_id", self.bill_id.is_none()),
            ("payment_date", self.payment_date.is_none()),
            ("amount_paid", self.amount_paid.is_none()),
            ("payment_method", self.payment_method.is_none()),
            ("received_by", self.received_by.is_none()),
        ]
        .into_iter()
        .find_map(|(field, missing)| missing.then_some(field))
    }
}

impl TryFrom<RecordPaymentRequest> for NewPayment {
    type Error = DomainError;

    fn try_from(req: RecordPaymentRequest) -> Result<Self, Self::Error> {
        let missing = DomainError::missing_field;
        Ok(Self {
            bill_id: req.bill_id.ok_or_else(|| missing("bill_id"))?,
            payment_date: req.payment_date.ok_or_else(|| missing("payment_date"))?,
            amount_paid: req.amount_paid.ok_or_else(|| missing("amount_paid"))?,
            payment_method: req
                .payment_method
                .ok_or_else(|| missing("payment_method"))?,
            received_by: req.received_by.ok_or_else(|| missing("received_by"))?,
            transaction_id: req
                .transaction_id
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordPaymentResponse {
    pub message: String,
    pub payment_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: serde_json::Value) -> RecordPaymentRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn cash_payment_without_reference() {
        let req = request(serde_json::json!({
            "bill_id": 4,
            "payment_date": "2024-05-10",
            "amount_paid": 404.0,
            "payment_method": "Cash",
            "received_by": "desk-1",
            "transaction_id": ""
        }));
        assert_eq!(req.first_missing(), None);
        assert!(req.validate().is_ok());

        let payment = NewPayment::try_from(req).unwrap();
        assert_eq!(payment.transaction_id, None);
        assert_eq!(payment.amount_paid, 404.0);
    }

    #[test]
    fn negative_amount_fails_validation() {
        let req = request(serde_json::json!({
            "bill_id": 4,
            "payment_date": "2024-05-10",
            "amount_paid": -1.0,
            "payment_method": "Cash",
            "received_by": "desk-1"
        }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn received_by_is_required() {
        let req = request(serde_json::json!({
            "bill_id": 4,
            "payment_date": "2024-05-10",
            "amount_paid": 1,
            "payment_method": "Cash"
        }));
        assert_eq!(req.first_missing(), Some("received_by"));
    }
}
