//! Payment domain entity

use chrono::NaiveDate;

/// A settlement recorded against a bill. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub bill_id: i32,
    pub payment_date: NaiveDate,
    pub amount_paid: f64,
    pub payment_method: String,
    /// External reference (card, UPI, bank transfer); absent for cash
    pub transaction_id: Option<String>,
    pub received_by: String,
}

/// A payment together with the consumer who owns the settled bill
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    pub payment: Payment,
    pub consumer_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub bill_id: i32,
    pub payment_date: NaiveDate,
    pub amount_paid: f64,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub received_by: String,
}
