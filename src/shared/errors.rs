use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Error for a required request field that was not supplied.
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Missing required field: {}", field))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        let err = DomainError::not_found("Consumer", "consumer_id", 42);
        assert_eq!(err.to_string(), "Consumer not found");
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(
            DomainError::missing_field("meter_number").to_string(),
            "Missing required field: meter_number"
        );
    }

    #[test]
    fn db_errors_become_storage_errors() {
        let err: DomainError = sea_orm::DbErr::Custom("disk I/O error".into()).into();
        assert!(matches!(err, DomainError::Storage(_)));
        let message = err.to_string();
        assert!(message.starts_with("Database error: "));
        assert!(message.contains("disk I/O error"));
    }
}
