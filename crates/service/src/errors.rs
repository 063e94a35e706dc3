use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Like `From<ModelError>`, but database failures keep the `Db` variant.
    pub fn from_model(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Db(msg) => Self::Db(msg),
            other => Self::Model(other),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Forbidden(_) => 1005,
            ServiceError::Db(_) => 1200,
            ServiceError::Model(_) => 1201,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let e = ServiceError::not_found("Type");
        assert!(matches!(&e, ServiceError::NotFound(msg) if msg == "Type not found"));
        assert_eq!(e.to_string(), "not found: Type not found");
        assert_eq!(e.code(), 1003);
    }

    #[test]
    fn model_errors_convert() {
        let e: ServiceError = models::errors::ModelError::Validation("bad".into()).into();
        assert_eq!(e.code(), 1201);
    }

    #[test]
    fn model_db_errors_keep_db_code() {
        let e = ServiceError::from_model(models::errors::ModelError::Db("fk violation".into()));
        assert!(matches!(&e, ServiceError::Db(msg) if msg == "fk violation"));
        assert_eq!(e.code(), 1200);

        let e = ServiceError::from_model(models::errors::ModelError::Validation("bad".into()));
        assert_eq!(e.code(), 1201);
    }
}
