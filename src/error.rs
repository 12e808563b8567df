use thiserror::Error;

/// Errors surfaced by the user store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique index on `email` rejected an insert or update.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Credential hashing or hash parsing failed.
    #[error("credential error: {0}")]
    Credential(String),

    /// Any other storage-layer failure, passed through untranslated.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Map a write error, attributing unique violations to `email`.
    pub(crate) fn on_write(err: sqlx::Error, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::DuplicateEmail(email.to_string())
            }
            _ => StoreError::Database(err),
        }
    }

    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, StoreError::DuplicateEmail(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_mentions_the_address() {
        let err = StoreError::DuplicateEmail("a@x.com".into());
        assert!(err.is_duplicate_email());
        assert!(err.to_string().contains("a@x.com"));
    }

    #[test]
    fn row_not_found_passes_through() {
        let err = StoreError::on_write(sqlx::Error::RowNotFound, "a@x.com");
        assert!(!err.is_duplicate_email());
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }
}
