use communities_core::error::CoreError;

/// PostgreSQL `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";
/// PostgreSQL `check_violation`.
const CHECK_VIOLATION: &str = "23514";
/// PostgreSQL `character_not_in_repertoire` (e.g. NUL in text).
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";
/// PostgreSQL `untranslatable_character`.
const UNTRANSLATABLE_CHARACTER: &str = "22P05";

/// Failure of a repository operation.
///
/// A missing row is not an error: operations report it as `None`.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Input rejected by DTO rules, a store constraint or the store's text encoding.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Connectivity or query failure from the store. Never retried here.
    #[error("Store error: {0}")]
    Store(sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<CoreError> for RepositoryError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.code().as_deref(),
                Some(NOT_NULL_VIOLATION)
                    | Some(CHECK_VIOLATION)
                    | Some(CHARACTER_NOT_IN_REPERTOIRE)
                    | Some(UNTRANSLATABLE_CHARACTER)
            ) {
                return Self::Validation(db_err.message().to_string());
            }
        }
        Self::Store(err)
    }
}
