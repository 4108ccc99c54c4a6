//! Repository trait for short URL data access.

use crate::domain::entities::{NewUrl, Url};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - In-memory implementation in `tests/common` for integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (unique constraint backstop for the racy pre-check).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError>;

    /// Finds a URL record by its short code.
    ///
    /// Expiry is not evaluated here; callers decide how to treat expired
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Url>, AppError>;

    /// Lists all URL records ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Url>, AppError>;

    /// Deletes a URL record by short code, cascade-deleting its clicks.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if no record
    /// matched the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Checks store connectivity. Used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
