/// Explicit transaction boundary for multi-write operations
///
/// Adding a series writes the catalog-number sets, the stored image URL
/// and the series record itself; those writes must land or roll back
/// together. The surrounding storage backend supplies the real
/// implementation, services only drive the scope.
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Open a scope covering every write until commit or rollback.
    async fn begin(&self) -> AppResult<Box<dyn TransactionScope>>;
}

#[async_trait]
pub trait TransactionScope: Send + Sync {
    async fn commit(&self) -> AppResult<()>;
    async fn rollback(&self) -> AppResult<()>;
}
