use async_trait::async_trait;

use crate::log_debug;
use crate::shared::application::transaction::{TransactionManager, TransactionScope};
use crate::shared::errors::AppResult;

/// Transaction manager for backends without transactional semantics
///
/// The in-memory repositories apply every write immediately, so the scope
/// only logs. A database-backed deployment swaps in a real manager.
pub struct NoopTransactionManager;

impl NoopTransactionManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopTransactionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionManager for NoopTransactionManager {
    async fn begin(&self) -> AppResult<Box<dyn TransactionScope>> {
        log_debug!("Opening no-op transaction scope");
        Ok(Box::new(NoopTransactionScope))
    }
}

struct NoopTransactionScope;

#[async_trait]
impl TransactionScope for NoopTransactionScope {
    async fn commit(&self) -> AppResult<()> {
        log_debug!("No-op transaction scope committed");
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        log_debug!("No-op transaction scope rolled back");
        Ok(())
    }
}
