use std::collections::HashSet;

use crate::modules::series::domain::value_objects::CatalogNumber;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence boundary for one cataloging standard.
///
/// One trait, four instantiations: the service holds a repository per
/// `CatalogNumber` variant, so numbers of different standards can never
/// land in the same store.
#[async_trait]
pub trait CatalogNumberRepository<N: CatalogNumber>: Send + Sync {
    /// Persist every number in the set, returning the persisted set.
    async fn save(&self, numbers: &HashSet<N>) -> AppResult<HashSet<N>>;
}
