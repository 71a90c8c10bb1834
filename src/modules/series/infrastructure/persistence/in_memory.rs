use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;
use uuid::Uuid;

use crate::modules::series::domain::{
    CatalogNumber, CatalogNumberRepository, Series, SeriesRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// In-memory series store backed by a concurrent map.
pub struct InMemorySeriesRepository {
    series: DashMap<Uuid, Series>,
}

impl InMemorySeriesRepository {
    pub fn new() -> Self {
        Self {
            series: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Default for InMemorySeriesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeriesRepository for InMemorySeriesRepository {
    async fn save(&self, series: &Series) -> AppResult<Series> {
        LogContext::db_operation("save", "series", None);
        self.series.insert(series.id, series.clone());
        Ok(series.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Series>> {
        Ok(self.series.get(id).map(|entry| entry.value().clone()))
    }
}

/// In-memory store for one cataloging standard, keyed by the textual
/// number so re-saving the same number is idempotent.
pub struct InMemoryCatalogNumberRepository<N: CatalogNumber> {
    numbers: DashMap<String, N>,
}

impl<N: CatalogNumber> InMemoryCatalogNumberRepository<N> {
    pub fn new() -> Self {
        Self {
            numbers: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl<N: CatalogNumber> Default for InMemoryCatalogNumberRepository<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<N: CatalogNumber> CatalogNumberRepository<N> for InMemoryCatalogNumberRepository<N> {
    async fn save(&self, numbers: &HashSet<N>) -> AppResult<HashSet<N>> {
        LogContext::db_operation("save", N::KIND.as_str(), None);
        for number in numbers {
            self.numbers
                .insert(number.value().to_string(), number.clone());
        }
        Ok(numbers.clone())
    }
}
