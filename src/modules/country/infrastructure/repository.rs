use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::country::domain::{Country, CountryRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// In-memory country store backed by a concurrent map.
pub struct InMemoryCountryRepository {
    countries: DashMap<Uuid, Country>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self {
            countries: DashMap::new(),
        }
    }
}

impl Default for InMemoryCountryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Country>> {
        Ok(self.countries.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Country>> {
        let mut all: Vec<Country> = self
            .countries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn save(&self, country: &Country) -> AppResult<Country> {
        LogContext::db_operation("save", "country", None);
        self.countries.insert(country.id, country.clone());
        Ok(country.clone())
    }
}
