use std::sync::Arc;
use uuid::Uuid;

use crate::log_info;
use crate::modules::country::domain::{Country, CountryRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct CountryService {
    country_repository: Arc<dyn CountryRepository>,
}

impl CountryService {
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    pub async fn add(&self, name: &str) -> AppResult<Country> {
        Validator::validate_country_name(name)?;

        let country = Country::new(name.trim());
        let saved = self.country_repository.save(&country).await?;

        log_info!("Added country '{}' ({})", saved.name, saved.id);
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: Option<Uuid>) -> AppResult<Option<Country>> {
        let id = id.ok_or_else(|| AppError::InvalidInput("Country id is required".to_string()))?;

        self.country_repository.find_by_id(&id).await
    }

    pub async fn find_all(&self) -> AppResult<Vec<Country>> {
        self.country_repository.find_all().await
    }
}
