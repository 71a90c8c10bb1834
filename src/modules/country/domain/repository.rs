use crate::modules::country::domain::entities::Country;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Country>>;
    async fn find_all(&self) -> AppResult<Vec<Country>>;
    async fn save(&self, country: &Country) -> AppResult<Country>;
}
