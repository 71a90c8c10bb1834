use crate::modules::series::domain::entities::Series;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SeriesRepository: Send + Sync {
    async fn save(&self, series: &Series) -> AppResult<Series>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Series>>;
}
