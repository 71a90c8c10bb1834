use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::country::domain::{Country, CountryRepository};
use crate::modules::image::domain::ImageService;
use crate::modules::series::application::dto::AddSeriesRequest;
use crate::modules::series::domain::{
    parse_catalog_numbers, CatalogNumber, CatalogNumberRepository, GibbonsNumber, MichelNumber,
    ScottNumber, Series, SeriesRepository, YvertNumber,
};
use crate::modules::user::domain::UserService;
use crate::shared::application::transaction::TransactionManager;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Application service around the `Series` entity.
///
/// `add` is the only way a series comes into existence: it validates the
/// raw submission, resolves the country, parses and persists the
/// catalog-number sets, stores the image, stamps the audit fields and
/// saves the assembled entity exactly once, all inside one transaction
/// scope.
pub struct SeriesService {
    series_repository: Arc<dyn SeriesRepository>,
    country_repository: Arc<dyn CountryRepository>,
    michel_repository: Arc<dyn CatalogNumberRepository<MichelNumber>>,
    scott_repository: Arc<dyn CatalogNumberRepository<ScottNumber>>,
    yvert_repository: Arc<dyn CatalogNumberRepository<YvertNumber>>,
    gibbons_repository: Arc<dyn CatalogNumberRepository<GibbonsNumber>>,
    image_service: Arc<dyn ImageService>,
    user_service: Arc<dyn UserService>,
    transaction_manager: Arc<dyn TransactionManager>,
}

impl SeriesService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        series_repository: Arc<dyn SeriesRepository>,
        country_repository: Arc<dyn CountryRepository>,
        michel_repository: Arc<dyn CatalogNumberRepository<MichelNumber>>,
        scott_repository: Arc<dyn CatalogNumberRepository<ScottNumber>>,
        yvert_repository: Arc<dyn CatalogNumberRepository<YvertNumber>>,
        gibbons_repository: Arc<dyn CatalogNumberRepository<GibbonsNumber>>,
        image_service: Arc<dyn ImageService>,
        user_service: Arc<dyn UserService>,
        transaction_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            series_repository,
            country_repository,
            michel_repository,
            scott_repository,
            yvert_repository,
            gibbons_repository,
            image_service,
            user_service,
            transaction_manager,
        }
    }

    /// Validate a submission and persist the resulting series.
    pub async fn add(&self, request: Option<AddSeriesRequest>) -> AppResult<Series> {
        let request = request
            .ok_or_else(|| AppError::InvalidInput("Series submission is required".to_string()))?;

        let quantity = request
            .quantity
            .ok_or_else(|| AppError::InvalidInput("Quantity is required".to_string()))?;
        Validator::validate_quantity(quantity)?;

        let perforated = request
            .perforated
            .ok_or_else(|| AppError::InvalidInput("Perforated flag is required".to_string()))?;

        if let Some(year) = request.year {
            Validator::validate_release_year(year)?;
        }

        let comment = match request.comment.as_deref() {
            Some(comment) => {
                Validator::validate_comment(comment)?;
                Some(comment.trim().to_string())
            }
            None => None,
        };

        log_debug!(
            "Adding series: quantity={}, perforated={}, country={:?}",
            quantity,
            perforated,
            request.country
        );

        // All writes below share one scope; a failure part-way through
        // assembly must not leave orphaned catalog numbers behind.
        let scope = self.transaction_manager.begin().await?;
        match self
            .assemble_and_save(request, quantity, perforated, comment)
            .await
        {
            Ok(series) => {
                scope.commit().await?;
                log_info!("Added series {} with {} stamps", series.id, series.quantity);
                Ok(series)
            }
            Err(err) => {
                scope.rollback().await?;
                Err(err)
            }
        }
    }

    /// Look up a series by id, `Ok(None)` when unknown.
    pub async fn find_by_id(&self, id: Option<Uuid>) -> AppResult<Option<Series>> {
        let id = id.ok_or_else(|| AppError::InvalidInput("Series id is required".to_string()))?;

        self.series_repository.find_by_id(&id).await
    }

    async fn assemble_and_save(
        &self,
        request: AddSeriesRequest,
        quantity: u32,
        perforated: bool,
        comment: Option<String>,
    ) -> AppResult<Series> {
        let country = self.resolve_country(request.country).await?;

        let michel = Self::store_numbers(
            self.michel_repository.as_ref(),
            request.michel_numbers.as_deref(),
        )
        .await?;
        let scott = Self::store_numbers(
            self.scott_repository.as_ref(),
            request.scott_numbers.as_deref(),
        )
        .await?;
        let yvert = Self::store_numbers(
            self.yvert_repository.as_ref(),
            request.yvert_numbers.as_deref(),
        )
        .await?;
        let gibbons = Self::store_numbers(
            self.gibbons_repository.as_ref(),
            request.gibbons_numbers.as_deref(),
        )
        .await?;

        let image_url = self
            .image_service
            .save(request.image)
            .await?
            .ok_or_else(|| {
                AppError::InvalidState("Image service returned no URL".to_string())
            })?;
        if image_url.len() > Series::IMAGE_URL_MAX_LENGTH {
            return Err(AppError::InvalidState(format!(
                "Image URL exceeds {} characters",
                Series::IMAGE_URL_MAX_LENGTH
            )));
        }

        let user = self
            .user_service
            .get_current_user()
            .await?
            .ok_or_else(|| {
                AppError::InvalidState("Cannot determine current user".to_string())
            })?;

        let now = Utc::now();
        let series = Series {
            id: Uuid::new_v4(),
            country,
            released_at: request.year.and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
            quantity,
            perforated,
            michel,
            scott,
            yvert,
            gibbons,
            image_url,
            comment,
            created_at: now,
            created_by: user.clone(),
            updated_at: now,
            updated_by: user,
        };

        self.series_repository.save(&series).await
    }

    async fn resolve_country(&self, id: Option<Uuid>) -> AppResult<Option<Country>> {
        match id {
            Some(id) => {
                let country = self
                    .country_repository
                    .find_by_id(&id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))?;
                Ok(Some(country))
            }
            None => Ok(None),
        }
    }

    /// Parse one catalog-number string and persist the set.
    ///
    /// An absent string leaves the association `None`; it never becomes an
    /// empty set.
    async fn store_numbers<N: CatalogNumber>(
        repository: &dyn CatalogNumberRepository<N>,
        raw: Option<&str>,
    ) -> AppResult<Option<HashSet<N>>> {
        match raw {
            Some(raw) => {
                let numbers = parse_catalog_numbers::<N>(raw)?;
                let saved = repository.save(&numbers).await?;
                Ok(Some(saved))
            }
            None => Ok(None),
        }
    }
}
