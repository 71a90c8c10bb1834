pub mod modules;
pub mod shared;

use std::sync::Arc;

use modules::{
    country::{
        application::service::CountryService, infrastructure::InMemoryCountryRepository,
        CountryRepository,
    },
    image::{infrastructure::FilesystemImageService, ImageService},
    series::{
        application::service::SeriesService,
        domain::{GibbonsNumber, MichelNumber, ScottNumber, YvertNumber},
        infrastructure::{InMemoryCatalogNumberRepository, InMemorySeriesRepository},
        SeriesRepository,
    },
    user::{domain::User, infrastructure::FixedUserService, UserService},
};
use shared::{AppConfig, NoopTransactionManager};

/// Wired application services over the bundled backends.
///
/// The repositories are exposed alongside the services so callers (and
/// integration tests) can seed reference data.
pub struct AppServices {
    pub series_service: Arc<SeriesService>,
    pub country_service: Arc<CountryService>,
    pub series_repository: Arc<dyn SeriesRepository>,
    pub country_repository: Arc<dyn CountryRepository>,
}

/// Build the application services over the in-memory repositories, the
/// filesystem image store and a fixed current user.
///
/// A deployment with a real database and session layer substitutes its own
/// implementations at the same seams.
pub fn build_services(config: &AppConfig, current_user: User) -> AppServices {
    let series_repository: Arc<dyn SeriesRepository> = Arc::new(InMemorySeriesRepository::new());
    let country_repository: Arc<dyn CountryRepository> = Arc::new(InMemoryCountryRepository::new());

    let image_service: Arc<dyn ImageService> = Arc::new(FilesystemImageService::new(config));
    let user_service: Arc<dyn UserService> = Arc::new(FixedUserService::new(current_user));

    let series_service = Arc::new(SeriesService::new(
        series_repository.clone(),
        country_repository.clone(),
        Arc::new(InMemoryCatalogNumberRepository::<MichelNumber>::new()),
        Arc::new(InMemoryCatalogNumberRepository::<ScottNumber>::new()),
        Arc::new(InMemoryCatalogNumberRepository::<YvertNumber>::new()),
        Arc::new(InMemoryCatalogNumberRepository::<GibbonsNumber>::new()),
        image_service,
        user_service,
        Arc::new(NoopTransactionManager::new()),
    ));

    let country_service = Arc::new(CountryService::new(country_repository.clone()));

    AppServices {
        series_service,
        country_service,
        series_repository,
        country_repository,
    }
}
