/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::Utc;
use perforata::modules::country::domain::Country;
use perforata::modules::image::domain::ImageUpload;
use perforata::modules::series::application::dto::AddSeriesRequest;
use perforata::modules::series::domain::Series;
use perforata::modules::user::domain::User;
use uuid::Uuid;

pub struct SeriesRequestFactory {
    request: AddSeriesRequest,
}

impl SeriesRequestFactory {
    /// The smallest submission `SeriesService::add` accepts.
    pub fn minimal() -> Self {
        Self {
            request: AddSeriesRequest {
                quantity: Some(2),
                perforated: Some(false),
                ..AddSeriesRequest::default()
            },
        }
    }

    pub fn with_country(mut self, id: Uuid) -> Self {
        self.request.country = Some(id);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.request.year = Some(year);
        self
    }

    pub fn with_quantity(mut self, quantity: Option<u32>) -> Self {
        self.request.quantity = quantity;
        self
    }

    pub fn with_perforated(mut self, perforated: Option<bool>) -> Self {
        self.request.perforated = perforated;
        self
    }

    pub fn with_michel(mut self, numbers: &str) -> Self {
        self.request.michel_numbers = Some(numbers.to_string());
        self
    }

    pub fn with_scott(mut self, numbers: &str) -> Self {
        self.request.scott_numbers = Some(numbers.to_string());
        self
    }

    pub fn with_yvert(mut self, numbers: &str) -> Self {
        self.request.yvert_numbers = Some(numbers.to_string());
        self
    }

    pub fn with_gibbons(mut self, numbers: &str) -> Self {
        self.request.gibbons_numbers = Some(numbers.to_string());
        self
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.request.image = Some(image);
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.request.comment = Some(comment.to_string());
        self
    }

    pub fn build(self) -> AddSeriesRequest {
        self.request
    }
}

/// A tiny valid upload; the bytes only need to be non-empty.
pub fn png_upload() -> ImageUpload {
    ImageUpload::new("series.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

pub fn test_user() -> User {
    User::new("collector", "Test Collector")
}

pub fn test_country() -> Country {
    Country::new("Italy")
}

/// A fully assembled series, as `SeriesService::add` would build it.
pub fn minimal_series(user: &User) -> Series {
    let now = Utc::now();
    Series {
        id: Uuid::new_v4(),
        country: None,
        released_at: None,
        quantity: 2,
        perforated: false,
        michel: None,
        scott: None,
        yvert: None,
        gibbons: None,
        image_url: "/image/test.png".to_string(),
        comment: None,
        created_at: now,
        created_by: user.clone(),
        updated_at: now,
        updated_by: user.clone(),
    }
}
