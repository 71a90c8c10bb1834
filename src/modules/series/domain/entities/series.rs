use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::modules::country::domain::Country;
use crate::modules::series::domain::value_objects::{
    GibbonsNumber, MichelNumber, ScottNumber, YvertNumber,
};
use crate::modules::user::domain::User;

/// A stamp series: a group of stamps released together.
///
/// The four catalog-number sets stay `None` when the collector did not
/// supply numbers for that standard. `None` and an empty set mean
/// different things ("not cataloged here" vs "cataloged with no numbers"),
/// and the distinction is preserved into persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Uuid,
    pub country: Option<Country>,
    pub released_at: Option<NaiveDate>,
    pub quantity: u32,
    pub perforated: bool,
    pub michel: Option<HashSet<MichelNumber>>,
    pub scott: Option<HashSet<ScottNumber>>,
    pub yvert: Option<HashSet<YvertNumber>>,
    pub gibbons: Option<HashSet<GibbonsNumber>>,
    pub image_url: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: User,
    pub updated_at: DateTime<Utc>,
    pub updated_by: User,
}

impl Series {
    /// Longest image URL the catalog stores.
    pub const IMAGE_URL_MAX_LENGTH: usize = 255;

    /// Year the series was released, when a release date is known.
    pub fn release_year(&self) -> Option<i32> {
        self.released_at.map(|date| date.year())
    }

    /// True when at least one catalog standard has numbers attached.
    pub fn has_catalog_numbers(&self) -> bool {
        self.michel.is_some()
            || self.scott.is_some()
            || self.yvert.is_some()
            || self.gibbons.is_some()
    }
}
