use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::image::domain::ImageUpload;

/// Raw "add series" submission as it arrives from the web form.
///
/// Every field is optional at this boundary; `SeriesService::add` decides
/// which absences are acceptable. The catalog-number fields carry the
/// unparsed comma-separated strings the collector typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesRequest {
    pub country: Option<Uuid>,
    pub year: Option<i32>,
    pub quantity: Option<u32>,
    pub perforated: Option<bool>,
    pub michel_numbers: Option<String>,
    pub scott_numbers: Option<String>,
    pub yvert_numbers: Option<String>,
    pub gibbons_numbers: Option<String>,
    pub image: Option<ImageUpload>,
    pub comment: Option<String>,
}
