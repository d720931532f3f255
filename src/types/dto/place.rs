use serde::{Deserialize, Serialize};

/// Body of `GET /api/place/:lat;:lon`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub id: String,
    pub categories: String,
    pub photos: Vec<String>,
}
