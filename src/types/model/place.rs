use serde::{Deserialize, Serialize};

use crate::types::dto::{geom::LatLng, place::PlaceDetails};

/// Entry of the static places catalog. Loaded once, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub place: String,
    pub description: String,
    pub location: LatLng,
}

/// A venue picked out of a search, before its photos are known.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: String,
    // Category names joined by ", "
    pub categories: String,
}

impl Venue {
    pub fn with_photos(self, photos: Vec<String>) -> PlaceDetails {
        PlaceDetails {
            id: self.id,
            categories: self.categories,
            photos,
        }
    }
}
