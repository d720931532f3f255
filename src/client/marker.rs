use crate::types::{
    dto::geom::LatLng,
    model::{place::Place, weather::Weather},
};

/// Detail view progress of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerState {
    #[default]
    Unselected,
    Loading,
    Loaded,
}

/// A catalog place plus what the map has learned about it this session.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub place: String,
    pub description: String,
    pub location: LatLng,
    pub is_visible: bool,
    pub weather: Option<Weather>,
    pub photos: Vec<String>,
    pub state: MarkerState,
}

impl From<Place> for Marker {
    fn from(place: Place) -> Self {
        Self {
            place: place.place,
            description: place.description,
            location: place.location,
            is_visible: true,
            weather: None,
            photos: Vec::new(),
            state: MarkerState::default(),
        }
    }
}

impl Marker {
    /// Display key for list rendering. Not unique.
    pub fn place_id(&self) -> i32 {
        place_hash(&self.place)
    }
}

/// `h = (h << 5) - h + c` over UTF-16 code units, wrapping at 32 bits.
pub fn place_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}
