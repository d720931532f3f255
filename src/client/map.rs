use thiserror::Error;

use crate::types::dto::geom::LatLng;

/// Failures the map widget reports back; each one becomes a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map script failed to load")]
    LoadFailed,
    #[error("map provider rejected the API key")]
    AuthFailed,
}

impl MapError {
    pub fn message(&self) -> &'static str {
        match self {
            MapError::LoadFailed => "Error loading Google Maps API",
            MapError::AuthFailed => {
                "Authentication failures at Maps API. Please, check your API keys and reload this page."
            }
        }
    }
}

/// Map widget handle for one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(pub usize);

/// The slice of a map widget the view-model drives. Pins start attached to the map.
pub trait MapAdapter: Send + 'static {
    fn add_pin(&mut self, position: LatLng) -> PinId;

    /// Shows or hides a pin without destroying it.
    fn set_pin_attached(&mut self, pin: PinId, attached: bool);

    fn set_bouncing(&mut self, pin: PinId, bouncing: bool);

    fn set_center(&mut self, position: LatLng);

    fn open_details(&mut self);

    fn close_details(&mut self);
}
