//! Client side of the neighborhood map: the view-model a page binds to, and the HTTP client it
//! uses to reach the `/api` routes.

pub mod api;
pub mod map;
pub mod marker;
pub mod notify;
pub mod search;
pub mod view_model;

pub use api::{ApiClient, ClientError, NeighborhoodApi};
pub use map::{MapAdapter, MapError, PinId};
pub use marker::{Marker, MarkerState};
pub use view_model::{Activation, MapViewModel};
