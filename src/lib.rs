//! Neighborhood map backend and view-model.
//!
//! The server proxies three read-only routes to OpenWeatherMap and Foursquare:
//!
//! - `GET /api/places`: the static places catalog
//! - `GET /api/weather/:lat;:lon`: current weather, provider payload as-is
//! - `GET /api/place/:lat;:lon`: `{ id, categories, photos }` for the venue found near a point
//!
//! [`client`] holds the map view-model that consumes those routes.

pub mod client;
pub mod clients;
pub mod config;
pub mod gateway;
pub mod net;
pub mod place;
pub mod routes;
pub mod types;

pub use routes::{app, AppState};
