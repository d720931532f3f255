//! Backend calls made by the map view-model.

use std::future::Future;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use crate::types::{
    dto::{
        geom::{Coordinates, LatLng},
        openweather::WeatherReport,
        place::PlaceDetails,
    },
    model::{place::Place, weather::Weather},
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server responded with {0}")]
    Status(StatusCode),
    #[error("Unexpected payload: {0}")]
    Decode(String),
}

/// What the view-model needs from the backend.
pub trait NeighborhoodApi: Send + Sync + 'static {
    fn fetch_places(&self) -> impl Future<Output = Result<Vec<Place>, ClientError>> + Send;

    fn check_weather(
        &self,
        at: LatLng,
    ) -> impl Future<Output = Result<Weather, ClientError>> + Send;

    fn fetch_photos(
        &self,
        at: LatLng,
    ) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send;
}

/// [`NeighborhoodApi`] over HTTP against the `/api` routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl NeighborhoodApi for ApiClient {
    #[instrument(skip(self))]
    async fn fetch_places(&self) -> Result<Vec<Place>, ClientError> {
        self.get("/api/places").await
    }

    #[instrument(skip(self))]
    async fn check_weather(&self, at: LatLng) -> Result<Weather, ClientError> {
        let report: WeatherReport = self
            .get(&format!("/api/weather/{}", Coordinates(at)))
            .await?;
        Weather::from_report(report)
            .ok_or_else(|| ClientError::Decode("weather report has no conditions".into()))
    }

    #[instrument(skip(self))]
    async fn fetch_photos(&self, at: LatLng) -> Result<Vec<String>, ClientError> {
        let place: PlaceDetails = self
            .get(&format!("/api/place/{}", Coordinates(at)))
            .await?;
        Ok(place.photos)
    }
}
