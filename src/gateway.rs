use std::fmt;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use serde_json::value::RawValue;
use tracing::{debug, instrument};

use crate::{
    config::ApiConfig,
    types::dto::{
        foursquare::{PhotoList, VenueSearch},
        geom::LatLng,
    },
};

pub const OPENWEATHER_URL: &str = "http://api.openweathermap.org";
pub const FOURSQUARE_URL: &str = "https://api.foursquare.com";

const FOURSQUARE_VERSION: &str = "20170101";
const VENUE_SEARCH_LIMIT: &str = "2";
const PHOTO_LIMIT: &str = "5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenWeather,
    Foursquare,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenWeather => f.write_str("OpenWeather"),
            Provider::Foursquare => f.write_str("Foursquare"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} responded with {status}")]
    Unavailable {
        provider: Provider,
        status: StatusCode,
    },
    #[error("{provider} sent malformed JSON: {source}")]
    Malformed {
        provider: Provider,
        source: serde_json::Error,
    },
    #[error("could not reach {provider}: {source}")]
    Network {
        provider: Provider,
        source: reqwest::Error,
    },
}

/// Outbound calls to the weather and venue providers. One GET per call, no retry, no cache.
#[derive(Clone)]
pub struct ProviderGateway {
    client: reqwest::Client,
    api: ApiConfig,
    openweather_url: String,
    foursquare_url: String,
}

impl ProviderGateway {
    pub fn new(client: reqwest::Client, api: ApiConfig) -> Self {
        Self {
            client,
            api,
            openweather_url: OPENWEATHER_URL.to_string(),
            foursquare_url: FOURSQUARE_URL.to_string(),
        }
    }

    pub fn with_base_urls(mut self, openweather_url: &str, foursquare_url: &str) -> Self {
        self.openweather_url = openweather_url.trim_end_matches('/').to_string();
        self.foursquare_url = foursquare_url.trim_end_matches('/').to_string();
        self
    }

    /// Current weather in metric units, returned byte for byte as the provider sent it.
    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, at: LatLng) -> Result<Box<RawValue>, ProviderError> {
        let request = self
            .client
            .get(format!("{}/data/2.5/weather", self.openweather_url))
            .query(&[
                ("lat", at.lat.to_string()),
                ("lon", at.lng.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api.openweather.key.clone()),
            ]);
        self.get_json(Provider::OpenWeather, request).await
    }

    #[instrument(skip(self))]
    pub async fn search_venue(&self, at: LatLng) -> Result<VenueSearch, ProviderError> {
        let request = self
            .client
            .get(format!("{}/v2/venues/search", self.foursquare_url))
            .query(&[("ll", format!("{},{}", at.lat, at.lng))])
            .query(&[("limit", VENUE_SEARCH_LIMIT)])
            .query(&self.foursquare_credentials());
        self.get_json(Provider::Foursquare, request).await
    }

    #[instrument(skip(self))]
    pub async fn list_photos(&self, venue_id: &str) -> Result<PhotoList, ProviderError> {
        let request = self
            .client
            .get(format!("{}/v2/venues/{}/photos", self.foursquare_url, venue_id))
            .query(&[("limit", PHOTO_LIMIT)])
            .query(&self.foursquare_credentials());
        self.get_json(Provider::Foursquare, request).await
    }

    fn foursquare_credentials(&self) -> [(&'static str, &str); 3] {
        [
            ("client_id", self.api.foursquare.id.as_str()),
            ("client_secret", self.api.foursquare.key.as_str()),
            ("v", FOURSQUARE_VERSION),
        ]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        provider: Provider,
        request: RequestBuilder,
    ) -> Result<T, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|source| ProviderError::Network { provider, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(
                "Error querying {provider} API: {}",
                status.canonical_reason().unwrap_or("unknown status")
            );
            return Err(ProviderError::Unavailable { provider, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ProviderError::Network { provider, source })?;
        serde_json::from_slice(&body).map_err(|source| {
            debug!("Error parsing {provider} JSON: {source}");
            ProviderError::Malformed { provider, source }
        })
    }
}
