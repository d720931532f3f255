use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in decimal degrees, shaped the way the places catalog stores it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The `lat;lon` path segment used by the weather and place endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates(pub LatLng);

#[derive(Error, Debug, PartialEq)]
pub enum CoordinatesError {
    #[error("expected `lat;lon`, got `{0}`")]
    MissingSeparator(String),
    #[error("`{0}` is not a decimal degree value")]
    NotANumber(String),
}

impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(';')
            .ok_or_else(|| CoordinatesError::MissingSeparator(s.to_string()))?;
        Ok(Coordinates(LatLng::new(degree(lat)?, degree(lon)?)))
    }
}

fn degree(raw: &str) -> Result<f64, CoordinatesError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoordinatesError::NotANumber(raw.to_string()))
}

impl From<Coordinates> for LatLng {
    fn from(value: Coordinates) -> Self {
        value.0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.0.lat, self.0.lng)
    }
}
