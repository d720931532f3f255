use serde::{Deserialize, Serialize};

/// The part of an OpenWeatherMap `data/2.5/weather` payload the map displays.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeatherReport {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MainReadings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}
