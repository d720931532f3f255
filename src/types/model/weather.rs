use serde::{Deserialize, Serialize};

use crate::types::dto::openweather::WeatherReport;

const ICON_URL: &str = "http://openweathermap.org/img/w";

/// Current conditions for a marker, temperatures in Celsius.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Weather {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
    pub icon: String,
}

impl Weather {
    pub fn icon_url(&self) -> String {
        format!("{ICON_URL}/{}.png", self.icon)
    }

    /// Reads `main.*` and the first entry of `weather`. `None` when the report carries no condition.
    pub fn from_report(report: WeatherReport) -> Option<Self> {
        let condition = report.weather.into_iter().next()?;
        Some(Self {
            temp: report.main.temp,
            temp_min: report.main.temp_min,
            temp_max: report.main.temp_max,
            description: condition.description,
            icon: condition.icon,
        })
    }
}
