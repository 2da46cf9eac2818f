//! Daily forecast entity - a fixed multi-day bundle of daily aggregates

use serde::{Deserialize, Serialize};

/// Parallel per-day arrays indexed by day offset (0 = today)
///
/// Serde names follow the upstream daily block so cached entries and the
/// `raw` response field keep the provider's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// ISO dates, one per day
    #[serde(rename = "time", default)]
    pub dates: Vec<String>,
    /// Daily maximum temperature in degrees Celsius
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    /// Daily minimum temperature in degrees Celsius
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
    /// Precipitation sum in millimeters
    pub precipitation_sum: Vec<f64>,
    /// Daily maximum UV index
    pub uv_index_max: Vec<f64>,
    /// Sunrise as combined local date-time strings
    #[serde(default)]
    pub sunrise: Vec<String>,
    /// Sunset as combined local date-time strings
    #[serde(default)]
    pub sunset: Vec<String>,
}

/// One day's values pulled out of the parallel arrays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayReading<'a> {
    pub date: Option<&'a str>,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_sum: f64,
    pub uv_index_max: f64,
    pub sunrise: Option<&'a str>,
    pub sunset: Option<&'a str>,
}

impl DailyForecast {
    /// Number of days covered by the numeric arrays
    #[must_use]
    pub fn days(&self) -> usize {
        self.temperature_max
            .len()
            .min(self.temperature_min.len())
            .min(self.precipitation_sum.len())
            .min(self.uv_index_max.len())
    }

    /// True when no complete day of data is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days() == 0
    }

    /// Extract one day's reading, absent when the arrays end before `index`
    ///
    /// Sunrise/sunset are optional per day; a missing value surfaces as
    /// `None` rather than truncating the reading.
    #[must_use]
    pub fn day(&self, index: usize) -> Option<DayReading<'_>> {
        if index >= self.days() {
            return None;
        }
        Some(DayReading {
            date: self.dates.get(index).map(String::as_str),
            temperature_max: self.temperature_max[index],
            temperature_min: self.temperature_min[index],
            precipitation_sum: self.precipitation_sum[index],
            uv_index_max: self.uv_index_max[index],
            sunrise: self.sunrise.get(index).map(String::as_str),
            sunset: self.sunset.get(index).map(String::as_str),
        })
    }

    /// Today's reading, when present
    #[must_use]
    pub fn today(&self) -> Option<DayReading<'_>> {
        self.day(0)
    }
}
