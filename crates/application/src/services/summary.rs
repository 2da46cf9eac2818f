//! Forecast summary formatting
//!
//! Renders day-0 forecast values into a localized one-line summary.
//! Pure string work, no I/O.

use domain::{entities::DailyForecast, value_objects::Language};

/// Format a one-line human summary of today's forecast
///
/// Sunrise and sunset arrive as combined date-time strings; only the
/// time-of-day portion is shown, with `N/A` substituted when a value is
/// absent. An empty forecast yields a fixed "data unavailable" sentence
/// in the requested language.
#[must_use]
pub fn format_summary(forecast: &DailyForecast, language: Language) -> String {
    let Some(today) = forecast.today() else {
        return match language {
            Language::Ja => "天気データが利用できません".to_string(),
            Language::En => "Weather data unavailable".to_string(),
        };
    };

    let sunrise = time_of_day(today.sunrise);
    let sunset = time_of_day(today.sunset);

    match language {
        Language::Ja => format!(
            "今日: {}°/{}°C、降水量: {}mm、UV: {}、日の出: {}、日の入り: {}",
            today.temperature_max,
            today.temperature_min,
            today.precipitation_sum,
            today.uv_index_max,
            sunrise,
            sunset
        ),
        Language::En => format!(
            "Today: {}°/{}°C, Precip: {}mm, UV: {}, Sunrise: {}, Sunset: {}",
            today.temperature_max,
            today.temperature_min,
            today.precipitation_sum,
            today.uv_index_max,
            sunrise,
            sunset
        ),
    }
}

/// Keep only the part after the date/time separator
fn time_of_day(value: Option<&str>) -> &str {
    value
        .and_then(|v| v.split_once('T'))
        .map_or("N/A", |(_, time)| time)
}
