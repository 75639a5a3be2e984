//! Highlight and value formatting
//!
//! Pure functions that turn forecast numbers into the strings shown on the
//! weather panel: temperatures, UV status, visibility, sun times and the
//! "Today's Highlights" cards.

use chrono::NaiveDateTime;
use domain::value_objects::{Humidity, UvIndex};
use serde::Serialize;

use crate::ports::ForecastData;

/// Placeholder for a value the forecast did not provide
pub const MISSING_VALUE: &str = "--";

/// Round half up, so `-2.5` becomes `-2` and `2.5` becomes `3`
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    // `value - floor` is exact, unlike `value + 0.5`
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Whole-degree temperature, e.g. `"15°"`
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°", round_half_up(celsius))
}

/// Wind speed exactly as reported, e.g. `"11.2 km/h"`
#[must_use]
pub fn format_wind_speed(km_per_hour: f64) -> String {
    format!("{km_per_hour} km/h")
}

#[must_use]
pub fn format_humidity(humidity: Humidity) -> String {
    humidity.to_string()
}

/// Status label for a UV reading
#[must_use]
pub fn uv_status(uv: UvIndex) -> &'static str {
    uv.level().label()
}

/// Meters to kilometers with one decimal, e.g. 12345 → `"12.3 km"`
///
/// Ties round up: 1250 m is `"1.3 km"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_visibility(meters: f64) -> String {
    let tenths = round_half_up(meters / 100.0);
    format!("{:.1} km", tenths as f64 / 10.0)
}

/// 12-hour clock time without a leading zero, e.g. `"7:15 AM"`
#[must_use]
pub fn format_clock_time(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// One card of the highlights grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub value: String,
    /// Secondary line under the value (status or a second reading)
    pub detail: Option<String>,
}

impl Highlight {
    fn new(title: &'static str, value: String, detail: Option<String>) -> Self {
        Self {
            title,
            value,
            detail,
        }
    }
}

/// Build the six highlight cards
///
/// UV and sun times come from today's entry; when the series is empty
/// those cards show [`MISSING_VALUE`].
#[must_use]
pub fn highlights(forecast: &ForecastData) -> Vec<Highlight> {
    let current = &forecast.current;
    let today = forecast.today();

    let uv = today.map_or_else(
        || Highlight::new("UV Index", MISSING_VALUE.to_string(), None),
        |day| {
            Highlight::new(
                "UV Index",
                day.uv_index_max.to_string(),
                Some(uv_status(day.uv_index_max).to_string()),
            )
        },
    );

    let (sunrise, sunset) = today.map_or_else(
        || (MISSING_VALUE.to_string(), MISSING_VALUE.to_string()),
        |day| (format_clock_time(day.sunrise), format_clock_time(day.sunset)),
    );

    let visibility = current
        .visibility_meters
        .map_or_else(|| MISSING_VALUE.to_string(), format_visibility);

    vec![
        uv,
        Highlight::new(
            "Wind Status",
            format_wind_speed(current.wind_speed),
            Some("Normal".to_string()),
        ),
        Highlight::new(
            "Sunrise & Sunset",
            format!("↑ {sunrise}"),
            Some(format!("↓ {sunset}")),
        ),
        Highlight::new(
            "Humidity",
            format_humidity(current.humidity),
            Some("Normal".to_string()),
        ),
        Highlight::new(
            "Visibility",
            visibility,
            Some("Good Visibility".to_string()),
        ),
        Highlight::new(
            "Feels Like",
            format_temperature(current.apparent_temperature),
            Some(format!("Actual: {}", format_temperature(current.temperature))),
        ),
    ]
}
