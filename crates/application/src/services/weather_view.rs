//! View projection of the render state
//!
//! [`WeatherView::project`] turns the controller state into display-ready
//! strings. It performs no I/O, so any frontend can render the result.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::highlight_formatter::{
    Highlight, format_humidity, format_temperature, format_wind_speed, highlights,
};
use super::search_controller::RenderState;
use super::search_service::WeatherReport;
use crate::ports::DailyForecast;

/// Prompt shown before the first search
pub const WELCOME_MESSAGE: &str = "Search for a city to see the weather";

/// Maximum number of cards in the upcoming-days strip
pub const STRIP_DAYS: usize = 5;

/// One card of the upcoming-days strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCard {
    /// Short weekday, e.g. `"Tue"`
    pub day: String,
    pub icon_id: &'static str,
    pub emoji: &'static str,
    /// `"<max>° / <min>°"`
    pub temperatures: String,
}

impl DayCard {
    fn from_forecast(day: &DailyForecast) -> Self {
        let condition = day.condition();
        Self {
            day: day.date.format("%a").to_string(),
            icon_id: condition.icon_id(),
            emoji: condition.emoji(),
            temperatures: format!(
                "{} / {}",
                format_temperature(day.temperature_max),
                format_temperature(day.temperature_min)
            ),
        }
    }
}

/// Everything shown for a successful search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentView {
    /// `"<name>, <country>"`
    pub header: String,
    /// e.g. `"Monday, Jan 15"`
    pub date_line: String,
    pub temperature: String,
    pub description: &'static str,
    pub icon_id: &'static str,
    pub emoji: &'static str,
    pub wind: String,
    pub humidity: String,
    pub strip: Vec<DayCard>,
    pub highlights: Vec<Highlight>,
}

/// Display projection of a [`RenderState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum WeatherView {
    Welcome { message: &'static str },
    Loading,
    Error { message: String },
    Content(ContentView),
}

impl WeatherView {
    /// Project the state, using the local date when the forecast has no days
    #[must_use]
    pub fn project(state: &RenderState) -> Self {
        Self::project_at(state, Local::now().date_naive())
    }

    /// Project the state with an explicit fallback date
    #[must_use]
    pub fn project_at(state: &RenderState, fallback_date: NaiveDate) -> Self {
        match state {
            RenderState::Idle => Self::Welcome {
                message: WELCOME_MESSAGE,
            },
            RenderState::Loading => Self::Loading,
            RenderState::Error(e) => Self::Error {
                message: e.to_string(),
            },
            RenderState::Content(report) => Self::Content(content_view(report, fallback_date)),
        }
    }
}

fn content_view(report: &WeatherReport, fallback_date: NaiveDate) -> ContentView {
    let forecast = &report.forecast;
    let current = &forecast.current;
    let condition = current.condition();
    let date = forecast.today().map_or(fallback_date, |d| d.date);

    // Days after today; a short series yields fewer cards.
    let strip = forecast
        .daily
        .iter()
        .skip(1)
        .take(STRIP_DAYS)
        .map(DayCard::from_forecast)
        .collect();

    ContentView {
        header: report.place.display_name(),
        date_line: date.format("%A, %b %-d").to_string(),
        temperature: format_temperature(current.temperature),
        description: condition.description(),
        icon_id: condition.icon_id(),
        emoji: condition.emoji(),
        wind: format_wind_speed(current.wind_speed),
        humidity: format_humidity(current.humidity),
        strip,
        highlights: highlights(forecast),
    }
}

impl ContentView {
    /// Plain-text rendering for non-interactive output
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            self.header.clone(),
            self.date_line.clone(),
            String::new(),
            format!("{} {}  {}", self.emoji, self.temperature, self.description),
            format!("Wind: {}  Humidity: {}", self.wind, self.humidity),
        ];

        if !self.strip.is_empty() {
            lines.push(String::new());
            lines.extend(
                self.strip
                    .iter()
                    .map(|c| format!("{:<4}{} {}", c.day, c.emoji, c.temperatures)),
            );
        }

        lines.push(String::new());
        lines.push("Today's Highlights".to_string());
        for h in &self.highlights {
            let mut line = format!("  {:<18}{}", h.title, h.value);
            if let Some(detail) = &h.detail {
                line.push_str(&format!("  ({detail})"));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}
