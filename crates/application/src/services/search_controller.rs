//! Render state machine for city searches
//!
//! The controller owns the single [`RenderState`] of the weather panel.
//! Each accepted submission bumps a generation counter and returns a
//! [`SearchTicket`]; a completion is applied only if it carries the
//! current generation, so overlapping searches always end on the newest
//! submission.

use serde::Serialize;
use tracing::debug;

use super::search_service::{SearchError, SearchPipeline, WeatherReport};

/// What the weather panel currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum RenderState {
    /// Welcome prompt, nothing searched yet
    #[default]
    Idle,
    /// A search is in flight
    Loading,
    Content(WeatherReport),
    Error(SearchError),
}

impl RenderState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Handle for one accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    /// Trimmed city name to search for
    pub city: String,
}

/// Owner of the render state
#[derive(Debug)]
pub struct SearchController {
    pipeline: SearchPipeline,
    state: RenderState,
    generation: u64,
}

impl SearchController {
    pub fn new(pipeline: SearchPipeline) -> Self {
        Self {
            pipeline,
            state: RenderState::Idle,
            generation: 0,
        }
    }

    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    /// Generation of the most recent accepted submission (0 before any)
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn pipeline(&self) -> &SearchPipeline {
        &self.pipeline
    }

    /// Accept a submission and move to `Loading`
    ///
    /// Blank or whitespace-only input is ignored: no transition and no
    /// ticket, so no network call is made for it.
    pub fn submit(&mut self, input: &str) -> Option<SearchTicket> {
        let city = input.trim();
        if city.is_empty() {
            debug!("Ignoring blank search submission");
            return None;
        }

        self.generation += 1;
        self.state = RenderState::Loading;
        debug!(generation = self.generation, %city, "Search submitted");

        Some(SearchTicket {
            generation: self.generation,
            city: city.to_string(),
        })
    }

    /// Apply a search outcome
    ///
    /// Returns `false` and leaves the state untouched when `generation` is
    /// not the latest one.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<WeatherReport, SearchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "Discarding stale search result"
            );
            return false;
        }

        self.state = match outcome {
            Ok(report) => RenderState::Content(report),
            Err(e) => RenderState::Error(e),
        };
        true
    }

    /// Submit and run a search to completion
    pub async fn search(&mut self, input: &str) -> &RenderState {
        if let Some(ticket) = self.submit(input) {
            let outcome = self.pipeline.run(&ticket.city).await;
            self.complete(ticket.generation, outcome);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{
        CurrentConditions, ForecastData, MockForecastPort, MockGeocodingPort, Place,
    };
    use domain::value_objects::{GeoLocation, Humidity};

    fn london() -> Place {
        Place {
            name: "London".to_string(),
            country: "UK".to_string(),
            location: GeoLocation::new(51.5, -0.12).expect("valid"),
        }
    }

    fn report() -> WeatherReport {
        WeatherReport {
            place: london(),
            forecast: ForecastData {
                current: CurrentConditions {
                    temperature: 15.4,
                    apparent_temperature: 14.0,
                    wind_speed: 11.2,
                    humidity: Humidity::clamped(82),
                    weather_code: 3,
                    surface_pressure: 1012.0,
                    visibility_meters: Some(10000.0),
                },
                daily: Vec::new(),
            },
        }
    }

    fn idle_controller() -> SearchController {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_geocode().times(0);
        let mut forecast = MockForecastPort::new();
        forecast.expect_fetch_forecast().times(0);
        SearchController::new(SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast)))
    }

    #[test]
    fn test_starts_idle() {
        let controller = idle_controller();
        assert_eq!(controller.state(), &RenderState::Idle);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut controller = idle_controller();
        for input in ["", "   ", "\t\n "] {
            assert!(controller.submit(input).is_none());
        }
        assert_eq!(controller.state(), &RenderState::Idle);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_blank_submission_keeps_previous_content() {
        let mut controller = idle_controller();
        let ticket = controller.submit("London").expect("ticket");
        controller.complete(ticket.generation, Ok(report()));

        assert!(controller.submit("  ").is_none());
        assert!(matches!(controller.state(), RenderState::Content(_)));
    }

    #[test]
    fn test_submit_trims_and_loads() {
        let mut controller = idle_controller();
        let ticket = controller.submit("  London ").expect("ticket");
        assert_eq!(ticket.city, "London");
        assert_eq!(ticket.generation, 1);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_submit_discards_previous_error() {
        let mut controller = idle_controller();
        let ticket = controller.submit("Paris").expect("ticket");
        controller.complete(ticket.generation, Err(SearchError::NotFound));
        assert_eq!(controller.state(), &RenderState::Error(SearchError::NotFound));

        controller.submit("London");
        assert_eq!(controller.state(), &RenderState::Loading);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = idle_controller();
        let first = controller.submit("Paris").expect("ticket");
        let second = controller.submit("London").expect("ticket");

        assert!(controller.complete(second.generation, Ok(report())));
        assert!(!controller.complete(first.generation, Err(SearchError::Network)));
        assert!(matches!(controller.state(), RenderState::Content(r) if r.place.name == "London"));
    }

    #[test]
    fn test_stale_completion_while_loading() {
        let mut controller = idle_controller();
        let first = controller.submit("Paris").expect("ticket");
        controller.submit("London");

        assert!(!controller.complete(first.generation, Ok(report())));
        assert_eq!(controller.state(), &RenderState::Loading);
    }

    #[tokio::test]
    async fn test_search_not_found() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_geocode().times(1).returning(|_| Ok(None));
        let mut forecast = MockForecastPort::new();
        forecast.expect_fetch_forecast().times(0);

        let mut controller =
            SearchController::new(SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast)));
        let state = controller.search("Paris").await;

        assert_eq!(state, &RenderState::Error(SearchError::NotFound));
    }

    #[tokio::test]
    async fn test_search_content() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_geocode()
            .times(1)
            .returning(|_| Ok(Some(london())));
        let mut forecast = MockForecastPort::new();
        forecast
            .expect_fetch_forecast()
            .times(1)
            .returning(|_| Ok(report().forecast));

        let mut controller =
            SearchController::new(SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast)));
        let state = controller.search("London").await.clone();

        assert_eq!(state, RenderState::Content(report()));
    }

    #[tokio::test]
    async fn test_search_network_error() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_geocode()
            .returning(|_| Err(ApplicationError::ExternalService("refused".to_string())));
        let forecast = MockForecastPort::new();

        let mut controller =
            SearchController::new(SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast)));

        assert_eq!(
            controller.search("London").await,
            &RenderState::Error(SearchError::Network)
        );
    }

    #[tokio::test]
    async fn test_search_blank_makes_no_call() {
        let mut controller = idle_controller();
        assert_eq!(controller.search("   ").await, &RenderState::Idle);
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_value(RenderState::Error(SearchError::ForecastFetch))
            .expect("serialize");
        assert_eq!(json["state"], "error");
        assert_eq!(json["data"], "forecast_fetch");
    }
}
