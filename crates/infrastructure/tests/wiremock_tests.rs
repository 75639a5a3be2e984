//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Search pipeline end to end over the Open-Meteo adapters and wiremock
//! - File-backed theme persistence through the theme controller

use std::sync::Arc;

use application::{
    RenderState, SearchController, SearchError, SearchPipeline, ThemeController, WeatherView,
};
use domain::value_objects::ThemePreference;
use infrastructure::{FileSettingsStore, ForecastAdapter, GeocodingAdapter};
use integration_weather::{GeocodingConfig, WeatherConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn london_geocoding() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "name": "London",
            "latitude": 51.5,
            "longitude": -0.12,
            "country": "UK"
        }]
    })
}

fn london_forecast(days: usize) -> serde_json::Value {
    let dates: Vec<String> = (0..days).map(|d| format!("2024-01-{:02}", 15 + d)).collect();
    serde_json::json!({
        "timezone": "Europe/London",
        "current": {
            "temperature_2m": 15.4,
            "relative_humidity_2m": 82,
            "weather_code": 3,
            "wind_speed_10m": 11.2,
            "apparent_temperature": 13.9,
            "surface_pressure": 1012.3,
            "visibility": 12345.0
        },
        "daily": {
            "sunrise": dates.iter().map(|d| format!("{d}T07:15")).collect::<Vec<_>>(),
            "sunset": dates.iter().map(|d| format!("{d}T16:30")).collect::<Vec<_>>(),
            "time": dates,
            "weather_code": vec![61; days],
            "temperature_2m_max": vec![10.6; days],
            "temperature_2m_min": vec![4.4; days],
            "uv_index_max": vec![1.5; days],
            "precipitation_probability_max": vec![40; days]
        }
    })
}

fn pipeline(server: &MockServer) -> SearchPipeline {
    let geocoding = GeocodingAdapter::with_config(GeocodingConfig::for_testing(server.uri()))
        .expect("geocoding adapter");
    let forecast = ForecastAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("forecast adapter");
    SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast))
}

async fn mount_search(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Search pipeline
// ============================================================================

mod search_pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn london_renders_overcast_content() {
        let server = MockServer::start().await;
        mount_search(&server, london_geocoding()).await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "51.5"))
            .and(query_param("longitude", "-0.12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_forecast(6)))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = SearchController::new(pipeline(&server));
        let state = controller.search("London").await;

        let WeatherView::Content(view) = WeatherView::project(state) else {
            panic!("expected content, got {state:?}");
        };
        assert_eq!(view.header, "London, UK");
        assert_eq!(view.temperature, "15°");
        assert_eq!(view.description, "Overcast");
        assert_eq!(view.strip.len(), 5);
        assert_eq!(view.highlights[4].value, "12.3 km");
        assert_eq!(view.highlights[2].value, "↑ 7:15 AM");
    }

    #[tokio::test]
    async fn paris_without_results_is_not_found() {
        let server = MockServer::start().await;
        mount_search(&server, serde_json::json!({"generationtime_ms": 0.2})).await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut controller = SearchController::new(pipeline(&server));
        let state = controller.search("Paris").await;

        assert_eq!(state, &RenderState::Error(SearchError::NotFound));
        assert_eq!(
            WeatherView::project(state),
            WeatherView::Error {
                message: "City not found. Please try again.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn geocoding_failure_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = pipeline(&server).run("London").await;
        assert_eq!(result, Err(SearchError::Network));
    }

    #[tokio::test]
    async fn forecast_failure_is_fetch_error() {
        let server = MockServer::start().await;
        mount_search(&server, london_geocoding()).await;
        mount_forecast(&server, ResponseTemplate::new(502)).await;

        let result = pipeline(&server).run("London").await;
        assert_eq!(result, Err(SearchError::ForecastFetch));
    }

    #[tokio::test]
    async fn malformed_forecast_is_fetch_error() {
        let server = MockServer::start().await;
        mount_search(&server, london_geocoding()).await;
        mount_forecast(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"current": null})),
        )
        .await;

        let result = pipeline(&server).run("London").await;
        assert_eq!(result, Err(SearchError::ForecastFetch));
    }

    #[tokio::test]
    async fn short_series_is_still_content() {
        let server = MockServer::start().await;
        mount_search(&server, london_geocoding()).await;
        mount_forecast(
            &server,
            ResponseTemplate::new(200).set_body_json(london_forecast(3)),
        )
        .await;

        let report = pipeline(&server).run("London").await.expect("content");
        let state = RenderState::Content(report);
        let WeatherView::Content(view) = WeatherView::project(&state) else {
            panic!("expected content");
        };
        assert_eq!(view.strip.len(), 2);
        assert_eq!(view.strip[0].temperatures, "11° / 4°");
    }

    #[tokio::test]
    async fn blank_input_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut controller = SearchController::new(pipeline(&server));
        assert_eq!(controller.search("   ").await, &RenderState::Idle);
    }
}

// ============================================================================
// Theme persistence
// ============================================================================

mod theme_persistence_tests {
    use application::SettingsStorePort;

    use super::*;

    #[test]
    fn toggle_survives_restart() {
        let dir = tempfile::TempDir::new().expect("tempdir");

        let controller = ThemeController::new(Arc::new(FileSettingsStore::new(dir.path())));
        assert_eq!(controller.current(), ThemePreference::Dark);
        controller.toggle().expect("toggle");

        let restarted = ThemeController::new(Arc::new(FileSettingsStore::new(dir.path())));
        assert_eq!(restarted.current(), ThemePreference::Light);
        assert_eq!(restarted.toggle_icon(), "moon");
    }

    #[test]
    fn double_toggle_restores_stored_value() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let store = FileSettingsStore::new(dir.path());
        let controller = ThemeController::new(Arc::new(store.clone()));

        controller.toggle().expect("first toggle");
        controller.toggle().expect("second toggle");

        assert_eq!(store.load_theme().expect("load"), Some(ThemePreference::Dark));
        assert_eq!(controller.toggle_icon(), "sun");
    }

    #[test]
    fn corrupt_settings_fall_back_to_dark() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("settings.json"), "][").expect("write");

        let controller = ThemeController::new(Arc::new(FileSettingsStore::new(dir.path())));
        assert_eq!(controller.current(), ThemePreference::Dark);
    }
}
