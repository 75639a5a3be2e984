//! Application services - Use case implementations

pub mod highlight_formatter;
mod search_controller;
mod search_service;
mod theme_controller;
mod weather_view;

pub use highlight_formatter::{Highlight, MISSING_VALUE};
pub use search_controller::{RenderState, SearchController, SearchTicket};
pub use search_service::{SearchError, SearchPipeline, WeatherReport};
pub use theme_controller::ThemeController;
pub use weather_view::{ContentView, DayCard, STRIP_DAYS, WELCOME_MESSAGE, WeatherView};
