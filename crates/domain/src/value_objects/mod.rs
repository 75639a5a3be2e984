//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod humidity;
mod theme_preference;
mod uv_index;
mod weather_code;

pub use geo_location::GeoLocation;
pub use humidity::Humidity;
pub use theme_preference::ThemePreference;
pub use uv_index::{UvIndex, UvLevel};
pub use weather_code::{WeatherCodeEntry, WeatherCondition, resolve_weather_code};
