//! Weather widget for Glance
//!
//! Fetches current conditions from the Open-Meteo API and renders them as
//! a display fragment, with a session-scoped TTL cache bounding outbound
//! calls to one per cache window per coordinate pair.

pub mod cache;
pub mod provider;
pub mod types;
pub mod widget;

pub use cache::{CachedFragment, WeatherCache, CACHE_TTL_MS};
pub use provider::WeatherProvider;
pub use types::{CurrentObservation, WeatherCondition, WeatherError};
pub use widget::{WeatherWidget, UNAVAILABLE_FRAGMENT};
