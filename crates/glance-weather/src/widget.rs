//! The cached-fetch weather widget.
//!
//! Consults the session cache before the network; renders and caches a
//! fixed fallback fragment on failure so a dead endpoint is not retried
//! on every tick inside the TTL window.

use std::sync::Arc;

use chrono::Utc;

use glance_core::store::SessionStore;

use crate::cache::WeatherCache;
use crate::provider::WeatherProvider;
use crate::types::WeatherCondition;

/// Fragment rendered and cached when a fetch fails.
pub const UNAVAILABLE_FRAGMENT: &str = r#"<span class="error">Weather unavailable</span>"#;

/// Render an observation as a display fragment.
///
/// Temperature is rounded to the nearest whole degree; the WMO code maps
/// to a coarse label, unknown codes to the default.
pub fn format_fragment(temperature: f64, weather_code: i64) -> String {
    let temp = temperature.round() as i64;
    let label = WeatherCondition::from_wmo_code(weather_code).label();
    format!(
        r#"<span class="weather-temp">{}°C</span><span class="weather-icon">{}</span>"#,
        temp, label
    )
}

/// Weather widget bound to one coordinate pair.
pub struct WeatherWidget {
    provider: WeatherProvider,
    cache: WeatherCache,
    latitude: f64,
    longitude: f64,
    timezone: String,
}

impl WeatherWidget {
    pub fn new(
        provider: WeatherProvider,
        store: Arc<dyn SessionStore>,
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            cache: WeatherCache::new(store, latitude, longitude),
            latitude,
            longitude,
            timezone: timezone.into(),
        }
    }

    /// Produce the current weather fragment.
    ///
    /// Returns the cached fragment while it is fresh; otherwise fetches,
    /// renders, and caches. Never fails: fetch errors yield the fixed
    /// unavailable fragment, which is cached with the same TTL as a
    /// success.
    pub async fn current_fragment(&self) -> String {
        let now_ms = Utc::now().timestamp_millis();

        if let Some(cached) = self.cache.get() {
            if cached.is_fresh(now_ms) {
                tracing::debug!("Using cached weather fragment");
                return cached.html;
            }
        }

        match self
            .provider
            .fetch_current(self.latitude, self.longitude, &self.timezone)
            .await
        {
            Ok(observation) => {
                let html = format_fragment(observation.temperature_2m, observation.weather_code);
                self.cache.put(&html, Utc::now().timestamp_millis());
                html
            }
            Err(e) => {
                tracing::error!("Failed to fetch weather data: {}", e);
                // Cache the error state so the endpoint is not retried
                // on every subsequent tick within the TTL window.
                self.cache.put(UNAVAILABLE_FRAGMENT, Utc::now().timestamp_millis());
                UNAVAILABLE_FRAGMENT.to_string()
            }
        }
    }
}
