//! Application lifecycle: validate configuration, wire widgets to panels,
//! run the tickers, tear down on shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use glance_core::{Config, MemoryStore};
use glance_weather::{WeatherProvider, WeatherWidget};

use crate::panel::PanelRegistry;
use crate::scheduler::Scheduler;
use crate::widgets::{AstronomyWidget, ClockWidget, WeatherPanel};

/// Clock and astronomy refresh once per second.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);
pub const ASTRONOMY_PERIOD: Duration = Duration::from_secs(1);

/// Weather refreshes once per ten minutes, matching the cache TTL.
pub const WEATHER_PERIOD: Duration = Duration::from_secs(600);

/// Main application state and lifecycle manager
pub struct App {
    config: Config,
    panels: Arc<PanelRegistry>,
    scheduler: Scheduler,
    store: Arc<MemoryStore>,
}

impl App {
    /// Create a new application instance.
    ///
    /// The configuration is validated here; on any validation error the
    /// application refuses to start and nothing is scheduled.
    pub fn new(config: Config) -> Result<Self> {
        let validation = config.validate();
        if !validation.is_valid() {
            tracing::error!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(Self {
            config,
            panels: Arc::new(PanelRegistry::new()),
            scheduler: Scheduler::new(),
            store: Arc::new(MemoryStore::new()),
        })
    }

    /// Register the panels and start all widget tickers.
    ///
    /// Each ticker fires immediately, giving every widget its initial
    /// update, and then repeats on its fixed period.
    pub fn initialize(&self) -> Result<()> {
        let provider = WeatherProvider::new()?;
        self.initialize_with_provider(provider)
    }

    /// As [`App::initialize`], with an explicit weather provider. Tests
    /// point the provider at a local mock server.
    pub fn initialize_with_provider(&self, provider: WeatherProvider) -> Result<()> {
        let tz = self.config.tz()?;
        let locale = self.config.effective_locale().to_string();

        self.panels.register(self.config.panels.clock.as_str());
        self.panels.register(self.config.panels.astronomy.as_str());
        self.panels.register(self.config.panels.weather.as_str());

        let clock = ClockWidget::new(tz, locale, self.config.panels.clock.clone());
        let panels = Arc::clone(&self.panels);
        self.scheduler.spawn_repeating("clock", CLOCK_PERIOD, move || {
            clock.update(&panels);
            std::future::ready(())
        });

        let astronomy = AstronomyWidget::new(tz, self.config.panels.astronomy.clone());
        let panels = Arc::clone(&self.panels);
        self.scheduler
            .spawn_repeating("astronomy", ASTRONOMY_PERIOD, move || {
                astronomy.update(&panels);
                std::future::ready(())
            });

        let weather = Arc::new(WeatherPanel::new(
            WeatherWidget::new(
                provider,
                self.store.clone() as Arc<dyn glance_core::SessionStore>,
                self.config.latitude,
                self.config.longitude,
                self.config.timezone.clone(),
            ),
            self.config.panels.weather.clone(),
        ));
        let panels = Arc::clone(&self.panels);
        self.scheduler
            .spawn_repeating("weather", WEATHER_PERIOD, move || {
                let weather = Arc::clone(&weather);
                let panels = Arc::clone(&panels);
                async move { weather.update(&panels).await }
            });

        tracing::info!(
            "Initialized widgets for {} ({}, {})",
            self.config.city,
            self.config.latitude,
            self.config.longitude
        );
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The display panels.
    pub fn panels(&self) -> &PanelRegistry {
        &self.panels
    }

    /// Stop all tickers and wait for in-flight updates to finish.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down application");
        self.scheduler.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_invalid_config_aborts_startup() {
        let mut config = Config::default();
        config.timezone = String::new();
        assert!(App::new(config).is_err());
    }

    #[tokio::test]
    async fn test_initialize_updates_all_panels() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": { "temperature_2m": 17.6, "weather_code": 2 }
            })))
            .mount(&server)
            .await;

        let app = App::new(Config::default()).unwrap();
        let provider = WeatherProvider::with_base_url(&server.uri()).unwrap();
        app.initialize_with_provider(provider).unwrap();

        // Give the immediate first ticks a moment to run.
        tokio::time::sleep(Duration::from_millis(200)).await;
        app.shutdown().await;

        let clock = app.panels().content("clock").unwrap();
        assert!(clock.ends_with(" am") || clock.ends_with(" pm"));

        let astronomy = app.panels().content("astronomy-info").unwrap();
        assert!(!astronomy.is_empty());

        let weather = app.panels().content("weather-info").unwrap();
        assert!(weather.contains("18°C"));
        assert!(weather.contains("cloudy"));
    }

    #[tokio::test]
    async fn test_weather_failure_degrades_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = App::new(Config::default()).unwrap();
        let provider = WeatherProvider::with_base_url(&server.uri()).unwrap();
        app.initialize_with_provider(provider).unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.shutdown().await;

        let weather = app.panels().content("weather-info").unwrap();
        assert_eq!(weather, glance_weather::UNAVAILABLE_FRAGMENT);
    }

    #[tokio::test]
    async fn test_custom_panel_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.panels.weather = "my-weather-widget".to_string();
        let app = App::new(config).unwrap();
        let provider = WeatherProvider::with_base_url(&server.uri()).unwrap();
        app.initialize_with_provider(provider).unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.shutdown().await;

        assert!(app.panels().content("my-weather-widget").is_some());
        assert!(app.panels().content("weather-info").is_none());
    }
}
