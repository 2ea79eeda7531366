//! Widget drivers: bind each computation to its panel.
//!
//! A driver's update is idempotent and self-contained; a missing panel is
//! skipped with a warning so scheduling always continues.

use chrono::Utc;
use chrono_tz::Tz;

use glance_weather::WeatherWidget;

use crate::panel::PanelRegistry;

/// Live clock driver.
pub struct ClockWidget {
    tz: Tz,
    locale: String,
    panel_id: String,
}

impl ClockWidget {
    pub fn new(tz: Tz, locale: impl Into<String>, panel_id: impl Into<String>) -> Self {
        Self {
            tz,
            locale: locale.into(),
            panel_id: panel_id.into(),
        }
    }

    pub fn update(&self, panels: &PanelRegistry) {
        let text = glance_clock::current_time(self.tz, &self.locale);
        if !panels.set_content(&self.panel_id, text) {
            tracing::warn!("Clock panel \"{}\" not found", self.panel_id);
        }
    }
}

/// Day/night and moon-phase driver.
pub struct AstronomyWidget {
    tz: Tz,
    panel_id: String,
}

impl AstronomyWidget {
    pub fn new(tz: Tz, panel_id: impl Into<String>) -> Self {
        Self {
            tz,
            panel_id: panel_id.into(),
        }
    }

    pub fn update(&self, panels: &PanelRegistry) {
        let symbol = glance_astro::sky_symbol(self.tz, Utc::now());
        if !panels.set_content(&self.panel_id, symbol) {
            tracing::warn!("Astronomy panel \"{}\" not found", self.panel_id);
        }
    }
}

/// Cached weather driver.
pub struct WeatherPanel {
    widget: WeatherWidget,
    panel_id: String,
}

impl WeatherPanel {
    pub fn new(widget: WeatherWidget, panel_id: impl Into<String>) -> Self {
        Self {
            widget,
            panel_id: panel_id.into(),
        }
    }

    pub async fn update(&self, panels: &PanelRegistry) {
        let fragment = self.widget.current_fragment().await;
        if !panels.set_content(&self.panel_id, fragment) {
            tracing::warn!("Weather panel \"{}\" not found", self.panel_id);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use glance_astro::{MOON_PHASES, SUN_MARKER};

    fn melbourne() -> Tz {
        "Australia/Melbourne".parse().unwrap()
    }

    #[test]
    fn test_clock_writes_localized_time() {
        let panels = PanelRegistry::new();
        panels.register("clock");

        ClockWidget::new(melbourne(), "en-AU", "clock").update(&panels);

        let content = panels.content("clock").unwrap();
        assert!(content.ends_with(" am") || content.ends_with(" pm"), "got {}", content);
        assert_eq!(content.matches(':').count(), 2);
    }

    #[test]
    fn test_clock_missing_panel_does_not_panic() {
        let panels = PanelRegistry::new();
        ClockWidget::new(melbourne(), "en-AU", "clock").update(&panels);
        assert!(panels.snapshot().is_empty());
    }

    #[test]
    fn test_astronomy_writes_sun_or_moon() {
        let panels = PanelRegistry::new();
        panels.register("astronomy-info");

        AstronomyWidget::new(melbourne(), "astronomy-info").update(&panels);

        let content = panels.content("astronomy-info").unwrap();
        assert!(content == SUN_MARKER || MOON_PHASES.contains(&content.as_str()));
    }

    #[test]
    fn test_astronomy_missing_panel_does_not_panic() {
        let panels = PanelRegistry::new();
        AstronomyWidget::new(melbourne(), "astronomy-info").update(&panels);
        assert!(panels.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_weather_missing_panel_does_not_panic() {
        use glance_core::MemoryStore;
        use glance_core::store::set_json;
        use glance_weather::cache::cache_keys;
        use glance_weather::WeatherProvider;
        use std::sync::Arc;

        // Seed a fresh cache entry so the update never touches the network.
        let store = Arc::new(MemoryStore::new());
        let (fragment_key, time_key) = cache_keys(1.0, 2.0);
        set_json(store.as_ref(), &fragment_key, &"<span>cached</span>");
        set_json(store.as_ref(), &time_key, &Utc::now().timestamp_millis());

        let provider = WeatherProvider::with_base_url("http://127.0.0.1:9").unwrap();
        let widget = WeatherWidget::new(provider, store, 1.0, 2.0, "UTC");

        let panels = PanelRegistry::new();
        WeatherPanel::new(widget, "weather-info").update(&panels).await;
        assert!(panels.snapshot().is_empty());
    }
}
