use serde::Deserialize;

/// Open-Meteo forecast response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentObservation,
}

/// Current conditions returned by the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentObservation {
    /// Temperature in Celsius
    pub temperature_2m: f64,
    /// WMO weather code
    pub weather_code: i64,
}

/// Coarse condition labels mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherCondition {
    Clear,
    // Unknown codes default to sunny
    #[default]
    Sunny,
    Cloudy,
    Overcast,
    Foggy,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    HeavySnow,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1 => Self::Sunny,
            2 => Self::Cloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Foggy,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 => Self::Rain,
            65 => Self::HeavyRain,
            71 | 73 => Self::Snow,
            75 => Self::HeavySnow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::default(),
        }
    }

    /// Display label for the condition
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::Foggy => "foggy",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::HeavyRain => "heavy rain",
            Self::Snow => "snow",
            Self::HeavySnow => "heavy snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API responded with status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_code_clear_family() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo_code(1), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_wmo_code(2), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Overcast);
    }

    #[test]
    fn test_wmo_code_fog() {
        assert_eq!(WeatherCondition::from_wmo_code(45), WeatherCondition::Foggy);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Foggy);
    }

    #[test]
    fn test_wmo_code_drizzle() {
        assert_eq!(WeatherCondition::from_wmo_code(51), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_wmo_code(53), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_wmo_code(55), WeatherCondition::Drizzle);
    }

    #[test]
    fn test_wmo_code_rain() {
        assert_eq!(WeatherCondition::from_wmo_code(61), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(63), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(65), WeatherCondition::HeavyRain);
    }

    #[test]
    fn test_wmo_code_snow() {
        assert_eq!(WeatherCondition::from_wmo_code(71), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(73), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(75), WeatherCondition::HeavySnow);
    }

    #[test]
    fn test_wmo_code_thunderstorm() {
        assert_eq!(WeatherCondition::from_wmo_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_wmo_code(96), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_wmo_code(99), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn test_wmo_code_unknown_defaults_to_sunny() {
        assert_eq!(WeatherCondition::from_wmo_code(13), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_wmo_code(999), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_wmo_code(-1), WeatherCondition::Sunny);
    }

    #[test]
    fn test_condition_label() {
        assert_eq!(WeatherCondition::Clear.label(), "clear");
        assert_eq!(WeatherCondition::HeavyRain.label(), "heavy rain");
        assert_eq!(WeatherCondition::Thunderstorm.label(), "thunderstorm");
    }
}
