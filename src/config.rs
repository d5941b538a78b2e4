//! Dashboard configuration.
//!
//! `Settings` is built once at startup and handed to the generator, the view
//! builder and the page shell. Nothing reads configuration from global state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Default configuration file, looked up in the working directory.
#[cfg(feature = "cli")]
const CONFIG_FILE_NAME: &str = "traffic-grid.toml";

/// Environment variable holding an alternative config file path.
#[cfg(feature = "cli")]
pub const CONFIG_PATH_ENV: &str = "TRAFFIC_GRID_CONFIG";

/// Prefix for per-field environment overrides (`TRAFFIC_GRID_APP_TITLE`, ...).
#[cfg(feature = "cli")]
pub const ENV_PREFIX: &str = "TRAFFIC_GRID_";

/// Deepest zoom level accepted for the initial camera.
pub const MAX_ZOOM: f64 = 24.0;

/// Most points a single render may generate.
pub const MAX_POINT_COUNT: usize = 100_000;

/// Page layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    /// Content in a fixed-width column.
    Centered,
    /// Content spans the full window.
    #[default]
    Wide,
}

/// Application settings.
///
/// Loaded from (highest precedence first):
/// 1. Environment variables prefixed with `TRAFFIC_GRID_`
/// 2. `traffic-grid.toml` (or the file named by `TRAFFIC_GRID_CONFIG`)
/// 3. Default values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page and window title.
    pub app_title: String,
    /// Page layout mode.
    pub app_layout: PageLayout,
    /// Map center latitude in degrees.
    pub map_center_lat: f64,
    /// Map center longitude in degrees.
    pub map_center_lon: f64,
    /// Initial camera zoom level.
    pub initial_zoom: f64,
    /// Number of synthetic points per render.
    pub point_count: usize,
    /// Standard deviation of the scatter around the center, in degrees.
    pub point_spread: f64,
    /// Fixed RNG seed; `None` draws from entropy on every render.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_title: "Traffic Control Center".to_string(),
            app_layout: PageLayout::Wide,
            map_center_lat: 40.7128,
            map_center_lon: -74.0060,
            initial_zoom: 11.0,
            point_count: 50,
            point_spread: 0.02,
            seed: None,
        }
    }
}

impl Settings {
    /// Load configuration from all sources and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parsing or validation fails.
    #[cfg(feature = "cli")]
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from(path)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parsing or validation fails.
    #[cfg(feature = "cli")]
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        let config_file = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        tracing::debug!(path = %config_file.display(), "Loading settings");

        let figment = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]));

        let settings: Settings = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON document, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.app_title.trim().is_empty() {
            return Err(Error::validation("app_title must not be empty"));
        }

        if !self.map_center_lat.is_finite() || self.map_center_lat.abs() > 90.0 {
            return Err(Error::validation(format!(
                "map_center_lat ({}) must be within -90..=90",
                self.map_center_lat
            )));
        }

        if !self.map_center_lon.is_finite() || self.map_center_lon.abs() > 180.0 {
            return Err(Error::validation(format!(
                "map_center_lon ({}) must be within -180..=180",
                self.map_center_lon
            )));
        }

        if !(0.0..=MAX_ZOOM).contains(&self.initial_zoom) {
            return Err(Error::validation(format!(
                "initial_zoom ({}) must be within 0..={MAX_ZOOM}",
                self.initial_zoom
            )));
        }

        if self.point_count > MAX_POINT_COUNT {
            return Err(Error::validation(format!(
                "point_count ({}) must be at most {MAX_POINT_COUNT}",
                self.point_count
            )));
        }

        if !self.point_spread.is_finite() || self.point_spread < 0.0 {
            return Err(Error::validation(format!(
                "point_spread ({}) must be finite and non-negative",
                self.point_spread
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.app_layout, PageLayout::Wide);
        assert_eq!(settings.initial_zoom, 11.0);
        assert_eq!(settings.point_count, 50);
        assert_eq!(settings.point_spread, 0.02);
        assert!(settings.seed.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let settings = Settings {
            app_title: "   ".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("app_title"));
    }

    #[test]
    fn test_validate_latitude_out_of_range() {
        let settings = Settings {
            map_center_lat: 91.0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("map_center_lat"));
    }

    #[test]
    fn test_validate_non_finite_longitude() {
        let settings = Settings {
            map_center_lon: f64::NAN,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("map_center_lon"));
    }

    #[test]
    fn test_validate_zoom_range() {
        let settings = Settings {
            initial_zoom: 25.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            initial_zoom: 0.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_spread() {
        let settings = Settings {
            point_spread: -0.5,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("point_spread"));
    }

    #[test]
    fn test_validate_point_count_cap() {
        let settings = Settings {
            point_count: MAX_POINT_COUNT,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());

        let settings = Settings {
            point_count: MAX_POINT_COUNT + 1,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("point_count"));
    }

    #[test]
    fn test_from_json_partial() {
        let settings =
            Settings::from_json(r#"{"app_title": "Downtown", "app_layout": "centered"}"#).unwrap();

        assert_eq!(settings.app_title, "Downtown");
        assert_eq!(settings.app_layout, PageLayout::Centered);
        assert_eq!(settings.point_count, 50);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(Settings::from_json(r#"{"initial_zoom": -3}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_from_toml_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "traffic-grid.toml",
                r#"
                    app_title = "Harbor Traffic"
                    map_center_lat = 40.0
                    map_center_lon = -73.0
                "#,
            )?;
            jail.set_env("TRAFFIC_GRID_INITIAL_ZOOM", "13");

            let settings = Settings::load_from(None).map_err(|e| e.to_string())?;
            assert_eq!(settings.app_title, "Harbor Traffic");
            assert_eq!(settings.map_center_lat, 40.0);
            assert_eq!(settings.map_center_lon, -73.0);
            assert_eq!(settings.initial_zoom, 13.0);
            assert_eq!(settings.app_layout, PageLayout::Wide);
            Ok(())
        });
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_without_file_uses_defaults() {
        figment::Jail::expect_with(|_jail| {
            let settings = Settings::load_from(None).map_err(|e| e.to_string())?;
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_rejects_huge_point_count() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TRAFFIC_GRID_POINT_COUNT", "18446744073709551615");
            let err = Settings::load_from(None).unwrap_err();
            assert!(matches!(err, Error::ConfigValidation { .. }));
            Ok(())
        });
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_rejects_invalid_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TRAFFIC_GRID_MAP_CENTER_LAT", "123.0");
            assert!(Settings::load_from(None).is_err());
            Ok(())
        });
    }
}
