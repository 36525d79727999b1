use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::prayer_times::PrayerCalculator;
use crate::ritual::RitualRates;

fn default_latitude() -> f64 {
    -0.502106
}
fn default_longitude() -> f64 {
    117.153709
}
fn default_location_name() -> String {
    "Samarinda".to_string()
}
fn default_calc_method() -> String {
    "MWL".to_string()
}
fn default_madhab() -> String {
    "Shafi".to_string()
}
fn default_utc_offset_hours() -> f64 {
    8.0
}
fn default_hijri_offset() -> i32 {
    0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalahConfig {
    #[serde(default = "default_location_name")]
    pub location_name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_calc_method")]
    pub calc_method: String,
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: f64,
    /// Days to add/subtract from the tabular Hijri date for local moon sighting.
    /// 0 = tabular, -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for SalahConfig {
    fn default() -> Self {
        Self {
            location_name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            calc_method: default_calc_method(),
            madhab: default_madhab(),
            utc_offset_hours: default_utc_offset_hours(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub salah: SalahConfig,
    #[serde(default)]
    pub rates: RitualRates,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "hisab").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        config
            .rates
            .validate()
            .with_context(|| format!("Invalid [rates] in {:?}", path))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Build the prayer calculator for the configured location.
    pub fn calculator(&self) -> Result<PrayerCalculator> {
        let s = &self.salah;
        PrayerCalculator::new(s.latitude, s.longitude, &s.calc_method, &s.madhab, s.utc_offset_hours)
            .with_context(|| format!("Invalid [salah] settings for {}", s.location_name))
    }
}
