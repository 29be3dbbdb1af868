use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::timezone::detect_system_timezone;

pub const CONFIG_FILE: &str = "calmath.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// IANA timezone used for local views
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub date_input: DateInput,
}

/// Defaults for the `schedule` command
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    pub work_days: u32,
    pub off_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            work_days: 2,
            off_days: 2,
        }
    }
}

/// Which date syntaxes command arguments may use
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateInput {
    /// ISO 8601 only
    Iso,
    /// ISO 8601, falling back to English phrases ("tomorrow", "next friday")
    #[default]
    Natural,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: detect_system_timezone(),
            schedule: ScheduleConfig::default(),
            date_input: DateInput::default(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("CALMATH_").split("__"))
    }
}
