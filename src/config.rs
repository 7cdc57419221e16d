use std::env;

use crate::error::AppError;

/// Environment variable holding the weather provider API key
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
/// Environment variable gating the device-location path. Absent means
/// granted; `0`, `false` or `no` means denied.
pub const ALLOW_LOCATION_VAR: &str = "WEATHER_ALLOW_LOCATION";

/// Runtime configuration, resolved once at startup and passed into the
/// components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub allow_location: bool,
}

impl Config {
    /// Load the configuration from the process environment. A missing or
    /// empty API key is a hard startup error rather than a silently failing
    /// provider.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, AppError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::EnvVarNotSet(API_KEY_VAR))?;
        let allow_location = lookup(ALLOW_LOCATION_VAR)
            .map(|value| !matches!(value.trim(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self {
            api_key,
            allow_location,
        })
    }
}
