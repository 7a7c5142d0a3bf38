//! Raw Weather Observations

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Cloud cover level reported by the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudLevel {
    Low,
    Medium,
    High,
}

impl CloudLevel {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudLevel::Low => "low",
            CloudLevel::Medium => "medium",
            CloudLevel::High => "high",
        }
    }
}

impl FromStr for CloudLevel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(CloudLevel::Low),
            "medium" => Ok(CloudLevel::Medium),
            "high" => Ok(CloudLevel::High),
            _ => Err(InputError::UnknownCloudLevel(s.trim().to_string())),
        }
    }
}

/// Wind selection supplied by the caller
///
/// `Auto` asks the engine to derive wind from storm and cloud state; any other
/// value replaces the derived wind outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSetting {
    #[default]
    Auto,
    Light,
    Moderate,
    Strong,
}

impl WindSetting {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            WindSetting::Auto => "auto",
            WindSetting::Light => "light",
            WindSetting::Moderate => "moderate",
            WindSetting::Strong => "strong",
        }
    }

    /// Whether the engine should derive wind itself
    pub fn is_auto(&self) -> bool {
        matches!(self, WindSetting::Auto)
    }
}

impl FromStr for WindSetting {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(WindSetting::Auto),
            "light" => Ok(WindSetting::Light),
            "moderate" => Ok(WindSetting::Moderate),
            "strong" => Ok(WindSetting::Strong),
            _ => Err(InputError::UnknownWindSetting(s.trim().to_string())),
        }
    }
}

/// One scenario's raw inputs, immutable once constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInputs {
    /// Observed temperature (°C)
    pub temperature_c: f64,
    /// Whether rain is expected
    pub rain_expected: bool,
    /// Whether a storm is expected
    pub storm_expected: bool,
    /// Reported cloud cover
    pub cloud_level: CloudLevel,
    /// Wind selection (auto = derive)
    pub wind_override: WindSetting,
}

impl RawInputs {
    /// Build validated inputs; rejects non-finite temperature
    pub fn new(
        temperature_c: f64,
        rain_expected: bool,
        storm_expected: bool,
        cloud_level: CloudLevel,
        wind_override: WindSetting,
    ) -> Result<Self, InputError> {
        if !temperature_c.is_finite() {
            debug!("rejecting observation: temperature {} is not finite", temperature_c);
            return Err(InputError::NonFiniteTemperature {
                value: temperature_c,
            });
        }

        Ok(Self {
            temperature_c,
            rain_expected,
            storm_expected,
            cloud_level,
            wind_override,
        })
    }

    /// Parse string-typed fields and build validated inputs
    pub fn parse(
        temperature_c: f64,
        rain_expected: bool,
        storm_expected: bool,
        cloud_level: &str,
        wind_override: &str,
    ) -> Result<Self, InputError> {
        Self::new(
            temperature_c,
            rain_expected,
            storm_expected,
            cloud_level.parse()?,
            wind_override.parse()?,
        )
    }
}
