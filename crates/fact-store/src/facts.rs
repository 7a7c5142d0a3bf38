//! Derived Weather Facts

use serde::{Deserialize, Serialize};

/// Temperature band the observed value falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Hot,
    Mild,
    Cold,
}

impl TemperatureBand {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Hot => "hot",
            TemperatureBand::Mild => "mild",
            TemperatureBand::Cold => "cold",
        }
    }
}

/// Humidity state inferred from the rain flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Humidity {
    Humid,
    Dry,
}

impl Humidity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Humidity::Humid => "humid",
            Humidity::Dry => "dry",
        }
    }
}

/// Wind strength, derived or forced by an override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wind {
    Light,
    Moderate,
    Strong,
}

impl Wind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Wind::Light => "light",
            Wind::Moderate => "moderate",
            Wind::Strong => "strong",
        }
    }
}

/// Facts computed exactly once per evaluation, never mutated afterward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFacts {
    /// Temperature band partition
    pub temperature_band: TemperatureBand,
    /// Humidity state
    pub humidity: Humidity,
    /// Wind strength
    pub wind: Wind,
}
