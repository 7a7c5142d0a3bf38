//! Derivation configuration

use serde::{Deserialize, Serialize};

/// Temperature band cut-points
///
/// Values above `hot_above` are hot, values below `cold_below` are cold, and
/// both boundaries close toward mild so exactly one band applies to every
/// finite temperature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriverConfig {
    /// Temperatures strictly above this are hot (°C)
    pub hot_above: f64,

    /// Temperatures strictly below this are cold (°C)
    pub cold_below: f64,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            hot_above: 28.0,
            cold_below: 15.0,
        }
    }
}
