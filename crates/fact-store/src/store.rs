//! Fact Store
//!
//! One scenario's raw inputs together with the facts derived from them. A
//! store can only be assembled once both halves exist, so rule evaluation
//! always reads a complete, sealed snapshot.

use crate::facts::{DerivedFacts, Humidity, TemperatureBand, Wind};
use crate::inputs::{CloudLevel, RawInputs};

/// Read-only view over raw inputs and derived facts for one evaluation
#[derive(Debug, Clone)]
pub struct FactStore {
    raw: RawInputs,
    derived: DerivedFacts,
}

impl FactStore {
    /// Seal validated inputs and their derived facts into a store
    pub fn new(raw: RawInputs, derived: DerivedFacts) -> Self {
        Self { raw, derived }
    }

    /// The raw inputs this evaluation started from
    pub fn raw(&self) -> &RawInputs {
        &self.raw
    }

    /// The derived facts
    pub fn derived(&self) -> &DerivedFacts {
        &self.derived
    }

    /// Temperature band
    pub fn temperature_band(&self) -> TemperatureBand {
        self.derived.temperature_band
    }

    /// Humidity state
    pub fn humidity(&self) -> Humidity {
        self.derived.humidity
    }

    /// Wind strength
    pub fn wind(&self) -> Wind {
        self.derived.wind
    }

    /// Reported cloud cover, consulted directly by cloud-specific rules
    pub fn cloud_level(&self) -> CloudLevel {
        self.raw.cloud_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::WindSetting;

    #[test]
    fn test_accessors_reflect_sealed_values() {
        let raw = RawInputs::new(30.0, false, false, CloudLevel::Low, WindSetting::Auto).unwrap();
        let derived = DerivedFacts {
            temperature_band: TemperatureBand::Hot,
            humidity: Humidity::Dry,
            wind: Wind::Light,
        };
        let store = FactStore::new(raw, derived);

        assert_eq!(store.temperature_band(), TemperatureBand::Hot);
        assert_eq!(store.humidity(), Humidity::Dry);
        assert_eq!(store.wind(), Wind::Light);
        assert_eq!(store.cloud_level(), CloudLevel::Low);
        assert_eq!(store.raw().temperature_c, 30.0);
    }
}
