//! Derivation Rules

use crate::config::DeriverConfig;
use fact_store::{
    CloudLevel, DerivedFacts, Humidity, RawInputs, TemperatureBand, Wind, WindSetting,
};
use tracing::debug;

/// Derives weather predicates from raw observations
///
/// Pure per-call transformation: each predicate is computed exactly once and
/// the result is never revised. Inputs are assumed pre-validated (finite
/// temperature, in-range enums).
pub struct FactDeriver {
    config: DeriverConfig,
}

impl FactDeriver {
    /// Create a deriver with the given cut-points
    pub fn new(config: DeriverConfig) -> Self {
        Self { config }
    }

    /// Classify a temperature into its band
    ///
    /// Boundaries are closed toward mild: `cold_below` and `hot_above`
    /// themselves are mild.
    pub fn temperature_band(&self, temperature_c: f64) -> TemperatureBand {
        if temperature_c > self.config.hot_above {
            TemperatureBand::Hot
        } else if temperature_c < self.config.cold_below {
            TemperatureBand::Cold
        } else {
            TemperatureBand::Mild
        }
    }

    /// Humidity follows the rain flag directly
    pub fn humidity(&self, rain_expected: bool) -> Humidity {
        if rain_expected {
            Humidity::Humid
        } else {
            Humidity::Dry
        }
    }

    /// Wind strength from storm and cloud state
    ///
    /// A non-auto setting replaces derivation outright, bypassing storm and
    /// cloud entirely. Otherwise a storm means strong wind; failing that,
    /// high or medium cloud means moderate and low cloud means light.
    pub fn wind(
        &self,
        storm_expected: bool,
        cloud_level: CloudLevel,
        setting: WindSetting,
    ) -> Wind {
        match setting {
            WindSetting::Light => Wind::Light,
            WindSetting::Moderate => Wind::Moderate,
            WindSetting::Strong => Wind::Strong,
            WindSetting::Auto => {
                if storm_expected {
                    Wind::Strong
                } else {
                    match cloud_level {
                        CloudLevel::High | CloudLevel::Medium => Wind::Moderate,
                        CloudLevel::Low => Wind::Light,
                    }
                }
            }
        }
    }

    /// Compute all derived facts for one observation
    pub fn derive(&self, raw: &RawInputs) -> DerivedFacts {
        let facts = DerivedFacts {
            temperature_band: self.temperature_band(raw.temperature_c),
            humidity: self.humidity(raw.rain_expected),
            wind: self.wind(raw.storm_expected, raw.cloud_level, raw.wind_override),
        };

        debug!(
            "derived facts: band={} humidity={} wind={}",
            facts.temperature_band.as_str(),
            facts.humidity.as_str(),
            facts.wind.as_str()
        );

        facts
    }
}

impl Default for FactDeriver {
    fn default() -> Self {
        Self::new(DeriverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_temperature_band_boundaries() {
        let deriver = FactDeriver::default();

        // Both cut-points close toward mild
        assert_eq!(deriver.temperature_band(15.0), TemperatureBand::Mild);
        assert_eq!(deriver.temperature_band(28.0), TemperatureBand::Mild);

        assert_eq!(deriver.temperature_band(28.1), TemperatureBand::Hot);
        assert_eq!(deriver.temperature_band(14.9), TemperatureBand::Cold);
        assert_eq!(deriver.temperature_band(-40.0), TemperatureBand::Cold);
        assert_eq!(deriver.temperature_band(50.0), TemperatureBand::Hot);
    }

    #[test]
    fn test_humidity_follows_rain_flag() {
        let deriver = FactDeriver::default();
        assert_eq!(deriver.humidity(true), Humidity::Humid);
        assert_eq!(deriver.humidity(false), Humidity::Dry);
    }

    #[test]
    fn test_wind_override_short_circuits() {
        let deriver = FactDeriver::default();

        // Override wins regardless of storm or cloud state
        for storm in [false, true] {
            for cloud in [CloudLevel::Low, CloudLevel::Medium, CloudLevel::High] {
                assert_eq!(
                    deriver.wind(storm, cloud, WindSetting::Strong),
                    Wind::Strong
                );
                assert_eq!(deriver.wind(storm, cloud, WindSetting::Light), Wind::Light);
                assert_eq!(
                    deriver.wind(storm, cloud, WindSetting::Moderate),
                    Wind::Moderate
                );
            }
        }
    }

    #[test]
    fn test_wind_auto_derivation() {
        let deriver = FactDeriver::default();

        // Storm dominates cloud level
        for cloud in [CloudLevel::Low, CloudLevel::Medium, CloudLevel::High] {
            assert_eq!(deriver.wind(true, cloud, WindSetting::Auto), Wind::Strong);
        }

        assert_eq!(
            deriver.wind(false, CloudLevel::High, WindSetting::Auto),
            Wind::Moderate
        );
        assert_eq!(
            deriver.wind(false, CloudLevel::Medium, WindSetting::Auto),
            Wind::Moderate
        );
        assert_eq!(
            deriver.wind(false, CloudLevel::Low, WindSetting::Auto),
            Wind::Light
        );
    }

    #[test]
    fn test_derive_populates_all_facts() {
        let deriver = FactDeriver::default();
        let raw =
            RawInputs::new(30.0, false, false, CloudLevel::Low, WindSetting::Auto).unwrap();
        let facts = deriver.derive(&raw);

        assert_eq!(facts.temperature_band, TemperatureBand::Hot);
        assert_eq!(facts.humidity, Humidity::Dry);
        assert_eq!(facts.wind, Wind::Light);
    }

    proptest! {
        #[test]
        fn prop_exactly_one_band(t in -1.0e6..1.0e6f64) {
            let deriver = FactDeriver::default();
            let band = deriver.temperature_band(t);

            let expected = if t > 28.0 {
                TemperatureBand::Hot
            } else if t < 15.0 {
                TemperatureBand::Cold
            } else {
                TemperatureBand::Mild
            };
            prop_assert_eq!(band, expected);
        }
    }
}
