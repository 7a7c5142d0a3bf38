//! Weather Category Rule Table

use fact_store::{CloudLevel, FactStore, Humidity, TemperatureBand, Wind};

/// One condition→conclusion entry in the ordered rule table
#[derive(Clone, Copy)]
pub struct CategoryRule {
    /// Category this rule concludes
    pub category: &'static str,
    /// Human-readable justification
    pub reason: &'static str,
    /// Condition over the sealed fact store
    pub predicate: fn(&FactStore) -> bool,
}

/// Category returned when no rule matches
pub(crate) const FALLBACK_CATEGORY: &str = "unknown";

/// Justification returned when no rule matches
pub(crate) const FALLBACK_REASON: &str = "Conditions do not match any known pattern";

/// The ordered rule table; first match wins
///
/// Order is significant and fixed at compile time. `partly_cloudy_mild`
/// repeats the `cloudy_day` condition and is shadowed by it. The mild/dry and
/// cold medium-cloud rules also require the moderate wind that medium cloud
/// produces under automatic derivation, so a wind override can veto them.
pub static RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "sunny",
        reason: "Hot temp + dry + low cloud + light wind",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Hot
                && f.humidity() == Humidity::Dry
                && f.cloud_level() == CloudLevel::Low
                && f.wind() == Wind::Light
        },
    },
    CategoryRule {
        category: "rainy",
        reason: "Humid + high cloud + mild temp",
        predicate: |f| {
            f.humidity() == Humidity::Humid
                && f.cloud_level() == CloudLevel::High
                && f.temperature_band() == TemperatureBand::Mild
        },
    },
    CategoryRule {
        category: "stormy",
        reason: "Stormy wind + humid",
        predicate: |f| f.wind() == Wind::Strong && f.humidity() == Humidity::Humid,
    },
    CategoryRule {
        category: "snowy",
        reason: "Cold + humid + high clouds",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Cold
                && f.humidity() == Humidity::Humid
                && f.cloud_level() == CloudLevel::High
        },
    },
    CategoryRule {
        category: "cloudy_day",
        reason: "Medium cloud + dry + mild temp",
        predicate: |f| {
            f.cloud_level() == CloudLevel::Medium
                && f.humidity() == Humidity::Dry
                && f.temperature_band() == TemperatureBand::Mild
                && f.wind() == Wind::Moderate
        },
    },
    CategoryRule {
        category: "partly_cloudy_hot",
        reason: "Hot and humid with medium clouds",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Hot
                && f.humidity() == Humidity::Humid
                && f.cloud_level() == CloudLevel::Medium
        },
    },
    CategoryRule {
        category: "partly_cloudy_mild",
        reason: "Mild and dry with medium cloud cover",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Mild
                && f.humidity() == Humidity::Dry
                && f.cloud_level() == CloudLevel::Medium
                && f.wind() == Wind::Moderate
        },
    },
    CategoryRule {
        category: "partly_cloudy_cold",
        reason: "Cold with medium clouds and moderate wind",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Cold
                && f.cloud_level() == CloudLevel::Medium
                && f.wind() == Wind::Moderate
        },
    },
    CategoryRule {
        category: "breezy_humid_medium",
        reason: "Humid with moderate wind and medium clouds",
        predicate: |f| {
            f.humidity() == Humidity::Humid
                && f.cloud_level() == CloudLevel::Medium
                && f.wind() == Wind::Moderate
        },
    },
    CategoryRule {
        category: "partly_sunny",
        reason: "Hot temperature + humid + low clouds = possible muggy but sunny conditions",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Hot
                && f.humidity() == Humidity::Humid
                && f.cloud_level() == CloudLevel::Low
        },
    },
    CategoryRule {
        category: "very_hot_dry",
        reason: "Very hot and dry with low clouds suggests hot dry day",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Hot
                && f.humidity() == Humidity::Dry
                && f.cloud_level() == CloudLevel::Low
        },
    },
    CategoryRule {
        category: "chilly_clear_day",
        reason: "Cold temperature + dry + low clouds + light wind",
        predicate: |f| {
            f.temperature_band() == TemperatureBand::Cold
                && f.humidity() == Humidity::Dry
                && f.cloud_level() == CloudLevel::Low
                && f.wind() == Wind::Light
        },
    },
];
