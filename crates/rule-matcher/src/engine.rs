//! Rule Engine Implementation

use crate::rules::{CategoryRule, FALLBACK_CATEGORY, FALLBACK_REASON, RULES};
use derivation_engine::FactDeriver;
use fact_store::{FactStore, InputError, RawInputs};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of one weather prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Matched category
    pub category: String,
    /// Human-readable justification
    pub reason: String,
}

/// First-match rule engine over the fixed category table
///
/// Stateless across calls; the rule table is shared read-only, so one engine
/// can serve concurrent callers without synchronization.
pub struct RuleEngine {
    deriver: FactDeriver,
    rules: &'static [CategoryRule],
}

impl RuleEngine {
    /// Create an engine over the built-in rule table
    pub fn new() -> Self {
        Self {
            deriver: FactDeriver::default(),
            rules: RULES,
        }
    }

    /// Create an engine with custom derivation cut-points
    pub fn with_deriver(deriver: FactDeriver) -> Self {
        Self {
            deriver,
            rules: RULES,
        }
    }

    /// The ordered rule table (read-only)
    pub fn rules(&self) -> &'static [CategoryRule] {
        self.rules
    }

    /// Validate, derive, and match one scenario
    ///
    /// `cloud_level` must be one of `low`/`medium`/`high` and `wind_override`
    /// one of `auto`/`light`/`moderate`/`strong`; pass `"auto"` to let the
    /// engine derive wind from storm and cloud state.
    pub fn predict(
        &self,
        temperature_c: f64,
        rain_expected: bool,
        storm_expected: bool,
        cloud_level: &str,
        wind_override: &str,
    ) -> Result<Prediction, InputError> {
        let raw = RawInputs::parse(
            temperature_c,
            rain_expected,
            storm_expected,
            cloud_level,
            wind_override,
        )?;
        Ok(self.predict_validated(raw))
    }

    /// Derive facts and match already-validated inputs; total, never fails
    pub fn predict_validated(&self, raw: RawInputs) -> Prediction {
        let derived = self.deriver.derive(&raw);
        let store = FactStore::new(raw, derived);
        self.evaluate(&store)
    }

    /// Scan the ordered table and return the first matching rule's conclusion
    ///
    /// Falls back to `unknown` when nothing matches, so every sealed store
    /// resolves to some prediction.
    pub fn evaluate(&self, store: &FactStore) -> Prediction {
        for rule in self.rules {
            if (rule.predicate)(store) {
                debug!("rule matched: {}", rule.category);
                return Prediction {
                    category: rule.category.to_string(),
                    reason: rule.reason.to_string(),
                };
            }
        }

        debug!("no rule matched, falling back to {}", FALLBACK_CATEGORY);
        Prediction {
            category: FALLBACK_CATEGORY.to_string(),
            reason: FALLBACK_REASON.to_string(),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
