//! Weather Rule Matching
//!
//! Evaluates a fixed, ordered table of condition→conclusion rules against
//! one evaluation's fact store. First match wins; an always-true fallback
//! makes the table total.

mod engine;
mod rules;

pub use engine::{Prediction, RuleEngine};
pub use fact_store::InputError;
pub use rules::{CategoryRule, RULES};
