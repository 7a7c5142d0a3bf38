//! Fact Derivation Engine
//!
//! Computes derived weather predicates (temperature band, humidity, wind)
//! from validated raw observations.

mod config;
mod derive;

pub use config::DeriverConfig;
pub use derive::FactDeriver;
