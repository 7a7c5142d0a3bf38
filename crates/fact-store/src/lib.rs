//! Fact Storage and Input Validation
//!
//! Holds validated raw weather observations and the facts derived from them,
//! read-only for the duration of one prediction.

mod error;
mod facts;
mod inputs;
mod store;

pub use error::InputError;
pub use facts::{DerivedFacts, Humidity, TemperatureBand, Wind};
pub use inputs::{CloudLevel, RawInputs, WindSetting};
pub use store::FactStore;
