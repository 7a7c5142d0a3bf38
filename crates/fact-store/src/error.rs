//! Input Error Types

use thiserror::Error;

/// Errors raised while validating raw observations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Temperature is NaN or infinite
    #[error("temperature {value} is not a finite number")]
    NonFiniteTemperature { value: f64 },

    /// Cloud level outside the closed set
    #[error("unknown cloud level \"{0}\", expected one of: low, medium, high")]
    UnknownCloudLevel(String),

    /// Wind setting outside the closed set
    #[error("unknown wind setting \"{0}\", expected one of: auto, light, moderate, strong")]
    UnknownWindSetting(String),
}
