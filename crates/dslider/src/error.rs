#![forbid(unsafe_code)]

use thiserror::Error;

use crate::config::ConfigError;
use crate::router::ThumbId;

/// Errors surfaced by [`DoubleSlider`](crate::DoubleSlider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("invalid slider configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("programmatic value for the {} thumb must be finite (got {value})", thumb.as_str())]
    NonFiniteValue { thumb: ThumbId, value: f64 },
}

pub type Result<T, E = SliderError> = std::result::Result<T, E>;
