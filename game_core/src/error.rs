use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("Field has no playable height: {height}")]
    EmptyField { height: f32 },

    #[error("Paddle travel is inverted: min {min} > max {max}")]
    InvertedPaddleTravel { min: f32, max: f32 },
}
