use game_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Invalid field geometry: {0}")]
    Geometry(#[from] ConfigError),

    #[error("Update interval must be positive, got {0} ms")]
    InvalidInterval(u64),

    #[error("Paddle speed must be finite and non-negative, got {0}")]
    InvalidPaddleSpeed(f32),

    #[error("Clock went backwards: tick at {now} ms after accepted tick at {last} ms")]
    ClockWentBackwards { now: u64, last: u64 },

    #[error("Non-finite {mesh} position in tick at {now} ms")]
    NonFinitePosition { mesh: &'static str, now: u64 },

    #[error("Encoding error: {0}")]
    Encode(#[from] proto::CodecError),

    #[error("Failed to deliver paddle input: {0}")]
    Delivery(String),
}
