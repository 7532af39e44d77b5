use game_core::Params;
use serde::{Deserialize, Serialize};

use crate::AiError;

/// AI opponent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Paddle speed the actuator applies; informational for the AI itself
    pub paddle_speed: f32,
    /// Minimum time between accepted ticks
    pub update_interval_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            paddle_speed: Params::PADDLE_STEP,
            update_interval_ms: Params::AI_UPDATE_INTERVAL_MS,
        }
    }
}

impl AiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factor turning a per-tick displacement into a per-second rate
    pub fn ticks_per_sec(&self) -> f32 {
        1000.0 / self.update_interval_ms as f32
    }

    pub fn validate(&self) -> Result<(), AiError> {
        if self.update_interval_ms == 0 {
            return Err(AiError::InvalidInterval(self.update_interval_ms));
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return Err(AiError::InvalidPaddleSpeed(self.paddle_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AiConfig::new();
        assert_eq!(config.update_interval_ms, 100);
        assert_eq!(config.ticks_per_sec(), 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = AiConfig {
            update_interval_ms: 0,
            ..AiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AiError::InvalidInterval(0))
        ));
    }

    #[test]
    fn test_negative_paddle_speed_rejected() {
        let config = AiConfig {
            paddle_speed: -1.0,
            ..AiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AiError::InvalidPaddleSpeed(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config: AiConfig = serde_json::from_str(r#"{ "update_interval_ms": 250 }"#).unwrap();
        assert_eq!(config.update_interval_ms, 250);
        assert_eq!(config.paddle_speed, Params::PADDLE_STEP);
        assert_eq!(config.ticks_per_sec(), 4.0);
    }
}
