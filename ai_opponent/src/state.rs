use glam::Vec3;

/// Per-opponent memory carried between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiState {
    pub last_update: Option<u64>, // ms, None until the first accepted tick
    pub last_ball_position: Option<Vec3>,
    pub estimated_velocity: Vec3,
}

impl AiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tick at `now` falls inside the rate limit window
    pub fn is_rate_limited(&self, now: u64, interval_ms: u64) -> bool {
        match self.last_update {
            Some(last) => now.saturating_sub(last) < interval_ms,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_never_limited() {
        let state = AiState::new();
        assert!(!state.is_rate_limited(0, 100));
        assert!(!state.is_rate_limited(5, 100));
    }

    #[test]
    fn test_rate_limit_window() {
        let state = AiState {
            last_update: Some(1000),
            ..AiState::default()
        };
        assert!(state.is_rate_limited(1000, 100));
        assert!(state.is_rate_limited(1099, 100));
        assert!(!state.is_rate_limited(1100, 100));
        assert!(!state.is_rate_limited(5000, 100));
    }
}
