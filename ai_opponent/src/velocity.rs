use game_core::Params;
use glam::Vec3;
use proto::Side;

use crate::{AiConfig, AiState};

/// Estimate ball velocity (units per second) from the last accepted sample.
///
/// With no earlier sample the ball is assumed to be heading for the paddle's
/// current position. The current ball position is always remembered for the
/// next call.
pub fn estimate_velocity(
    state: &mut AiState,
    ball: Vec3,
    paddle: Vec3,
    side: Side,
    config: &AiConfig,
) -> Vec3 {
    let velocity = match state.last_ball_position {
        Some(last) => (ball - last) * config.ticks_per_sec(),
        None => Vec3::new(
            Params::AI_INITIAL_APPROACH_SPEED * side.approach_sign(),
            0.0,
            ball.z - paddle.z,
        ),
    };

    state.last_ball_position = Some(ball);
    state.estimated_velocity = velocity;
    velocity
}
