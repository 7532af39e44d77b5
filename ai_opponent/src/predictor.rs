use game_core::{Config, Params};
use glam::Vec3;
use log::debug;
use proto::Side;

/// Predict the z at which the ball reaches the paddle's x plane.
///
/// The straight-line extrapolation is folded back into the field to account
/// for edge bounces, then clamped to the paddle's travel. A ball that is not
/// approaching yields the paddle's own z, and a ball arriving within
/// `Params::AI_NEAR_TERM_SECS` yields its current z.
pub fn predict_crossing_z(
    ball: Vec3,
    paddle: Vec3,
    velocity: Vec3,
    side: Side,
    field: &Config,
) -> f32 {
    let approach_speed = velocity.x * side.approach_sign();
    if approach_speed <= 0.0 {
        debug!("Ball moving away (vx={}), holding paddle z", velocity.x);
        return paddle.z;
    }

    let distance_to_paddle = (paddle.x - ball.x).abs();
    let time_to_paddle = distance_to_paddle / approach_speed;

    if !time_to_paddle.is_finite() || time_to_paddle <= Params::AI_NEAR_TERM_SECS {
        debug!(
            "Ball arriving in {}s, using current ball z {}",
            time_to_paddle, ball.z
        );
        return field.clamp_paddle_z(ball.z);
    }

    let raw_z = ball.z + velocity.z * time_to_paddle;
    let predicted_z = field.clamp_paddle_z(field.fold_z(raw_z));
    debug!(
        "Ball arriving in {}s, raw z {} folds to {}",
        time_to_paddle, raw_z, predicted_z
    );
    predicted_z
}
