use game_core::Params;
use proto::PaddleDir;

/// Choose a paddle direction, or None when the paddle is already within the dead zone
pub fn decide_direction(predicted_z: f32, paddle_z: f32) -> Option<PaddleDir> {
    let threshold = Params::AI_DEAD_ZONE;

    if predicted_z < paddle_z - threshold {
        Some(PaddleDir::Up)
    } else if predicted_z > paddle_z + threshold {
        Some(PaddleDir::Down)
    } else {
        None
    }
}
