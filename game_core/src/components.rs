use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Positions of the ball and both paddles for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshPositions {
    pub ball: Vec3,
    pub paddle_left: Vec3,
    pub paddle_right: Vec3,
}

impl MeshPositions {
    pub fn new(ball: Vec3, paddle_left: Vec3, paddle_right: Vec3) -> Self {
        Self {
            ball,
            paddle_left,
            paddle_right,
        }
    }

    /// Name of the first mesh with a NaN or infinite coordinate
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("ball", self.ball),
            ("paddle_left", self.paddle_left),
            ("paddle_right", self.paddle_right),
        ]
        .into_iter()
        .find(|(_, pos)| !pos.is_finite())
        .map(|(name, _)| name)
    }
}
