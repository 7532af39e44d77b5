/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (z is the paddle slide axis)
    pub const GROUND_HEIGHT: f32 = 20.0;
    pub const EDGE_HEIGHT: f32 = 1.0;

    // Paddle
    pub const PADDLE_MIN_Z: f32 = -7.0;
    pub const PADDLE_MAX_Z: f32 = 7.0;
    pub const PADDLE_STEP: f32 = 0.5; // units per tick, applied by the actuator

    // AI opponent
    pub const AI_UPDATE_INTERVAL_MS: u64 = 100;
    pub const AI_DEAD_ZONE: f32 = 0.5;
    pub const AI_NEAR_TERM_SECS: f32 = 1.0; // arrivals sooner than this are not extrapolated
    pub const AI_INITIAL_APPROACH_SPEED: f32 = 5.0; // assumed x speed before any sample
}
