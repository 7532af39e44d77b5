//! Predictive AI opponent for Pong
//!
//! Each accepted tick estimates the ball's velocity from the previous sample,
//! predicts where it will cross the controlled paddle's line (folding the path
//! through edge bounces), and steers the paddle toward that point.

pub mod config;
pub mod decision;
pub mod error;
pub mod opponent;
pub mod predictor;
pub mod session;
pub mod state;
pub mod velocity;

pub use config::*;
pub use decision::*;
pub use error::*;
pub use opponent::*;
pub use predictor::*;
pub use session::*;
pub use state::*;
pub use velocity::*;
