//! Network protocol for Pong game
//!
//! Uses postcard for efficient binary serialization

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

pub use postcard::Error as CodecError;

/// Which paddle a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of ball x-velocity when the ball travels toward this side's paddle
    pub fn approach_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Player id used by the simulation: 0 = left, 1 = right
    pub fn player_id(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Paddle movement direction. Up is toward negative z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleDir {
    Up,
    Down,
    Stop,
}

impl PaddleDir {
    /// Paddle input: -1 = up, 0 = stop, 1 = down
    pub fn as_i8(self) -> i8 {
        match self {
            PaddleDir::Up => -1,
            PaddleDir::Stop => 0,
            PaddleDir::Down => 1,
        }
    }
}

/// Identifier of the game session a command belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A paddle command issued on behalf of one side of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub side: Side,
    pub game_id: GameId,
    pub direction: PaddleDir,
}

// ============================================================================
// C2S Messages (Client to Server)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum C2S {
    /// Move a paddle
    PlayerInput(PlayerInput),
}

impl From<PlayerInput> for C2S {
    fn from(input: PlayerInput) -> Self {
        C2S::PlayerInput(input)
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        to_allocvec(self)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        from_bytes(bytes)
    }
}
