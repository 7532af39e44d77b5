use game_core::{Config, MeshPositions};
use glam::Vec3;
use log::{debug, trace};
use proto::{GameId, PaddleDir, PlayerInput, Side};

use crate::{
    decide_direction, estimate_velocity, predict_crossing_z, AiConfig, AiError, AiState,
    GameSession, InputSink,
};

/// Computer-controlled paddle for one side of a game
#[derive(Debug, Clone)]
pub struct AiOpponent {
    game_id: GameId,
    side: Side,
    config: AiConfig,
    field: Config,
    state: AiState,
}

impl AiOpponent {
    pub fn new(
        game: &impl GameSession,
        side: Side,
        config: AiConfig,
        field: Config,
    ) -> Result<Self, AiError> {
        config.validate()?;
        field.validate()?;

        Ok(Self {
            game_id: game.game_id(),
            side,
            config,
            field,
            state: AiState::new(),
        })
    }

    /// Opponent with default tuning and field geometry
    pub fn with_defaults(game: &impl GameSession, side: Side) -> Result<Self, AiError> {
        Self::new(game, side, AiConfig::default(), Config::default())
    }

    /// Process one frame. Returns the paddle input to apply, if any.
    ///
    /// Frames arriving less than `update_interval_ms` after the last accepted
    /// one are ignored without touching any state.
    pub fn update(
        &mut self,
        positions: &MeshPositions,
        now: u64,
    ) -> Result<Option<PlayerInput>, AiError> {
        if let Some(last) = self.state.last_update {
            if now < last {
                return Err(AiError::ClockWentBackwards { now, last });
            }
        }

        if self
            .state
            .is_rate_limited(now, self.config.update_interval_ms)
        {
            trace!("[{now}] Update skipped: too early");
            return Ok(None);
        }

        if let Some(mesh) = positions.first_non_finite() {
            return Err(AiError::NonFinitePosition { mesh, now });
        }

        self.state.last_update = Some(now);

        let ball = positions.ball;
        let paddle = self.paddle(positions);

        let velocity = estimate_velocity(&mut self.state, ball, paddle, self.side, &self.config);
        debug!("[{now}] Ball velocity: {velocity}");

        let predicted_z = predict_crossing_z(ball, paddle, velocity, self.side, &self.field);
        debug!("[{now}] Predicted z: {predicted_z}, paddle z: {}", paddle.z);

        let input = decide_direction(predicted_z, paddle.z).map(|direction| PlayerInput {
            side: self.side,
            game_id: self.game_id.clone(),
            direction,
        });

        if let Some(input) = &input {
            debug!("[{now}] {:?} paddle -> {:?}", self.side, input.direction);
        }

        Ok(input)
    }

    /// Run `update` and forward any resulting input to `sink`
    pub fn drive(
        &mut self,
        positions: &MeshPositions,
        now: u64,
        sink: &mut impl InputSink,
    ) -> Result<Option<PaddleDir>, AiError> {
        match self.update(positions, now)? {
            Some(input) => {
                sink.send_input(&input)?;
                Ok(Some(input.direction))
            }
            None => Ok(None),
        }
    }

    /// Power-up hook; the AI never uses power-ups yet
    pub fn use_power_up(&mut self) -> Option<PlayerInput> {
        None
    }

    /// Forget the ball's history, e.g. after a point is scored.
    /// The rate limit keeps running from the last accepted tick.
    pub fn reset(&mut self) {
        self.state.last_ball_position = None;
        self.state.estimated_velocity = Vec3::ZERO;
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn field(&self) -> &Config {
        &self.field
    }

    pub fn state(&self) -> &AiState {
        &self.state
    }

    fn paddle(&self, positions: &MeshPositions) -> Vec3 {
        match self.side {
            Side::Left => positions.paddle_left,
            Side::Right => positions.paddle_right,
        }
    }
}
