use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params};

/// Field geometry shared by everything that reasons about the play field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ground_height: f32,
    pub edge_height: f32,
    pub paddle_min_z: f32,
    pub paddle_max_z: f32,
    pub paddle_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ground_height: Params::GROUND_HEIGHT,
            edge_height: Params::EDGE_HEIGHT,
            paddle_min_z: Params::PADDLE_MIN_Z,
            paddle_max_z: Params::PADDLE_MAX_Z,
            paddle_step: Params::PADDLE_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest z the ball can reach before bouncing off the top edge
    pub fn upper_bound(&self) -> f32 {
        self.ground_height / 2.0 - self.edge_height
    }

    /// Lowest z the ball can reach before bouncing off the bottom edge
    pub fn lower_bound(&self) -> f32 {
        -self.ground_height / 2.0 + self.edge_height
    }

    pub fn field_height(&self) -> f32 {
        self.upper_bound() - self.lower_bound()
    }

    /// Fold an unbounded z into the field band, mirroring it at the edges.
    ///
    /// An even number of edge crossings lands the ball measured from the lower
    /// bound, an odd number measured back down from the upper bound.
    pub fn fold_z(&self, raw_z: f32) -> f32 {
        let lower = self.lower_bound();
        let height = self.field_height();
        let offset = raw_z - lower;

        let bounces = (offset / height).floor();
        let remainder = offset.rem_euclid(height);

        if bounces.rem_euclid(2.0) == 0.0 {
            lower + remainder
        } else {
            self.upper_bound() - remainder
        }
    }

    /// Clamp paddle Z to legal travel
    pub fn clamp_paddle_z(&self, z: f32) -> f32 {
        z.clamp(self.paddle_min_z, self.paddle_max_z)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("ground_height", self.ground_height),
            ("edge_height", self.edge_height),
            ("paddle_min_z", self.paddle_min_z),
            ("paddle_max_z", self.paddle_max_z),
            ("paddle_step", self.paddle_step),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let height = self.field_height();
        if height <= 0.0 {
            return Err(ConfigError::EmptyField { height });
        }

        if self.paddle_min_z > self.paddle_max_z {
            return Err(ConfigError::InvertedPaddleTravel {
                min: self.paddle_min_z,
                max: self.paddle_max_z,
            });
        }

        Ok(())
    }
}
