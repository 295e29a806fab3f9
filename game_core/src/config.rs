use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::params::Params;

/// Edge of the field a paddle has travelled past
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdge {
    Top,
    Bottom,
}

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a partial JSON object
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub world_bounds: [f32; 4], // x, y, width, height
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_left_x: f32,
    pub paddle_right_x: f32,
    pub player_step: f32,
    pub ai_speed: f32,
    pub ai_max_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_bounce: f32,
    pub ball_max_speed: f32,
    pub ball_speed_increase: f32,
    pub serve_speed: f32,
    pub serve_delay: f32,
    pub score_left_bound: f32,
    pub score_right_bound: f32,
    pub win_score: u8,
    pub font_family: String,
    pub score_font_size: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            world_bounds: [
                Params::WORLD_BOUNDS_X,
                Params::WORLD_BOUNDS_Y,
                Params::WORLD_BOUNDS_WIDTH,
                Params::WORLD_BOUNDS_HEIGHT,
            ],
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_left_x: Params::PADDLE_LEFT_X,
            paddle_right_x: Params::PADDLE_RIGHT_X,
            player_step: Params::PLAYER_STEP,
            ai_speed: Params::AI_SPEED,
            ai_max_speed: Params::AI_MAX_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_bounce: Params::BALL_BOUNCE,
            ball_max_speed: Params::BALL_MAX_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            serve_speed: Params::SERVE_SPEED,
            serve_delay: Params::SERVE_DELAY,
            score_left_bound: Params::SCORE_LEFT_BOUND,
            score_right_bound: Params::SCORE_RIGHT_BOUND,
            win_score: Params::WIN_SCORE,
            font_family: Params::FONT_FAMILY.to_string(),
            score_font_size: Params::SCORE_FONT_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Centre of the field, where the ball is served from
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_left_x,
            Side::Right => self.paddle_right_x,
        }
    }

    /// Whether a ball at `x` is still in play (bounds inclusive)
    pub fn in_play(&self, x: f32) -> bool {
        x >= self.score_left_bound && x <= self.score_right_bound
    }

    /// Report which edge a paddle centre has crossed, if any.
    ///
    /// This only observes; paddles are never clamped.
    pub fn paddle_outside_field(&self, y: f32) -> Option<FieldEdge> {
        if y < 0.0 {
            Some(FieldEdge::Top)
        } else if y > self.field_height {
            Some(FieldEdge::Bottom)
        } else {
            None
        }
    }
}
