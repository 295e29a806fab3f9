use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,  // human player
    Right, // AI
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // centre, not clamped to the field
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }
}

/// Vertical velocity of the AI-driven paddle, recomputed every tick
#[derive(Debug, Clone, Copy, Default)]
pub struct AiVelocity {
    pub y: f32,
}

/// Marks the paddle driven by the keyboard
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerControlled;

/// Ball component
///
/// Mirrors the engine's physics body: the engine integrates, the core reads
/// `pos` and writes `vel`.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            active: true,
        }
    }
}
