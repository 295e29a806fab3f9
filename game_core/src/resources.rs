use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time since the scene was entered
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Outcome tracker for one match. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchState {
    #[default]
    Running,
    PlayerWon,
    AiWon,
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Award a point to `side`, returning its new total
    pub fn award(&mut self, side: Side) -> u8 {
        match side {
            Side::Left => {
                self.increment_left();
                self.left
            }
            Side::Right => {
                self.increment_right();
                self.right
            }
        }
    }

    /// Resolve the match outcome. The right score is checked first, so it
    /// wins if both sides are somehow at the threshold.
    pub fn outcome(&self, win_score: u8) -> MatchState {
        if self.right >= win_score {
            MatchState::PlayerWon
        } else if self.left >= win_score {
            MatchState::AiWon
        } else {
            MatchState::Running
        }
    }
}

/// Source of serve angles in degrees, `[0, 360)`
pub trait ServeAngles {
    fn next_angle(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl ServeAngles for GameRng {
    /// Whole degrees, uniformly distributed
    fn next_angle(&mut self) -> f32 {
        self.0.gen_range(0..360) as f32
    }
}

/// Replays a fixed sequence of angles, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedAngles {
    angles: Vec<f32>,
    next: usize,
}

impl FixedAngles {
    pub fn new(angles: Vec<f32>) -> Self {
        Self { angles, next: 0 }
    }

    pub fn constant(angle: f32) -> Self {
        Self::new(vec![angle])
    }
}

impl ServeAngles for FixedAngles {
    fn next_angle(&mut self) -> f32 {
        if self.angles.is_empty() {
            return 0.0;
        }
        let angle = self.angles[self.next % self.angles.len()];
        self.next += 1;
        angle
    }
}

/// Collision reported by the engine's physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEvent {
    PaddleBall {
        side: Side,
    },
    WorldBounds {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_award() {
        let mut score = Score::new();
        assert_eq!(score.award(Side::Left), 1);
        assert_eq!(score.award(Side::Right), 1);
        assert_eq!(score.award(Side::Right), 2);
        assert_eq!(score, Score { left: 1, right: 2 });
    }

    #[test]
    fn test_outcome_right_reaching_threshold_is_player_won() {
        let score = Score { left: 3, right: 7 };
        assert_eq!(score.outcome(7), MatchState::PlayerWon);
    }

    #[test]
    fn test_outcome_left_reaching_threshold_is_ai_won() {
        let score = Score { left: 7, right: 6 };
        assert_eq!(score.outcome(7), MatchState::AiWon);
    }

    #[test]
    fn test_outcome_both_at_threshold_favours_right() {
        let score = Score { left: 7, right: 7 };
        assert_eq!(score.outcome(7), MatchState::PlayerWon);
        let score = Score { left: 9, right: 8 };
        assert_eq!(score.outcome(7), MatchState::PlayerWon);
    }

    #[test]
    fn test_outcome_below_threshold_keeps_running() {
        let score = Score { left: 6, right: 6 };
        assert_eq!(score.outcome(7), MatchState::Running);
    }

    #[test]
    fn test_rng_angles_stay_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let angle = rng.next_angle();
            assert!((0.0..360.0).contains(&angle));
            assert_eq!(angle.fract(), 0.0, "Angles are whole degrees");
        }
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        for _ in 0..10 {
            assert_eq!(a.next_angle(), b.next_angle());
        }
    }

    #[test]
    fn test_fixed_angles_cycle() {
        let mut angles = FixedAngles::new(vec![0.0, 90.0]);
        assert_eq!(angles.next_angle(), 0.0);
        assert_eq!(angles.next_angle(), 90.0);
        assert_eq!(angles.next_angle(), 0.0);
    }
}
