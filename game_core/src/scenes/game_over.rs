use glam::Vec2;
use log::debug;

use super::{Scene, SceneOutput, TickInput};
use crate::commands::{LabelId, TextStyle};
use crate::fsm::{SceneAction, SceneKey};
use crate::resources::Score;

pub const WIN_TEXT: &str = "You Win!";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const CONTINUE_PROMPT: &str = "Press Space to Continue";

/// Headline for a final score. Only compares magnitudes: the left side
/// needs strictly more points, ties read as a loss.
pub fn headline(score: &Score) -> &'static str {
    if score.left > score.right {
        WIN_TEXT
    } else {
        GAME_OVER_TEXT
    }
}

/// Shows the result and waits for a single continue press
pub struct GameOverScene {
    font_family: String,
    score: Score,
    waiting: bool,
}

impl GameOverScene {
    pub fn new(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            score: Score::new(),
            waiting: false,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

impl Scene for GameOverScene {
    fn key(&self) -> SceneKey {
        SceneKey::GameOver
    }

    fn on_enter(&mut self, payload: Option<Score>, out: &mut SceneOutput) {
        self.score = payload.unwrap_or_default();
        self.waiting = true;
        debug!("Game over screen for {} - {}", self.score.left, self.score.right);

        out.create_text(
            LabelId::Headline,
            Vec2::new(400.0, 200.0),
            headline(&self.score),
            TextStyle::new(&self.font_family, Some(36)),
        );
        out.create_text(
            LabelId::Prompt,
            Vec2::new(400.0, 300.0),
            CONTINUE_PROMPT,
            TextStyle::new(&self.font_family, None),
        );
    }

    fn on_tick(&mut self, frame: &TickInput, out: &mut SceneOutput) {
        // One-shot listener
        if self.waiting && frame.input.confirm {
            self.waiting = false;
            out.request(SceneAction::Continue);
        }
    }

    fn on_exit(&mut self, _out: &mut SceneOutput) {
        self.waiting = false;
    }
}
