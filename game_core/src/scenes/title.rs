use glam::Vec2;

use super::{Scene, SceneOutput, TickInput};
use crate::commands::{LabelId, SoundCue, TextStyle};
use crate::fsm::{SceneAction, SceneKey};
use crate::resources::Score;

pub const TITLE_TEXT: &str = "Ye Olde Tennis";
pub const START_PROMPT: &str = "Press Space to Start";

/// Idle title screen, waiting for the start key
pub struct TitleScene {
    font_family: String,
}

impl TitleScene {
    pub fn new(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
        }
    }
}

impl Scene for TitleScene {
    fn key(&self) -> SceneKey {
        SceneKey::Title
    }

    fn on_enter(&mut self, _payload: Option<Score>, out: &mut SceneOutput) {
        out.create_text(
            LabelId::Title,
            Vec2::new(400.0, 200.0),
            TITLE_TEXT,
            TextStyle::new(&self.font_family, Some(38)),
        );
        out.create_text(
            LabelId::Prompt,
            Vec2::new(400.0, 300.0),
            START_PROMPT,
            TextStyle::new(&self.font_family, None),
        );
    }

    fn on_tick(&mut self, frame: &TickInput, out: &mut SceneOutput) {
        if frame.input.confirm {
            out.request(SceneAction::StartMatch);
            out.sound(SoundCue::PongBeep);
        }
    }
}
