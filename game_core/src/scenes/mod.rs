//! Scenes
//!
//! Each scene is an independent state machine driven by the host through
//! three lifecycle hooks. Scenes never talk to the engine directly: they
//! write engine commands and scene actions into a [`SceneOutput`].

mod game;
mod game_over;
mod title;

pub use game::GameScene;
pub use game_over::{headline, GameOverScene};
pub use title::TitleScene;

use glam::Vec2;

use crate::commands::{Command, LabelId, PhysicsCommand, SceneCommand, SoundCue, TextCommand, TextStyle};
use crate::fsm::{SceneAction, SceneKey};
use crate::input::InputSnapshot;
use crate::resources::{CollisionEvent, Score};

/// Ball state read back from the engine's physics body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Everything the engine reports for one tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub dt: f32,
    pub input: InputSnapshot,
    pub ball: Option<BallSnapshot>,
    /// Collisions from the last physics step, in the order they happened
    pub collisions: Vec<CollisionEvent>,
}

impl TickInput {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn with_input(mut self, input: InputSnapshot) -> Self {
        self.input = input;
        self
    }

    pub fn with_ball(mut self, pos: Vec2, vel: Vec2) -> Self {
        self.ball = Some(BallSnapshot { pos, vel });
        self
    }

    pub fn with_collision(mut self, event: CollisionEvent) -> Self {
        self.collisions.push(event);
        self
    }
}

/// Commands and scene actions produced by a scene hook
#[derive(Debug, Clone, Default)]
pub struct SceneOutput {
    pub commands: Vec<Command>,
    pub actions: Vec<SceneAction>,
}

impl SceneOutput {
    pub fn physics(&mut self, command: PhysicsCommand) {
        self.commands.push(Command::Physics(command));
    }

    pub fn sound(&mut self, cue: SoundCue) {
        self.commands.push(Command::Audio(cue));
    }

    pub fn create_text(&mut self, id: LabelId, pos: Vec2, text: impl Into<String>, style: TextStyle) {
        self.commands.push(Command::Text(TextCommand::Create {
            id,
            pos,
            text: text.into(),
            style,
        }));
    }

    pub fn set_text(&mut self, id: LabelId, text: impl Into<String>) {
        self.commands.push(Command::Text(TextCommand::Set {
            id,
            text: text.into(),
        }));
    }

    pub fn scene(&mut self, command: SceneCommand) {
        self.commands.push(Command::Scene(command));
    }

    /// Ask the host for a scene transition
    pub fn request(&mut self, action: SceneAction) {
        self.actions.push(action);
    }
}

/// Scene lifecycle, invoked by the host
pub trait Scene {
    fn key(&self) -> SceneKey;

    /// Called when the scene becomes active. `payload` is the score pair
    /// handed over by the previous scene, if any.
    fn on_enter(&mut self, payload: Option<Score>, out: &mut SceneOutput);

    /// Called every tick while the scene is active
    fn on_tick(&mut self, frame: &TickInput, out: &mut SceneOutput);

    fn on_exit(&mut self, _out: &mut SceneOutput) {}
}
