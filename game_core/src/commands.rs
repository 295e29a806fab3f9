//! Engine commands
//!
//! The core never touches the engine directly. Scenes emit commands, the
//! host flushes them to an [`EngineAdapter`] in emission order.

use glam::Vec2;
use serde::Serialize;

use crate::components::Side;
use crate::fsm::SceneKey;

/// Physics body operations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PhysicsCommand {
    SetWorldBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Dynamic circular body for the ball
    CreateBall {
        pos: Vec2,
        radius: f32,
        bounce: f32,
        max_speed: f32,
        collide_world_bounds: bool,
        world_bounds_events: bool,
    },
    /// Static rectangular body for a paddle
    CreatePaddle {
        side: Side,
        pos: Vec2,
        width: f32,
        height: f32,
    },
    SetBallPosition {
        pos: Vec2,
    },
    SetBallVelocity {
        vel: Vec2,
    },
    /// Move a paddle and sync its static body
    SetPaddleY {
        side: Side,
        y: f32,
    },
    /// Take the ball out of the simulation
    RemoveBall,
}

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundCue {
    PongBeep,
    PongPlop,
}

/// Text labels a scene can own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LabelId {
    Title,
    Prompt,
    Headline,
    LeftScore,
    RightScore,
}

/// Font configuration for a label. Labels are always centred on their
/// position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: Option<u16>, // engine default when None
}

impl TextStyle {
    pub fn new(font_family: &str, font_size: Option<u16>) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TextCommand {
    Create {
        id: LabelId,
        pos: Vec2,
        text: String,
        style: TextStyle,
    },
    Set {
        id: LabelId,
        text: String,
    },
}

/// Engine-side scene management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneCommand {
    Start { scene: SceneKey },
    Stop { scene: SceneKey },
    /// Run alongside the active scene
    Run { scene: SceneKey },
    SendToBack { scene: SceneKey },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "command", rename_all = "snake_case")]
pub enum Command {
    Physics(PhysicsCommand),
    Audio(SoundCue),
    Text(TextCommand),
    Scene(SceneCommand),
}

impl Command {
    /// Forward this command to the matching adapter method
    pub fn dispatch<A: EngineAdapter + ?Sized>(&self, adapter: &mut A) {
        match self {
            Command::Physics(cmd) => adapter.physics(cmd),
            Command::Audio(cue) => adapter.audio(*cue),
            Command::Text(cmd) => adapter.text(cmd),
            Command::Scene(cmd) => adapter.scene(cmd),
        }
    }
}

/// The host engine, as seen from the core
pub trait EngineAdapter {
    fn physics(&mut self, command: &PhysicsCommand);
    fn audio(&mut self, cue: SoundCue);
    fn text(&mut self, command: &TextCommand);
    fn scene(&mut self, command: &SceneCommand);
}

/// Adapter that buffers every command it receives
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    pub commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn sounds(&self) -> Vec<SoundCue> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Audio(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Last text written to a label, by create or set
    pub fn label(&self, id: LabelId) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::Text(TextCommand::Create { id: i, text, .. })
            | Command::Text(TextCommand::Set { id: i, text }) if *i == id => Some(text.as_str()),
            _ => None,
        })
    }

    /// Serialize the buffer as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl EngineAdapter for CommandLog {
    fn physics(&mut self, command: &PhysicsCommand) {
        self.commands.push(Command::Physics(command.clone()));
    }

    fn audio(&mut self, cue: SoundCue) {
        self.commands.push(Command::Audio(cue));
    }

    fn text(&mut self, command: &TextCommand) {
        self.commands.push(Command::Text(command.clone()));
    }

    fn scene(&mut self, command: &SceneCommand) {
        self.commands.push(Command::Scene(*command));
    }
}
