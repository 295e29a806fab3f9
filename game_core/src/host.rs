//! Scene host
//!
//! Drives the active scene once per tick, applies the scene actions it
//! requested and flushes the resulting commands to the engine adapter.

use log::{debug, warn};

use crate::commands::{Command, EngineAdapter, SceneCommand};
use crate::fsm::{SceneAction, SceneFsm, SceneKey};
use crate::scenes::{GameOverScene, GameScene, Scene, SceneOutput, TickInput, TitleScene};
use crate::{Config, ServeAngles};

pub struct SceneHost<A: EngineAdapter> {
    adapter: A,
    fsm: SceneFsm,
    title: TitleScene,
    game: GameScene,
    game_over: GameOverScene,
    started: bool,
}

impl<A: EngineAdapter> SceneHost<A> {
    pub fn new(adapter: A, config: Config, angles: Box<dyn ServeAngles>) -> Self {
        let title = TitleScene::new(&config.font_family);
        let game_over = GameOverScene::new(&config.font_family);
        Self {
            adapter,
            fsm: SceneFsm::new(),
            title,
            game: GameScene::new(config, angles),
            game_over,
            started: false,
        }
    }

    /// Enter the title screen. Calling it again is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.fsm.reset();

        let mut out = SceneOutput::default();
        out.scene(SceneCommand::Start {
            scene: SceneKey::Title,
        });
        self.title.on_enter(None, &mut out);
        debug!("Scene host started on {:?}", SceneKey::Title);
        self.finish(out);
    }

    /// Run one tick of the active scene
    pub fn tick(&mut self, frame: &TickInput) {
        if !self.started {
            warn!("Tick before the scene host was started");
            return;
        }

        let mut out = SceneOutput::default();
        let active = self.fsm.scene();
        if let Some(scene) = self.scene_mut(active) {
            scene.on_tick(frame, &mut out);
        }
        self.finish(out);
    }

    pub fn active_scene(&self) -> SceneKey {
        self.fsm.scene()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.game.set_paused(paused);
    }

    pub fn game(&self) -> &GameScene {
        &self.game
    }

    pub fn game_over(&self) -> &GameOverScene {
        &self.game_over
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn scene_mut(&mut self, key: SceneKey) -> Option<&mut dyn Scene> {
        match key {
            SceneKey::Title => Some(&mut self.title),
            SceneKey::Game => Some(&mut self.game),
            SceneKey::GameOver => Some(&mut self.game_over),
            SceneKey::GameBackground => None,
        }
    }

    fn finish(&mut self, mut out: SceneOutput) {
        self.process_actions(&mut out);
        self.flush(out.commands);
    }

    /// Apply requested actions in FIFO order
    fn process_actions(&mut self, out: &mut SceneOutput) {
        let actions = std::mem::take(&mut out.actions);
        for action in actions {
            let result = self.fsm.transition(action);
            if !result.success {
                warn!("Rejected {:?} in scene {:?}", action, result.from_scene);
                continue;
            }
            debug!("Scene {:?} -> {:?}", result.from_scene, result.to_scene);

            if let Some(scene) = self.scene_mut(result.from_scene) {
                scene.on_exit(out);
            }
            out.scene(SceneCommand::Stop {
                scene: result.from_scene,
            });
            out.scene(SceneCommand::Start {
                scene: result.to_scene,
            });

            let payload = match action {
                SceneAction::MatchOver(score) => Some(score),
                _ => None,
            };
            if let Some(scene) = self.scene_mut(result.to_scene) {
                debug!("Entering {:?} with {:?}", scene.key(), payload);
                scene.on_enter(payload, out);
            }
        }
    }

    fn flush(&mut self, commands: Vec<Command>) {
        for command in &commands {
            command.dispatch(&mut self.adapter);
        }
    }
}
