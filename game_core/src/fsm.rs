//! Scene State Machine
//!
//! Validates the linear scene flow: title, match, game over, title.

use serde::Serialize;

use crate::resources::Score;

/// Scenes known to the host. `GameBackground` is engine-only decoration run
/// behind the match and never becomes the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SceneKey {
    Title,
    Game,
    GameOver,
    GameBackground,
}

/// Actions that trigger scene transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    StartMatch,
    /// Carries the final score pair to the game-over screen
    MatchOver(Score),
    Continue,
}

/// Result of a scene transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from_scene: SceneKey,
    pub to_scene: SceneKey,
    pub action: SceneAction,
}

/// Scene Finite State Machine
#[derive(Debug, Clone)]
pub struct SceneFsm {
    scene: SceneKey,
}

impl SceneFsm {
    pub fn new() -> Self {
        Self {
            scene: SceneKey::Title,
        }
    }

    /// Get current scene
    pub fn scene(&self) -> SceneKey {
        self.scene
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SceneAction) -> TransitionResult {
        let from_scene = self.scene;

        if let Some(next_scene) = self.get_next_scene(action) {
            self.scene = next_scene;
            TransitionResult {
                success: true,
                from_scene,
                to_scene: next_scene,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_scene,
                to_scene: from_scene,
                action,
            }
        }
    }

    fn get_next_scene(&self, action: SceneAction) -> Option<SceneKey> {
        match (self.scene, action) {
            (SceneKey::Title, SceneAction::StartMatch) => Some(SceneKey::Game),
            (SceneKey::Game, SceneAction::MatchOver(_)) => Some(SceneKey::GameOver),
            (SceneKey::GameOver, SceneAction::Continue) => Some(SceneKey::Title),
            _ => None,
        }
    }

    /// Reset to the title screen
    pub fn reset(&mut self) {
        self.scene = SceneKey::Title;
    }
}

impl Default for SceneFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_scene() {
        let fsm = SceneFsm::new();
        assert_eq!(fsm.scene(), SceneKey::Title);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = SceneFsm::new();
        let result = fsm.transition(SceneAction::StartMatch);
        assert!(result.success);
        assert_eq!(result.from_scene, SceneKey::Title);
        assert_eq!(fsm.scene(), SceneKey::Game);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = SceneFsm::new();
        let result = fsm.transition(SceneAction::Continue);
        assert!(!result.success);
        assert_eq!(result.to_scene, SceneKey::Title);
        assert_eq!(fsm.scene(), SceneKey::Title);
    }

    #[test]
    fn test_full_flow() {
        let mut fsm = SceneFsm::new();
        fsm.transition(SceneAction::StartMatch);
        assert!(!fsm.transition(SceneAction::StartMatch).success);
        assert_eq!(fsm.scene(), SceneKey::Game);
        fsm.transition(SceneAction::MatchOver(Score { left: 2, right: 7 }));
        assert_eq!(fsm.scene(), SceneKey::GameOver);
        fsm.transition(SceneAction::Continue);
        assert_eq!(fsm.scene(), SceneKey::Title);
    }

    #[test]
    fn test_reset() {
        let mut fsm = SceneFsm::new();
        fsm.transition(SceneAction::StartMatch);
        fsm.reset();
        assert_eq!(fsm.scene(), SceneKey::Title);
    }
}
