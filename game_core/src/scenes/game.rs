use glam::Vec2;
use hecs::World;
use log::{debug, info};

use super::{BallSnapshot, Scene, SceneOutput, TickInput};
use crate::commands::{LabelId, PhysicsCommand, SceneCommand, TextStyle};
use crate::fsm::SceneKey;
use crate::systems::*;
use crate::{
    create_ball, create_paddle, AiVelocity, Ball, Config, MatchState, Paddle, Score, ServeAngles,
    Side, Time,
};

/// The match controller: owns the court, the score and the win state.
///
/// Per tick, in order: player input, AI, scoring, then the collision
/// reactions reported by the engine. Nothing runs while paused or once the
/// match has a winner, and a tick that scores drops its collisions.
pub struct GameScene {
    config: Config,
    angles: Box<dyn ServeAngles>,
    world: World,
    time: Time,
    score: Score,
    state: MatchState,
    paused: bool,
    serve_at: Option<f32>, // match time of the first serve
}

impl GameScene {
    pub fn new(config: Config, angles: Box<dyn ServeAngles>) -> Self {
        Self {
            config,
            angles,
            world: World::new(),
            time: Time::new(0.0, 0.0),
            score: Score::new(),
            state: MatchState::Running,
            paused: false,
            serve_at: None,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("Match {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Whether the opening serve is still pending
    pub fn awaiting_serve(&self) -> bool {
        self.serve_at.is_some()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
    }

    pub fn ai_velocity(&self) -> f32 {
        self.world
            .query::<&AiVelocity>()
            .iter()
            .next()
            .map(|(_e, vel)| vel.y)
            .unwrap_or(0.0)
    }

    /// Mirror the engine's ball body into the court
    fn sync_ball(&mut self, snapshot: BallSnapshot) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            if ball.active {
                ball.pos = snapshot.pos;
                ball.vel = snapshot.vel;
            }
        }
    }

    fn check_serve_due(&mut self, out: &mut SceneOutput) {
        let Some(serve_at) = self.serve_at else {
            return;
        };
        if self.time.now < serve_at {
            return;
        }

        self.serve_at = None;
        if self.state == MatchState::Running {
            serve_ball(&mut self.world, &self.config, self.angles.as_mut(), out);
        }
    }

    fn spawn_court(&mut self, out: &mut SceneOutput) {
        let config = &self.config;
        let [x, y, width, height] = config.world_bounds;
        out.physics(PhysicsCommand::SetWorldBounds {
            x,
            y,
            width,
            height,
        });

        out.scene(SceneCommand::Run {
            scene: SceneKey::GameBackground,
        });
        out.scene(SceneCommand::SendToBack {
            scene: SceneKey::GameBackground,
        });

        let center = config.field_center();
        create_ball(&mut self.world, center, Vec2::ZERO);
        out.physics(PhysicsCommand::CreateBall {
            pos: center,
            radius: config.ball_radius,
            bounce: config.ball_bounce,
            max_speed: config.ball_max_speed,
            collide_world_bounds: true,
            world_bounds_events: true,
        });

        for side in [Side::Left, Side::Right] {
            create_paddle(&mut self.world, side, config, center.y);
            out.physics(PhysicsCommand::CreatePaddle {
                side,
                pos: Vec2::new(config.paddle_x(side), center.y),
                width: config.paddle_width,
                height: config.paddle_height,
            });
        }

        let style = TextStyle::new(&config.font_family, Some(config.score_font_size));
        out.create_text(LabelId::LeftScore, Vec2::new(300.0, 125.0), "0", style.clone());
        out.create_text(LabelId::RightScore, Vec2::new(500.0, 375.0), "0", style);
    }
}

impl Scene for GameScene {
    fn key(&self) -> SceneKey {
        SceneKey::Game
    }

    fn on_enter(&mut self, _payload: Option<Score>, out: &mut SceneOutput) {
        self.world.clear();
        self.time = Time::new(0.0, 0.0);
        self.score = Score::new();
        self.state = MatchState::Running;
        self.paused = false;
        self.serve_at = Some(self.time.now + self.config.serve_delay);

        self.spawn_court(out);
        info!("Match started (first to {})", self.config.win_score);
    }

    fn on_tick(&mut self, frame: &TickInput, out: &mut SceneOutput) {
        self.time.advance(frame.dt);
        if let Some(snapshot) = frame.ball {
            self.sync_ball(snapshot);
        }
        self.check_serve_due(out);

        if self.paused || self.state != MatchState::Running {
            return;
        }

        process_player_input(&mut self.world, &frame.input, &self.config, out);
        update_ai(&mut self.world, &self.config, out);
        let scorer = check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.state,
            self.angles.as_mut(),
            out,
        );

        // Collisions this tick belong to the ball before the point
        if scorer.is_some() {
            return;
        }
        handle_collisions(&mut self.world, &self.config, &frame.collisions, out);
    }

    fn on_exit(&mut self, _out: &mut SceneOutput) {
        self.world.clear();
        self.serve_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Command, SoundCue};
    use crate::input::InputSnapshot;
    use crate::{CollisionEvent, FixedAngles, SceneAction};

    const DT: f32 = 1.0 / 60.0;

    fn entered_scene(angle: f32) -> (GameScene, SceneOutput) {
        let mut scene = GameScene::new(Config::new(), Box::new(FixedAngles::constant(angle)));
        let mut out = SceneOutput::default();
        scene.on_enter(None, &mut out);
        (scene, out)
    }

    fn tick(scene: &mut GameScene, frame: TickInput) -> SceneOutput {
        let mut out = SceneOutput::default();
        scene.on_tick(&frame, &mut out);
        out
    }

    fn ball_at(x: f32, y: f32) -> TickInput {
        TickInput::new(DT).with_ball(Vec2::new(x, y), Vec2::new(-300.0, 0.0))
    }

    #[test]
    fn test_enter_resets_match() {
        let (scene, out) = entered_scene(0.0);

        assert_eq!(scene.score(), Score::new());
        assert_eq!(scene.state(), MatchState::Running);
        assert!(!scene.paused());
        assert!(scene.awaiting_serve());
        assert_eq!(scene.ball().map(|b| b.vel), Some(Vec2::ZERO));
        assert_eq!(scene.paddle_y(Side::Left), Some(250.0));
        assert_eq!(scene.paddle_y(Side::Right), Some(250.0));
        assert!(out.commands.contains(&Command::Physics(PhysicsCommand::SetWorldBounds {
            x: -100.0,
            y: 0.0,
            width: 1000.0,
            height: 500.0,
        })));
    }

    #[test]
    fn test_first_serve_after_delay() {
        let (mut scene, _) = entered_scene(0.0);

        let out = tick(&mut scene, TickInput::new(0.5));
        assert!(scene.awaiting_serve());
        assert!(out.commands.is_empty());

        tick(&mut scene, TickInput::new(0.5));
        assert!(!scene.awaiting_serve());
        let ball = scene.ball().unwrap();
        assert!((ball.vel - Vec2::new(300.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_serve_delay_follows_match_time() {
        let config = Config {
            serve_delay: 0.25,
            ..Config::new()
        };
        let mut scene = GameScene::new(config, Box::new(FixedAngles::constant(180.0)));
        scene.on_enter(None, &mut SceneOutput::default());

        tick(&mut scene, TickInput::new(0.2));
        assert!(scene.awaiting_serve());

        let out = tick(&mut scene, TickInput::new(0.1));
        assert!(!scene.awaiting_serve());
        assert!(out
            .commands
            .iter()
            .any(|c| matches!(c, Command::Physics(PhysicsCommand::SetBallVelocity { .. }))));
        assert!((scene.ball().unwrap().vel - Vec2::new(-300.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_ball_inside_bounds_never_scores() {
        let (mut scene, _) = entered_scene(0.0);
        for x in [-30.0, -29.0, 0.0, 400.0, 829.0, 830.0] {
            tick(&mut scene, ball_at(x, 250.0));
        }
        assert_eq!(scene.score(), Score::new());
        assert_eq!(scene.state(), MatchState::Running);
    }

    #[test]
    fn test_point_and_reserve() {
        let (mut scene, _) = entered_scene(45.0);

        tick(&mut scene, ball_at(-40.0, 250.0));

        assert_eq!(scene.score(), Score { left: 0, right: 1 });
        let ball = scene.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 250.0));
        assert!((ball.vel.length() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_ai_reacts_each_tick() {
        let (mut scene, _) = entered_scene(0.0);

        tick(&mut scene, ball_at(400.0, 262.0));
        assert_eq!(scene.paddle_y(Side::Right), Some(253.0));
        assert_eq!(scene.ai_velocity(), 3.0);

        // 258 - 253 = 5, inside the dead zone
        tick(&mut scene, ball_at(400.0, 258.0));
        assert_eq!(scene.paddle_y(Side::Right), Some(253.0));
    }

    #[test]
    fn test_player_input_moves_left_paddle() {
        let (mut scene, _) = entered_scene(0.0);

        tick(&mut scene, ball_at(400.0, 250.0).with_input(InputSnapshot::up()));
        tick(&mut scene, ball_at(400.0, 250.0).with_input(InputSnapshot::up()));

        assert_eq!(scene.paddle_y(Side::Left), Some(230.0));
    }

    #[test]
    fn test_pause_gates_everything() {
        let (mut scene, _) = entered_scene(0.0);
        scene.set_paused(true);

        let out = tick(
            &mut scene,
            ball_at(-40.0, 100.0)
                .with_input(InputSnapshot::down())
                .with_collision(CollisionEvent::PaddleBall { side: Side::Left }),
        );

        assert_eq!(scene.score(), Score::new());
        assert_eq!(scene.paddle_y(Side::Left), Some(250.0));
        assert_eq!(scene.paddle_y(Side::Right), Some(250.0));
        assert!(out.commands.is_empty());

        scene.set_paused(false);
        tick(&mut scene, ball_at(-40.0, 250.0));
        assert_eq!(scene.score(), Score { left: 0, right: 1 });
    }

    #[test]
    fn test_tick_order_input_then_collisions() {
        let (mut scene, _) = entered_scene(0.0);

        let out = tick(
            &mut scene,
            TickInput::new(DT)
                .with_ball(Vec2::new(100.0, 250.0), Vec2::new(200.0, 100.0))
                .with_input(InputSnapshot::down())
                .with_collision(CollisionEvent::PaddleBall { side: Side::Left }),
        );

        let expected = Vec2::new(200.0 * 1.05, 100.0 * 1.05);
        assert_eq!(scene.ball().unwrap().vel, expected);
        assert_eq!(
            out.commands,
            vec![
                Command::Physics(PhysicsCommand::SetPaddleY {
                    side: Side::Left,
                    y: 260.0
                }),
                Command::Audio(SoundCue::PongBeep),
                Command::Physics(PhysicsCommand::SetBallVelocity { vel: expected }),
            ]
        );
    }

    #[test]
    fn test_win_stops_the_match() {
        let (mut scene, _) = entered_scene(0.0);
        let mut last = SceneOutput::default();
        for _ in 0..7 {
            last = tick(&mut scene, ball_at(-40.0, 250.0));
        }

        assert_eq!(scene.state(), MatchState::PlayerWon);
        assert_eq!(scene.score(), Score { left: 0, right: 7 });
        assert!(!scene.ball().unwrap().active);
        assert_eq!(
            last.actions,
            vec![SceneAction::MatchOver(Score { left: 0, right: 7 })]
        );
        assert!(last.commands.contains(&Command::Scene(SceneCommand::Stop {
            scene: SceneKey::GameBackground
        })));

        // No further per-tick work once decided
        let out = tick(
            &mut scene,
            ball_at(-40.0, 250.0).with_collision(CollisionEvent::PaddleBall { side: Side::Left }),
        );
        assert!(out.commands.is_empty());
        assert_eq!(scene.score(), Score { left: 0, right: 7 });
    }

    #[test]
    fn test_collisions_discarded_on_deciding_tick() {
        let (mut scene, _) = entered_scene(0.0);
        for _ in 0..6 {
            tick(&mut scene, ball_at(840.0, 250.0));
        }

        let out = tick(
            &mut scene,
            ball_at(840.0, 250.0).with_collision(CollisionEvent::WorldBounds {
                up: true,
                down: false,
                left: false,
                right: false,
            }),
        );

        assert_eq!(scene.state(), MatchState::AiWon);
        assert!(!out.commands.contains(&Command::Audio(SoundCue::PongPlop)));
    }

    #[test]
    fn test_paddle_hit_on_scoring_tick_keeps_serve_speed() {
        let (mut scene, _) = entered_scene(0.0);

        let out = tick(
            &mut scene,
            TickInput::new(DT)
                .with_ball(Vec2::new(-40.0, 250.0), Vec2::new(-480.0, 0.0))
                .with_collision(CollisionEvent::PaddleBall { side: Side::Left }),
        );

        assert_eq!(scene.score(), Score { left: 0, right: 1 });
        let ball = scene.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 250.0));
        assert!((ball.vel - Vec2::new(300.0, 0.0)).length() < 1e-3);
        assert!(!out.commands.contains(&Command::Audio(SoundCue::PongBeep)));
    }

    #[test]
    fn test_reentry_resets_state() {
        let (mut scene, _) = entered_scene(0.0);
        for _ in 0..7 {
            tick(&mut scene, ball_at(840.0, 250.0));
        }
        assert_eq!(scene.state(), MatchState::AiWon);

        let mut out = SceneOutput::default();
        scene.on_exit(&mut out);
        assert!(scene.ball().is_none());
        scene.on_enter(None, &mut out);

        assert_eq!(scene.state(), MatchState::Running);
        assert_eq!(scene.score(), Score::new());
        assert!(scene.ball().unwrap().active);
    }
}
