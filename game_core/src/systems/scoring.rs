use hecs::World;
use log::info;

use crate::commands::{LabelId, PhysicsCommand, SceneCommand};
use crate::fsm::{SceneAction, SceneKey};
use crate::scenes::SceneOutput;
use crate::systems::serve_ball;
use crate::{Ball, Config, MatchState, Score, ServeAngles, Side};

/// Side that scores when the ball is at `x`. Leaving past the left edge
/// scores for the right side and vice versa.
pub fn scoring_side(x: f32, config: &Config) -> Option<Side> {
    if config.in_play(x) {
        None
    } else if x < config.score_left_bound {
        Some(Side::Right)
    } else {
        Some(Side::Left)
    }
}

pub fn score_label(side: Side) -> LabelId {
    match side {
        Side::Left => LabelId::LeftScore,
        Side::Right => LabelId::RightScore,
    }
}

/// Check if the ball left the court, award the point and either re-serve
/// or end the match. Returns the side that scored, if any.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    state: &mut MatchState,
    angles: &mut dyn ServeAngles,
    out: &mut SceneOutput,
) -> Option<Side> {
    let scorer = world
        .query::<&Ball>()
        .iter()
        .find(|(_e, ball)| ball.active)
        .and_then(|(_e, ball)| scoring_side(ball.pos.x, config));
    let Some(side) = scorer else {
        return None;
    };

    let total = score.award(side);
    out.set_text(score_label(side), total.to_string());
    info!("{:?} side scores ({} - {})", side, score.left, score.right);

    *state = score.outcome(config.win_score);
    if *state == MatchState::Running {
        serve_ball(world, config, angles, out);
        return Some(side);
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.active = false;
    }
    out.physics(PhysicsCommand::RemoveBall);
    out.scene(SceneCommand::Stop {
        scene: SceneKey::GameBackground,
    });
    out.request(SceneAction::MatchOver(*score));
    info!("Match over: {:?} ({} - {})", state, score.left, score.right);
    Some(side)
}
