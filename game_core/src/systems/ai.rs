use hecs::World;

use crate::commands::PhysicsCommand;
use crate::scenes::SceneOutput;
use crate::{AiVelocity, Ball, Config, Paddle};

/// Velocity for the AI paddle given `diff = ball.y - paddle.y`.
///
/// `None` inside the dead zone. Otherwise a fixed step toward the ball,
/// clamped to the AI's max speed.
pub fn ai_velocity(diff: f32, config: &Config) -> Option<f32> {
    if diff.abs() < config.ai_dead_zone {
        return None;
    }

    let vel = if diff < 0.0 {
        -config.ai_speed // ball is above the paddle
    } else {
        config.ai_speed
    };
    Some(vel.clamp(-config.ai_max_speed, config.ai_max_speed))
}

/// Track the ball vertically with the AI paddle
pub fn update_ai(world: &mut World, config: &Config, out: &mut SceneOutput) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, velocity)) in world.query_mut::<(&mut Paddle, &mut AiVelocity)>() {
        let Some(vel) = ai_velocity(ball_y - paddle.y, config) else {
            continue;
        };
        velocity.y = vel;
        paddle.y += vel;
        out.physics(PhysicsCommand::SetPaddleY {
            side: paddle.side,
            y: paddle.y,
        });
    }
}
