use glam::Vec2;
use hecs::World;

use crate::commands::{PhysicsCommand, SoundCue};
use crate::scenes::SceneOutput;
use crate::{Ball, CollisionEvent, Config};

/// Progressive speed-up on paddle contact
pub fn speed_up(vel: Vec2, factor: f32) -> Vec2 {
    vel * factor
}

/// React to the collisions the engine reported this tick, in order.
///
/// The engine has already resolved the bounce; the core only speeds the
/// ball up after paddle hits and plays the matching cues. Side walls are
/// scoring edges, not bounces, so they stay silent.
pub fn handle_collisions(
    world: &mut World,
    config: &Config,
    collisions: &[CollisionEvent],
    out: &mut SceneOutput,
) {
    for event in collisions {
        match *event {
            CollisionEvent::PaddleBall { .. } => {
                out.sound(SoundCue::PongBeep);
                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    if !ball.active {
                        continue;
                    }
                    ball.vel = speed_up(ball.vel, config.ball_speed_increase);
                    out.physics(PhysicsCommand::SetBallVelocity { vel: ball.vel });
                }
            }
            CollisionEvent::WorldBounds { left, right, .. } => {
                if left || right {
                    continue;
                }
                out.sound(SoundCue::PongPlop);
            }
        }
    }
}
