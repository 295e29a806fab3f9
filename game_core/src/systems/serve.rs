use glam::Vec2;
use hecs::World;
use log::debug;

use crate::commands::PhysicsCommand;
use crate::scenes::SceneOutput;
use crate::{Ball, Config, ServeAngles};

/// Velocity for a serve at `angle` degrees. The engine's y axis points
/// down, so 90 degrees serves straight down.
pub fn serve_velocity(angle: f32, speed: f32) -> Vec2 {
    let radians = angle.to_radians();
    Vec2::new(radians.cos(), radians.sin()) * speed
}

/// Re-centre the ball and give it a fresh random direction
pub fn serve_ball(
    world: &mut World,
    config: &Config,
    angles: &mut dyn ServeAngles,
    out: &mut SceneOutput,
) {
    let angle = angles.next_angle();
    let pos = config.field_center();
    let vel = serve_velocity(angle, config.serve_speed);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.active {
            continue;
        }
        ball.pos = pos;
        ball.vel = vel;
    }

    debug!("Serving at {} degrees", angle);
    out.physics(PhysicsCommand::SetBallPosition { pos });
    out.physics(PhysicsCommand::SetBallVelocity { vel });
}
