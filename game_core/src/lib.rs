pub mod commands;
pub mod components;
pub mod config;
pub mod fsm;
pub mod host;
pub mod input;
pub mod params;
pub mod resources;
pub mod scenes;
pub mod systems;

pub use commands::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use host::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use scenes::*;

use hecs::World;

/// Helper to create a paddle entity. The left paddle is keyboard driven,
/// the right one follows the ball.
pub fn create_paddle(world: &mut World, side: Side, config: &Config, y: f32) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_x(side), y);
    match side {
        Side::Left => world.spawn((paddle, PlayerControlled)),
        Side::Right => world.spawn((paddle, AiVelocity::default())),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
