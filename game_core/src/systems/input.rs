use hecs::World;
use log::debug;

use crate::commands::PhysicsCommand;
use crate::input::InputSnapshot;
use crate::scenes::SceneOutput;
use crate::{Config, Paddle, PlayerControlled};

/// New paddle y for one tick of held input. Up wins when both are held.
pub fn player_paddle_y(y: f32, input: &InputSnapshot, step: f32) -> Option<f32> {
    if input.up {
        Some(y - step)
    } else if input.down {
        Some(y + step)
    } else {
        None
    }
}

/// Move the keyboard paddle by a fixed step per tick
pub fn process_player_input(
    world: &mut World,
    input: &InputSnapshot,
    config: &Config,
    out: &mut SceneOutput,
) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PlayerControlled)>() {
        let Some(y) = player_paddle_y(paddle.y, input, config.player_step) else {
            continue;
        };
        paddle.y = y;
        out.physics(PhysicsCommand::SetPaddleY {
            side: paddle.side,
            y,
        });

        // Paddles may leave the field; only note it
        if let Some(edge) = config.paddle_outside_field(y) {
            debug!("{:?} paddle past the {:?} edge (y = {})", paddle.side, edge, y);
        }
    }
}
