//! Browser bridge for Ye Olde Tennis
//!
//! The JS engine glue owns rendering, physics, audio and fonts. Each frame
//! it reports the ball body and collisions, calls `tick`, and applies the
//! returned JSON command batch.

#![cfg(target_arch = "wasm32")]

mod input;
mod logger;

use game_core::*;
use glam::Vec2;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Main client state
#[wasm_bindgen]
pub struct TennisClient {
    host: SceneHost<CommandLog>,
    keys: KeyState,
    ball: Option<BallSnapshot>,
    collisions: Vec<CollisionEvent>,
}

#[wasm_bindgen]
impl TennisClient {
    /// Create a client, optionally overriding tuning values with a JSON
    /// object
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<TennisClient, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(to_js_error)?,
            None => Config::new(),
        };
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let host = SceneHost::new(CommandLog::new(), config, Box::new(GameRng::new(seed)));

        Ok(Self {
            host,
            keys: KeyState::new(),
            ball: None,
            collisions: Vec::new(),
        })
    }

    /// Enter the title screen; returns its command batch
    pub fn start(&mut self) -> Result<String, JsValue> {
        self.host.start();
        self.drain_commands()
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        input::handle_key_down(&mut self.keys, event)
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
        input::handle_key_up(&mut self.keys, event)
    }

    /// Ball body state after the engine's physics step
    pub fn report_ball(&mut self, x: f32, y: f32, vx: f32, vy: f32) {
        self.ball = Some(BallSnapshot {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        });
    }

    pub fn report_paddle_hit(&mut self, right_paddle: bool) {
        let side = if right_paddle { Side::Right } else { Side::Left };
        self.collisions.push(CollisionEvent::PaddleBall { side });
    }

    pub fn report_world_bounds(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.collisions.push(CollisionEvent::WorldBounds {
            up,
            down,
            left,
            right,
        });
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.host.set_paused(paused);
    }

    /// Run one tick with everything reported since the previous one and
    /// return the JSON command batch for the engine
    pub fn tick(&mut self, dt: f32) -> Result<String, JsValue> {
        let frame = TickInput {
            dt,
            input: self.keys.snapshot(),
            ball: self.ball.take(),
            collisions: std::mem::take(&mut self.collisions),
        };
        self.host.tick(&frame);
        self.drain_commands()
    }

    /// Current scene as string (for JS interop)
    pub fn active_scene(&self) -> String {
        format!("{:?}", self.host.active_scene())
    }

    pub fn left_score(&self) -> u8 {
        self.host.game().score().left
    }

    pub fn right_score(&self) -> u8 {
        self.host.game().score().right
    }
}

impl TennisClient {
    fn drain_commands(&mut self) -> Result<String, JsValue> {
        let json = self.host.adapter().to_json().map_err(to_js_error)?;
        self.host.adapter_mut().clear();
        Ok(json)
    }
}
