/// Game tuning parameters for Ye Olde Tennis
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (engine pixels, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Physics world bounds extend past the field so the ball can leave it
    pub const WORLD_BOUNDS_X: f32 = -100.0;
    pub const WORLD_BOUNDS_Y: f32 = 0.0;
    pub const WORLD_BOUNDS_WIDTH: f32 = 1000.0;
    pub const WORLD_BOUNDS_HEIGHT: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_LEFT_X: f32 = 50.0;
    pub const PADDLE_RIGHT_X: f32 = 750.0;
    pub const PLAYER_STEP: f32 = 10.0; // units per tick while a key is held

    // AI paddle
    pub const AI_SPEED: f32 = 3.0; // units per tick
    pub const AI_MAX_SPEED: f32 = 10.0;
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BOUNCE: f32 = 1.0;
    pub const BALL_MAX_SPEED: f32 = 500.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply velocity on paddle hit
    pub const SERVE_SPEED: f32 = 300.0; // units per second
    pub const SERVE_DELAY: f32 = 1.0; // seconds before the first serve

    // Score
    pub const SCORE_LEFT_BOUND: f32 = -30.0;
    pub const SCORE_RIGHT_BOUND: f32 = 830.0;
    pub const WIN_SCORE: u8 = 7;

    // Text
    pub const FONT_FAMILY: &'static str = "Press Start 2P";
    pub const SCORE_FONT_SIZE: u16 = 48;
}
