/// Fixed tuning values for the Pong field
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Logical resolution (backing pixel grid, independent of display size)
    pub const LOGICAL_WIDTH: f32 = 640.0;
    pub const LOGICAL_HEIGHT: f32 = 360.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;

    // Ball
    pub const BALL_SIZE: f32 = 5.0;

    // Spawn positions (top-left corner)
    pub const PLAYER_SPAWN: (f32, f32) = (10.0, 10.0);
    pub const ENEMY_SPAWN: (f32, f32) = (625.0, 10.0);
    pub const BALL_SPAWN: (f32, f32) = (320.0, 180.0);

    // Colors
    pub const BACKGROUND_COLOR: &str = "#000";
    pub const FOREGROUND_COLOR: &str = "#fff";

    // Host document
    pub const CANVAS_ID: &str = "canvas";
}
