//! Pocket Bricks - a single-screen breakout game sized for a phone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, brick field, game loop)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

pub use sim::state::GameState;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (100 Hz)
    pub const TICK_MS: f64 = 10.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// The playfield takes this fraction of the viewport width
    pub const VIEWPORT_FRACTION: f32 = 0.6;
    /// The canvas is 48 units wide; one unit is both the ball radius
    /// and the gap between bricks
    pub const GRID_UNITS: f32 = 48.0;
    /// Paddle width measured in ball radii
    pub const PADDLE_RADII: f32 = 5.0;
    /// Ball speed is canvas_width / SPEED_DIVISOR, in pixels per tick
    pub const SPEED_DIVISOR: f32 = 240.0;

    /// Collision jitter amplitude: (u - 0.5) * speed / JITTER_DIVISOR per axis
    pub const JITTER_DIVISOR: f32 = 8.0;
    /// Axis speeds below speed / SPEED_FLOOR_DIVISOR snap back to full speed
    pub const SPEED_FLOOR_DIVISOR: f32 = 1.3;

    /// Bricks per row at the start of a run
    pub const INITIAL_BRICKS_PER_ROW: u32 = 6;
    /// Rows in every brick field
    pub const ROW_COUNT: u32 = 3;
    /// Largest row density with positive brick width
    pub const MAX_BRICKS_PER_ROW: u32 = 46;
}
