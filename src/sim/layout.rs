//! Canvas geometry derived from the viewport width
//!
//! Every size in the game is a fixed ratio of the canvas width, so the
//! playfield scales uniformly to any phone screen.

use glam::Vec2;

use crate::consts::{GRID_UNITS, PADDLE_RADII, SPEED_DIVISOR, VIEWPORT_FRACTION};

/// Derived dimensions for one canvas size, immutable for the life of a game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Target ball speed in pixels per tick
    pub initial_speed: f32,
}

impl Layout {
    /// Derive the full geometry from a canvas width
    pub fn new(canvas_width: f32) -> Self {
        let ball_radius = canvas_width / GRID_UNITS;
        Self {
            canvas_width,
            canvas_height: canvas_width * 2.0 / 3.0,
            ball_radius,
            paddle_width: ball_radius * PADDLE_RADII,
            paddle_height: ball_radius,
            initial_speed: canvas_width / SPEED_DIVISOR,
        }
    }

    /// Size the canvas from the viewport width
    pub fn from_viewport(viewport_width: f32) -> Self {
        Self::new(viewport_width * VIEWPORT_FRACTION)
    }

    /// Gap between bricks, and between the field and the canvas edges
    #[inline]
    pub fn gap(&self) -> f32 {
        self.canvas_width / GRID_UNITS
    }

    /// Fixed paddle top edge, near the bottom of the canvas
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height * 30.0 / 32.0 - self.ball_radius
    }

    /// Paddle left edge at the start of a run (centered)
    pub fn paddle_start_x(&self) -> f32 {
        (self.canvas_width - self.paddle_width) / 2.0
    }

    /// Ball center at the start of a run, a little above the paddle
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height * 27.0 / 32.0)
    }

    /// Launch velocity: full speed rightward with a slight upward drift
    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(self.initial_speed, -(self.canvas_height / 160.0))
    }
}
