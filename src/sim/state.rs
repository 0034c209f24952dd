//! Game state and core simulation types
//!
//! Everything gameplay-visible lives here and changes only through the
//! two entry points: `tick` and `drag_paddle`.

use glam::Vec2;

use crate::consts::INITIAL_BRICKS_PER_ROW;

use super::field::{self, FieldError};
use super::layout::Layout;
use super::rect::Rect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Ball crossed the bottom edge; terminal until restart
    GameOver,
}

/// The ball: position and per-tick velocity in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Target speed each axis is renormalized toward after a deflection
    pub speed: f32,
}

impl Ball {
    /// Ball in its launch position above the paddle
    pub fn at_start(layout: &Layout) -> Self {
        Self {
            pos: layout.ball_start(),
            vel: layout.ball_start_velocity(),
            speed: layout.initial_speed,
        }
    }
}

/// The player's paddle; its height and width are fixed, only x moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Left edge in canvas pixels
    pub x: f32,
}

impl Paddle {
    /// Center the paddle under a pointer x, clamped to the canvas
    pub fn drag_to(&mut self, layout: &Layout, pointer_x: f32) {
        let x = pointer_x - layout.paddle_width / 2.0;
        self.x = x.clamp(0.0, layout.canvas_width - layout.paddle_width);
    }

    /// Collision rectangle at the paddle's fixed height
    pub fn rect(&self, layout: &Layout) -> Rect {
        Rect::new(
            self.x,
            layout.paddle_y(),
            layout.paddle_width,
            layout.paddle_height,
        )
    }
}

/// One destructible brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    /// Flips to true exactly once; hit bricks are skipped and not drawn
    pub hit: bool,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self { rect, hit: false }
    }
}

/// Complete game state for one canvas size
#[derive(Debug, Clone)]
pub struct GameState {
    /// Canvas geometry, fixed for the life of the game
    pub layout: Layout,
    /// Current phase
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Bricks in field order (row-major); hit bricks stay in place
    pub bricks: Vec<Brick>,
    /// Row density of the current field; grows by one per cleared field
    pub bricks_per_row: u32,
    /// Bricks destroyed this run
    pub score: u32,
    /// Best score this session; survives restarts
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh game for the given canvas geometry
    pub fn new(layout: Layout) -> Result<Self, FieldError> {
        let bricks = field::generate(&layout, INITIAL_BRICKS_PER_ROW)?;
        Ok(Self {
            layout,
            phase: GamePhase::Running,
            ball: Ball::at_start(&layout),
            paddle: Paddle {
                x: layout.paddle_start_x(),
            },
            bricks,
            bricks_per_row: INITIAL_BRICKS_PER_ROW,
            score: 0,
            high_score: 0,
            time_ticks: 0,
        })
    }

    /// Pointer input: recenter the paddle under x, independent of tick rate
    pub fn drag_paddle(&mut self, pointer_x: f32) {
        let layout = self.layout;
        self.paddle.drag_to(&layout, pointer_x);
    }

    /// Bricks still standing in the current field
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.hit).count()
    }

    /// Replace the field at the current density. The density cap keeps the
    /// geometry valid, so a rejection is logged and the old field stays.
    pub(crate) fn rebuild_field(&mut self) {
        match field::generate(&self.layout, self.bricks_per_row) {
            Ok(bricks) => self.bricks = bricks,
            Err(err) => log::error!("brick field rejected: {err}"),
        }
    }

    /// Reset for a new run: fresh ball, paddle, score, and field.
    /// The high score carries over.
    pub fn restart(&mut self) {
        self.ball = Ball::at_start(&self.layout);
        self.paddle = Paddle {
            x: self.layout.paddle_start_x(),
        };
        self.score = 0;
        self.bricks_per_row = INITIAL_BRICKS_PER_ROW;
        self.rebuild_field();
        self.phase = GamePhase::Running;
    }
}
