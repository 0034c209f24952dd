//! Ball-vs-rectangle collision resolution
//!
//! The heart of the game feel: a ball that entered a rectangle snaps back
//! out through the shallowest side, reflects, then gets a random nudge and
//! a per-axis speed renormalization so rallies never lock into a loop.

use glam::Vec2;
use rand::Rng;

use crate::consts::{JITTER_DIVISOR, SPEED_FLOOR_DIVISOR};

use super::rect::Rect;
use super::state::Ball;

/// Outcome of resolving the ball against one rectangle
#[derive(Debug, Clone, Copy)]
pub struct Deflection {
    /// Whether the ball center was strictly inside the expanded rectangle
    pub hit: bool,
    /// Ball center after any snap-out
    pub pos: Vec2,
    /// Ball velocity after any reflection
    pub vel: Vec2,
}

impl Deflection {
    /// No contact; position and velocity pass through untouched
    fn pass(ball: &Ball) -> Self {
        Self {
            hit: false,
            pos: ball.pos,
            vel: ball.vel,
        }
    }
}

/// Resolve the ball against a rectangle.
///
/// Off the surface this is the identity. On contact the ball snaps to the
/// least-penetrated edge of the radius-expanded rectangle and the matching
/// velocity component is forced outward; ties resolve in the order left,
/// right, top, bottom. The velocity is then jittered on both axes and
/// renormalized toward the ball's target speed.
pub fn deflect<R: Rng>(ball: &Ball, ball_radius: f32, target: &Rect, rng: &mut R) -> Deflection {
    let bounds = target.expand(ball_radius);
    if !bounds.contains(ball.pos) {
        return Deflection::pass(ball);
    }

    let mut pos = ball.pos;
    let mut vel = ball.vel;
    let speed = ball.speed;

    // Depth past each expanded edge; the shallowest side is the one the
    // ball actually crossed this tick.
    let from_left = pos.x - bounds.left;
    let from_right = bounds.right - pos.x;
    let from_top = pos.y - bounds.top;
    let from_bottom = bounds.bottom - pos.y;
    let shallowest = from_left.min(from_right).min(from_top).min(from_bottom);

    if shallowest == from_left {
        pos.x = bounds.left;
        vel.x = -vel.x.abs();
    } else if shallowest == from_right {
        pos.x = bounds.right;
        vel.x = vel.x.abs();
    } else if shallowest == from_top {
        pos.y = bounds.top;
        vel.y = -vel.y.abs();
    } else {
        pos.y = bounds.bottom;
        vel.y = vel.y.abs();
    }

    // Nudge both axes so repeated bounces never retrace the same path.
    // x draws first; the order is part of the deterministic replay contract.
    vel.x += (rng.random::<f32>() - 0.5) * speed / JITTER_DIVISOR;
    vel.y += (rng.random::<f32>() - 0.5) * speed / JITTER_DIVISOR;

    // Axis-ratio renormalization. The y step reads the already-updated x,
    // so this is not a true vector normalization; a near-zero divisor can
    // send an axis toward infinity and the floor below repairs it.
    vel.x = vel.x.signum() * (vel.x / vel.y * speed).abs();
    vel.y = vel.y.signum() * (vel.y / vel.x * speed).abs();

    // An axis that collapses leaves the ball sweeping parallel to a wall,
    // so any axis under the floor resets both to full speed.
    let floor = speed / SPEED_FLOOR_DIVISOR;
    if vel.x.abs() < floor {
        vel.x = vel.x.signum() * speed;
        vel.y = vel.y.signum() * speed;
    }
    if vel.y.abs() < floor {
        vel.x = vel.x.signum() * speed;
        vel.y = vel.y.signum() * speed;
    }

    Deflection {
        hit: true,
        pos,
        vel,
    }
}
