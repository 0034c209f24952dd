//! Shape generation for 2D primitives
//!
//! The whole frame is one triangle list in canvas coordinates, rebuilt
//! from simulation state every frame.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::rect::Rect;
use crate::sim::state::GameState;

/// Triangle-fan segments used for the ball
const BALL_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r) = (rect.left(), rect.right());
    let (t, b) = (rect.top(), rect.bottom());

    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}

/// Build the full frame: ball, paddle, and every standing brick
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity((BALL_SEGMENTS * 3) as usize + 6 + state.bricks.len() * 6);

    vertices.extend(circle(
        state.ball.pos,
        state.layout.ball_radius,
        colors::INK,
        BALL_SEGMENTS,
    ));
    vertices.extend(quad(&state.paddle.rect(&state.layout), colors::INK));
    for brick in state.bricks.iter().filter(|b| !b.hit) {
        vertices.extend(quad(&brick.rect, colors::INK));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::Layout;

    #[test]
    fn test_quad_covers_the_rect() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let verts = quad(&rect, colors::INK);
        assert_eq!(verts.len(), 6);

        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
    }

    #[test]
    fn test_frame_skips_hit_bricks() {
        let mut state = GameState::new(Layout::new(300.0)).unwrap();
        let full = frame_vertices(&state).len();

        state.bricks[0].hit = true;
        state.bricks[5].hit = true;
        let reduced = frame_vertices(&state).len();

        assert_eq!(full - reduced, 12);
    }

    #[test]
    fn test_frame_is_all_ink() {
        let state = GameState::new(Layout::new(300.0)).unwrap();
        let verts = frame_vertices(&state);
        assert_eq!(
            verts.len(),
            (BALL_SEGMENTS * 3) as usize + 6 + state.bricks.len() * 6
        );
        assert!(verts.iter().all(|v| v.color == colors::INK));
    }
}
