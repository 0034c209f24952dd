//! Fixed timestep game loop
//!
//! One tick: predictive wall bounce, paddle deflection, brick deflections
//! in field order, move, bottom-edge loss check. Brick flags and score
//! commit as they happen; the ball commits only if the tick did not end
//! the run, so a lost ball freezes at its last in-bounds position.

use rand::Rng;

use crate::consts::MAX_BRICKS_PER_ROW;

use super::collision::deflect;
use super::state::{GamePhase, GameState};

/// Advance the game by one fixed 10 ms step
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    let layout = state.layout;
    let radius = layout.ball_radius;
    let mut ball = state.ball;

    // --- Walls ---
    // Predictive: flip if the next position would leave the canvas. The
    // bottom edge is the losing edge and never bounces.
    let next = ball.pos + ball.vel;
    if next.x > layout.canvas_width - radius || next.x < radius {
        ball.vel.x = -ball.vel.x;
    }
    if next.y < radius {
        ball.vel.y = -ball.vel.y;
    }

    // --- Paddle ---
    let bounce = deflect(&ball, radius, &state.paddle.rect(&layout), rng);
    ball.pos = bounce.pos;
    ball.vel = bounce.vel;

    // --- Bricks ---
    // Field order; each brick sees the ball state the previous one produced.
    for i in 0..state.bricks.len() {
        if state.bricks[i].hit {
            continue;
        }
        let result = deflect(&ball, radius, &state.bricks[i].rect, rng);
        ball.pos = result.pos;
        ball.vel = result.vel;
        if result.hit {
            state.bricks[i].hit = true;
            state.score += 1;
            state.high_score = state.high_score.max(state.score);
        }
    }

    // --- Field clear ---
    // Regenerates within the same tick, after the final hit and score
    // have landed, so no frame ever shows an empty field.
    if state.bricks_remaining() == 0 {
        state.bricks_per_row = (state.bricks_per_row + 1).min(MAX_BRICKS_PER_ROW);
        state.rebuild_field();
    }

    // --- Move ---
    ball.pos += ball.vel;

    // --- Loss check ---
    if ball.pos.y > layout.canvas_height - radius {
        state.phase = GamePhase::GameOver;
        return;
    }

    state.ball = ball;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::Layout;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_state() -> GameState {
        GameState::new(Layout::new(300.0)).unwrap()
    }

    #[test]
    fn test_side_wall_reflects_x() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(1);

        // Mid-height, clear of bricks and paddle, one step from the right wall
        state.ball.pos = Vec2::new(292.0, 100.0);
        state.ball.vel = Vec2::new(2.0, 0.5);
        tick(&mut state, &mut rng);

        assert_eq!(state.ball.vel.x, -2.0);
        assert_eq!(state.ball.pos, Vec2::new(290.0, 100.5));
    }

    #[test]
    fn test_top_wall_reflects_y() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(1);

        // Clear the field so only the wall can deflect
        for brick in &mut state.bricks {
            brick.hit = true;
        }
        state.ball.pos = Vec2::new(150.0, 5.0);
        state.ball.vel = Vec2::new(1.0, -1.0);
        tick(&mut state, &mut rng);

        assert_eq!(state.ball.vel.y, 1.0);
        assert_eq!(state.ball.pos, Vec2::new(151.0, 6.0));
    }

    #[test]
    fn test_ball_below_paddle_ends_the_run() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(1);

        // Park the paddle far away so nothing can save the ball
        state.drag_paddle(0.0);
        state.ball.pos = Vec2::new(150.0, 191.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state, &mut rng);

        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_lost_ball_freezes_in_place() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(1);

        state.drag_paddle(0.0);
        state.ball.pos = Vec2::new(150.0, 191.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state, &mut rng);

        // The losing move is discarded; the ball renders where it last was
        assert_eq!(state.ball.pos, Vec2::new(150.0, 191.0));
        assert_eq!(state.ball.vel, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_game_over_tick_is_inert() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(1);

        state.phase = GamePhase::GameOver;
        let before_ball = state.ball;
        let before_ticks = state.time_ticks;
        tick(&mut state, &mut rng);

        assert_eq!(state.ball, before_ball);
        assert_eq!(state.time_ticks, before_ticks);
    }

    #[test]
    fn test_brick_hit_scores_and_marks() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(5);

        // Rise into the bottom row's first brick. Expanded bricks overlap
        // their neighbors, so only a bottom-row underside hit at the brick's
        // center x touches exactly one brick.
        let target = state.bricks[12].rect;
        state.ball.pos = Vec2::new(
            target.x + target.width / 2.0,
            target.bottom() + state.layout.ball_radius - 1.0,
        );
        state.ball.vel = Vec2::new(0.2, -1.0);
        tick(&mut state, &mut rng);

        assert!(state.bricks[12].hit);
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert_eq!(state.bricks_remaining(), 17);
    }

    #[test]
    fn test_clearing_the_field_regenerates_densified() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(5);

        // Leave only brick 0 standing, then drive the ball into it
        for brick in &mut state.bricks[1..] {
            brick.hit = true;
        }
        let target = state.bricks[0].rect;
        state.ball.pos = Vec2::new(
            target.x + target.width / 2.0,
            target.bottom() + state.layout.ball_radius - 1.0,
        );
        state.ball.vel = Vec2::new(0.2, -1.0);
        state.score = 17;
        state.high_score = 17;
        tick(&mut state, &mut rng);

        // Same tick: score committed, then a fresh 7-per-row field
        assert_eq!(state.score, 18);
        assert_eq!(state.bricks_per_row, 7);
        assert_eq!(state.bricks.len(), 21);
        assert!(state.bricks.iter().all(|b| !b.hit));
    }

    #[test]
    fn test_density_stops_at_cap() {
        let mut state = test_state();
        let mut rng = Pcg32::seed_from_u64(5);

        state.bricks_per_row = MAX_BRICKS_PER_ROW;
        state.rebuild_field();
        for brick in &mut state.bricks {
            brick.hit = true;
        }
        // Park the ball mid-canvas so only the regeneration runs
        state.ball.pos = Vec2::new(150.0, 100.0);
        state.ball.vel = Vec2::new(0.5, 0.5);
        tick(&mut state, &mut rng);

        assert_eq!(state.bricks_per_row, MAX_BRICKS_PER_ROW);
        assert_eq!(state.bricks.len(), (MAX_BRICKS_PER_ROW * 3) as usize);
    }

    #[test]
    fn test_determinism() {
        let layout = Layout::new(300.0);
        let mut a = GameState::new(layout).unwrap();
        let mut b = GameState::new(layout).unwrap();
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);

        for i in 0..2000 {
            // Identical drag schedule on both runs
            if i % 7 == 0 {
                let x = (i % 300) as f32;
                a.drag_paddle(x);
                b.drag_paddle(x);
            }
            tick(&mut a, &mut rng_a);
            tick(&mut b, &mut rng_b);
        }

        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
    }
}
