//! Brick field generation
//!
//! A field is `bricks_per_row` x `ROW_COUNT` bricks laid out row-major
//! with a one-unit gap on every side. Difficulty escalates by adding one
//! brick per row, which narrows every brick so the row still spans the
//! canvas.

use std::error::Error;
use std::fmt;

use crate::consts::{GRID_UNITS, ROW_COUNT};

use super::layout::Layout;
use super::rect::Rect;
use super::state::Brick;

/// Rejected field geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// The requested row density leaves no positive brick width
    InvalidLayout {
        bricks_per_row: u32,
        brick_width: f32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidLayout {
                bricks_per_row,
                brick_width,
            } => write!(
                f,
                "invalid field layout: {bricks_per_row} bricks per row gives brick width {brick_width}"
            ),
        }
    }
}

impl Error for FieldError {}

/// Brick width for a row density; zero or negative means the row cannot fit.
///
/// A row of `n` bricks carries `n + 1` gaps, so the bricks share whatever
/// width the gaps leave over.
pub fn brick_width(layout: &Layout, bricks_per_row: u32) -> f32 {
    layout.gap() * (GRID_UNITS - (bricks_per_row + 1) as f32) / bricks_per_row as f32
}

/// Generate a fresh field. Deterministic: same layout and density, same
/// bricks, all unhit.
pub fn generate(layout: &Layout, bricks_per_row: u32) -> Result<Vec<Brick>, FieldError> {
    let width = brick_width(layout, bricks_per_row);
    if bricks_per_row == 0 || width <= 0.0 {
        return Err(FieldError::InvalidLayout {
            bricks_per_row,
            brick_width: width,
        });
    }

    let gap = layout.gap();
    let height = gap * 2.0;
    let total = (bricks_per_row * ROW_COUNT) as usize;

    let mut bricks = Vec::with_capacity(total);
    let mut x = gap;
    let mut y = gap;
    for i in 0..total {
        if i != 0 && i % bricks_per_row as usize == 0 {
            x = gap;
            y += height + gap;
        }
        bricks.push(Brick::new(Rect::new(x, y, width, height)));
        x += width + gap;
    }

    Ok(bricks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_field_counts() {
        let layout = Layout::new(300.0);
        let bricks = generate(&layout, 6).unwrap();
        assert_eq!(bricks.len(), 18);
        assert!(bricks.iter().all(|b| !b.hit));
    }

    #[test]
    fn test_brick_width_formula() {
        let layout = Layout::new(300.0);
        // 6 bricks share 48 - 7 = 41 units of width
        assert_eq!(brick_width(&layout, 6), 6.25 * 41.0 / 6.0);
    }

    #[test]
    fn test_row_major_positions() {
        let layout = Layout::new(300.0);
        let bricks = generate(&layout, 6).unwrap();
        let gap = layout.gap();
        let width = brick_width(&layout, 6);
        let height = gap * 2.0;

        // First brick sits one gap in from the top-left corner
        assert_eq!(bricks[0].rect, Rect::new(gap, gap, width, height));
        // Second advances by brick width plus gap
        assert_eq!(bricks[1].rect.x, gap + width + gap);
        assert_eq!(bricks[1].rect.y, gap);
        // Seventh wraps to the second row
        assert_eq!(bricks[6].rect.x, gap);
        assert_eq!(bricks[6].rect.y, gap + height + gap);
        // Third row
        assert_eq!(bricks[12].rect.y, gap + 2.0 * (height + gap));
    }

    #[test]
    fn test_rows_stay_inside_canvas() {
        let layout = Layout::new(300.0);
        for density in [1, 6, 20, 46] {
            let bricks = generate(&layout, density).unwrap();
            let last = bricks[density as usize - 1];
            let slack = layout.canvas_width - (last.rect.right() + layout.gap());
            assert!(
                slack.abs() < 1e-2,
                "row of {density} should end one gap short of the right edge, slack {slack}"
            );
        }
    }

    #[test]
    fn test_density_beyond_cap_is_rejected() {
        let layout = Layout::new(300.0);
        assert!(generate(&layout, 46).is_ok());
        assert!(matches!(
            generate(&layout, 47),
            Err(FieldError::InvalidLayout { .. })
        ));
        assert!(matches!(
            generate(&layout, 0),
            Err(FieldError::InvalidLayout { .. })
        ));
    }
}
