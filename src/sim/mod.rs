//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - Stable iteration order (bricks in field order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Deflection, deflect};
pub use field::FieldError;
pub use layout::Layout;
pub use rect::{Bounds, Rect};
pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::tick;
