//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-driven only, no clocks
//! - Stable iteration order (brick container order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod shapes;
pub mod state;
pub mod tick;

pub use collision::{
    Collision, CollisionReport, Direction, circle_rect_overlap, classify_direction,
    resolve_actor_collisions,
};
pub use level::{Brick, Level, LevelGrid};
pub use shapes::{Circle, Rect, rect_overlap};
pub use state::{Actor, Facing, GameEvent, GameMode, GameState};
pub use tick::{FrameInput, process_input, update};
