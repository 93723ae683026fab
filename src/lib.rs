//! Brick Hop - a gravity platformer played through Breakout bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, levels, game state)
//! - `game`: Frame-driver facade (init / process_input / update / render)
//! - `renderer`: Draw-call surface consumed by the host renderer
//! - `audio`: Music commands sent to the host audio engine
//! - `platform`: Polled keyboard state
//! - `assets`: Level descriptor sources

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, LevelError, SettingsError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of levels, level 0 being the menu/tutorial level
    pub const LEVEL_COUNT: usize = 5;

    /// View dimensions
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Actor defaults
    pub const ACTOR_RADIUS: f32 = 12.5;
    /// Horizontal speed (pixels/s)
    pub const MOVE_SPEED: f32 = 500.0;
    /// Vertical velocity set on jump (pixels/frame, negative is up)
    pub const JUMP_IMPULSE: f32 = -8.0;
    /// Spawn pad the actor is placed on after a level change
    pub const SPAWN_PAD_WIDTH: f32 = 100.0;
    pub const SPAWN_PAD_HEIGHT: f32 = 20.0;
    /// Menu spawn height
    pub const MENU_SPAWN_Y: f32 = 100.0;

    /// Gravity outside level 0; a quarter of it is added to vertical velocity each frame
    pub const GRAVITY: f32 = 0.5;
    /// Rising above this y leaves the level through the top
    pub const TOP_EXIT_Y: f32 = -100.0;

    /// Music volumes
    pub const MENU_VOLUME: f32 = 0.8;
    pub const GAME_VOLUME: f32 = 0.4;
}
