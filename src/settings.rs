//! Game settings
//!
//! Loaded once from an optional JSON file; any missing field takes its default.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Tunables for the view, physics, audio and level files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === View ===
    pub view_width: f32,
    pub view_height: f32,

    // === Actor ===
    pub actor_radius: f32,
    /// Horizontal speed (pixels/s)
    pub move_speed: f32,
    /// Vertical velocity on jump (negative is up)
    pub jump_impulse: f32,
    /// Velocity given to the actor on every reset
    pub initial_velocity: Vec2,
    /// Pad the actor spawns on after a level change
    pub spawn_pad_size: Vec2,
    /// Actor y on the menu
    pub menu_spawn_y: f32,

    // === World ===
    /// Gravity outside level 0
    pub gravity: f32,
    /// Rising to or above this y leaves the level through the top
    pub top_exit_y: f32,
    /// Keep applying gravity in Menu and Win
    pub integrate_outside_active: bool,

    // === Audio ===
    pub menu_volume: f32,
    pub game_volume: f32,

    // === Levels ===
    /// Descriptor path per level index
    pub level_paths: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            actor_radius: ACTOR_RADIUS,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            initial_velocity: Vec2::ZERO,
            spawn_pad_size: Vec2::new(SPAWN_PAD_WIDTH, SPAWN_PAD_HEIGHT),
            menu_spawn_y: MENU_SPAWN_Y,

            gravity: GRAVITY,
            top_exit_y: TOP_EXIT_Y,
            integrate_outside_active: true,

            menu_volume: MENU_VOLUME,
            game_volume: GAME_VOLUME,

            level_paths: [
                "levels/zero.lvl",
                "levels/one.lvl",
                "levels/two.lvl",
                "levels/three.lvl",
                "levels/four.lvl",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str, origin: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        let settings = Self::from_json(&json, &path.display().to_string())?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
