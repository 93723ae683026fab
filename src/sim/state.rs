//! Game state and core simulation types
//!
//! The session owns everything: the actor, every level, score and mode.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::shapes::{Circle, Rect};
use crate::settings::Settings;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen on level 0, waiting for start
    #[default]
    Menu,
    /// Playing levels 1..=last
    Active,
    /// Left the last level through the top
    Win,
}

/// Which way the actor sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player: a circle tracked by the top-left of its bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    /// x in pixels/s (unused by integration), y in pixels/frame
    pub vel: Vec2,
    pub radius: f32,
    pub facing: Facing,
}

impl Actor {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            facing: Facing::default(),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size())
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center(), self.radius)
    }

    /// Put the actor back in place without reallocating
    pub fn reset(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
    }
}

/// Things that happened during a frame, for the driver to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Menu -> Active
    RunStarted,
    /// The active level index changed; the new level must be reloaded
    LevelChanged { from: usize, to: usize },
    /// A breakable brick was destroyed
    BrickDestroyed { level: usize, brick: usize },
    /// Active -> Win
    Won { score: u32 },
    /// Win -> Menu, or fell back to level 0
    ReturnedToMenu,
    MuteRequested,
    UnmuteRequested,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    /// Index into `levels`, always in range
    pub level_index: usize,
    /// Points from destroyed bricks in the current run
    pub score: u32,
    /// Latched by vertical collisions, consumed by a jump
    pub on_ground: bool,
    /// 0 on level 0, `settings.gravity` elsewhere
    pub gravity: f32,
    pub actor: Actor,
    /// Every level, loaded once at init and rebuilt on entry
    pub levels: Vec<Level>,
    pub settings: Settings,
}

impl GameState {
    /// Fresh session in Menu on level 0.
    ///
    /// # Panics
    ///
    /// Panics if `levels` is empty; every frame indexes the active level.
    pub fn new(settings: Settings, levels: Vec<Level>) -> Self {
        assert!(!levels.is_empty(), "a session needs at least one level");
        let actor = Actor::new(
            menu_spawn(&settings),
            settings.initial_velocity,
            settings.actor_radius,
        );
        Self {
            mode: GameMode::Menu,
            level_index: 0,
            score: 0,
            on_ground: false,
            gravity: 0.0,
            actor,
            levels,
            settings,
        }
    }

    #[inline]
    pub fn view_size(&self) -> Vec2 {
        Vec2::new(self.settings.view_width, self.settings.view_height)
    }

    pub fn last_level(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn is_final_level(&self) -> bool {
        self.level_index == self.last_level()
    }

    pub fn active_level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    /// Where the actor reappears after a level change: centered on the spawn
    /// pad at the bottom of the view
    pub fn spawn_point(&self) -> Vec2 {
        let s = &self.settings;
        let pad_pos = Vec2::new(
            s.view_width / 2.0 - s.spawn_pad_size.x / 2.0,
            s.view_height - s.spawn_pad_size.y,
        );
        pad_pos + Vec2::new(s.spawn_pad_size.x / 2.0 - s.actor_radius, -(s.actor_radius * 2.0))
    }

    pub fn reset_actor(&mut self) {
        let spawn = self.spawn_point();
        self.actor.reset(spawn, self.settings.initial_velocity);
    }

    pub fn reset_actor_to_menu(&mut self) {
        let spawn = menu_spawn(&self.settings);
        self.actor.reset(spawn, self.settings.initial_velocity);
    }

    /// Gravity follows the level: none on the menu level
    pub fn refresh_gravity(&mut self) {
        self.gravity = if self.level_index == 0 {
            0.0
        } else {
            self.settings.gravity
        };
    }

    /// Move to the next level, saturating at the last one
    pub fn advance_level(&mut self, events: &mut Vec<GameEvent>) {
        let from = self.level_index;
        let to = (from + 1).min(self.last_level());
        self.change_level(from, to, events);
    }

    /// Move to the previous level, saturating at 0. Falling back onto level 0
    /// while playing ends the run.
    pub fn retreat_level(&mut self, events: &mut Vec<GameEvent>) {
        let from = self.level_index;
        let to = from.saturating_sub(1);
        self.change_level(from, to, events);

        if to == 0 && self.mode == GameMode::Active {
            self.return_to_menu(events);
        }
    }

    /// Back to the title screen on level 0 with the actor at rest
    pub fn return_to_menu(&mut self, events: &mut Vec<GameEvent>) {
        self.mode = GameMode::Menu;
        self.level_index = 0;
        self.on_ground = false;
        self.refresh_gravity();
        self.reset_actor_to_menu();
        events.push(GameEvent::ReturnedToMenu);
    }

    fn change_level(&mut self, from: usize, to: usize, events: &mut Vec<GameEvent>) {
        self.level_index = to;
        self.refresh_gravity();
        // Re-entering a level (even the same one) rebuilds it
        events.push(GameEvent::LevelChanged { from, to });
    }
}

fn menu_spawn(settings: &Settings) -> Vec2 {
    Vec2::new(
        settings.view_width / 2.0 - settings.actor_radius / 2.0,
        settings.menu_spawn_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_levels(count: usize) -> GameState {
        GameState::new(Settings::default(), vec![Level::default(); count])
    }

    #[test]
    fn test_new_state_is_menu() {
        let state = state_with_levels(5);
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.gravity, 0.0);
        assert_eq!(state.actor.pos, Vec2::new(800.0 / 2.0 - 12.5 / 2.0, 100.0));
    }

    #[test]
    fn test_actor_geometry() {
        let actor = Actor::new(Vec2::new(10.0, 20.0), Vec2::ZERO, 5.0);
        assert_eq!(actor.size(), Vec2::new(10.0, 10.0));
        assert_eq!(actor.center(), Vec2::new(15.0, 25.0));
        assert_eq!(actor.bounds(), Rect::new(Vec2::new(10.0, 20.0), Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_spawn_point() {
        let state = state_with_levels(5);
        // (400 - 12.5, 600 - 20 - 25)
        assert_eq!(state.spawn_point(), Vec2::new(387.5, 555.0));
    }

    #[test]
    fn test_advance_saturates_at_last_level() {
        let mut state = state_with_levels(5);
        state.level_index = 4;
        let mut events = Vec::new();
        state.advance_level(&mut events);
        assert_eq!(state.level_index, 4);
        assert_eq!(events, vec![GameEvent::LevelChanged { from: 4, to: 4 }]);
    }

    #[test]
    fn test_retreat_to_level_zero_returns_to_menu() {
        let mut state = state_with_levels(5);
        state.mode = GameMode::Active;
        state.level_index = 1;
        let mut events = Vec::new();
        state.retreat_level(&mut events);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.gravity, 0.0);
        assert_eq!(state.actor.pos, menu_spawn(&state.settings));
        assert_eq!(state.actor.vel, Vec2::ZERO);
        assert_eq!(
            events,
            vec![
                GameEvent::LevelChanged { from: 1, to: 0 },
                GameEvent::ReturnedToMenu
            ]
        );
    }

    #[test]
    fn test_retreat_never_underflows() {
        let mut state = state_with_levels(5);
        let mut events = Vec::new();
        state.retreat_level(&mut events);
        assert_eq!(state.level_index, 0);
    }

    #[test]
    fn test_level_change_updates_gravity_immediately() {
        let mut state = state_with_levels(5);
        let mut events = Vec::new();
        state.advance_level(&mut events);
        assert_eq!(state.gravity, 0.5);
    }

    #[test]
    #[should_panic(expected = "at least one level")]
    fn test_new_rejects_empty_levels() {
        let _ = GameState::new(Settings::default(), Vec::new());
    }

    #[test]
    fn test_refresh_gravity() {
        let mut state = state_with_levels(5);
        state.refresh_gravity();
        assert_eq!(state.gravity, 0.0);
        state.level_index = 2;
        state.refresh_gravity();
        assert_eq!(state.gravity, 0.5);
    }
}
