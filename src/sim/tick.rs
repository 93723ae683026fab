//! Per-frame simulation steps
//!
//! The driver calls `process_input` then `update` once per frame. Both return
//! the events the frame produced; level reloads and audio happen outside.

use super::collision::resolve_actor_collisions;
use super::state::{Facing, GameEvent, GameMode, GameState};
use crate::platform::{KEY_A, KEY_D, KEY_M, KEY_N, KEY_SPACE, KeyState};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Start in Menu, jump in Active, retry in Win
    pub action: bool,
    pub mute: bool,
    pub unmute: bool,
}

impl FrameInput {
    /// Sample the polled key table
    pub fn from_keys(keys: &KeyState) -> Self {
        Self {
            left: keys.is_pressed(KEY_A),
            right: keys.is_pressed(KEY_D),
            action: keys.is_pressed(KEY_SPACE),
            mute: keys.is_pressed(KEY_M),
            unmute: keys.is_pressed(KEY_N),
        }
    }
}

/// Apply input for one frame, then integrate vertical motion.
///
/// Mode branches run in sequence, so a Menu -> Active switch also runs the
/// Active branch in the same frame.
pub fn process_input(state: &mut GameState, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.mode == GameMode::Menu && input.action && state.level_index == 0 {
        state.mode = GameMode::Active;
        state.score = 0;
        state.advance_level(&mut events);
        events.push(GameEvent::RunStarted);
        log::info!("Run started on level {}", state.level_index);
    }

    if state.mode == GameMode::Active {
        let step = state.settings.move_speed * dt;
        let max_x = state.settings.view_width - state.actor.size().x;
        let actor = &mut state.actor;

        if input.left {
            actor.facing = Facing::Left;
            actor.pos.x = (actor.pos.x - step).max(0.0);
        }
        if input.right {
            actor.facing = Facing::Right;
            actor.pos.x = (actor.pos.x + step).min(max_x);
        }
        if input.action && state.on_ground {
            actor.vel.y = state.settings.jump_impulse;
            state.on_ground = false;
        }

        if input.mute {
            events.push(GameEvent::MuteRequested);
        }
        if input.unmute {
            events.push(GameEvent::UnmuteRequested);
        }
    }

    if state.mode == GameMode::Win && input.action {
        state.return_to_menu(&mut events);
        log::info!("Back to menu");
    }

    if state.mode == GameMode::Active || state.settings.integrate_outside_active {
        state.actor.vel.y += state.gravity / 4.0;
        state.actor.pos.y += state.actor.vel.y;
    }

    events
}

/// Resolve collisions and check the level boundaries.
pub fn update(state: &mut GameState, _dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.refresh_gravity();

    if state.mode != GameMode::Active {
        return events;
    }

    let level = state.level_index;
    let report = resolve_actor_collisions(&mut state.actor, &mut state.levels[level].bricks);
    if report.hits > 0 {
        log::trace!("{} brick contacts on level {}", report.hits, level);
    }
    if report.landed {
        state.on_ground = true;
    }
    for brick in report.destroyed {
        state.score += 1;
        log::debug!("Brick {} destroyed on level {}, score {}", brick, level, state.score);
        events.push(GameEvent::BrickDestroyed { level, brick });
    }

    let y = state.actor.pos.y;
    if y >= state.settings.view_height {
        log::info!("Fell off level {}", state.level_index);
        state.retreat_level(&mut events);
        // A fall onto level 0 already parked the actor at the menu spawn
        if state.mode == GameMode::Active {
            state.reset_actor();
        }
    } else if y <= state.settings.top_exit_y {
        if state.is_final_level() {
            state.mode = GameMode::Win;
            events.push(GameEvent::Won { score: state.score });
            log::info!("Won with {} points", state.score);
        } else {
            log::info!("Climbed out of level {}", state.level_index);
            state.advance_level(&mut events);
            state.reset_actor();
        }
    }

    events
}
