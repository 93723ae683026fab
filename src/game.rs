//! Frame-driver facade
//!
//! The host calls `Game::init` once, then each frame mirrors its keyboard
//! with `set_key` and calls `process_input`, `update` and `render`.

use crate::assets::LevelSource;
use crate::audio::{AudioBackend, MusicTrack};
use crate::consts::LEVEL_COUNT;
use crate::error::{GameError, LevelError};
use crate::platform::KeyState;
use crate::renderer::{Renderer, render_scene};
use crate::settings::Settings;
use crate::sim::{self, FrameInput, GameEvent, GameState, Level};

/// A game session wired to its level source and audio engine
pub struct Game<S: LevelSource, A: AudioBackend> {
    state: GameState,
    keys: KeyState,
    source: S,
    audio: A,
}

impl<S: LevelSource, A: AudioBackend> Game<S, A> {
    /// Load every level and start the menu music
    pub fn init(settings: Settings, source: S, mut audio: A) -> Result<Self, GameError> {
        if settings.level_paths.len() != LEVEL_COUNT {
            return Err(GameError::LevelCount {
                expected: LEVEL_COUNT,
                actual: settings.level_paths.len(),
            });
        }

        let levels = (0..LEVEL_COUNT)
            .map(|index| load_level(&source, &settings, index))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Loaded {} levels", levels.len());

        audio.play_looped(MusicTrack::Menu);
        audio.set_volume(settings.menu_volume);

        Ok(Self {
            state: GameState::new(settings, levels),
            keys: KeyState::default(),
            source,
            audio,
        })
    }

    /// Mirror a key press or release from the host
    pub fn set_key(&mut self, code: usize, pressed: bool) {
        if !self.keys.set(code, pressed) {
            log::debug!("Ignoring out-of-range key code {}", code);
        }
    }

    pub fn process_input(&mut self, dt: f32) -> Result<(), GameError> {
        let input = FrameInput::from_keys(&self.keys);
        let events = sim::process_input(&mut self.state, &input, dt);
        self.apply_events(&events)
    }

    pub fn update(&mut self, dt: f32) -> Result<(), GameError> {
        let events = sim::update(&mut self.state, dt);
        self.apply_events(&events)
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        render_scene(&self.state, renderer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Drop every held key, e.g. when the host window loses focus
    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Rebuild a level from its descriptor, discarding destroyed flags
    pub fn reset_level(&mut self, index: usize) -> Result<(), GameError> {
        let count = self.state.levels.len();
        let level = load_level(&self.source, &self.state.settings, index)?;
        let slot = self
            .state
            .levels
            .get_mut(index)
            .ok_or(GameError::LevelIndex { index, count })?;
        *slot = level;
        Ok(())
    }

    fn apply_events(&mut self, events: &[GameEvent]) -> Result<(), GameError> {
        for event in events {
            match *event {
                GameEvent::LevelChanged { from, to } => {
                    log::info!("Level {} -> {}", from, to);
                    self.reset_level(to)?;
                }
                GameEvent::RunStarted => {
                    self.audio.stop_all();
                    self.audio.play_looped(MusicTrack::InGame);
                    self.audio.set_volume(self.state.settings.game_volume);
                }
                GameEvent::MuteRequested => self.audio.set_all_paused(true),
                GameEvent::UnmuteRequested => self.audio.set_all_paused(false),
                GameEvent::BrickDestroyed { .. }
                | GameEvent::Won { .. }
                | GameEvent::ReturnedToMenu => {}
            }
        }
        Ok(())
    }
}

fn load_level(source: &impl LevelSource, settings: &Settings, index: usize) -> Result<Level, GameError> {
    let path = settings.level_paths.get(index).ok_or(GameError::LevelIndex {
        index,
        count: settings.level_paths.len(),
    })?;
    let wrap = |source_err: LevelError| GameError::LevelLoad {
        index,
        path: path.clone(),
        source: source_err,
    };
    let text = source.read(path).map_err(wrap)?;
    Level::load(&text, settings.view_width, settings.view_height).map_err(wrap)
}
