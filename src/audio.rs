//! Music commands for the host audio engine
//!
//! The game only issues fire-and-forget commands; playback lives in the host.

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Title screen
    Menu,
    /// Played through levels 1..=last
    InGame,
}

impl MusicTrack {
    /// Asset path of the track
    pub fn path(&self) -> &'static str {
        match self {
            MusicTrack::Menu => "audio/menuTheme.ogg",
            MusicTrack::InGame => "audio/inGame.ogg",
        }
    }
}

/// A single command sent to the audio engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    PlayLooped(MusicTrack),
    SetVolume(f32),
    StopAll,
    SetAllPaused(bool),
}

/// Host audio engine
pub trait AudioBackend {
    fn execute(&mut self, command: AudioCommand);

    fn play_looped(&mut self, track: MusicTrack) {
        self.execute(AudioCommand::PlayLooped(track));
    }

    fn set_volume(&mut self, volume: f32) {
        self.execute(AudioCommand::SetVolume(volume.clamp(0.0, 1.0)));
    }

    fn stop_all(&mut self) {
        self.execute(AudioCommand::StopAll);
    }

    fn set_all_paused(&mut self, paused: bool) {
        self.execute(AudioCommand::SetAllPaused(paused));
    }
}

/// Discards every command
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn execute(&mut self, _command: AudioCommand) {}
}

/// Logs every command (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn execute(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::PlayLooped(track) => log::info!("audio: loop {}", track.path()),
            other => log::info!("audio: {:?}", other),
        }
    }
}

/// Keeps every command in order
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub commands: Vec<AudioCommand>,
}

impl AudioBackend for RecordingAudio {
    fn execute(&mut self, command: AudioCommand) {
        self.commands.push(command);
    }
}
