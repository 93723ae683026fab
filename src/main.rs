//! Brick Hop headless driver
//!
//! Runs the frame loop without a window: a short scripted run that starts
//! the game, walks and jumps, and logs every transition.
//!
//! Usage: `brick-hop [settings.json] [frames]`

use brick_hop::Game;
use brick_hop::assets::FsLevelSource;
use brick_hop::audio::LogAudio;
use brick_hop::platform::{KEY_A, KEY_D, KEY_SPACE};
use brick_hop::renderer::DrawList;
use brick_hop::settings::Settings;

/// Host frame time
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 1200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Hop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut game = Game::init(settings, FsLevelSource::new("."), LogAudio)?;
    let mut draw_calls = 0usize;

    for frame in 0..frames {
        script_keys(&mut game, frame);

        game.process_input(FRAME_DT)?;
        game.update(FRAME_DT)?;

        let mut list = DrawList::default();
        game.render(&mut list);
        draw_calls += list.commands.len();
    }

    let state = game.state();
    log::info!(
        "Finished {} frames: mode {:?}, level {}, score {}, {} draw calls",
        frames,
        state.mode,
        state.level_index,
        state.score,
        draw_calls
    );
    Ok(())
}

/// Demo input: start, then zig-zag across the level while jumping
fn script_keys<S, A>(game: &mut Game<S, A>, frame: u32)
where
    S: brick_hop::assets::LevelSource,
    A: brick_hop::audio::AudioBackend,
{
    let phase = (frame / 90) % 4;
    if frame % 360 == 0 {
        game.release_keys();
    }
    game.set_key(KEY_SPACE, frame == 0 || frame % 45 == 10);
    game.set_key(KEY_D, phase == 1);
    game.set_key(KEY_A, phase == 3);
}
