//! Live ambience playback command.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use arrullo_config::paths;
use arrullo_io::{BackendStreamConfig, CpalBackend};
use arrullo_session::{SessionManager, TrackId, WavAssetSource};
use clap::Args;

#[derive(Args)]
pub struct PlayArgs {
    /// Track to play (the last selection is restored when omitted)
    #[arg(value_name = "TRACK")]
    track: Option<TrackId>,

    /// Master volume (0-1)
    #[arg(short, long)]
    volume: Option<f32>,

    /// Stop automatically after this many seconds
    #[arg(short, long)]
    duration: Option<f32>,

    /// Output device (exact or partial name)
    #[arg(short, long)]
    output: Option<String>,
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    let mut session = SessionManager::new()
        .with_assets(Arc::new(WavAssetSource))
        .with_preferences_at(paths::preferences_path());

    let restored = session.restore_preferences();
    let track = args.track.unwrap_or(restored);
    if let Some(volume) = args.volume {
        session.set_volume(volume);
    }

    let backend = CpalBackend::new();
    let config = BackendStreamConfig {
        device_name: args.output.clone(),
        ..BackendStreamConfig::default()
    };
    session.attach_backend(&backend, &config);

    session.play_track(track);

    let name = session
        .catalog()
        .get(track)
        .map_or("unknown", |t| t.name);
    println!(
        "Playing {} at volume {:.2}. Press Ctrl+C to stop.",
        name,
        session.state().volume
    );

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        println!("\nStopping...");
        r.store(false, Ordering::SeqCst);
    })?;

    let started = Instant::now();
    while running.load(Ordering::Relaxed) {
        if let Some(limit) = args.duration
            && started.elapsed().as_secs_f32() >= limit
        {
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    session.stop();
    Ok(())
}
