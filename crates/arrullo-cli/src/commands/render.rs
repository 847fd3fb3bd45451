//! Offline ambience rendering command.

use std::path::PathBuf;

use arrullo_core::clamp_unit;
use arrullo_io::write_wav;
use arrullo_session::TrackId;
use arrullo_synth::build_graph;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

const BLOCK_SIZE: usize = 4096;

#[derive(Args)]
pub struct RenderArgs {
    /// Track to render
    #[arg(value_name = "TRACK")]
    track: TrackId,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Duration in seconds
    #[arg(long, default_value = "30.0")]
    duration: f32,

    /// Sample rate
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Gain applied to the render (0-1)
    #[arg(long, default_value = "0.8")]
    volume: f32,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let Some(scene) = args.track.scene() else {
        anyhow::bail!("'{}' has no synthesized audio to render", args.track);
    };

    let sample_rate = args.sample_rate as f32;
    let mut graph = build_graph(scene, sample_rate)?;
    let volume = clamp_unit(args.volume);
    let total = (args.duration.max(0.0) * sample_rate) as usize;

    println!(
        "Rendering {:.1}s of '{}' at {} Hz...",
        args.duration, args.track, args.sample_rate
    );

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut samples = vec![0.0f32; total];
    for (i, chunk) in samples.chunks_mut(BLOCK_SIZE).enumerate() {
        graph.fill(chunk);
        for sample in chunk.iter_mut() {
            *sample *= volume;
        }
        pb.set_position(((i + 1) * BLOCK_SIZE).min(total) as u64);
    }
    pb.finish_with_message("done");

    write_wav(&args.output, &samples, args.sample_rate)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
