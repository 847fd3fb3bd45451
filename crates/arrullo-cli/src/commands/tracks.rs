//! Track catalog listing command.

use arrullo_session::Catalog;
use clap::Args;

#[derive(Args)]
pub struct TracksArgs {}

pub fn run(_args: TracksArgs) -> anyhow::Result<()> {
    let catalog = Catalog::default();

    println!("Available Tracks");
    println!("================\n");

    for track in catalog.iter() {
        let synth = if track.id.scene().is_some() {
            ""
        } else {
            " (no audio)"
        };
        println!(
            "  {} {:<10} {}{}",
            track.emoji, track.id, track.description, synth
        );
    }

    println!();
    println!("Play one with: arrullo play <track>");

    Ok(())
}
