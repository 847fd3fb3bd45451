//! Integration tests for the arrullo binary.

use std::process::Command;

/// Helper to get the path to the `arrullo` binary built by cargo.
fn arrullo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arrullo"))
}

#[test]
fn tracks_lists_the_whole_catalog() {
    let output = arrullo_bin()
        .arg("tracks")
        .output()
        .expect("failed to run arrullo tracks");

    assert!(output.status.success(), "arrullo tracks failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available Tracks"));

    for track in [
        "forest",
        "rain",
        "fireplace",
        "cozy-cafe",
        "lofi",
        "silence",
        "external",
    ] {
        assert!(stdout.contains(track), "listing should contain '{track}'");
    }
}

#[test]
fn render_writes_a_playable_wav() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("forest.wav");

    let output = arrullo_bin()
        .args(["render", "forest"])
        .arg(&out)
        .args(["--duration", "0.25", "--sample-rate", "22050"])
        .output()
        .expect("failed to run arrullo render");

    assert!(
        output.status.success(),
        "render failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let reader = hound::WavReader::open(&out).expect("output should be a WAV file");
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.channels, 1);
    assert_eq!(reader.len(), (0.25 * 22050.0) as u32);
}

#[test]
fn render_rejects_sentinel_tracks() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("silence.wav");

    let output = arrullo_bin()
        .args(["render", "silence"])
        .arg(&out)
        .output()
        .expect("failed to run arrullo render");

    assert!(!output.status.success());
    assert!(!out.exists(), "no file should be written");
}

#[test]
fn unknown_track_is_a_usage_error() {
    let output = arrullo_bin()
        .args(["play", "vaporwave", "--duration", "0"])
        .output()
        .expect("failed to run arrullo play");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vaporwave"), "got: {stderr}");
}
