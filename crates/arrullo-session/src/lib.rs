//! Playback session layer for arrullo.
//!
//! This crate sits between the synthesis engine and the audio output:
//!
//! - [`catalog`] - the static set of tracks and their display metadata
//! - [`state`] - the [`PlaybackState`] snapshot
//! - [`policy`] - per-request selection: streamed asset, synthesized
//!   graph, or silence
//! - [`asset`] - the [`AssetSource`] seam and looped asset playback
//! - [`manager`] - the [`SessionManager`], sole owner of the playback
//!   lifecycle
//!
//! The design goal, inherited from the product this serves: background
//! ambience is a nonessential enhancement, so nothing in this crate
//! surfaces an audio failure to the caller. Every failure mode ends in
//! silent playback and a log line.

pub mod asset;
pub mod catalog;
pub mod manager;
pub mod policy;
pub mod state;

pub use asset::{AssetError, AssetSource, LoadedAsset, LoopingSampler, WavAssetSource};
pub use catalog::{Catalog, TrackDescriptor, TrackId, UnknownTrack};
pub use manager::SessionManager;
pub use policy::{ASSET_LOAD_TIMEOUT, Route};
pub use state::PlaybackState;
