//! The static track catalog.
//!
//! Tracks are defined once at startup. Five of them are synthesizable
//! ambiences; `silence` and `external` are sentinels meaning "produce no
//! managed audio" (external covers the user playing their own music
//! elsewhere).

use arrullo_synth::SceneKind;
use std::str::FromStr;
use thiserror::Error;

/// Identity of a catalog track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackId {
    /// Forest wind with bird chirps.
    Forest,
    /// Steady rainfall.
    Rain,
    /// Crackling fireplace.
    Fireplace,
    /// Indistinct cafe chatter.
    CozyCafe,
    /// Sparse lofi beat.
    Lofi,
    /// Intentional quiet; no graph is ever built.
    Silence,
    /// User plays their own music elsewhere; no graph is ever built.
    External,
}

/// Returned when a track name does not match any catalog entry.
#[derive(Debug, Error)]
#[error("unknown track: {0}")]
pub struct UnknownTrack(pub String);

impl TrackId {
    /// Every track, in catalog order.
    pub const ALL: [TrackId; 7] = [
        TrackId::Forest,
        TrackId::Rain,
        TrackId::Fireplace,
        TrackId::CozyCafe,
        TrackId::Lofi,
        TrackId::Silence,
        TrackId::External,
    ];

    /// Stable lowercase name, used by the CLI and the preferences file.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackId::Forest => "forest",
            TrackId::Rain => "rain",
            TrackId::Fireplace => "fireplace",
            TrackId::CozyCafe => "cozy-cafe",
            TrackId::Lofi => "lofi",
            TrackId::Silence => "silence",
            TrackId::External => "external",
        }
    }

    /// The synthesizable scene for this track, if any.
    ///
    /// Sentinel tracks (`Silence`, `External`) return `None`.
    pub fn scene(self) -> Option<SceneKind> {
        match self {
            TrackId::Forest => Some(SceneKind::Forest),
            TrackId::Rain => Some(SceneKind::Rain),
            TrackId::Fireplace => Some(SceneKind::Fireplace),
            TrackId::CozyCafe => Some(SceneKind::CozyCafe),
            TrackId::Lofi => Some(SceneKind::Lofi),
            TrackId::Silence | TrackId::External => None,
        }
    }
}

impl FromStr for TrackId {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTrack(s.to_string()))
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata and asset configuration for a track.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackDescriptor {
    /// Track identity.
    pub id: TrackId,
    /// Human-readable name.
    pub name: &'static str,
    /// One-glyph decoration for listings.
    pub emoji: &'static str,
    /// Short description of the ambience.
    pub description: &'static str,
    /// Optional locator of a streamable asset (path or URL, opaque to
    /// the engine). When set, the selection policy prefers the asset
    /// over synthesis.
    pub asset: Option<String>,
}

/// The immutable set of tracks known at startup.
#[derive(Clone, Debug)]
pub struct Catalog {
    tracks: Vec<TrackDescriptor>,
}

impl Catalog {
    /// Look up a track by id.
    pub fn get(&self, id: TrackId) -> Option<&TrackDescriptor> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Iterate over every track in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackDescriptor> {
        self.tracks.iter()
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Attach an asset locator to a track, replacing any existing one.
    ///
    /// Unknown ids are ignored.
    pub fn set_asset(&mut self, id: TrackId, locator: impl Into<String>) {
        if let Some(track) = self.tracks.iter_mut().find(|t| t.id == id) {
            track.asset = Some(locator.into());
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            tracks: vec![
                TrackDescriptor {
                    id: TrackId::Forest,
                    name: "Forest",
                    emoji: "\u{1F332}",
                    description: "Gentle wind through trees with occasional birdsong",
                    asset: None,
                },
                TrackDescriptor {
                    id: TrackId::Rain,
                    name: "Rain",
                    emoji: "\u{1F327}",
                    description: "Steady rainfall that swells and eases",
                    asset: None,
                },
                TrackDescriptor {
                    id: TrackId::Fireplace,
                    name: "Fireplace",
                    emoji: "\u{1F525}",
                    description: "A warm fire with soft crackles and pops",
                    asset: None,
                },
                TrackDescriptor {
                    id: TrackId::CozyCafe,
                    name: "Cozy Cafe",
                    emoji: "\u{2615}",
                    description: "The low murmur of a busy cafe",
                    asset: None,
                },
                TrackDescriptor {
                    id: TrackId::Lofi,
                    name: "Lofi",
                    emoji: "\u{1F3B5}",
                    description: "A sparse, unhurried beat with a wandering melody",
                    asset: None,
                },
                TrackDescriptor {
                    id: TrackId::Silence,
                    name: "Silence",
                    emoji: "\u{1F92B}",
                    description: "Intentional quiet",
                    asset: None,
                },
                TrackDescriptor {
                    id: TrackId::External,
                    name: "My Own Music",
                    emoji: "\u{1F3A7}",
                    description: "Playing your own music elsewhere",
                    asset: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_track_id() {
        let catalog = Catalog::default();
        for id in TrackId::ALL {
            assert!(catalog.get(id).is_some(), "{id} missing from catalog");
        }
        assert_eq!(catalog.len(), TrackId::ALL.len());
    }

    #[test]
    fn names_round_trip() {
        for id in TrackId::ALL {
            assert_eq!(id.as_str().parse::<TrackId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "vaporwave".parse::<TrackId>().unwrap_err();
        assert!(err.to_string().contains("vaporwave"));
    }

    #[test]
    fn sentinels_have_no_scene() {
        assert!(TrackId::Silence.scene().is_none());
        assert!(TrackId::External.scene().is_none());
        assert!(TrackId::Forest.scene().is_some());
    }

    #[test]
    fn set_asset_attaches_locator() {
        let mut catalog = Catalog::default();
        catalog.set_asset(TrackId::Lofi, "/tmp/lofi.wav");
        assert_eq!(
            catalog.get(TrackId::Lofi).unwrap().asset.as_deref(),
            Some("/tmp/lofi.wav")
        );
        assert!(catalog.get(TrackId::Rain).unwrap().asset.is_none());
    }
}
