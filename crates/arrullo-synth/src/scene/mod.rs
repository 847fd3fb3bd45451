//! Ambience scenes.
//!
//! A scene is a struct of core primitives wired together per sample:
//! a colored-noise bed through a filter and gain, plus whatever
//! transient voices the recipe calls for. Scenes implement
//! [`arrullo_core::Source`] and own every oscillator, filter, envelope,
//! and timer they use, so dropping a scene tears the whole thing down.

mod cafe;
mod fireplace;
mod forest;
mod lofi;
mod rain;

pub use cafe::CozyCafe;
pub use fireplace::Fireplace;
pub use forest::Forest;
pub use lofi::Lofi;
pub use rain::Rain;

/// Identity of a synthesizable ambience.
///
/// This is deliberately narrower than the session-level track catalog:
/// sentinel tracks (silence, external) have no scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Pink-noise wind bed with randomly timed bird chirps.
    Forest,
    /// High-passed white noise with a slow intensity swell.
    Rain,
    /// Brown-noise body with randomly timed crackle pops.
    Fireplace,
    /// Band-passed pink noise approximating indistinct chatter.
    CozyCafe,
    /// Sparse kick-and-melody loop.
    Lofi,
}

impl SceneKind {
    /// All synthesizable scenes.
    pub const ALL: [SceneKind; 5] = [
        SceneKind::Forest,
        SceneKind::Rain,
        SceneKind::Fireplace,
        SceneKind::CozyCafe,
        SceneKind::Lofi,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SceneKind::Forest => "forest",
            SceneKind::Rain => "rain",
            SceneKind::Fireplace => "fireplace",
            SceneKind::CozyCafe => "cozy-cafe",
            SceneKind::Lofi => "lofi",
        }
    }
}

impl core::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
