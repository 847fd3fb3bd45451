//! The playback state snapshot.

use crate::catalog::TrackId;

/// Snapshot of the session's playback state.
///
/// There is exactly one live instance, owned by the session manager;
/// callers receive copies. `is_playing` can be true without any live
/// audio graph (sentinel tracks and failure fallbacks play silence).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    /// The selected track, or `None` when idle.
    pub current_track: Option<TrackId>,
    /// Whether a track is considered active.
    pub is_playing: bool,
    /// Whether a play request is mid-construction.
    pub is_loading: bool,
    /// Master volume in [0, 1].
    pub volume: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track: None,
            is_playing: false,
            is_loading: false,
            volume: 0.3,
        }
    }
}

impl PlaybackState {
    /// Whether the session is idle (no track selected).
    pub fn is_idle(&self) -> bool {
        self.current_track.is_none() && !self.is_playing && !self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = PlaybackState::default();
        assert!(state.is_idle());
        assert!((state.volume - 0.3).abs() < f32::EPSILON);
    }
}
