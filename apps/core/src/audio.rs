//! Audio session bookkeeping.
//!
//! An explicit session owned by the UI shell, replacing a page-wide
//! "kill all audio" singleton: the shell calls `stop_all` on route change
//! and component teardown. Playback itself is the presentation layer's job;
//! this only tracks which playlist is active.

use serde::Serialize;
use tracing::info;

/// A curated mood playlist.
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    pub id: u32,
    pub name: &'static str,
    pub mood: &'static str,
    pub description: &'static str,
}

/// The built-in emotion-based playlists.
pub const PLAYLISTS: [Playlist; 5] = [
    Playlist {
        id: 1,
        name: "Calm & Peaceful",
        mood: "anxious",
        description: "Soothing melodies for anxiety relief",
    },
    Playlist {
        id: 2,
        name: "Energy Boost",
        mood: "tired",
        description: "Uplifting songs to energize you",
    },
    Playlist {
        id: 3,
        name: "Focus Flow",
        mood: "distracted",
        description: "Instrumental music for concentration",
    },
    Playlist {
        id: 4,
        name: "Happiness & Joy",
        mood: "sad",
        description: "Cheerful tunes to lift your spirits",
    },
    Playlist {
        id: 5,
        name: "Sleep & Rest",
        mood: "restless",
        description: "Gentle sounds for better sleep",
    },
];

/// Tracks the active playlist for one shell instance. No global state; each
/// view owns its session and tears it down explicitly.
#[derive(Debug, Default)]
pub struct AudioSession {
    current: Option<u32>,
    playing: bool,
}

impl AudioSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a playlist: playing it again pauses it, anything else switches
    /// to it and starts playback.
    pub fn play(&mut self, playlist_id: u32) {
        if self.current == Some(playlist_id) && self.playing {
            self.playing = false;
            info!(playlist_id, "Playback paused");
        } else {
            self.current = Some(playlist_id);
            self.playing = true;
            info!(playlist_id, "Playback started");
        }
    }

    /// Stop playback entirely. Called on navigation and teardown.
    pub fn stop_all(&mut self) {
        if self.playing || self.current.is_some() {
            info!("All audio stopped");
        }
        self.playing = false;
        self.current = None;
    }

    /// The playlist currently playing, if any.
    pub fn now_playing(&self) -> Option<&'static Playlist> {
        if !self.playing {
            return None;
        }
        self.current
            .and_then(|id| PLAYLISTS.iter().find(|p| p.id == id))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        self.stop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_toggle_pause() {
        let mut session = AudioSession::new();

        session.play(1);
        assert!(session.is_playing());
        assert_eq!(session.now_playing().unwrap().name, "Calm & Peaceful");

        // Same playlist toggles to paused
        session.play(1);
        assert!(!session.is_playing());
        assert!(session.now_playing().is_none());

        // A different playlist starts fresh
        session.play(4);
        assert_eq!(session.now_playing().unwrap().id, 4);
    }

    #[test]
    fn test_stop_all_clears_everything() {
        let mut session = AudioSession::new();
        session.play(2);

        session.stop_all();
        assert!(!session.is_playing());
        assert!(session.now_playing().is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = AudioSession::new();
        let mut b = AudioSession::new();

        a.play(1);
        b.play(5);
        a.stop_all();

        assert!(a.now_playing().is_none());
        assert_eq!(b.now_playing().unwrap().id, 5);
    }
}
