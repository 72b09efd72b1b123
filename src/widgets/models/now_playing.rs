//! "Currently playing" payload.
//!
//! The wire format is a flat object whose track fields are only meaningful
//! while `isPlaying` is true. Decoding folds it into an enum so the track
//! cannot be reached when nothing is playing.

use serde::Deserialize;

/// Track details of the song being played
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_image_url: String,
    pub song_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireNowPlaying")]
pub enum NowPlayingPayload {
    NotPlaying,
    Playing(Track),
}

impl NowPlayingPayload {
    pub fn is_playing(&self) -> bool {
        matches!(self, NowPlayingPayload::Playing(_))
    }

    /// The current track, if one is playing
    pub fn track(&self) -> Option<&Track> {
        match self {
            NowPlayingPayload::Playing(track) => Some(track),
            NowPlayingPayload::NotPlaying => None,
        }
    }
}

impl Default for NowPlayingPayload {
    fn default() -> Self {
        NowPlayingPayload::NotPlaying
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireNowPlaying {
    is_playing: bool,
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    album_image_url: Option<String>,
    song_url: Option<String>,
}

impl From<WireNowPlaying> for NowPlayingPayload {
    fn from(wire: WireNowPlaying) -> Self {
        if !wire.is_playing {
            return NowPlayingPayload::NotPlaying;
        }
        NowPlayingPayload::Playing(Track {
            title: wire.title.unwrap_or_default(),
            artist: wire.artist.unwrap_or_default(),
            album: wire.album.unwrap_or_default(),
            album_image_url: wire.album_image_url.unwrap_or_default(),
            song_url: wire.song_url.unwrap_or_default(),
        })
    }
}
