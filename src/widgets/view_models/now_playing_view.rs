//! Display shape of the now-playing card.

use super::transform::image_proxy_url;
use crate::widgets::models::NowPlayingPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NowPlayingView {
    /// "Not Playing" card
    Idle,
    /// "Now playing..." card
    Playing {
        title: String,
        artist: String,
        album: String,
        /// Album art source, always routed through the image proxy
        art_src: String,
        song_url: String,
    },
}

impl NowPlayingView {
    pub fn from_payload(payload: &NowPlayingPayload) -> Self {
        match payload.track() {
            None => NowPlayingView::Idle,
            Some(track) => NowPlayingView::Playing {
                title: track.title.clone(),
                artist: track.artist.clone(),
                album: track.album.clone(),
                art_src: image_proxy_url(&track.album_image_url),
                song_url: track.song_url.clone(),
            },
        }
    }
}
