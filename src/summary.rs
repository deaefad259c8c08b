//! Playlist-level summary: album/artist consensus and total duration.

use crate::library::TrackRecord;

pub const ALBUM_CONFLICT: &str = "compilation";
pub const ARTIST_CONFLICT: &str = "Various Artists";

/// A single name that collapses to a sentinel once two different values
/// have been observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Consensus {
    Empty,
    Single(String),
    Collapsed,
}

impl Consensus {
    /// First non-empty value wins; a later different non-empty value
    /// collapses permanently. Empty values are ignored.
    pub fn observe(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        match self {
            Consensus::Empty => *self = Consensus::Single(name.to_string()),
            Consensus::Single(current) if current != name => *self = Consensus::Collapsed,
            Consensus::Single(_) | Consensus::Collapsed => {}
        }
    }

    pub fn resolve<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Consensus::Empty => "",
            Consensus::Single(name) => name,
            Consensus::Collapsed => sentinel,
        }
    }
}

impl Default for Consensus {
    fn default() -> Self {
        Self::Empty
    }
}

/// Running summary for one playlist-generation run.
#[derive(Debug, Clone, Default)]
pub struct PlaylistSummary {
    album: Consensus,
    artist: Consensus,
    total_secs: u64,
}

impl PlaylistSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_album(&mut self, name: &str) {
        self.album.observe(name);
    }

    pub fn observe_artist(&mut self, name: &str) {
        self.artist.observe(name);
    }

    pub fn add_duration(&mut self, secs: u64) {
        self.total_secs = self.total_secs.saturating_add(secs);
    }

    /// Fold one track into the summary. Call exactly once per record.
    pub fn observe(&mut self, record: &TrackRecord) {
        self.observe_artist(&record.artist);
        self.observe_album(&record.album);
        self.add_duration(record.seconds());
    }

    pub fn album(&self) -> &str {
        self.album.resolve(ALBUM_CONFLICT)
    }

    pub fn artist(&self) -> &str {
        self.artist.resolve(ARTIST_CONFLICT)
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }
}
