use std::fmt;
use std::path::{Path, PathBuf};

/// The four formats a playlist can be built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AudioFormat {
    Flac,
    Mp3,
    M4a,
    Ogg,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 4] = [Self::Flac, Self::Mp3, Self::M4a, Self::Ogg];

    /// Resolve a format from the file extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "flac" => Some(Self::Flac),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "ogg" => Some(Self::Ogg),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
        }
    }

    /// Name of the inspector program that reports metadata for this format.
    pub fn default_program(self) -> &'static str {
        match self {
            Self::Flac => "metaflac",
            Self::Mp3 => "mp3info",
            Self::M4a => "mp4info",
            Self::Ogg => "ogginfo",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Normalized metadata for one audio file.
///
/// Empty strings mean "unknown". A `None` duration is written as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackRecord {
    pub path: PathBuf,
    pub artist: String,
    pub title: String,
    pub album: String,
    pub duration_secs: Option<u64>,
}

impl TrackRecord {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Duration in whole seconds with unknown treated as zero.
    pub fn seconds(&self) -> u64 {
        self.duration_secs.unwrap_or(0)
    }
}
