use serde::Deserialize;

use crate::library::AudioFormat;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playlist/config.toml` or `~/.config/playlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tools: ToolSettings,
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

/// Inspector program names, looked up on the search path.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub flac: String,
    pub mp3: String,
    pub mp4: String,
    pub ogg: String,
}

impl ToolSettings {
    pub fn program_for(&self, format: AudioFormat) -> &str {
        match format {
            AudioFormat::Flac => &self.flac,
            AudioFormat::Mp3 => &self.mp3,
            AudioFormat::M4a => &self.mp4,
            AudioFormat::Ogg => &self.ogg,
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            flac: AudioFormat::Flac.default_program().to_string(),
            mp3: AudioFormat::Mp3.default_program().to_string(),
            mp4: AudioFormat::M4a.default_program().to_string(),
            ogg: AudioFormat::Ogg.default_program().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories. `--recursive` forces this on.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// Use the file stem as title when the inspector reports none.
    pub title_from_filename: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: true,
            recursive: false,
            max_depth: None,
            title_from_filename: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Suppress warnings and info messages. `--quiet` forces this on.
    pub quiet: bool,
    /// Rename an existing playlist file to `<file>.old` before writing.
    pub backup_existing: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            quiet: false,
            backup_existing: true,
        }
    }
}
