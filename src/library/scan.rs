use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::AudioFormat;

fn is_audio_file(path: &Path) -> bool {
    AudioFormat::from_path(path).is_some()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn scan_dir(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file() && is_audio_file(path) {
            files.push(path.to_path_buf());
        }
    }

    debug!("found {} audio files under {}", files.len(), dir.display());
    files
}

/// Scan `root` and report paths relative to it (`a.flac`, not `./a.flac`).
pub(crate) fn scan_relative(root: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    scan_dir(root, settings)
        .into_iter()
        .map(|p| p.strip_prefix(root).map(Path::to_path_buf).unwrap_or(p))
        .collect()
}

/// Resolve input paths into the ordered list of audio files to process.
///
/// With no inputs the current directory is scanned and paths are reported
/// relative to it. Directories contribute their audio files sorted by name;
/// explicit files are kept in argument order when their extension is
/// recognized. Unrecognized files are dropped without a message.
pub fn discover(inputs: &[PathBuf], settings: &LibrarySettings, quiet: bool) -> Vec<PathBuf> {
    if inputs.is_empty() {
        return scan_relative(Path::new("."), settings);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(scan_dir(input, settings));
        } else if input.is_file() {
            if is_audio_file(input) {
                files.push(input.clone());
            }
        } else if !quiet {
            warn!("{}: no such file or directory", input.display());
        }
    }
    files
}

/// Shuffle the file list in place (uniform random permutation).
pub fn shuffle<R: Rng + ?Sized>(files: &mut [PathBuf], rng: &mut R) {
    files.shuffle(rng);
}
