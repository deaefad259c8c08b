//! `ogginfo` output: `key=value` comment lines and a
//! `Playback length: 4m:02.306s` line per logical stream.

use std::ffi::OsString;
use std::path::Path;

use super::{ParseProblem, ParsedInfo};

const PLAYBACK_LENGTH: &str = "Playback length:";

pub(super) fn args(path: &Path) -> Vec<OsString> {
    vec![path.as_os_str().to_owned()]
}

pub fn parse(output: &str) -> ParsedInfo {
    let mut info = ParsedInfo::default();
    let mut artist = None;
    let mut title = None;
    let mut album = None;
    let mut length: Option<&str> = None;

    for line in output.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix(PLAYBACK_LENGTH) {
            length.get_or_insert(rest.trim());
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let slot = match key.to_ascii_lowercase().as_str() {
            "artist" => &mut artist,
            "title" => &mut title,
            "album" => &mut album,
            _ => continue,
        };
        slot.get_or_insert_with(|| value.trim().to_string());
    }

    info.artist = info.take_tag(artist, "artist");
    info.title = info.take_tag(title, "title");
    info.album = info.take_tag(album, "album");

    match length {
        Some(raw) => match playback_secs(raw) {
            Some(secs) => info.duration_secs = Some(secs.round() as u64),
            None => info.problems.push(ParseProblem::InvalidNumber {
                field: "playback length",
                value: raw.to_string(),
            }),
        },
        None => info.problems.push(ParseProblem::MissingField("duration")),
    }
    info
}

/// Parse `4m:02.306s` (or `1h:02m:03.5s`) into seconds.
pub fn playback_secs(raw: &str) -> Option<f64> {
    let mut total = 0.0;
    for part in raw.split(':').map(str::trim) {
        let unit = part.chars().last()?;
        let scale = match unit {
            'h' => 3600.0,
            'm' => 60.0,
            's' => 1.0,
            _ => return None,
        };
        let value: f64 = part[..part.len() - unit.len_utf8()].parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        total += value * scale;
    }
    Some(total)
}
