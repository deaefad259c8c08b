//! `mp4info` output: a track table whose audio row carries `N.NNN secs`,
//! followed by ` Label: value` tag lines in no particular order.

use std::ffi::OsString;
use std::path::Path;

use super::{ParseProblem, ParsedInfo, parse_secs};

pub(super) fn args(path: &Path) -> Vec<OsString> {
    vec![path.as_os_str().to_owned()]
}

pub fn parse(output: &str) -> ParsedInfo {
    let mut info = ParsedInfo::default();
    let mut artist = None;
    let mut album_artist = None;
    let mut title = None;
    let mut album = None;
    let mut secs: Option<&str> = None;

    for line in output.lines().map(str::trim) {
        if secs.is_none() {
            if let Some(raw) = track_secs(line) {
                secs = Some(raw);
                continue;
            }
        }
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let slot = match label.trim() {
            "Artist" => &mut artist,
            "Album Artist" => &mut album_artist,
            "Name" | "Title" => &mut title,
            "Album" => &mut album,
            _ => continue,
        };
        slot.get_or_insert_with(|| value.trim().to_string());
    }

    info.artist = info.take_tag(artist.or(album_artist), "artist");
    info.title = info.take_tag(title, "title");
    info.album = info.take_tag(album, "album");

    match secs {
        Some(raw) => info.duration_secs = parse_secs(raw, "duration", &mut info.problems),
        None => info.problems.push(ParseProblem::MissingField("duration")),
    }
    info
}

/// The `N.NNN` of a track row such as
/// `1	audio	alac, 102.000 secs, 875 kbps, 44100 Hz`.
///
/// Only a comma-separated part made of exactly a number and `secs` counts,
/// so a `<file>:` line whose name mentions "secs" is not mistaken for it.
fn track_secs(line: &str) -> Option<&str> {
    line.split(',').find_map(|part| {
        let mut words = part.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(num), Some("secs"), None) if num.parse::<f64>().is_ok() => Some(num),
            _ => None,
        }
    })
}
