//! `metaflac` output: the requested numbers as bare lines in flag order,
//! followed by `NAME=value` lines for each tag that is present.

use std::ffi::OsString;
use std::path::Path;

use super::{ParseProblem, ParsedInfo, parse_count};

const NUMBER_FIELDS: [&str; 3] = ["sample rate", "bits per sample", "total samples"];

pub(super) fn args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "--show-sample-rate",
        "--show-bps",
        "--show-total-samples",
        "--show-tag=ARTIST",
        "--show-tag=TITLE",
        "--show-tag=ALBUM",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(path.as_os_str().to_owned());
    args
}

pub fn parse(output: &str) -> ParsedInfo {
    let mut info = ParsedInfo::default();
    let mut artist = None;
    let mut title = None;
    let mut album = None;
    let mut numbers: Vec<&str> = Vec::new();

    for line in output.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line.split_once('=') {
            Some((key, value)) => {
                let slot = match key.to_ascii_lowercase().as_str() {
                    "artist" => &mut artist,
                    "title" => &mut title,
                    "album" => &mut album,
                    _ => continue,
                };
                slot.get_or_insert_with(|| value.trim().to_string());
            }
            None => numbers.push(line),
        }
    }

    info.artist = info.take_tag(artist, "artist");
    info.title = info.take_tag(title, "title");
    info.album = info.take_tag(album, "album");

    let mut values = [None; 3];
    for (i, field) in NUMBER_FIELDS.into_iter().enumerate() {
        values[i] = match numbers.get(i) {
            Some(raw) => parse_count(raw, field, &mut info.problems),
            None => {
                info.problems.push(ParseProblem::MissingField(field));
                None
            }
        };
    }

    if let [Some(rate), _, Some(total)] = values {
        info.duration_secs = samples_to_secs(total, rate);
        if info.duration_secs.is_none() {
            info.problems.push(ParseProblem::ZeroSampleRate);
        }
    }
    info
}

/// Round `total_samples / sample_rate` to the nearest second.
pub fn samples_to_secs(total_samples: u64, sample_rate: u64) -> Option<u64> {
    if sample_rate == 0 {
        return None;
    }
    Some((total_samples as f64 / sample_rate as f64).round() as u64)
}
