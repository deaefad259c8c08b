//! `mp3info -p` output: artist, title, album and length in seconds, one per
//! line, always in that order. Empty lines are legitimate empty values.

use std::ffi::OsString;
use std::path::Path;

use super::{ParseProblem, ParsedInfo, parse_count};

const TEMPLATE: &str = "%a\n%t\n%l\n%S\n";

pub(super) fn args(path: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-p"),
        OsString::from(TEMPLATE),
        path.as_os_str().to_owned(),
    ]
}

pub fn parse(output: &str) -> ParsedInfo {
    let mut info = ParsedInfo::default();
    let mut lines = output.lines().map(str::trim);

    let mut next = |field: &'static str, problems: &mut Vec<ParseProblem>| match lines.next() {
        Some(value) => Some(value.to_string()),
        None => {
            problems.push(ParseProblem::MissingField(field));
            None
        }
    };

    info.artist = next("artist", &mut info.problems).unwrap_or_default();
    info.title = next("title", &mut info.problems).unwrap_or_default();
    info.album = next("album", &mut info.problems).unwrap_or_default();

    match next("duration", &mut info.problems) {
        Some(secs) if secs.is_empty() => {
            info.problems.push(ParseProblem::MissingField("duration"));
        }
        Some(secs) => info.duration_secs = parse_count(&secs, "duration", &mut info.problems),
        None => {}
    }
    info
}
