//! Metadata extraction through external inspector programs.
//!
//! Each format has a parser for its inspector's loosely structured text
//! output. Parsing never fails: fields that are absent or malformed are left
//! empty/unknown and reported as [`ParseProblem`]s, which the [`Extractor`]
//! logs as warnings before moving on to the next file.

pub mod flac;
pub mod mp3;
pub mod mp4;
pub mod ogg;
mod runner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ToolSettings;
use crate::error::{Error, Result};
use crate::library::{AudioFormat, TrackRecord};

pub use runner::{SystemRunner, ToolRunner};

/// A field an inspector should have reported but did not, or reported in a
/// form that could not be read.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseProblem {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("sample rate is zero")]
    ZeroSampleRate,
}

/// Fields parsed from one inspector run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInfo {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub duration_secs: Option<u64>,
    pub problems: Vec<ParseProblem>,
}

impl ParsedInfo {
    fn take_tag(&mut self, value: Option<String>, field: &'static str) -> String {
        value.unwrap_or_else(|| {
            self.problems.push(ParseProblem::MissingField(field));
            String::new()
        })
    }

    fn into_record(self, path: &Path) -> TrackRecord {
        TrackRecord {
            artist: self.artist,
            title: self.title,
            album: self.album,
            duration_secs: self.duration_secs,
            ..TrackRecord::new(path)
        }
    }
}

fn parse_count(raw: &str, field: &'static str, problems: &mut Vec<ParseProblem>) -> Option<u64> {
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            problems.push(ParseProblem::InvalidNumber {
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

/// Parse fractional seconds and round to the nearest whole second.
fn parse_secs(raw: &str, field: &'static str, problems: &mut Vec<ParseProblem>) -> Option<u64> {
    match raw.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Some(secs.round() as u64),
        _ => {
            problems.push(ParseProblem::InvalidNumber {
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

/// Parse inspector output for `format`.
pub fn parse(format: AudioFormat, output: &str) -> ParsedInfo {
    match format {
        AudioFormat::Flac => flac::parse(output),
        AudioFormat::Mp3 => mp3::parse(output),
        AudioFormat::M4a => mp4::parse(output),
        AudioFormat::Ogg => ogg::parse(output),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Suppress per-file warnings.
    pub quiet: bool,
    /// Fall back to the file stem when no title was reported.
    pub title_from_filename: bool,
}

/// Turns audio files into [`TrackRecord`]s by running the matching inspector.
pub struct Extractor<R: ToolRunner> {
    runner: R,
    programs: BTreeMap<AudioFormat, PathBuf>,
    options: ExtractOptions,
}

impl<R: ToolRunner> Extractor<R> {
    /// Locate the inspector for every format in `formats`.
    ///
    /// Fails with [`Error::ToolMissing`] for the first one that is not
    /// installed, so nothing is written for a run that cannot complete.
    pub fn prepare(
        runner: R,
        tools: &ToolSettings,
        formats: impl IntoIterator<Item = AudioFormat>,
        options: ExtractOptions,
    ) -> Result<Self> {
        let mut programs = BTreeMap::new();
        for format in formats {
            if programs.contains_key(&format) {
                continue;
            }
            let program = tools.program_for(format);
            let resolved = runner.locate(program).ok_or_else(|| Error::ToolMissing {
                program: program.to_string(),
            })?;
            debug!("{format}: using {}", resolved.display());
            programs.insert(format, resolved);
        }
        Ok(Self {
            runner,
            programs,
            options,
        })
    }

    /// Extract a record for `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist; the inspector is not
    /// run in that case. Problems with the inspector's output are logged
    /// and yield a best-effort record.
    pub fn extract(&self, path: &Path, format: AudioFormat) -> Result<Option<TrackRecord>> {
        let program = self
            .programs
            .get(&format)
            .ok_or_else(|| Error::ToolMissing {
                program: format.default_program().to_string(),
            })?;

        if !path.exists() {
            self.warn(path, "file does not exist");
            return Ok(None);
        }

        let args = match format {
            AudioFormat::Flac => flac::args(path),
            AudioFormat::Mp3 => mp3::args(path),
            AudioFormat::M4a => mp4::args(path),
            AudioFormat::Ogg => ogg::args(path),
        };

        let info = match self.runner.run(program, &args) {
            Ok(output) => parse(format, &output),
            Err(e) => {
                self.warn(path, &format!("{}: {e}", program.display()));
                ParsedInfo::default()
            }
        };
        for problem in &info.problems {
            self.warn(path, &problem.to_string());
        }

        let mut record = info.into_record(path);
        if record.title.is_empty() && self.options.title_from_filename {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                record.title = stem.to_string();
            }
        }
        Ok(Some(record))
    }

    fn warn(&self, path: &Path, message: &str) {
        if !self.options.quiet {
            warn!("{}: {message}", path.display());
        }
    }
}
