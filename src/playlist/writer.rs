use std::io::Write;

use crate::error::{Error, Result};
use crate::library::TrackRecord;
use crate::summary::PlaylistSummary;

use super::time::hms;

const HEADER: &str = "#EXTM3U";
const SHUFFLED: &str = "# SHUFFLED LIST";
const END: &str = "#END";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Stage {
    Start,
    Tracks,
    Done,
}

/// Streams an extended M3U playlist into any writer.
///
/// Calls must follow `header`, `track`*, `footer`; anything else is an
/// [`Error::Unreachable`].
pub struct PlaylistWriter<W: Write> {
    out: W,
    stage: Stage,
    tracks: usize,
}

impl<W: Write> PlaylistWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stage: Stage::Start,
            tracks: 0,
        }
    }

    /// Write the `#EXTM3U` marker and a blank line, plus the shuffle note
    /// when the list order was randomized.
    pub fn header(&mut self, shuffled: bool) -> Result<()> {
        if self.stage != Stage::Start {
            return Err(Error::Unreachable("playlist header written twice"));
        }
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out)?;
        if shuffled {
            writeln!(self.out, "{SHUFFLED}")?;
        }
        self.stage = Stage::Tracks;
        Ok(())
    }

    pub fn track(&mut self, record: &TrackRecord) -> Result<()> {
        if self.stage != Stage::Tracks {
            return Err(Error::Unreachable("track written outside the track list"));
        }
        writeln!(
            self.out,
            "#EXTINF:{},{} - {}",
            record.seconds(),
            record.artist,
            record.title
        )?;
        // Raw bytes, so a non-UTF-8 name still points at the file.
        self.out.write_all(record.path.as_os_str().as_encoded_bytes())?;
        writeln!(self.out)?;
        self.tracks += 1;
        Ok(())
    }

    /// Write the summary comments and the `#END` marker, then flush.
    pub fn footer(&mut self, summary: &PlaylistSummary) -> Result<()> {
        if self.stage != Stage::Tracks {
            return Err(Error::Unreachable("footer written before header or twice"));
        }
        writeln!(self.out, "# Artist: {}", summary.artist())?;
        writeln!(self.out, "# Album: {}", summary.album())?;
        writeln!(self.out, "# Duration: {}", hms(summary.total_secs()))?;
        writeln!(
            self.out,
            "# created by {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.out, "{END}")?;
        self.out.flush()?;
        self.stage = Stage::Done;
        Ok(())
    }

    pub fn tracks_written(&self) -> usize {
        self.tracks
    }
}
