use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::Args;
use crate::config::{self, Settings};
use crate::error::Result;
use crate::inspect::{ExtractOptions, Extractor, SystemRunner, ToolRunner};
use crate::library::{self, AudioFormat};
use crate::playlist::PlaylistWriter;
use crate::summary::PlaylistSummary;

mod check;
mod logging;
mod output;

#[cfg(test)]
mod tests;

pub fn run(args: Args) -> Result<()> {
    logging::init(args.quiet);

    if args.version {
        println!(
            "{} version: {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        return Ok(());
    }

    let settings = apply_args(config::load_settings(), &args);
    let quiet = settings.output.quiet;

    if args.check {
        check::report(&SystemRunner, &settings.tools, quiet, &mut io::stdout().lock())?;
        return Ok(());
    }

    let target = output::resolve_target(&args, quiet)?;

    let mut files = library::discover(&args.paths, &settings.library, quiet);
    if files.is_empty() {
        if !quiet {
            info!("no audio files found (dir?)");
        }
        return Ok(());
    }
    if args.random {
        library::shuffle(&mut files, &mut rand::rng());
    }

    let backup_existing = settings.output.backup_existing;
    match target {
        Some(path) => write_playlist(SystemRunner, &settings, &files, args.random, || {
            Ok(BufWriter::new(output::create(&path, backup_existing)?))
        })?,
        None => write_playlist(SystemRunner, &settings, &files, args.random, || {
            Ok(io::stdout().lock())
        })?,
    };
    Ok(())
}

/// Command-line flags win over configured values.
fn apply_args(mut settings: Settings, args: &Args) -> Settings {
    if args.quiet {
        settings.output.quiet = true;
    }
    if args.recursive {
        settings.library.recursive = true;
    }
    settings
}

/// Locate the inspectors for `files`, then open the sink and stream the
/// playlist into it.
///
/// `open` is only called once every needed inspector has been found, so a
/// missing one never leaves a truncated or half-written playlist behind.
pub fn write_playlist<R, W, F>(
    runner: R,
    settings: &Settings,
    files: &[PathBuf],
    shuffled: bool,
    open: F,
) -> Result<PlaylistSummary>
where
    R: ToolRunner,
    W: Write,
    F: FnOnce() -> Result<W>,
{
    let options = ExtractOptions {
        quiet: settings.output.quiet,
        title_from_filename: settings.library.title_from_filename,
    };
    let formats = files.iter().filter_map(|p| AudioFormat::from_path(p));
    let extractor = Extractor::prepare(runner, &settings.tools, formats, options)?;

    generate(&extractor, files, shuffled, open()?)
}

/// Extract every file in order and stream the playlist into `out`.
///
/// Files with an unrecognized extension are skipped silently; files that
/// vanished since discovery are skipped with a warning.
pub fn generate<R: ToolRunner, W: Write>(
    extractor: &Extractor<R>,
    files: &[PathBuf],
    shuffled: bool,
    out: W,
) -> Result<PlaylistSummary> {
    let mut summary = PlaylistSummary::new();
    let mut writer = PlaylistWriter::new(out);

    writer.header(shuffled)?;
    for path in files {
        let Some(format) = AudioFormat::from_path(path) else {
            continue;
        };
        if let Some(record) = extractor.extract(path, format)? {
            summary.observe(&record);
            writer.track(&record)?;
        }
    }
    writer.footer(&summary)?;

    debug!(
        "wrote {} of {} tracks, total {}s",
        writer.tracks_written(),
        files.len(),
        summary.total_secs()
    );
    Ok(summary)
}
