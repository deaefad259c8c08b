use std::cell::Cell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::*;
use crate::error::Error;

/// Answers for every program it knows, keyed by program file name.
struct ScriptedRunner {
    outputs: Vec<(&'static str, &'static str)>,
}

impl ToolRunner for ScriptedRunner {
    fn run(&self, program: &Path, _args: &[OsString]) -> io::Result<String> {
        let name = program.file_name().and_then(|n| n.to_str()).unwrap_or("");
        self.outputs
            .iter()
            .find(|(p, _)| *p == name)
            .map(|(_, out)| out.to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.outputs
            .iter()
            .any(|(p, _)| *p == program)
            .then(|| Path::new("/usr/bin").join(program))
    }
}

fn runner() -> ScriptedRunner {
    ScriptedRunner {
        outputs: vec![
            ("metaflac", "44100\n16\n441000\nARTIST=A\nTITLE=T1\nALBUM=X\n"),
            ("mp3info", "B\nT2\nX\n20\n"),
        ],
    }
}

fn quiet_settings() -> Settings {
    let mut settings = Settings::default();
    settings.output.quiet = true;
    settings
}

fn fixture(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::write(&path, b"not real audio").unwrap();
            path
        })
        .collect()
}

fn render(files: &[PathBuf], shuffled: bool) -> (String, PlaylistSummary) {
    let mut out = Vec::new();
    let sink = &mut out;
    let summary =
        write_playlist(runner(), &quiet_settings(), files, shuffled, move || Ok(sink)).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn playlist_lists_tracks_in_order_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    let files = fixture(dir.path(), &["a.flac", "notes.txt", "b.mp3"]);

    let (out, summary) = render(&files, false);

    let extinf: Vec<&str> = out.lines().filter(|l| l.starts_with("#EXTINF:")).collect();
    assert_eq!(extinf, vec!["#EXTINF:10,A - T1", "#EXTINF:20,B - T2"]);
    assert!(!out.contains("notes.txt"));
    assert!(out.contains(&format!("#EXTINF:10,A - T1\n{}\n", files[0].display())));
    assert!(out.contains("# Artist: Various Artists\n"));
    assert!(out.contains("# Album: X\n"));
    assert!(out.contains("# Duration: 00:00:30\n"));
    assert!(out.ends_with("#END\n"));

    assert_eq!(summary.artist(), "Various Artists");
    assert_eq!(summary.album(), "X");
    assert_eq!(summary.total_secs(), 30);
}

#[test]
fn unrecognized_files_produce_no_tracks() {
    let dir = tempfile::tempdir().unwrap();
    let files = fixture(dir.path(), &["cover.jpg", "notes.txt", "loud.MP3"]);

    let (out, summary) = render(&files, false);
    assert!(!out.contains("#EXTINF:"));
    assert_eq!(summary.total_secs(), 0);
}

#[test]
fn unshuffled_output_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let files = fixture(dir.path(), &["b.mp3", "a.flac", "c.mp3"]);

    let (first, _) = render(&files, false);
    let (second, _) = render(&files, false);
    assert_eq!(first, second);
    assert!(!first.contains("# SHUFFLED LIST"));

    let (shuffled, _) = render(&files, true);
    assert!(shuffled.starts_with("#EXTM3U\n\n# SHUFFLED LIST\n"));
}

#[test]
fn vanished_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = fixture(dir.path(), &["a.flac"]);
    files.push(dir.path().join("gone.mp3"));

    let (out, summary) = render(&files, false);
    assert_eq!(out.matches("#EXTINF:").count(), 1);
    assert_eq!(summary.artist(), "A");
}

#[test]
fn missing_inspector_fails_before_output_is_opened() {
    let dir = tempfile::tempdir().unwrap();
    let files = fixture(dir.path(), &["a.flac", "b.ogg"]);
    let opened = Cell::new(false);

    let result = write_playlist(runner(), &quiet_settings(), &files, false, || {
        opened.set(true);
        Ok(Vec::<u8>::new())
    });

    assert!(matches!(result, Err(Error::ToolMissing { ref program }) if program == "ogginfo"));
    assert!(!opened.get());
}

#[test]
fn create_moves_existing_playlist_aside() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mix.m3u");
    fs::write(&path, b"old playlist").unwrap();

    let mut file = output::create(&path, true).unwrap();
    file.write_all(b"new playlist").unwrap();
    drop(file);

    assert_eq!(fs::read(&path).unwrap(), b"new playlist");
    assert_eq!(
        fs::read(dir.path().join("mix.m3u.old")).unwrap(),
        b"old playlist"
    );
}

#[test]
fn create_truncates_without_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mix.m3u");
    fs::write(&path, b"a much longer old playlist").unwrap();

    let mut file = output::create(&path, false).unwrap();
    file.write_all(b"new").unwrap();
    drop(file);

    assert_eq!(fs::read(&path).unwrap(), b"new");
    assert!(!output::backup_path(&path).exists());
}

#[test]
fn create_reports_unopenable_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("mix.m3u");

    let err = output::create(&path, true).unwrap_err();
    assert!(matches!(err, Error::OutputOpen { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn auto_name_uses_directory_name() {
    assert_eq!(
        output::auto_name(Path::new("/music/Time Machine")).unwrap(),
        PathBuf::from("Time Machine.m3u")
    );
    assert!(output::auto_name(Path::new("/")).is_err());
}

#[test]
fn resolve_target_prefers_explicit_file() {
    let args = Args {
        file: Some(PathBuf::from("out.m3u")),
        ..Args::default()
    };
    assert_eq!(
        output::resolve_target(&args, true).unwrap(),
        Some(PathBuf::from("out.m3u"))
    );
    assert_eq!(output::resolve_target(&Args::default(), true).unwrap(), None);
}

#[test]
fn check_reports_found_and_missing_inspectors() {
    let mut out = Vec::new();
    let missing = check::report(&runner(), &Settings::default().tools, true, &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "metaflac: found /usr/bin/metaflac\nmp3info: found /usr/bin/mp3info\n"
    );
    assert_eq!(missing, vec!["mp4info".to_string(), "ogginfo".to_string()]);
}

#[test]
fn command_line_flags_override_settings() {
    let args = Args {
        quiet: true,
        recursive: true,
        ..Args::default()
    };
    let settings = apply_args(Settings::default(), &args);
    assert!(settings.output.quiet);
    assert!(settings.library.recursive);

    let settings = apply_args(Settings::default(), &Args::default());
    assert!(!settings.output.quiet);
    assert!(!settings.library.recursive);
}
