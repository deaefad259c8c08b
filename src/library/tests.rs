use super::model::{AudioFormat, TrackRecord};
use super::scan::{discover, scan_relative, shuffle};
use crate::config::LibrarySettings;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"not real audio").unwrap();
}

#[test]
fn audio_format_matches_extensions_case_sensitively() {
    assert_eq!(AudioFormat::from_path(Path::new("a.flac")), Some(AudioFormat::Flac));
    assert_eq!(AudioFormat::from_path(Path::new("x/a.mp3")), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_path(Path::new("a.m4a")), Some(AudioFormat::M4a));
    assert_eq!(AudioFormat::from_path(Path::new("a.ogg")), Some(AudioFormat::Ogg));
    assert_eq!(AudioFormat::from_path(Path::new("a.MP3")), None);
    assert_eq!(AudioFormat::from_path(Path::new("a.wav")), None);
    assert_eq!(AudioFormat::from_path(Path::new("flac")), None);
}

#[test]
fn track_record_treats_unknown_duration_as_zero() {
    let mut record = TrackRecord::new("a.ogg");
    assert_eq!(record.seconds(), 0);
    record.duration_secs = Some(42);
    assert_eq!(record.seconds(), 42);
}

#[test]
fn scan_relative_reports_bare_names_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("b.mp3"));
    touch(&dir.path().join("a.flac"));
    touch(&dir.path().join("c.txt"));
    touch(&dir.path().join("d.MP3"));
    touch(&dir.path().join("sub").join("e.ogg"));

    let files = scan_relative(dir.path(), &LibrarySettings::default());
    assert_eq!(files, vec![PathBuf::from("a.flac"), PathBuf::from("b.mp3")]);
}

#[test]
fn discover_descends_only_when_recursive() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("root.m4a"));
    touch(&dir.path().join("sub").join("child.ogg"));

    let flat = discover(&[dir.path().to_path_buf()], &LibrarySettings::default(), true);
    assert_eq!(flat, vec![dir.path().join("root.m4a")]);

    let settings = LibrarySettings {
        recursive: true,
        ..LibrarySettings::default()
    };
    let deep = discover(&[dir.path().to_path_buf()], &settings, true);
    assert_eq!(
        deep,
        vec![dir.path().join("root.m4a"), dir.path().join("sub").join("child.ogg")]
    );
}

#[test]
fn discover_respects_max_depth() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("root.mp3"));
    touch(&dir.path().join("d1").join("one.mp3"));
    touch(&dir.path().join("d1").join("d2").join("two.mp3"));

    // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
    let settings = LibrarySettings {
        recursive: true,
        max_depth: Some(2),
        ..LibrarySettings::default()
    };
    let files = discover(&[dir.path().to_path_buf()], &settings, true);

    assert!(files.contains(&dir.path().join("root.mp3")));
    assert!(files.contains(&dir.path().join("d1").join("one.mp3")));
    assert!(!files.contains(&dir.path().join("d1").join("d2").join("two.mp3")));
}

#[test]
fn discover_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join(".hidden.mp3"));
    touch(&dir.path().join("visible.mp3"));

    let settings = LibrarySettings {
        include_hidden: false,
        ..LibrarySettings::default()
    };
    let files = discover(&[dir.path().to_path_buf()], &settings, true);
    assert_eq!(files, vec![dir.path().join("visible.mp3")]);
}

#[test]
fn discover_keeps_explicit_files_in_argument_order() {
    let dir = tempdir().unwrap();
    let b = dir.path().join("b.ogg");
    let a = dir.path().join("a.flac");
    let notes = dir.path().join("notes.txt");
    touch(&b);
    touch(&a);
    touch(&notes);
    let gone = dir.path().join("gone.mp3");

    let files = discover(
        &[b.clone(), notes, gone, a.clone()],
        &LibrarySettings::default(),
        true,
    );
    assert_eq!(files, vec![b, a]);
}

#[test]
fn shuffle_is_a_permutation() {
    let original: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{i}.mp3"))).collect();
    let mut files = original.clone();

    let mut rng = StdRng::seed_from_u64(7);
    shuffle(&mut files, &mut rng);

    let mut sorted = files.clone();
    sorted.sort();
    let mut expected = original.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}
