//! Integration tests for imgann
//!
//! These tests build real image directories in temp dirs and run the full
//! discover, save, load and browse workflow through the public API.

use imgann::{
    AnnotationStore, BrowseSession, Dataset, StoreError,
    browse::{BrowseController, BrowseOptions, ImageViewer, NO_IMAGE, ScriptedKeys},
    commands::{self, save::SaveRequest},
    config::{ImgannConfig, PathFormat},
    discovery::{DirectoryDiscovery, ImageDiscovery},
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Helper function to create empty image files in a fresh temp dir
fn setup_image_dir(names: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempdir().unwrap();
    let paths = names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, b"").unwrap();
            path
        })
        .collect();
    (dir, paths)
}

fn as_strings(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

struct NoViewer;

impl ImageViewer for NoViewer {
    fn show(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

fn run_browser(paths: &[String], keys: &str) -> (String, Option<usize>) {
    colored::control::set_override(false);
    let mut output = Vec::new();
    let controller = BrowseController::new(
        BrowseSession::new(paths),
        ScriptedKeys::from_chars(keys),
        &mut output,
        NoViewer,
        BrowseOptions::default(),
    );
    let last = controller.run().unwrap();
    (String::from_utf8(output).unwrap(), last)
}

#[test]
fn test_discover_save_load_preserves_order() {
    let (dir, _) = setup_image_dir(&["b.jpg", "a.png", "c.gif", "notes.txt"]);
    let discovery = DirectoryDiscovery::new(dir.path(), &["jpg", "png", "gif"]);
    let images = discovery.discover("", None).unwrap();
    assert_eq!(images.len(), 3);

    let store = AnnotationStore::new(dir.path().join("annotation.csv"));
    store.save(&images).unwrap();

    assert_eq!(store.load().unwrap(), as_strings(&images));
}

#[test]
fn test_saved_file_layout() {
    let (dir, images) = setup_image_dir(&["img1.jpg", "img2.jpg"]);
    let annotation = dir.path().join("annotation.csv");

    imgann::store::save(&images, &annotation).unwrap();

    let content = fs::read_to_string(&annotation).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "abs_path,rel_path");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(&images[0].to_string_lossy().into_owned()));
    assert!(lines[1].ends_with(",img1.jpg"));
    assert!(lines[2].ends_with(",img2.jpg"));
}

#[test]
fn test_save_replaces_previous_contents() {
    let (dir, images) = setup_image_dir(&["one.jpg", "two.jpg", "three.jpg"]);
    let annotation = dir.path().join("annotation.csv");

    imgann::store::save(&images, &annotation).unwrap();
    imgann::store::save(&images[..1], &annotation).unwrap();

    assert_eq!(imgann::store::load(&annotation).unwrap(), as_strings(&images[..1]));
}

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let err = imgann::store::load(&missing).unwrap_err();

    assert!(matches!(err, StoreError::NotFound { ref path } if path == &missing));
}

#[test]
fn test_dataset_iterates_once_then_ends() {
    let (dir, images) = setup_image_dir(&["a.jpg", "b.jpg"]);
    let annotation = dir.path().join("annotation.csv");
    imgann::store::save(&images, &annotation).unwrap();

    let expected = as_strings(&images);
    let dataset = Dataset::load(&annotation).unwrap();
    let mut iter = dataset.iter();

    assert_eq!(iter.next(), Some(expected[0].as_str()));
    assert_eq!(iter.next(), Some(expected[1].as_str()));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    // A fresh traversal starts over
    assert_eq!(dataset.iter().count(), 2);
}

#[test]
fn test_session_saturates_at_both_ends() {
    let paths = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let mut session = BrowseSession::new(&paths);

    let mut seen = vec![session.current()];
    for _ in 0..3 {
        session.advance();
        seen.push(session.current());
    }
    assert_eq!(seen, vec![Some("A"), Some("B"), Some("C"), Some("C")]);

    for _ in 0..4 {
        session.retreat();
    }
    assert_eq!(session.current(), Some("A"));
}

#[test]
fn test_browser_walks_saved_dataset() {
    let (dir, images) = setup_image_dir(&["first.jpg", "second.jpg"]);
    let annotation = dir.path().join("annotation.csv");
    imgann::store::save(&images, &annotation).unwrap();
    let dataset = Dataset::load(&annotation).unwrap();

    let (out, last) = run_browser(dataset.paths(), "nnpq");

    assert_eq!(last, Some(0));
    assert!(out.contains("[1/2]"));
    assert!(out.contains("[2/2]"));
    assert!(out.contains("Already at the last image"));
}

#[test]
fn test_browser_on_empty_dataset() {
    let (out, last) = run_browser(&[], "np");

    assert_eq!(last, None);
    assert!(out.starts_with(NO_IMAGE));
    assert_eq!(out.matches(NO_IMAGE).count(), 3);
}

#[test]
fn test_save_command_then_list_command() {
    let (dir, images) = setup_image_dir(&["x.jpg", "nested/y.jpg"]);
    let annotation = dir.path().join("annotation.csv");
    let mut config = ImgannConfig::default();
    config.set("recursive", "true").unwrap();

    let request = SaveRequest {
        dir: dir.path(),
        output: &annotation,
        query: "",
        max: None,
        recursive: false,
        yes: true,
    };
    let written = commands::save(&config, &request, true).unwrap();
    assert_eq!(written, Some(2));

    let mut out = Vec::new();
    let summary = commands::list(&annotation, false, PathFormat::Absolute, true, &mut out).unwrap();

    assert_eq!(summary.total, 2);
    let listed = String::from_utf8(out).unwrap();
    for image in &images {
        assert!(listed.contains(&image.display().to_string()));
    }
}

#[test]
fn test_config_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("imgann").join("config.toml");

    let mut config = ImgannConfig::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config, ImgannConfig::default());

    config.set("path_format", "relative").unwrap();
    config.set("annotation_file", "labels.csv").unwrap();
    config.save_to(&path).unwrap();

    let reloaded = ImgannConfig::load_from(&path).unwrap();
    assert_eq!(reloaded.path_format, PathFormat::Relative);
    assert_eq!(reloaded.annotation_file, "labels.csv");
}
