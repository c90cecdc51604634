use std::fs;
use std::path::{Path, PathBuf};

use cppnew::cli::{Command, Options, ProjectType};
use cppnew::error::Error;
use cppnew::project::{generate_project, FileEntry, ProjectFiles};
use cppnew::renderer::RenderContext;
use cppnew::writer::{ensure_project_dir, write_project};
use tempfile::TempDir;
use walkdir::WalkDir;

fn project(name: &str, project_type: ProjectType) -> ProjectFiles {
    let options = Options {
        command: Command::New,
        project_name: name.to_string(),
        project_type,
        author: "Test".to_string(),
        ..Options::default()
    };
    generate_project(&options, &RenderContext::new(&options, "2025"))
}

#[test]
fn test_ensure_project_dir() {
    let temp_dir = TempDir::new().unwrap();

    let dir = ensure_project_dir(temp_dir.path(), "fresh").unwrap();
    assert_eq!(dir, temp_dir.path().join("fresh"));

    fs::create_dir(temp_dir.path().join("taken")).unwrap();
    let err = ensure_project_dir(temp_dir.path(), "taken").unwrap_err();
    assert!(matches!(err, Error::OutputDirectoryExistsError { .. }));
    assert!(!err.is_usage());
    assert!(err.to_string().contains("'taken' already exists"));
}

#[test_log::test]
fn test_write_project_materializes_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let project = project("demo", ProjectType::Lib);

    let mut reported = Vec::new();
    write_project(&project, temp_dir.path(), |path| reported.push(path.to_path_buf())).unwrap();

    for dir in &project.directories {
        assert!(temp_dir.path().join(dir).is_dir(), "missing {}", dir.display());
    }
    for entry in &project.files {
        let written = fs::read_to_string(temp_dir.path().join(&entry.path)).unwrap();
        assert_eq!(written, entry.content);
    }

    let expected: Vec<PathBuf> = project.files.iter().map(|entry| entry.path.clone()).collect();
    assert_eq!(reported, expected);

    let on_disk = WalkDir::new(temp_dir.path())
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count();
    assert_eq!(on_disk, project.files.len());
}

#[test]
fn test_write_project_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let project = project("same", ProjectType::Header);

    write_project(&project, first.path(), |_| {}).unwrap();
    write_project(&project, second.path(), |_| {}).unwrap();

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_write_project_creates_unlisted_parents() {
    let temp_dir = TempDir::new().unwrap();
    let project = ProjectFiles {
        directories: Vec::new(),
        files: vec![FileEntry {
            path: Path::new("deep").join("a").join("b.txt"),
            content: "b".to_string(),
        }],
    };

    write_project(&project, temp_dir.path(), |_| {}).unwrap();
    assert_eq!(fs::read_to_string(temp_dir.path().join("deep/a/b.txt")).unwrap(), "b");
}

#[test_log::test]
fn test_write_project_stops_at_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    // A plain file where a directory is expected makes the second write fail.
    fs::write(temp_dir.path().join("blocker"), "").unwrap();
    let project = ProjectFiles {
        directories: Vec::new(),
        files: vec![
            FileEntry { path: PathBuf::from("first.txt"), content: "1".to_string() },
            FileEntry { path: Path::new("blocker").join("second.txt"), content: "2".to_string() },
            FileEntry { path: PathBuf::from("third.txt"), content: "3".to_string() },
        ],
    };

    let mut reported = Vec::new();
    let err = write_project(&project, temp_dir.path(), |path| reported.push(path.to_path_buf()))
        .unwrap_err();

    assert!(matches!(err, Error::CreateDirectoryError { .. } | Error::WriteFileError { .. }));
    assert!(!err.is_usage());
    assert_eq!(reported, vec![PathBuf::from("first.txt")]);
    assert!(temp_dir.path().join("first.txt").exists());
    assert!(!temp_dir.path().join("third.txt").exists());
}
