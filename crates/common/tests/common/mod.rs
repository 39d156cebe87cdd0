//! Shared setup for integration tests.

use ::common::prelude::*;

/// A file system with a root folder and an empty command history.
pub fn setup() -> (Pfs, CommandManager) {
    let fs = Pfs::new(Document::folder("Root"));
    (fs, CommandManager::new())
}

/// A populated hierarchy:
///
/// ```text
/// Root
///   docs/
///     report.txt  "quarterly numbers"
///     images/
///       logo.png
///   music/
///     song.mp3
/// ```
#[allow(dead_code)]
pub fn setup_populated() -> (Pfs, CommandManager) {
    let (mut fs, manager) = setup();
    let root = fs.root().unwrap();

    let docs = fs.create_folder("docs", root).unwrap();
    let report = fs.create_file("report", docs).unwrap();
    fs.edit(report, "quarterly numbers").unwrap();
    let images = fs.create_folder("images", docs).unwrap();
    fs.create_file_with_extension("logo", Extension::Png, images)
        .unwrap();

    let music = fs.create_folder("music", root).unwrap();
    fs.create_file_with_extension("song", Extension::Mp3, music)
        .unwrap();

    (fs, manager)
}
