//! Durable snapshot round-trips through the backup store.

mod common;

use self::common::setup_populated;
use ::common::command::{Backup, CreateFile, Edit};
use ::common::prelude::*;

#[test]
fn backup_then_restore_recovers_the_exact_tree() {
    let dir = tempfile::tempdir().unwrap();
    let mut caretaker = Caretaker::new(BackupStore::open(dir.path()).unwrap());
    let (mut fs, _) = setup_populated();
    let rendered = fs.render();

    let name = caretaker.save_state(&fs).unwrap();

    let report = fs.find("report").unwrap();
    fs.edit(report, "tampered").unwrap();
    let docs = fs.find("docs").unwrap();
    fs.remove(docs).unwrap();

    caretaker.restore_state(&mut fs, &name).unwrap();
    assert_eq!(fs.render(), rendered);
    let report = fs.find("report").unwrap();
    assert_eq!(fs.content(report).unwrap(), "quarterly numbers");
}

#[test]
fn working_copy_carries_state_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let store = BackupStore::open(dir.path()).unwrap();

    let (mut fs, mut manager) = setup_populated();
    let root = fs.root().unwrap();
    manager
        .execute(Box::new(CreateFile::new("session", root)), &mut fs)
        .unwrap();
    let file = fs.find("session").unwrap();
    manager
        .execute(Box::new(Edit::new(&fs, file, "persisted").unwrap()), &mut fs)
        .unwrap();
    store.save_working(&fs.save_state()).unwrap();

    // a new session starts from the working copy alone
    let mut restored = Pfs::from_tree(store.load_working().unwrap().into_tree());
    let file = restored.find("session").unwrap();
    assert_eq!(restored.content(file).unwrap(), "persisted");
    assert_eq!(restored.size(), fs.size());
}

#[test]
fn backup_command_is_listed_but_not_reversible() {
    let dir = tempfile::tempdir().unwrap();
    let store = BackupStore::open(dir.path()).unwrap();
    let (mut fs, mut manager) = setup_populated();

    manager
        .execute(Box::new(Backup::new(store.clone())), &mut fs)
        .unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].starts_with("pfsBackup_"));
    assert!(listed[0].ends_with(".bak"));

    assert!(matches!(
        manager.undo(&mut fs),
        Err(CommandError::UnsupportedReversal(_))
    ));

    let memento = store.load_backup(&listed[0]).unwrap();
    let restored = Pfs::from_tree(memento.into_tree());
    assert_eq!(restored.size(), fs.size());
}

#[test]
fn snapshots_are_isolated_from_later_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let mut caretaker = Caretaker::new(BackupStore::open(dir.path()).unwrap());
    let (mut fs, _) = setup_populated();

    caretaker.save_state(&fs).unwrap();
    let report = fs.find("report").unwrap();
    fs.edit(report, "after the snapshot").unwrap();

    caretaker.restore_last(&mut fs).unwrap();
    let report = fs.find("report").unwrap();
    assert_eq!(fs.content(report).unwrap(), "quarterly numbers");
}
