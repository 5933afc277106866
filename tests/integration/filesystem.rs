use std::{fs, path::Path};

use newer_filter::{FileRecord, NewerExt, NewerOptions, newer, record_from_path};

use crate::common::TempWorkspace;

fn sources(ws: &TempWorkspace, names: &[&str]) -> Vec<FileRecord> {
    names
        .iter()
        .map(|name| record_from_path(&ws.src(), &ws.src().join(name)).unwrap())
        .collect()
}

fn relatives(records: &[FileRecord]) -> Vec<String> {
    records.iter().map(|r| r.relative.replace('\\', "/")).collect()
}

#[test]
fn only_stale_tree_passes_nothing() {
    let ws = TempWorkspace::new();
    ws.write_at(&ws.src(), "a.js", 1_000);
    ws.write_at(&ws.src(), "lib/b.js", 1_000);
    ws.write_at(&ws.dest(), "a.js", 2_000);
    ws.write_at(&ws.dest(), "lib/b.js", 2_000);

    let filter = newer(ws.dest()).unwrap();
    let out: Vec<_> = sources(&ws, &["a.js", "lib/b.js"]).into_iter().newer(filter).collect();

    assert!(out.is_empty());
}

#[test]
fn touched_file_releases_earlier_stale_files() {
    let ws = TempWorkspace::new();
    ws.write_at(&ws.src(), "a.js", 1_000);
    ws.write_at(&ws.src(), "b.js", 3_000);
    ws.write_at(&ws.dest(), "a.js", 2_000);
    ws.write_at(&ws.dest(), "b.js", 2_000);

    let filter = newer(ws.dest()).unwrap();
    let out = sources(&ws, &["a.js", "b.js"])
        .into_iter()
        .newer(filter)
        .collect::<newer_filter::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(relatives(&out), ["a.js", "b.js"]);
    assert_eq!(out[1].path, ws.src().join("b.js"));
}

#[test]
fn compiled_outputs_are_checked_by_extension() {
    let ws = TempWorkspace::new();
    ws.write_at(&ws.src(), "app.ts", 5_000);
    ws.write_at(&ws.dest(), "app.js", 9_000);

    let mut filter = newer(NewerOptions::from(ws.dest()).ext(".js")).unwrap();
    let records = sources(&ws, &["app.ts"]);
    assert!(filter.process_collect(records[0].clone()).unwrap().is_empty());

    // without the extension override the destination is missing
    let mut plain = newer(ws.dest()).unwrap();
    assert_eq!(plain.process_collect(records[0].clone()).unwrap().len(), 1);
}

#[test]
fn mapper_only_configuration_resolves_mapped_path() {
    let ws = TempWorkspace::new();
    ws.write_at(&ws.src(), "style.scss", 1_000);
    ws.write_at(&ws.dest(), "css/style.css", 5_000);

    let dest = ws.dest();
    let options = NewerOptions::new().ext(".css").map(move |p| dest.join("css").join(p).display().to_string());
    let mut filter = newer(options).unwrap();

    let records = sources(&ws, &["style.scss"]);
    assert!(filter.process_collect(records[0].clone()).unwrap().is_empty());
    assert_eq!(filter.finish().discarded, 1);
}

#[cfg(unix)]
#[test]
fn unreadable_destination_directory_aborts() {
    use std::os::unix::fs::PermissionsExt;

    let ws = TempWorkspace::new();
    ws.write_at(&ws.src(), "locked/a.js", 1_000);
    ws.write_at(&ws.dest(), "locked/a.js", 2_000);
    let locked = ws.dest().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores directory permissions
    if fs::metadata(locked.join("a.js")).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut filter = newer(ws.dest()).unwrap();
    let err = filter.process_collect(sources_at(&ws.src(), "locked/a.js")).unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(err.is_lookup());
    assert!(filter.is_terminated());
}

#[cfg(unix)]
fn sources_at(root: &Path, rel: &str) -> FileRecord {
    record_from_path(root, &root.join(rel)).unwrap()
}
