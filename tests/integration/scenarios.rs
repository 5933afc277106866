use std::io;

use newer_filter::{FileRecord, NewerExt, NewerFilter, NewerOptions, Result};

use crate::common::{lookup_from, names, record, stat};

fn collect<I>(stream: I) -> Result<Vec<FileRecord>>
where
    I: Iterator<Item = Result<FileRecord>>,
{
    stream.collect()
}

#[test]
fn scenario_a_first_newer_record_opens_passthrough() {
    let lookup = lookup_from(&[("/out/a.js", 4), ("/out/b.js", 8), ("/out/c.js", 1)]);
    let filter = NewerFilter::new("/out", lookup).unwrap();

    let input = vec![record("a.js", 5), record("b.js", 3), record("c.js", 10)];
    let out = collect(input.into_iter().newer(filter)).unwrap();

    assert_eq!(names(&out), ["a.js", "b.js", "c.js"]);
}

#[test]
fn scenario_b_nothing_newer_yields_nothing() {
    let lookup = lookup_from(&[("/out/a.js", 5), ("/out/b.js", 9)]);
    let filter = NewerFilter::new("/out", lookup).unwrap();

    let mut stream = vec![record("a.js", 5), record("b.js", 1)].into_iter().newer(filter);
    assert!(stream.next().is_none());

    let summary = stream.summary().expect("finished");
    assert_eq!(summary.received, 2);
    assert_eq!(summary.discarded, 2);
}

#[test]
fn scenario_c_extension_then_mapper() {
    let lookup = lookup_from(&[("/out/foo.min.js", 20)]);
    let options = NewerOptions::from("/out").ext(".js").map(|p| p.replace(".js", ".min.js"));
    let mut filter = NewerFilter::new(options, lookup).unwrap();

    assert!(filter.process_collect(record("foo.ts", 10)).unwrap().is_empty());
    assert_eq!(filter.process_collect(record("foo.ts", 30)).unwrap().len(), 2);
}

#[test]
fn scenario_d_missing_destination_is_newer() {
    let lookup = lookup_from(&[("/out/old.js", 100)]);
    let filter = NewerFilter::new("/out", lookup).unwrap();

    let out = collect(vec![record("old.js", 1), record("new.js", 0)].into_iter().newer(filter)).unwrap();
    assert_eq!(names(&out), ["old.js", "new.js"]);
}

#[test]
fn scenario_e_permission_error_aborts() {
    let mut lookup = lookup_from(&[("/out/a.js", 100)]);
    lookup.fail("/out/b.js", io::ErrorKind::PermissionDenied);
    let filter = NewerFilter::new("/out", lookup).unwrap();

    let results: Vec<_> = vec![record("a.js", 1), record("b.js", 1), record("c.js", 1)]
        .into_iter()
        .newer(filter)
        .collect();

    assert_eq!(results.len(), 1);
    let err = results.into_iter().next().unwrap().unwrap_err();
    assert!(err.is_lookup());
    assert_eq!(err.stage(), Some("newer"));
}

#[test]
fn passthrough_ignores_later_comparisons() {
    let lookup = lookup_from(&[("/out/b.js", 50), ("/out/c.js", 50)]);
    let filter = NewerFilter::new("/out", lookup).unwrap();

    let out = collect(vec![record("a.js", 1), record("b.js", 1), record("c.js", 1)].into_iter().newer(filter))
        .unwrap();
    assert_eq!(names(&out), ["a.js", "b.js", "c.js"]);
}

#[test]
fn invalid_record_aborts_session() {
    let filter = NewerFilter::new("/out", lookup_from(&[])).unwrap();

    let results: Vec<_> = vec![FileRecord::without_stat("a.js"), record("b.js", 1)].into_iter().newer(filter).collect();

    assert_eq!(results.len(), 1);
    assert!(results[0].as_ref().unwrap_err().is_invalid_input());
}

#[test]
fn json_configured_filter_compares_ctime() {
    let options = NewerOptions::from_json_str(r#"{"dest":"/out","ctime":true}"#).unwrap();
    let mut lookup = lookup_from(&[]);
    let base = stat(100);
    lookup.insert("/out/a.js", base);
    let mut filter = NewerFilter::new(options, lookup).unwrap();

    let source = newer_filter::FileStat::new(stat(50).mtime, stat(150).ctime);
    assert_eq!(filter.process_collect(FileRecord::new("a.js", source)).unwrap().len(), 1);
}
