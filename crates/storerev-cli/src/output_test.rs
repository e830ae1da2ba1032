use chrono::Utc;
use storerev_core::{AppIdentity, AppMetadata, ReviewRecord, RunResult, StoreKind};

use super::*;

fn record(id: &str, title: &str) -> ReviewRecord {
    ReviewRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        content: "Körper & Geist — non-ASCII survives".to_owned(),
        rating: Some(4),
        author: "Anonymous".to_owned(),
        date: "2024-03-03".to_owned(),
        version: "N/A".to_owned(),
        source: "StoreFront API".to_owned(),
    }
}

fn run_with(reviews: Vec<ReviewRecord>) -> RunResult {
    let identity = AppIdentity::new("6499447981", "one-pass", StoreKind::AppleAppStore);
    let store_url = identity.store_url("us");
    RunResult::new(identity, AppMetadata::new(), reviews, store_url, Utc::now())
}

#[test]
fn writes_json_and_csv_with_deterministic_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let run = run_with(vec![record("r1", "First"), record("r2", "Second")]);

    let written = write_outputs(&run, "api", dir.path()).expect("write succeeds");

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("one_pass_appstore_reviews_api.json").is_file());
    assert!(dir.path().join("one_pass_appstore_reviews_api.csv").is_file());

    let json = std::fs::read_to_string(dir.path().join("one_pass_appstore_reviews_api.json"))
        .expect("json readable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json parses");
    assert_eq!(value["total_reviews"], 2);
    assert_eq!(value["app_name"], "one-pass");
    // Pretty-printed, non-ASCII preserved.
    assert!(json.contains('\n'));
    assert!(json.contains("Körper & Geist"));
}

#[test]
fn csv_has_header_and_one_row_per_review() {
    let dir = tempfile::tempdir().expect("tempdir");
    let run = run_with(vec![record("r1", "First")]);
    write_outputs(&run, "api", dir.path()).expect("write succeeds");

    let csv = std::fs::read_to_string(dir.path().join("one_pass_appstore_reviews_api.csv"))
        .expect("csv readable");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,title,content,rating,author,date,version,source")
    );
    assert_eq!(lines.count(), 1);
}

#[test]
fn empty_review_sequence_skips_the_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let run = run_with(Vec::new());

    let written = write_outputs(&run, "static", dir.path()).expect("write succeeds");

    assert_eq!(written.len(), 1);
    assert!(dir.path().join("one_pass_appstore_reviews_static.json").is_file());
    assert!(!dir.path().join("one_pass_appstore_reviews_static.csv").exists());
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_outputs(&run_with(vec![record("old", "Old run")]), "api", dir.path())
        .expect("first write succeeds");
    write_outputs(&run_with(vec![record("new", "New run")]), "api", dir.path())
        .expect("second write succeeds");

    let json = std::fs::read_to_string(dir.path().join("one_pass_appstore_reviews_api.json"))
        .expect("json readable");
    assert!(json.contains("\"new\""));
    assert!(!json.contains("\"old\""));
}

#[test]
fn no_tmp_files_remain_after_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_outputs(&run_with(vec![record("r1", "t")]), "api", dir.path())
        .expect("write succeeds");

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("dir readable")
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn missing_output_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");
    let result = write_outputs(&run_with(vec![record("r1", "t")]), "api", &missing);
    assert!(result.is_err());
}
