//! Every store/medium pair passes the fixed scenarios.

use papaz_testkit::medium::{all_media, Flavor, JsonFileMedium, Medium};
use papaz_testkit::suite;
use serde_json::json;

#[test]
fn test_hydrates_persisted_document() {
    for medium in all_media() {
        suite::hydrates_persisted_document(medium.as_ref());
    }
}

#[test]
fn test_persists_default_when_empty() {
    for medium in all_media() {
        suite::persists_default_when_empty(medium.as_ref(), json!({}));
    }
}

#[test]
fn test_write_replaces_medium() {
    for medium in all_media() {
        suite::write_replaces_medium(medium.as_ref());
    }
}

#[test]
fn test_update_mutates_then_persists() {
    for medium in all_media() {
        suite::update_mutates_then_persists(medium.as_ref());
    }
}

#[test]
fn test_update_does_not_reread() {
    for medium in all_media() {
        suite::update_does_not_reread(medium.as_ref());
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_run_all() {
    init_tracing();
    suite::run_all(all_media);
}

#[test]
fn test_malformed_file_fails_read_and_keeps_state() {
    for flavor in [Flavor::Async, Flavor::Sync] {
        let medium = JsonFileMedium::new(flavor);
        std::fs::write(medium.file().path(), "{ \"a\": ").unwrap();

        let mut db = medium.open(json!({ "default": true }));
        assert!(db.read().is_err(), "{}", medium.name());
        assert!(!db.is_hydrated(), "{}", medium.name());

        // The malformed content is left alone.
        assert_eq!(
            std::fs::read_to_string(medium.file().path()).unwrap(),
            "{ \"a\": "
        );
    }
}

#[test]
fn test_blank_file_counts_as_empty() {
    for flavor in [Flavor::Async, Flavor::Sync] {
        let medium = JsonFileMedium::new(flavor);
        std::fs::write(medium.file().path(), "\n").unwrap();

        let mut db = medium.open(json!({ "posts": [] }));
        db.read().unwrap();

        assert_eq!(db.data(), &json!({ "posts": [] }));
        assert_eq!(medium.inspect(), Some(json!({ "posts": [] })));
    }
}
