//! Conformance scenarios every store/medium pair must pass.
//!
//! Each function panics with the medium's name on failure, so a single test
//! can loop over [`all_media`](crate::medium::all_media).

use serde_json::json;

use crate::fixtures::Doc;
use crate::medium::Medium;

/// Medium holds `{a: 1}`, default `{}`: `read()` adopts `{a: 1}` and writes
/// nothing.
pub fn hydrates_persisted_document(medium: &dyn Medium) {
    medium.seed(&json!({ "a": 1 }));

    let mut db = medium.open(json!({}));
    db.read().unwrap_or_else(|e| panic!("{}: read failed: {}", medium.name(), e));

    assert!(db.is_hydrated(), "{}", medium.name());
    assert_eq!(db.data(), &json!({ "a": 1 }), "{}", medium.name());
    assert_eq!(medium.inspect(), Some(json!({ "a": 1 })), "{}", medium.name());
}

/// Empty medium: `read()` adopts the default and persists it.
pub fn persists_default_when_empty(medium: &dyn Medium, default_data: Doc) {
    assert_eq!(medium.inspect(), None, "{}: medium not empty", medium.name());

    let mut db = medium.open(default_data.clone());
    db.read().unwrap_or_else(|e| panic!("{}: read failed: {}", medium.name(), e));

    assert_eq!(db.data(), &default_data, "{}", medium.name());
    assert_eq!(medium.inspect(), Some(default_data), "{}", medium.name());
}

/// `write()` replaces the medium with exactly the in-memory document.
pub fn write_replaces_medium(medium: &dyn Medium) {
    medium.seed(&json!({ "a": 1 }));

    let mut db = medium.open(json!({}));
    db.read().unwrap();
    db.set_data(json!({ "b": 2 }));
    db.write()
        .unwrap_or_else(|e| panic!("{}: write failed: {}", medium.name(), e));

    assert_eq!(medium.inspect(), Some(json!({ "b": 2 })), "{}", medium.name());
}

/// Medium holds `{b: 2}`: `update(b = 3)` leaves `{b: 3}` on the medium.
pub fn update_mutates_then_persists(medium: &dyn Medium) {
    medium.seed(&json!({ "b": 2 }));

    let mut db = medium.open(json!({}));
    db.read().unwrap();
    db.update(Box::new(|doc: &mut Doc| doc["b"] = json!(3)))
        .unwrap_or_else(|e| panic!("{}: update failed: {}", medium.name(), e));

    assert_eq!(db.data(), &json!({ "b": 3 }), "{}", medium.name());
    assert_eq!(medium.inspect(), Some(json!({ "b": 3 })), "{}", medium.name());
}

/// `update()` works on the in-memory document and does not re-read the
/// medium first.
pub fn update_does_not_reread(medium: &dyn Medium) {
    medium.seed(&json!({ "b": 2 }));

    let mut db = medium.open(json!({}));
    db.read().unwrap();

    medium.seed(&json!({ "external": true }));
    db.update(Box::new(|doc: &mut Doc| doc["b"] = json!(3))).unwrap();

    assert_eq!(medium.inspect(), Some(json!({ "b": 3 })), "{}", medium.name());
}

/// A value written by one store is read back unchanged by a fresh store.
pub fn round_trips_through_fresh_store(medium: &dyn Medium, doc: Doc) {
    let mut writer = medium.open(json!({}));
    writer.set_data(doc.clone());
    writer.write().unwrap();

    let mut reader = medium.open(json!({ "unused": "default" }));
    reader.read().unwrap();

    assert_eq!(reader.data(), &doc, "{}", medium.name());
}

/// Run every fixed scenario against a medium factory.
///
/// Each scenario gets its own medium so seeded state never leaks.
pub fn run_all<F>(make: F)
where
    F: Fn() -> Vec<Box<dyn Medium>>,
{
    for medium in make() {
        hydrates_persisted_document(medium.as_ref());
    }
    for medium in make() {
        persists_default_when_empty(medium.as_ref(), json!({}));
    }
    for medium in make() {
        write_replaces_medium(medium.as_ref());
    }
    for medium in make() {
        update_mutates_then_persists(medium.as_ref());
    }
    for medium in make() {
        update_does_not_reread(medium.as_ref());
    }
    for medium in make() {
        round_trips_through_fresh_store(
            medium.as_ref(),
            json!({ "todos": ["foo", "bar"], "meta": { "count": 2, "done": null } }),
        );
    }
}
