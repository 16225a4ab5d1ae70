//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{Map, Value};

use crate::fixtures::{Data, Doc};

/// Generate an object key.
pub fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}".prop_map(String::from)
}

/// Generate a JSON leaf. Floats are left out so equality is exact across
/// every codec.
pub fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::String),
    ]
}

/// Generate an arbitrary JSON value, nested up to a few levels.
pub fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(key(), inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Generate a document: always a JSON object at the top level.
pub fn document() -> impl Strategy<Value = Doc> {
    prop::collection::btree_map(key(), value(), 0..8)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

/// A mutation that can be applied to a document.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Set a top-level field.
    Set(String, Value),
    /// Remove a top-level field.
    Remove(String),
    /// Replace the whole document.
    Replace(Doc),
}

impl Mutation {
    /// Apply the mutation in place.
    pub fn apply(&self, doc: &mut Doc) {
        match self {
            Mutation::Set(key, value) => {
                if let Some(object) = doc.as_object_mut() {
                    object.insert(key.clone(), value.clone());
                }
            }
            Mutation::Remove(key) => {
                if let Some(object) = doc.as_object_mut() {
                    object.remove(key);
                }
            }
            Mutation::Replace(new_doc) => *doc = new_doc.clone(),
        }
    }
}

/// Generate a mutation.
pub fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (key(), value()).prop_map(|(k, v)| Mutation::Set(k, v)),
        key().prop_map(Mutation::Remove),
        document().prop_map(Mutation::Replace),
    ]
}

impl Arbitrary for Data {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<Option<i64>>(), any::<Option<i64>>())
            .prop_map(|(a, b)| Data { a, b })
            .boxed()
    }
}
