//! Shared fixture for the integration tests.
//!
//! One workflow machine exercising every feature at once: a linear walk
//! (new -> step1 -> step2 -> step3 -> done), an alias-routed event, a
//! wildcard escape event, and recording callbacks on an exact state, on
//! an alias, and on the wildcard.

use serde_json::Value;
use statefold::{Callback, MachineBuilder, MapRecord, StateKey, StateRecord};

pub type Rec = MapRecord<&'static str, Value>;

/// Callback appending `{event: payload}` to the array field under `key`,
/// so tests can see exactly which callbacks fired, in which order, with
/// which arguments.
fn recording(key: &'static str) -> Callback<Rec> {
    Callback::new(move |record: Rec, event, payload| {
        let mut entries = match record.get(key) {
            Some(Value::Array(entries)) => entries.clone(),
            _ => Vec::new(),
        };

        let mut entry = serde_json::Map::new();
        entry.insert((*event).to_string(), payload.cloned().unwrap_or(Value::Null));
        entries.push(Value::Object(entry));

        Ok(record.insert(key, Value::Array(entries)))
    })
}

/// A fresh record carrying the shared workflow machine, sitting in "new".
pub fn test_record() -> Rec {
    let machine = MachineBuilder::new()
        .current("new")
        .transition("begin", "new", "step1")
        .transition("advance", "step1", "step2")
        .transition("advance", "step2", "step3")
        .transition("end", "step3", "done")
        .transition("aliased", "aliased", "recognized")
        .transition("bail", StateKey::Any, "bail")
        .callbacks("step1", recording("step1"))
        .callbacks("aliased", recording("aliased"))
        .callbacks(StateKey::Any, recording("all"))
        .alias("step2", "aliased")
        .alias("step3", "aliased")
        .build()
        .unwrap();

    MapRecord::new().with_machine(machine)
}
