//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow with aliases,
//! a wildcard escape hatch, and callbacks building an audit trail.
//!
//! Key concepts:
//! - Multi-stage linear workflow (draft -> review -> approved -> published)
//! - An alias lets several states share one transition route
//! - A wildcard "scrap" event works from anywhere
//! - Callbacks thread an audit trail through successor records
//!
//! Run with: cargo run --example document_workflow

use statefold::{
    can_trigger, current, machine_states, trigger, try_trigger, MachineBuilder, MapRecord,
    StateKey, StateRecord,
};

type Doc = MapRecord<&'static str, String>;

/// Append one line to the record's audit trail.
fn audit(doc: Doc, entry: String) -> Doc {
    let mut trail = doc.get("audit").cloned().unwrap_or_default();
    trail.push_str(&entry);
    trail.push('\n');
    doc.insert("audit", trail)
}

fn main() {
    println!("=== Document Approval Workflow ===\n");

    let machine = MachineBuilder::new()
        .current("draft")
        .transition("submit", "draft", "review")
        .transition("approve", "review", "approved")
        .transition("publish", "approved", "published")
        // Any state aliased to "editable" can be sent back for edits.
        .transition("edit", "editable", "draft")
        .transition("scrap", StateKey::Any, "trash")
        .alias("draft", "editable")
        .alias("review", "editable")
        .callback("review", |doc: Doc, _event, payload| {
            let by = payload.cloned().unwrap_or_else(|| "someone".to_string());
            Ok(audit(doc, format!("submitted for review by {by}")))
        })
        .callback("published", |doc: Doc, _event, _payload| {
            Ok(audit(doc, "published".to_string()))
        })
        .callback(StateKey::Any, |doc: Doc, event, _payload| {
            Ok(audit(doc, format!("after `{event}`")))
        })
        .build()
        .unwrap();

    let doc = MapRecord::new().with_machine(machine);
    println!("Document starts in: {}\n", current(&doc).unwrap());

    println!("Step 1: Submit for review");
    let alice = "alice".to_string();
    let doc = trigger(&doc, "submit", Some(&alice)).unwrap();
    println!("  now in: {}", current(&doc).unwrap());

    println!("Step 2: Reviewer sends it back for edits");
    // "edit" routes from "editable"; review qualifies via its alias.
    let doc = trigger(&doc, "edit", None).unwrap();
    println!("  now in: {}", current(&doc).unwrap());
    println!(
        "  publish from here is quietly declined: {:?}",
        try_trigger(&doc, "publish", None).unwrap().map(|_| ())
    );

    println!("Step 3: Resubmit and approve");
    let bob = "bob".to_string();
    let doc = trigger(&doc, "submit", Some(&bob)).unwrap();
    let doc = trigger(&doc, "approve", None).unwrap();
    println!("  now in: {}", current(&doc).unwrap());

    println!("Step 4: Publish");
    println!(
        "  can publish now? {}",
        can_trigger(&doc, "publish").unwrap()
    );
    let doc = try_trigger(&doc, "publish", None).unwrap().unwrap();
    println!("  now in: {}", current(&doc).unwrap());

    println!("\nAudit trail:");
    for line in doc.get("audit").map(String::as_str).unwrap_or("").lines() {
        println!("  - {line}");
    }

    // Where can this machine ever land?
    let mut targets: Vec<_> = machine_states(&doc).unwrap().into_iter().collect();
    targets.sort();
    println!("\nReachable states: {targets:?}");

    println!("\nKey Takeaways:");
    println!("- draft and review share the `edit` route through an alias");
    println!("- The wildcard callback observed every single arrival");
    println!("- `scrap` is routed from the wildcard, so it works anywhere");
    println!("- Every step produced a fresh record; no mutation anywhere");

    println!("\n=== Example Complete ===");
}
