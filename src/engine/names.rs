//! Effective-name resolution for the current state.

use crate::core::{MachineError, StateKey, StateRecord};

use super::inspect::{current, machine_slot};

/// The lookup names the current state answers to, most specific first:
/// the exact state name, then its aliases in declaration order, then the
/// wildcard.
///
/// This single ordering governs both transition resolution (first match
/// wins) and callback resolution (every match fires). Names are not
/// deduplicated; a state aliased to itself genuinely appears twice.
///
/// # Example
///
/// ```rust
/// use statefold::{effective_names, MachineBuilder, MapRecord, StateKey, StateRecord};
///
/// let machine = MachineBuilder::new()
///     .current("step2")
///     .transition("advance", "step2", "step3")
///     .alias("step2", vec!["aliased", "blessed"])
///     .build()
///     .unwrap();
/// let record: MapRecord<&str, i32> = MapRecord::new().with_machine(machine);
///
/// assert_eq!(
///     effective_names(&record).unwrap(),
///     vec![
///         StateKey::Named("step2"),
///         StateKey::Named("aliased"),
///         StateKey::Named("blessed"),
///         StateKey::Any,
///     ]
/// );
/// ```
pub fn effective_names<R: StateRecord>(
    record: &R,
) -> Result<Vec<StateKey<R::Name>>, MachineError> {
    let state = current(record)?;
    let aliases = machine_slot(record)?
        .aliases
        .get(state)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut names = Vec::with_capacity(aliases.len() + 2);
    names.push(StateKey::Named(state.clone()));
    names.extend(aliases.iter().cloned().map(StateKey::Named));
    names.push(StateKey::Any);
    Ok(names)
}
