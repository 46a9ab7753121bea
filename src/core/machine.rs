//! Machine descriptor: the declarative tables that drive evaluation.
//!
//! A [`Machine`] is plain data attached to a state record. It says where the
//! record currently is, which events move it where, which callbacks to fold
//! after a move, and which extra names a state answers to. The engine reads
//! these tables; it never holds state of its own.

use super::callback::Callback;
use super::state::StateRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Lookup key for transition sources and callback slots.
///
/// Keys are either a concrete state name or the wildcard, which matches any
/// current state. Keeping the wildcard out of the name type means no caller
/// name can ever collide with it.
///
/// # Example
///
/// ```rust
/// use statefold::core::StateKey;
///
/// let named: StateKey<&str> = "review".into();
/// assert_eq!(named, StateKey::Named("review"));
/// assert_eq!(named.to_string(), "review");
/// assert_eq!(StateKey::<&str>::Any.to_string(), "*");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKey<N> {
    /// A concrete state name.
    Named(N),
    /// The wildcard: matches whatever state the record is in.
    Any,
}

impl<N> From<N> for StateKey<N> {
    fn from(name: N) -> Self {
        StateKey::Named(name)
    }
}

impl<N: fmt::Display> fmt::Display for StateKey<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Named(name) => name.fmt(f),
            StateKey::Any => f.write_str("*"),
        }
    }
}

/// One value or an ordered list of them.
///
/// Alias declarations and callback slots accept either shape; both are
/// normalized to a list at construction time, so evaluation never branches
/// on which form the caller wrote.
///
/// # Example
///
/// ```rust
/// use statefold::core::OneOrMany;
///
/// let one: OneOrMany<&str> = "aliased".into();
/// let many: OneOrMany<&str> = vec!["aliased", "blessed"].into();
///
/// assert_eq!(one.into_vec(), vec!["aliased"]);
/// assert_eq!(many.into_vec(), vec!["aliased", "blessed"]);
/// ```
///
/// On the wire the two shapes stay distinct: a bare value or an array.
///
/// ```rust
/// use statefold::core::OneOrMany;
///
/// let one: OneOrMany<String> = serde_json::from_str("\"draft\"").unwrap();
/// let many: OneOrMany<String> = serde_json::from_str("[\"draft\", \"final\"]").unwrap();
///
/// assert_eq!(one, OneOrMany::One("draft".to_string()));
/// assert_eq!(
///     many,
///     OneOrMany::Many(vec!["draft".to_string(), "final".to_string()])
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// An ordered list of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalize to a list, preserving declaration order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

/// Event name to (source key to target name).
///
/// The source key may be the wildcard; targets are always concrete names.
pub type TransitionTable<N> = HashMap<N, HashMap<StateKey<N>, N>>;

/// State key to ordered callbacks fired after arriving at a matching state.
pub type CallbackTable<R> = HashMap<StateKey<<R as StateRecord>::Name>, Vec<Callback<R>>>;

/// State name to the extra names it answers to, in declaration order.
pub type AliasTable<N> = HashMap<N, Vec<N>>;

/// The machine descriptor a state record carries.
///
/// `current` and `transitions` are required for a descriptor to be usable,
/// but optional at the type level so half-built descriptors can exist and
/// be rejected by [`validate`](crate::engine::validate) instead of being
/// unrepresentable. The callback and alias tables default to empty, which
/// evaluation treats the same as absent.
///
/// Tables sit behind [`Arc`], so descriptors clone cheaply and successor
/// records share them structurally.
///
/// # Example
///
/// Descriptors are usually assembled with
/// [`MachineBuilder`](crate::builder::MachineBuilder), but they are plain
/// data and can be written out by hand:
///
/// ```rust
/// use statefold::core::{Machine, StateKey};
/// use statefold::record::MapRecord;
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let mut begin = HashMap::new();
/// begin.insert(StateKey::Named("new"), "started");
///
/// let mut transitions = HashMap::new();
/// transitions.insert("begin", begin);
///
/// let machine: Machine<MapRecord<&str, i32>> = Machine {
///     current: Some("new"),
///     transitions: Some(Arc::new(transitions)),
///     callbacks: Arc::new(HashMap::new()),
///     aliases: Arc::new(HashMap::new()),
/// };
///
/// let moved = machine.with_current("started");
/// assert_eq!(moved.current, Some("started"));
/// assert_eq!(machine.current, Some("new"));
/// ```
pub struct Machine<R: StateRecord> {
    /// Name of the state the record is in right now.
    pub current: Option<R::Name>,
    /// The transition table. Required for any movement.
    pub transitions: Option<Arc<TransitionTable<R::Name>>>,
    /// Callbacks folded over the record after each transition.
    pub callbacks: Arc<CallbackTable<R>>,
    /// Alias names consulted when the exact state has no entry.
    pub aliases: Arc<AliasTable<R::Name>>,
}

impl<R: StateRecord> Machine<R> {
    /// Successor descriptor pointing at `name`.
    ///
    /// Tables are shared with `self`, not copied.
    pub fn with_current(&self, name: R::Name) -> Self {
        let mut next = self.clone();
        next.current = Some(name);
        next
    }
}

impl<R: StateRecord> Clone for Machine<R> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            transitions: self.transitions.clone(),
            callbacks: Arc::clone(&self.callbacks),
            aliases: Arc::clone(&self.aliases),
        }
    }
}

impl<R: StateRecord> Default for Machine<R> {
    fn default() -> Self {
        Self {
            current: None,
            transitions: None,
            callbacks: Arc::new(HashMap::new()),
            aliases: Arc::new(HashMap::new()),
        }
    }
}

impl<R: StateRecord> fmt::Debug for Machine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("transitions", &self.transitions)
            .field("callbacks", &self.callbacks)
            .field("aliases", &self.aliases)
            .finish()
    }
}
