//! Callback values folded over records after a transition.
//!
//! A callback takes ownership of a record, looks at the event that fired
//! and an optional shared payload, and returns the successor record. Unlike
//! transitions, where only the most specific match applies, every callback
//! slot matching the post-transition state fires, in resolution order.

use super::error::CallbackError;
use super::state::StateRecord;
use std::fmt;
use std::sync::Arc;

/// Function signature for callbacks.
///
/// The record is taken by value and a (possibly rebuilt) record is handed
/// back; the event name and payload arrive by shared reference, so a
/// callback can read the payload but never change it.
pub type CallbackFn<R> = dyn Fn(
        R,
        &<R as StateRecord>::Name,
        Option<&<R as StateRecord>::Payload>,
    ) -> Result<R, CallbackError>
    + Send
    + Sync;

/// A shareable callback value.
///
/// Callbacks are reference-counted, so cloning one (or a table full of
/// them) never copies the underlying closure.
///
/// # Example
///
/// ```rust
/// use statefold::core::Callback;
/// use statefold::record::MapRecord;
///
/// let bump = Callback::new(|record: MapRecord<&str, i32>, _event, payload| {
///     let step = payload.copied().unwrap_or(1);
///     let count = record.get("count").copied().unwrap_or(0);
///     Ok(record.insert("count", count + step))
/// });
///
/// let record = MapRecord::new();
/// let once = bump.call(record, &"advance", None).unwrap();
/// let twice = bump.call(once, &"advance", Some(&10)).unwrap();
///
/// assert_eq!(twice.get("count"), Some(&11));
/// ```
pub struct Callback<R: StateRecord> {
    inner: Arc<CallbackFn<R>>,
}

impl<R: StateRecord> Callback<R> {
    /// Wrap a closure as a callback value.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(R, &R::Name, Option<&R::Payload>) -> Result<R, CallbackError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            inner: Arc::new(callback),
        }
    }

    /// Invoke the callback.
    ///
    /// A returned error does not poison anything by itself; the engine is
    /// responsible for wrapping it and abandoning the fold.
    pub fn call(
        &self,
        record: R,
        event: &R::Name,
        payload: Option<&R::Payload>,
    ) -> Result<R, CallbackError> {
        (self.inner)(record, event, payload)
    }
}

impl<R: StateRecord> Clone for Callback<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: StateRecord> fmt::Debug for Callback<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}
