//! Call log: the append-only history of one proxied method on one instance.

#![allow(missing_docs)]

use std::fmt;
use std::sync::Arc;

/// One invocation, captured at dispatch time and never mutated afterward.
///
/// `params` holds the recorded parameter values. Shared handles (`Arc<T>`)
/// are recorded by cloning the handle, so `Arc::ptr_eq` against the value the
/// caller passed holds.
pub struct CallRecord<C> {
    /// 0-based arrival order at the method's critical section.
    pub seq: usize,
    pub params: Arc<C>,
}

impl<C> Clone for CallRecord<C> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            params: Arc::clone(&self.params),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for CallRecord<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallRecord")
            .field("seq", &self.seq)
            .field("params", &self.params)
            .finish()
    }
}

pub(crate) struct CallLog<C> {
    records: Vec<CallRecord<C>>,
}

impl<C> CallLog<C> {
    pub(crate) const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, params: C) -> usize {
        let seq = self.records.len();
        self.records.push(CallRecord {
            seq,
            params: Arc::new(params),
        });
        seq
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn snapshot(&self) -> Vec<CallRecord<C>> {
        self.records.clone()
    }
}
