//! Injectable collaborator seams with scoped override-and-restore.
//!
//! Application code reads its collaborators (opener, uploader, exit hook,
//! client factory) through a [`Seam`] it was handed explicitly. A test swaps
//! one in with [`Seam::replace`]; dropping the returned guard puts the
//! previous value back, so overrides cannot leak past the test that made them.

#![allow(missing_docs)]

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A shared, swappable handle to a collaborator.
pub struct Seam<T: ?Sized> {
    name: &'static str,
    current: RwLock<Arc<T>>,
}

impl<T: ?Sized> Seam<T> {
    pub fn new(name: &'static str, value: Arc<T>) -> Self {
        Self {
            name,
            current: RwLock::new(value),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The collaborator in effect right now.
    #[must_use]
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.current.read())
    }

    /// Install `with` until the returned guard is dropped.
    #[must_use = "the override is undone as soon as the guard is dropped"]
    pub fn replace(&self, with: Arc<T>) -> SeamGuard<'_, T> {
        let previous = std::mem::replace(&mut *self.current.write(), with);
        SeamGuard {
            seam: self,
            previous: Some(previous),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Seam<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seam").field("name", &self.name).finish()
    }
}

/// Restores the overridden collaborator on drop.
pub struct SeamGuard<'a, T: ?Sized> {
    seam: &'a Seam<T>,
    previous: Option<Arc<T>>,
}

impl<T: ?Sized> Drop for SeamGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.seam.current.write() = previous;
        }
    }
}
