//! Mock control state: per-method, per-instance mode plus call log.
//!
//! Generated proxies call [`MethodMock::enter`] with the recorded parameters
//! and act on the returned [`Dispatch`]. `enter` is the only critical section:
//! the log append, the mode read and the canned-value pop all happen under one
//! lock, and the real or fake implementation runs after the lock is released.
//! Log order is therefore arrival order at `enter`, not completion order.

#![allow(missing_docs)]

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::runtime::log::{CallLog, CallRecord};

/// Observable mode of a proxied method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Passthrough,
    FixedReturn,
    Dynamic,
}

/// What the proxy must do for the call that was just recorded.
pub enum Dispatch<F: ?Sized, R> {
    /// Invoke the real implementation.
    Real,
    /// Return this canned value without touching the real implementation.
    Return(R),
    /// Invoke the test-supplied fake.
    Fake(Arc<F>),
}

impl<F: ?Sized, R> Dispatch<F, R> {
    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Real => ModeKind::Passthrough,
            Self::Return(_) => ModeKind::FixedReturn,
            Self::Fake(_) => ModeKind::Dynamic,
        }
    }
}

type Terminal<R> = Arc<dyn Fn() -> R + Send + Sync>;

mod sealed {
    pub trait Sealed<R> {}

    impl<R> Sealed<R> for R {}
}

/// A value that can be handed out on every call.
///
/// Implemented for `R` alone, so a `V: Canned<R>` bound pins `V` to `R` during
/// inference.
pub trait Canned<R>: sealed::Sealed<R> {
    fn into_terminal(self) -> Arc<dyn Fn() -> R + Send + Sync>;
}

impl<R> Canned<R> for R
where
    R: Clone + Send + Sync + 'static,
{
    fn into_terminal(self) -> Arc<dyn Fn() -> R + Send + Sync> {
        Arc::new(move || self.clone())
    }
}

/// Canned results consumed one per call; the terminal value repeats forever.
struct ReturnQueue<R> {
    pending: VecDeque<R>,
    terminal: Terminal<R>,
}

impl<R> ReturnQueue<R> {
    fn next(&mut self) -> R {
        match self.pending.pop_front() {
            Some(value) => value,
            None => (self.terminal)(),
        }
    }
}

enum Mode<F: ?Sized, R> {
    Passthrough,
    FixedReturn(ReturnQueue<R>),
    Dynamic(Arc<F>),
}

impl<F: ?Sized, R> Mode<F, R> {
    const fn kind(&self) -> ModeKind {
        match self {
            Self::Passthrough => ModeKind::Passthrough,
            Self::FixedReturn(_) => ModeKind::FixedReturn,
            Self::Dynamic(_) => ModeKind::Dynamic,
        }
    }
}

struct ControlState<C, F: ?Sized, R> {
    mode: Mode<F, R>,
    log: CallLog<C>,
}

/// Control state for one proxied method on one instance.
///
/// * `C`: recorded parameters (one generated struct per method)
/// * `F`: fake signature, e.g. `dyn Fn(&str, Vec<u8>) -> Result<(), E> + Send + Sync`
/// * `R`: the method's return type
pub struct MethodMock<C, F: ?Sized, R> {
    method: &'static str,
    state: Mutex<ControlState<C, F, R>>,
}

impl<C, F: ?Sized, R> MethodMock<C, F, R> {
    /// Fresh state: passthrough, empty log.
    #[must_use]
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            state: Mutex::new(ControlState {
                mode: Mode::Passthrough,
                log: CallLog::new(),
            }),
        }
    }

    /// Qualified method name, e.g. `S3Client::put_object`.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        self.method
    }

    /// Record a call and decide how to serve it.
    pub fn enter(&self, params: C) -> Dispatch<F, R> {
        let mut state = self.state.lock();
        state.log.append(params);
        match &mut state.mode {
            Mode::Passthrough => Dispatch::Real,
            Mode::FixedReturn(queue) => Dispatch::Return(queue.next()),
            Mode::Dynamic(fake) => Dispatch::Fake(Arc::clone(fake)),
        }
    }

    /// Serve every call with a freshly built zero value.
    pub fn stub_with<Z>(&self, zero: Z)
    where
        Z: Fn() -> R + Send + Sync + 'static,
    {
        self.set_mode(Mode::FixedReturn(ReturnQueue {
            pending: VecDeque::new(),
            terminal: Arc::new(zero),
        }));
    }

    /// Serve every call with `value`.
    ///
    /// `V` is always `R`; the `Clone` requirement only applies where this is
    /// called.
    pub fn returns<V: Canned<R>>(&self, value: V) {
        self.set_mode(Mode::FixedReturn(ReturnQueue {
            pending: VecDeque::new(),
            terminal: value.into_terminal(),
        }));
    }

    /// Route every call to `fake`.
    pub fn fake(&self, fake: Arc<F>) {
        self.set_mode(Mode::Dynamic(fake));
    }

    /// Route calls back to the real implementation.
    pub fn passthrough(&self) {
        self.set_mode(Mode::Passthrough);
    }

    /// Snapshot of the call log in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<CallRecord<C>> {
        self.state.lock().log.snapshot()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.lock().log.len()
    }

    #[must_use]
    pub fn mode(&self) -> ModeKind {
        self.state.lock().mode.kind()
    }

    fn set_mode(&self, mode: Mode<F, R>) {
        self.state.lock().mode = mode;
    }
}

impl<C, F: ?Sized, R> MethodMock<C, F, R>
where
    R: Clone + Send + Sync + 'static,
{
    /// Serve calls with `first`, then each of `rest` in order; the last value
    /// supplied keeps being returned once the sequence is exhausted.
    pub fn returns_in_order<I>(&self, first: R, rest: I)
    where
        I: IntoIterator<Item = R>,
    {
        let mut tail: Vec<R> = rest.into_iter().collect();
        let (pending, last) = match tail.pop() {
            Some(last) => (std::iter::once(first).chain(tail).collect(), last),
            None => (VecDeque::new(), first),
        };
        self.set_mode(Mode::FixedReturn(ReturnQueue {
            pending,
            terminal: Arc::new(move || last.clone()),
        }));
    }
}

impl<C, F: ?Sized, R> fmt::Debug for MethodMock<C, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MethodMock")
            .field("method", &self.method)
            .field("mode", &state.mode.kind())
            .field("calls", &state.log.len())
            .finish()
    }
}
