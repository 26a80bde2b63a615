// transeq-core - Transducing sequence adapter
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lazily applies a transducer to a pulled source.
//!
//! A transducer is push-driven: it is handed one input at a time and may
//! emit zero, one or many outputs for it, or more during `complete`. A
//! sequence is pull-driven. The adapter bridges the two by realizing one
//! node at a time: it feeds upstream elements into the step function until
//! at least one output has been buffered (or input ends, or the step
//! function signals `Reduced`), then exposes the buffer as a chain of cons
//! cells whose tail is the next unrealized node.
//!
//! All nodes of one adapted sequence share a single step function, so
//! stateful transducers see every input exactly once, in order.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use crate::cons::list_with_tail;
use crate::error::{Error, Result};
use crate::reducer::{BoxReducer, Reducer, Reduction};
use crate::seq::{Element, Seq, Sequence};
use crate::xform::Transducer;

// ============================================================================
// Buffer
// ============================================================================

/// Outputs gathered during one realization pass.
struct Buffer<T>(Vec<T>);

impl<T: Element> Buffer<T> {
    fn new() -> Self {
        Buffer(Vec::new())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn materialize(self, tail: Seq<T>) -> Seq<T> {
        list_with_tail(self.0.into_iter(), tail)
    }
}

/// The innermost reducer: appends every output to the buffer.
struct BufferAppend;

impl<T: Element> Reducer<Buffer<T>, T> for BufferAppend {
    fn init(&mut self) -> Result<Buffer<T>> {
        Ok(Buffer::new())
    }

    fn step(&mut self, mut acc: Buffer<T>, item: T) -> Result<Reduction<Buffer<T>>> {
        acc.0.push(item);
        Ok(Reduction::Continue(acc))
    }

    fn complete(&mut self, acc: Buffer<T>) -> Result<Buffer<T>> {
        Ok(acc)
    }
}

// ============================================================================
// Step function
// ============================================================================

/// The transducer applied to [`BufferAppend`], shared by every node of one
/// adapted sequence.
///
/// Once `step` or `complete` has failed the transducer's state can no longer
/// be trusted, so the error is kept and handed to every later realization.
struct StepFn<In, Out> {
    rf: BoxReducer<Buffer<Out>, In>,
    completed: bool,
    failed: Option<Error>,
}

impl<In: Element, Out: Element> StepFn<In, Out> {
    fn fail(&mut self, e: Error) -> Error {
        log::debug!("step function failed: {}", e);
        self.failed = Some(e.clone());
        e
    }

    fn feed(&mut self, buffer: Buffer<Out>, item: In) -> Result<Reduction<Buffer<Out>>> {
        self.rf.step(buffer, item).map_err(|e| self.fail(e))
    }

    /// Run `complete` on the final buffer and close the sequence.
    fn finish(&mut self, buffer: Buffer<Out>) -> Result<Seq<Out>> {
        let buffer = self.rf.complete(buffer).map_err(|e| self.fail(e))?;
        self.completed = true;
        log::debug!("step function completed with {} buffered", buffer.0.len());
        Ok(buffer.materialize(Seq::empty()))
    }
}

type SharedStep<In, Out> = Arc<Mutex<StepFn<In, Out>>>;

thread_local! {
    /// Step functions currently running on this thread, by address.
    static RUNNING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a step function as running on this thread until dropped.
struct Running(usize);

impl Running {
    fn addr<In, Out>(step: &SharedStep<In, Out>) -> usize {
        Arc::as_ptr(step) as usize
    }

    fn enter(addr: usize) -> Self {
        RUNNING.with_borrow_mut(|running| running.push(addr));
        Running(addr)
    }

    fn is_running(addr: usize) -> bool {
        RUNNING.with_borrow(|running| running.contains(&addr))
    }
}

impl Drop for Running {
    fn drop(&mut self) {
        RUNNING.with_borrow_mut(|running| {
            if let Some(pos) = running.iter().rposition(|&addr| addr == self.0) {
                running.remove(pos);
            }
        });
    }
}

// ============================================================================
// Node
// ============================================================================

enum XfrmState<In, Out> {
    /// Not realized yet: holds the upstream position
    Pending(Seq<In>),
    Realized(Seq<Out>),
}

struct XfrmSeq<In, Out> {
    step: SharedStep<In, Out>,
    state: Mutex<XfrmState<In, Out>>,
}

impl<In: Element, Out: Element> XfrmSeq<In, Out> {
    fn pending(step: SharedStep<In, Out>, upstream: Seq<In>) -> Seq<Out> {
        Seq::from_node(XfrmSeq {
            step,
            state: Mutex::new(XfrmState::Pending(upstream)),
        })
    }

    fn lock_state(&self, reentrant: bool) -> Result<MutexGuard<'_, XfrmState<In, Out>>> {
        if !reentrant {
            return self
                .state
                .lock()
                .map_err(|_| Error::Poisoned("transducing sequence"));
        }
        // This thread is inside the step function already and may hold this
        // node's lock.
        match self.state.try_lock() {
            Ok(state) => Ok(state),
            Err(TryLockError::WouldBlock) => Err(Error::CyclicLazySeq),
            Err(TryLockError::Poisoned(_)) => Err(Error::Poisoned("transducing sequence")),
        }
    }

    /// Realize this node once and return the materialized batch.
    ///
    /// On failure the node stays pending at the first input the step
    /// function has not consumed.
    fn realize(&self) -> Result<Seq<Out>> {
        let addr = Running::addr(&self.step);
        let reentrant = Running::is_running(addr);
        let mut state = self.lock_state(reentrant)?;
        let mut upstream = match &*state {
            XfrmState::Realized(out) => return Ok(out.clone()),
            XfrmState::Pending(upstream) => upstream.clone(),
        };
        if reentrant {
            log::debug!("transducing sequence pulled from itself while realizing");
            return Err(Error::CyclicLazySeq);
        }

        let _running = Running::enter(addr);
        let mut step = self
            .step
            .lock()
            .map_err(|_| Error::Poisoned("step function"))?;
        let outcome = Self::pull(&self.step, &mut step, &mut upstream);
        match outcome {
            Ok(out) => {
                *state = XfrmState::Realized(out.clone());
                Ok(out)
            }
            Err(e) => {
                *state = XfrmState::Pending(upstream);
                Err(e)
            }
        }
    }

    /// Feed upstream elements through the step function until it has
    /// output to show. `upstream` is advanced past every consumed input.
    fn pull(
        shared: &SharedStep<In, Out>,
        step: &mut StepFn<In, Out>,
        upstream: &mut Seq<In>,
    ) -> Result<Seq<Out>> {
        if let Some(e) = &step.failed {
            return Err(e.clone());
        }
        if step.completed {
            return Ok(Seq::empty());
        }
        log::trace!("realizing transducing sequence node");

        let mut buffer = Buffer::new();
        loop {
            let Some(item) = upstream.first()? else {
                return step.finish(buffer);
            };
            let after = upstream.rest()?;
            let result = step.feed(buffer, item)?;
            *upstream = after;
            let stop = result.is_reduced();
            buffer = result.unreduced();

            if stop || upstream.is_empty() {
                return step.finish(buffer);
            }
            if !buffer.is_empty() {
                let child = XfrmSeq::pending(Arc::clone(shared), upstream.clone());
                return Ok(buffer.materialize(child));
            }
        }
    }
}

impl<In: Element, Out: Element> Sequence<Out> for XfrmSeq<In, Out> {
    fn first(&self) -> Result<Option<Out>> {
        self.realize()?.first()
    }

    fn rest(&self) -> Result<Seq<Out>> {
        self.realize()?.rest()
    }

    fn force(&self) -> Result<Option<Seq<Out>>> {
        self.realize().map(Some)
    }

    fn is_realized(&self) -> bool {
        self.state
            .lock()
            .is_ok_and(|state| matches!(*state, XfrmState::Realized(_)))
    }

    fn detach_tail(&mut self) -> Option<Seq<Out>> {
        match self.state.get_mut().unwrap_or_else(PoisonError::into_inner) {
            XfrmState::Realized(out) => Some(std::mem::take(out)),
            XfrmState::Pending(_) => None,
        }
    }
}

/// Lazily apply `xf` to `source`.
///
/// Nothing is pulled from `source` until the result is first touched. An
/// empty source yields the empty sequence without applying `xf`.
///
/// An error from `xf` ends the sequence: the failing node and every node
/// after it return that error from then on. Errors from `source` leave the
/// node pending, so a later pull retries from the element that failed. A
/// function inside `xf` that pulls from the sequence it is producing gets
/// [`Error::CyclicLazySeq`].
pub fn xfrm_sequence<In, Out, X>(xf: &X, source: Seq<In>) -> Seq<Out>
where
    In: Element,
    Out: Element,
    X: Transducer<In, Out> + ?Sized,
{
    if source.is_empty() {
        return Seq::empty();
    }
    let step = StepFn {
        rf: xf.apply(BufferAppend),
        completed: false,
        failed: None,
    };
    XfrmSeq::pending(Arc::new(Mutex::new(step)), source)
}
