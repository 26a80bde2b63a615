// transeq-core - Lazy thunk sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Memoized deferred sequences.
//!
//! A lazy sequence wraps a producer that is run at most once, on first
//! demand. Nested lazy layers in the producer's result are unwrapped before
//! the result is memoized, so a forced thunk always stands for a concrete
//! node or the empty handle.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use crate::error::{Error, Result};
use crate::seq::{Element, Seq, Sequence};

type Producer<T> = Box<dyn FnMut() -> Result<Seq<T>> + Send>;

/// Internal state of a lazy sequence
enum LazySeqState<T> {
    /// Not yet evaluated
    Unforced(Producer<T>),
    /// Producer is running on the given thread
    Forcing(ThreadId),
    /// Evaluated and fully unwrapped
    Forced(Seq<T>),
    /// The producer panicked
    Poisoned,
}

pub(crate) struct LazySeq<T> {
    state: Mutex<LazySeqState<T>>,
    ready: Condvar,
}

/// Marks the node poisoned if the producer unwinds while forcing.
struct ForcingGuard<'a, T> {
    node: &'a LazySeq<T>,
    armed: bool,
}

impl<T> Drop for ForcingGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self
                .node
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *state = LazySeqState::Poisoned;
            self.node.ready.notify_all();
        }
    }
}

impl<T: Element> LazySeq<T> {
    fn new(producer: Producer<T>) -> Self {
        LazySeq {
            state: Mutex::new(LazySeqState::Unforced(producer)),
            ready: Condvar::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LazySeqState<T>>> {
        self.state.lock().map_err(|_| Error::Poisoned("lazy-seq"))
    }

    /// Run the producer if needed and return the memoized sequence.
    fn force_seq(&self) -> Result<Seq<T>> {
        let me = thread::current().id();
        let mut state = self.lock()?;
        let mut producer = loop {
            match std::mem::replace(&mut *state, LazySeqState::Forcing(me)) {
                LazySeqState::Forced(seq) => {
                    *state = LazySeqState::Forced(seq.clone());
                    return Ok(seq);
                }
                LazySeqState::Forcing(owner) if owner == me => {
                    *state = LazySeqState::Forcing(owner);
                    log::debug!("lazy-seq led back to itself while forcing");
                    return Err(Error::CyclicLazySeq);
                }
                LazySeqState::Forcing(owner) => {
                    *state = LazySeqState::Forcing(owner);
                    state = self
                        .ready
                        .wait(state)
                        .map_err(|_| Error::Poisoned("lazy-seq"))?;
                }
                LazySeqState::Poisoned => {
                    *state = LazySeqState::Poisoned;
                    return Err(Error::Poisoned("lazy-seq"));
                }
                LazySeqState::Unforced(producer) => break producer,
            }
        };
        drop(state);

        log::trace!("forcing lazy-seq");
        let mut guard = ForcingGuard {
            node: self,
            armed: true,
        };
        let result = producer().and_then(|seq| seq.resolve());
        guard.armed = false;

        let mut state = self.lock()?;
        let outcome = match result {
            Ok(seq) => {
                *state = LazySeqState::Forced(seq.clone());
                Ok(seq)
            }
            Err(e) => {
                *state = LazySeqState::Unforced(producer);
                Err(e)
            }
        };
        self.ready.notify_all();
        outcome
    }
}

impl<T: Element> Sequence<T> for LazySeq<T> {
    fn first(&self) -> Result<Option<T>> {
        self.force_seq()?.first()
    }

    fn rest(&self) -> Result<Seq<T>> {
        self.force_seq()?.rest()
    }

    fn force(&self) -> Result<Option<Seq<T>>> {
        self.force_seq().map(Some)
    }

    fn is_realized(&self) -> bool {
        self.state
            .lock()
            .is_ok_and(|state| matches!(*state, LazySeqState::Forced(_)))
    }

    fn detach_tail(&mut self) -> Option<Seq<T>> {
        match self.state.get_mut().unwrap_or_else(PoisonError::into_inner) {
            LazySeqState::Forced(seq) => Some(std::mem::take(seq)),
            _ => None,
        }
    }
}

/// A sequence whose contents are produced by `f` on first use.
///
/// `f` runs at most once to completion. If it fails, the error is returned
/// to the caller and the next access runs it again.
pub fn lazy_seq<T, F>(f: F) -> Seq<T>
where
    T: Element,
    F: FnMut() -> Result<Seq<T>> + Send + 'static,
{
    Seq::from_node(LazySeq::new(Box::new(f)))
}
