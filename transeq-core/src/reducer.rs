// transeq-core - Reducer protocol
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The three-operation reducing protocol shared by folds and transducers.
//!
//! A reducer supplies an initial accumulator (`init`), folds one element into
//! an accumulator (`step`), and finishes the accumulator once input ends
//! (`complete`). `step` signals early termination by returning
//! [`Reduction::Reduced`].

use crate::error::{Error, Result};

/// Outcome of a single reducing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction<A> {
    /// Keep feeding input
    Continue(A),
    /// Stop pulling input; this is the final accumulator
    Reduced(A),
}

impl<A> Reduction<A> {
    pub fn is_reduced(&self) -> bool {
        matches!(self, Reduction::Reduced(_))
    }

    /// The accumulator, whether or not reduction stopped.
    pub fn unreduced(self) -> A {
        match self {
            Reduction::Continue(a) | Reduction::Reduced(a) => a,
        }
    }

    /// Mark as reduced. Already reduced values are left as they are.
    pub fn ensure_reduced(self) -> Self {
        Reduction::Reduced(self.unreduced())
    }

    /// Transform the accumulator, keeping the termination flag.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Reduction<B> {
        match self {
            Reduction::Continue(a) => Reduction::Continue(f(a)),
            Reduction::Reduced(a) => Reduction::Reduced(f(a)),
        }
    }
}

/// Wrap an accumulator to stop the reduction.
pub fn reduced<A>(acc: A) -> Reduction<A> {
    Reduction::Reduced(acc)
}

/// A reducing function over accumulators `A` and elements `E`.
pub trait Reducer<A, E>: Send {
    /// The accumulator to start from when the caller supplies none.
    fn init(&mut self) -> Result<A>;

    /// Fold one element into the accumulator.
    fn step(&mut self, acc: A, item: E) -> Result<Reduction<A>>;

    /// Finish the accumulator. Called exactly once, after the last step.
    fn complete(&mut self, acc: A) -> Result<A>;
}

impl<A, E, R: Reducer<A, E> + ?Sized> Reducer<A, E> for Box<R> {
    fn init(&mut self) -> Result<A> {
        (**self).init()
    }

    fn step(&mut self, acc: A, item: E) -> Result<Reduction<A>> {
        (**self).step(acc, item)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        (**self).complete(acc)
    }
}

/// Type-erased reducer, the output of applying a transducer.
pub type BoxReducer<A, E> = Box<dyn Reducer<A, E>>;

/// A plain fold function lifted into a reducer whose `complete` is the
/// identity.
pub struct Completing<F, I> {
    f: F,
    init: Option<I>,
}

impl<A, E, F, I> Reducer<A, E> for Completing<F, I>
where
    F: FnMut(A, E) -> A + Send,
    I: FnMut() -> A + Send,
{
    fn init(&mut self) -> Result<A> {
        match &mut self.init {
            Some(init) => Ok(init()),
            None => Err(Error::no_init()),
        }
    }

    fn step(&mut self, acc: A, item: E) -> Result<Reduction<A>> {
        Ok(Reduction::Continue((self.f)(acc, item)))
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        Ok(acc)
    }
}

/// Lift `f` into a reducer with no `init`.
pub fn completing<A, E, F>(f: F) -> Completing<F, fn() -> A>
where
    F: FnMut(A, E) -> A + Send,
{
    Completing { f, init: None }
}

/// Lift `f` into a reducer whose `init` calls `init`.
pub fn completing_with<A, E, F, I>(init: I, f: F) -> Completing<F, I>
where
    F: FnMut(A, E) -> A + Send,
    I: FnMut() -> A + Send,
{
    Completing {
        f,
        init: Some(init),
    }
}
