// transeq-core - Sequence protocol
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The pull-based sequence protocol.
//!
//! Every sequence variant implements [`Sequence`]. Callers hold sequences
//! through [`Seq`], a cheap shared handle whose empty form is the single
//! terminal state: there is no "empty node", only the empty handle.
//!
//! Lazy variants (thunks, transducing nodes) may turn out to hold nothing
//! once forced. [`Seq::resolve`] forces such layers until a concrete node or
//! the empty handle remains; [`Seq::next`] and [`Seq::iter`] resolve for you.

use std::fmt;
use std::sync::Arc;

use crate::cons::Cons;
use crate::error::Result;

/// Bound shared by every element type that can flow through a sequence.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// A single node of a sequence.
///
/// `first`/`rest` must be referentially stable: repeated calls on the same
/// node return the same values and never re-run user functions.
pub trait Sequence<T>: Send + Sync {
    /// The element at this position, or `None` if a lazy node realized to nothing.
    fn first(&self) -> Result<Option<T>>;

    /// The sequence after this position. May be an unrealized lazy node.
    fn rest(&self) -> Result<Seq<T>>;

    /// Lazy nodes force themselves and return the sequence they stand for.
    /// Concrete nodes return `None`.
    fn force(&self) -> Result<Option<Seq<T>>> {
        Ok(None)
    }

    /// Whether any deferred work for this node has already been performed.
    fn is_realized(&self) -> bool {
        true
    }

    /// Hand over the successor this node memoized, leaving it without one.
    /// Only called on a uniquely owned node that is about to be dropped.
    fn detach_tail(&mut self) -> Option<Seq<T>> {
        None
    }
}

/// Capability of a value to produce a sequence on demand.
pub trait Seqable<T> {
    fn seq(&self) -> Result<Seq<T>>;
}

/// Shared handle to a sequence. The empty handle is the absence marker.
pub struct Seq<T>(Option<Arc<dyn Sequence<T>>>);

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq(self.0.clone())
    }
}

/// Realized chains can be arbitrarily long, so uniquely owned successors
/// are unlinked and freed in a loop rather than by nested drops.
impl<T> Drop for Seq<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(mut node) = next {
            next = Arc::get_mut(&mut node)
                .and_then(|node| node.detach_tail())
                .and_then(|mut tail| tail.0.take());
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq(None)
    }
}

impl<T: Element> Seq<T> {
    /// The empty sequence.
    pub fn empty() -> Self {
        Seq(None)
    }

    /// Wrap a node.
    pub fn from_node<S: Sequence<T> + 'static>(node: S) -> Self {
        Seq(Some(Arc::new(node)))
    }

    /// Wrap an already shared node.
    pub fn from_arc(node: Arc<dyn Sequence<T>>) -> Self {
        Seq(Some(node))
    }

    /// Prepend a value.
    pub fn cons(value: T, rest: Seq<T>) -> Self {
        Seq::from_node(Cons::new(value, rest))
    }

    /// Structural emptiness. An unrealized lazy node is not empty until forced;
    /// use [`Seq::resolve`] first when the distinction matters.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns false only for lazy nodes whose deferred work has not run yet.
    pub fn is_realized(&self) -> bool {
        self.0.as_ref().is_none_or(|node| node.is_realized())
    }

    /// The first element, or `None` for an empty sequence.
    pub fn first(&self) -> Result<Option<T>> {
        match &self.0 {
            None => Ok(None),
            Some(node) => node.first(),
        }
    }

    /// Everything after the first element, without forcing it.
    pub fn rest(&self) -> Result<Seq<T>> {
        match &self.0 {
            None => Ok(Seq::empty()),
            Some(node) => node.rest(),
        }
    }

    /// Everything after the first element, resolved so that an exhausted
    /// tail comes back as the empty handle.
    pub fn next(&self) -> Result<Seq<T>> {
        self.rest()?.resolve()
    }

    /// Force lazy layers until a concrete node or the empty handle remains.
    pub fn resolve(&self) -> Result<Seq<T>> {
        let mut current = self.clone();
        while let Some(node) = &current.0 {
            match node.force()? {
                Some(inner) => current = inner,
                None => break,
            }
        }
        Ok(current)
    }

    /// Iterate over the elements, realizing them one at a time.
    pub fn iter(&self) -> SeqIter<T> {
        SeqIter {
            cursor: Some(self.clone()),
        }
    }

    /// Returns true if both handles refer to the same node (or both are empty).
    pub fn ptr_eq(&self, other: &Seq<T>) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }

    /// Address of the head node, used for identity ordering by dynamic values.
    pub fn addr(&self) -> usize {
        self.0
            .as_ref()
            .map_or(0, |node| Arc::as_ptr(node) as *const () as usize)
    }
}

impl<T: Element> Seqable<T> for Seq<T> {
    fn seq(&self) -> Result<Seq<T>> {
        Ok(self.clone())
    }
}

impl<T: Element> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "#<seq ()>")
        } else if self.is_realized() {
            write!(f, "#<seq>")
        } else {
            write!(f, "#<seq pending>")
        }
    }
}

/// Iterator over a [`Seq`]. Yields `Err` once and stops if realization fails.
pub struct SeqIter<T> {
    cursor: Option<Seq<T>>,
}

impl<T: Element> SeqIter<T> {
    fn advance(cursor: &Seq<T>) -> Result<Option<(T, Seq<T>)>> {
        let current = cursor.resolve()?;
        match current.first()? {
            Some(value) => Ok(Some((value, current.rest()?))),
            None => Ok(None),
        }
    }
}

impl<T: Element> Iterator for SeqIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        match Self::advance(&cursor) {
            Ok(Some((value, rest))) => {
                self.cursor = Some(rest);
                Some(Ok(value))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// The first element of anything seqable.
pub fn first<T: Element>(coll: &impl Seqable<T>) -> Result<Option<T>> {
    coll.seq()?.resolve()?.first()
}

/// The resolved rest of anything seqable.
pub fn next<T: Element>(coll: &impl Seqable<T>) -> Result<Seq<T>> {
    coll.seq()?.next()
}
