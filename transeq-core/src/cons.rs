// transeq-core - Cons cells
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Realized cons cells. Transducing nodes materialize their buffered
//! output as a chain of these.

use crate::error::Result;
use crate::seq::{Element, Seq, Sequence};

pub(crate) struct Cons<T> {
    first: T,
    rest: Seq<T>,
}

impl<T> Cons<T> {
    pub(crate) fn new(first: T, rest: Seq<T>) -> Self {
        Cons { first, rest }
    }
}

impl<T: Element> Sequence<T> for Cons<T> {
    fn first(&self) -> Result<Option<T>> {
        Ok(Some(self.first.clone()))
    }

    fn rest(&self) -> Result<Seq<T>> {
        Ok(self.rest.clone())
    }

    fn detach_tail(&mut self) -> Option<Seq<T>> {
        Some(std::mem::take(&mut self.rest))
    }
}

/// Prepend `value` to `coll`.
pub fn cons<T: Element>(value: T, coll: impl Into<Seq<T>>) -> Seq<T> {
    Seq::cons(value, coll.into())
}

/// The empty sequence.
pub fn empty<T: Element>() -> Seq<T> {
    Seq::empty()
}

/// Build a realized sequence from the items of an iterator, tail last.
pub(crate) fn list_with_tail<T: Element>(
    items: impl DoubleEndedIterator<Item = T>,
    tail: Seq<T>,
) -> Seq<T> {
    items.rev().fold(tail, |rest, item| Seq::cons(item, rest))
}
