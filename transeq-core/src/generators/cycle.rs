// transeq-core - Cycling
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Endless repetition of a sequence's elements.

use crate::error::Result;
use crate::lazy::lazy_seq;
use crate::seq::{Element, Seq, Sequence};

/// `current` walks `all`; when it runs out, the position resets to `all`.
/// Both are resolved and non-empty.
struct Cycle<T> {
    all: Seq<T>,
    current: Seq<T>,
}

impl<T: Element> Sequence<T> for Cycle<T> {
    fn first(&self) -> Result<Option<T>> {
        self.current.first()
    }

    fn rest(&self) -> Result<Seq<T>> {
        let next = self.current.next()?;
        let current = if next.is_empty() {
            self.all.clone()
        } else {
            next
        };
        Ok(Seq::from_node(Cycle {
            all: self.all.clone(),
            current,
        }))
    }
}

/// The elements of `coll`, repeated forever. Empty if `coll` is empty.
///
/// Nothing is realized until the result is first touched.
pub fn cycle<T: Element>(coll: impl Into<Seq<T>>) -> Seq<T> {
    let coll = coll.into();
    if coll.is_empty() {
        return Seq::empty();
    }
    lazy_seq(move || {
        let all = coll.resolve()?;
        if all.is_empty() {
            return Ok(Seq::empty());
        }
        Ok(Seq::from_node(Cycle {
            current: all.clone(),
            all,
        }))
    })
}
