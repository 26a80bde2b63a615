// transeq-core - Repetition
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A value repeated a fixed number of times, or forever.

use std::sync::{Arc, Weak};

use crate::error::Result;
use crate::seq::{Element, Seq, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Count {
    Finite(usize),
    Infinite,
}

struct Repeat<T> {
    count: Count,
    value: T,
    /// Handle to this node, so the infinite variant can return itself as its rest.
    this: Weak<Repeat<T>>,
}

fn repeat_new<T: Element>(count: Count, value: T) -> Seq<T> {
    if count == Count::Finite(0) {
        return Seq::empty();
    }
    let node: Arc<Repeat<T>> = Arc::new_cyclic(|this| Repeat {
        count,
        value,
        this: this.clone(),
    });
    Seq::from_arc(node)
}

impl<T: Element> Sequence<T> for Repeat<T> {
    fn first(&self) -> Result<Option<T>> {
        Ok(Some(self.value.clone()))
    }

    fn rest(&self) -> Result<Seq<T>> {
        Ok(match self.count {
            Count::Finite(n) if n > 1 => repeat_new(Count::Finite(n - 1), self.value.clone()),
            Count::Finite(_) => Seq::empty(),
            Count::Infinite => match self.this.upgrade() {
                Some(node) => Seq::from_arc(node),
                None => repeat_new(Count::Infinite, self.value.clone()),
            },
        })
    }
}

/// `value`, `n` times.
pub fn repeat<T: Element>(n: usize, value: T) -> Seq<T> {
    repeat_new(Count::Finite(n), value)
}

/// `value`, forever.
pub fn repeat_infinitely<T: Element>(value: T) -> Seq<T> {
    repeat_new(Count::Infinite, value)
}
