// transeq-core - Arithmetic ranges
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic progressions `[start, start+step, ...)` bounded by `end`.
//!
//! The sign of `step` selects the termination test. A zero step with
//! `start != end` is an infinite constant sequence.

use num_traits::{CheckedAdd, One, Zero};

use crate::error::Result;
use crate::seq::{Element, Seq, Sequence};

/// Numbers a range can step over: any primitive integer, or `BigInt`.
pub trait RangeNum: Element + PartialOrd + Zero + CheckedAdd {}

impl<N: Element + PartialOrd + Zero + CheckedAdd> RangeNum for N {}

struct Range<N> {
    start: N,
    end: N,
    step: N,
}

/// Whether a range built from these bounds has any elements.
fn is_live<N: RangeNum>(start: &N, end: &N, step: &N) -> bool {
    let zero = N::zero();
    if *step > zero {
        start < end
    } else if *step < zero {
        start > end
    } else {
        start != end
    }
}

fn range_new<N: RangeNum>(start: N, end: N, step: N) -> Seq<N> {
    if is_live(&start, &end, &step) {
        Seq::from_node(Range { start, end, step })
    } else {
        Seq::empty()
    }
}

impl<N: RangeNum> Sequence<N> for Range<N> {
    fn first(&self) -> Result<Option<N>> {
        Ok(Some(self.start.clone()))
    }

    fn rest(&self) -> Result<Seq<N>> {
        // Overflowing the number type ends the range
        Ok(match self.start.checked_add(&self.step) {
            Some(start) => range_new(start, self.end.clone(), self.step.clone()),
            None => Seq::empty(),
        })
    }
}

/// The numbers `[start, start+step, ...)` up to but excluding `end`.
pub fn range<N: RangeNum>(start: N, end: N, step: N) -> Seq<N> {
    range_new(start, end, step)
}

/// The numbers `[0, end)`.
pub fn range_until<N: RangeNum + One>(end: N) -> Seq<N> {
    range_new(N::zero(), end, N::one())
}

/// The numbers `[start, end)`.
pub fn range_between<N: RangeNum + One>(start: N, end: N) -> Seq<N> {
    range_new(start, end, N::one())
}
