// transeq - Lazy, transducer-driven sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # transeq
//!
//! Lazy, memoized, possibly infinite sequences transformed by reusable
//! transducers.
//!
//! This crate re-exports the typed engine from [`transeq_core`] at the root
//! and the dynamic value layer as [`value`]. Most callers only need the
//! [`prelude`].
//!
//! ```rust
//! use transeq::prelude::*;
//!
//! let evens_plus_one = map(|x: i64| x + 1, filter(|x: &i64| x % 2 == 0, range_until(10i64)));
//! assert_eq!(evens_plus_one.render().unwrap(), "(1 3 5 7 9)");
//!
//! let xf = xform::filter(|x: &i64| x % 3 == 0).comp(xform::take(3));
//! let firsts = xfrm_sequence(&xf, iterate(|x: &i64| x + 1, 1));
//! assert_eq!(to_vec(firsts).unwrap(), vec![3, 6, 9]);
//! ```

pub use transeq_core::*;

/// The dynamic value layer.
pub use transeq_value as value;

/// Everything needed to build and consume pipelines.
pub mod prelude {
    pub use transeq_core::xform::{self, Transducer, TransducerExt};
    pub use transeq_core::{
        Conj, Error, Reducer, Reduction, Seq, Seqable, Sequence, concat, cons, count,
        cycle, dedupe, drop_while, empty, every, filter, first, interleave, interpose, into,
        iterate, keep, keep_indexed, lazy_seq, map, map_indexed, mapcat, next, partition_all,
        partition_by, range, range_between, range_until, reduce, reduced, remove, repeat,
        repeat_infinitely, some, split_at, split_with, take, take_nth, take_while, to_vec,
        transduce, transform_into, xfrm_sequence,
    };
    pub use transeq_value::{DynFn, Value};
}
