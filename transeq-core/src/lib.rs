// transeq-core - Lazy sequences driven by transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # transeq-core
//!
//! Lazy, memoized, possibly infinite sequences and the transducers that
//! transform them.
//!
//! Pipelines are built by nesting sequence functions; nothing is computed
//! until a consumer asks for an element, and each element is computed at
//! most once. The transformations themselves are transducers (see
//! [`xform`]), applied to a pulled source by [`xfrm_sequence`].

pub mod adapt;
pub mod cons;
pub mod display;
pub mod error;
pub mod generators;
pub mod lazy;
pub mod reduce;
pub mod reducer;
pub mod seq;
pub mod sequences;
pub mod xform;
pub mod xfrm;

pub use adapt::Conj;
pub use cons::{cons, empty};
pub use display::{get_print_length, set_print_length};
pub use error::{AritySpec, Error, InvocationKind, Result};
pub use generators::{
    RangeNum, cycle, iterate, range, range_between, range_until, repeat, repeat_infinitely,
    try_iterate,
};
pub use lazy::lazy_seq;
pub use reduce::{
    count, do_all, do_run, every, into, not_any, not_every, reduce, reduce_with, some, to_vec,
    transduce, transduce_with, transform_into,
};
pub use reducer::{
    BoxReducer, Completing, Reducer, Reduction, completing, completing_with, reduced,
};
pub use seq::{Element, Seq, SeqIter, Seqable, Sequence, first, next};
pub use sequences::{
    concat, dedupe, drop, drop_while, filter, interleave, interpose, keep, keep_indexed, map,
    map_indexed, mapcat, partition_all, partition_by, remove, replace, split_at, split_with, take,
    take_nth, take_while, try_filter, try_map,
};
pub use xform::{Transducer, TransducerExt, comp};
pub use xfrm::xfrm_sequence;
