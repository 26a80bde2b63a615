// transeq-core - Generator sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequences computed from a rule instead of stored data.

mod cycle;
mod iterate;
mod range;
mod repeat;

pub use cycle::cycle;
pub use iterate::{iterate, try_iterate};
pub use range::{RangeNum, range, range_between, range_until};
pub use repeat::{repeat, repeat_infinitely};
