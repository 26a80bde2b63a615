// transeq-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for transeq-core integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`init_logging`] - Route `log` output through `env_logger` in test mode
//! - [`collect`] - Realize a sequence into a `Vec`, panicking on error
//! - [`CallCounter`] - Count how often a user function runs
//!
//! # Macros
//!
//! - [`assert_seq!`] - Assert a sequence realizes to the given elements
//! - [`assert_renders!`] - Assert a sequence's printed form

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[allow(unused_imports)]
pub use transeq_core::{Element, Seq};

/// Install `env_logger` once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Realize every element of `s`.
///
/// # Panics
///
/// Panics if realization fails.
#[must_use]
pub fn collect<T: Element>(s: &Seq<T>) -> Vec<T> {
    s.iter()
        .collect::<transeq_core::Result<Vec<T>>>()
        .expect("sequence realization failed")
}

/// Shared counter for asserting how often a closure has been invoked.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct CallCounter(Arc<AtomicUsize>);

#[allow(dead_code)]
impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Assert that a sequence realizes to exactly the listed elements.
///
/// # Example
///
/// ```ignore
/// assert_seq!(range_until(3i64), [0, 1, 2]);
/// ```
#[macro_export]
macro_rules! assert_seq {
    ($seq:expr, [$($item:expr),* $(,)?]) => {
        let seq = $seq;
        let items = $crate::common::collect(&seq);
        assert_eq!(items, vec![$($item),*], "sequence did not match expected");
    };
}

/// Assert the printed form of a sequence.
///
/// # Example
///
/// ```ignore
/// assert_renders!(range_until(3i64), "(0 1 2)");
/// ```
#[macro_export]
macro_rules! assert_renders {
    ($seq:expr, $expected:expr) => {
        let rendered = $seq.render();
        assert!(rendered.is_ok(), "rendering failed: {:?}", rendered.err());
        assert_eq!(rendered.unwrap(), $expected);
    };
}
