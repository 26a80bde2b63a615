// transeq-core - Error types for sequence realization
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for transeq.
//!
//! Errors are raised synchronously by whichever call triggered realization
//! (`first`, `rest`, an eager driver, ...). Nothing in the crate retries or
//! recovers; an error simply aborts the pull at the point of failure.

use std::fmt;

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or realizing sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value with no known adaptation was converted to a sequence
    UnsupportedType(&'static str),
    /// Conjoining onto a container that cannot accept elements
    UnsupportedConjoinTarget(&'static str),
    /// A caller-supplied function was invoked with incompatible arguments
    InvocationError {
        name: Option<String>,
        kind: InvocationKind,
    },
    /// Realizing a lazy or transducing sequence led back to the same node
    CyclicLazySeq,
    /// A panic occurred while the named node was being realized
    Poisoned(&'static str),
}

/// What went wrong when invoking a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationKind {
    /// Wrong number of arguments
    Arity { expected: AritySpec, got: usize },
    /// An argument could not be adapted to the parameter type
    ArgType {
        position: Option<usize>,
        expected: &'static str,
        got: &'static str,
    },
    /// The value is not a function
    NotCallable(&'static str),
    /// A reducing function was asked for an initial value it cannot supply
    NoInit,
}

/// Specification for expected arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
}

impl AritySpec {
    /// Returns true if a call with `n` arguments satisfies this arity.
    pub fn accepts(&self, n: usize) -> bool {
        match *self {
            AritySpec::Exact(k) => n == k,
            AritySpec::AtLeast(k) => n >= k,
            AritySpec::Range(min, max) => n >= min && n <= max,
        }
    }
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationKind::Arity { expected, got } => {
                write!(
                    f,
                    "wrong number of arguments: expected {}, got {}",
                    expected, got
                )
            }
            InvocationKind::ArgType {
                position: Some(pos),
                expected,
                got,
            } => write!(f, "argument {}: expected {}, got {}", pos, expected, got),
            InvocationKind::ArgType {
                position: None,
                expected,
                got,
            } => write!(f, "expected {}, got {}", expected, got),
            InvocationKind::NotCallable(got) => write!(f, "cannot call value of type {}", got),
            InvocationKind::NoInit => write!(f, "reducing function has no init arity"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedType(type_name) => {
                write!(f, "Don't know how to create a sequence from {}", type_name)
            }
            Error::UnsupportedConjoinTarget(type_name) => {
                write!(f, "Cannot conj onto {}", type_name)
            }
            Error::InvocationError {
                name: Some(name),
                kind,
            } => write!(f, "Invocation of '{}' failed: {}", name, kind),
            Error::InvocationError { name: None, kind } => {
                write!(f, "Invocation failed: {}", kind)
            }
            Error::CyclicLazySeq => {
                write!(f, "lazy sequence forced itself while being realized")
            }
            Error::Poisoned(node) => {
                write!(f, "Internal error: {} was poisoned by an earlier panic", node)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an arity error for a function with a known name.
    pub fn arity_named(name: impl Into<String>, expected: AritySpec, got: usize) -> Self {
        Error::InvocationError {
            name: Some(name.into()),
            kind: InvocationKind::Arity { expected, got },
        }
    }

    /// Create an argument type error with no position information yet.
    pub fn type_mismatch(expected: &'static str, got: &'static str) -> Self {
        Error::InvocationError {
            name: None,
            kind: InvocationKind::ArgType {
                position: None,
                expected,
                got,
            },
        }
    }

    /// Create a not-callable error.
    pub fn not_callable(got: &'static str) -> Self {
        Error::InvocationError {
            name: None,
            kind: InvocationKind::NotCallable(got),
        }
    }

    /// Create the error raised when a reducer without an init arity is asked for one.
    pub fn no_init() -> Self {
        Error::InvocationError {
            name: None,
            kind: InvocationKind::NoInit,
        }
    }

    /// Attach a function name to an invocation error that lacks one.
    pub fn in_fn(self, fn_name: &str) -> Self {
        match self {
            Error::InvocationError { name: None, kind } => Error::InvocationError {
                name: Some(fn_name.to_string()),
                kind,
            },
            other => other,
        }
    }

    /// Record which argument an argument type error refers to.
    pub fn at_position(self, pos: usize) -> Self {
        match self {
            Error::InvocationError {
                name,
                kind:
                    InvocationKind::ArgType {
                        position: None,
                        expected,
                        got,
                    },
            } => Error::InvocationError {
                name,
                kind: InvocationKind::ArgType {
                    position: Some(pos),
                    expected,
                    got,
                },
            },
            other => other,
        }
    }

    /// Returns true for errors raised by invoking caller-supplied functions.
    pub fn is_invocation_error(&self) -> bool {
        matches!(self, Error::InvocationError { .. })
    }
}
