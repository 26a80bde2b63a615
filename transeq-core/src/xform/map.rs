// transeq-core - Element-wise transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use super::Transducer;
use crate::error::Result;
use crate::reducer::{BoxReducer, Reducer, Reduction};

// ============================================================================
// map / try_map
// ============================================================================

pub struct Map<In, Out> {
    f: Arc<dyn Fn(In) -> Result<Out> + Send + Sync>,
}

impl<In, Out> Clone for Map<In, Out> {
    fn clone(&self) -> Self {
        Map {
            f: Arc::clone(&self.f),
        }
    }
}

/// Apply `f` to every element.
pub fn map<In, Out, F>(f: F) -> Map<In, Out>
where
    F: Fn(In) -> Out + Send + Sync + 'static,
{
    Map {
        f: Arc::new(move |x| Ok(f(x))),
    }
}

/// Apply a fallible `f` to every element. The first error aborts the pull.
pub fn try_map<In, Out, F>(f: F) -> Map<In, Out>
where
    F: Fn(In) -> Result<Out> + Send + Sync + 'static,
{
    Map { f: Arc::new(f) }
}

struct MapStep<R, In, Out> {
    rf: R,
    f: Arc<dyn Fn(In) -> Result<Out> + Send + Sync>,
}

impl<A, In, Out, R: Reducer<A, Out>> Reducer<A, In> for MapStep<R, In, Out> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: In) -> Result<Reduction<A>> {
        let mapped = (self.f)(item)?;
        self.rf.step(acc, mapped)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<In: 'static, Out: 'static> Transducer<In, Out> for Map<In, Out> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        Box::new(MapStep {
            rf,
            f: Arc::clone(&self.f),
        })
    }
}

// ============================================================================
// map_indexed
// ============================================================================

pub struct MapIndexed<In, Out> {
    f: Arc<dyn Fn(usize, In) -> Out + Send + Sync>,
}

impl<In, Out> Clone for MapIndexed<In, Out> {
    fn clone(&self) -> Self {
        MapIndexed {
            f: Arc::clone(&self.f),
        }
    }
}

/// Apply `f` to each element and its zero-based position.
pub fn map_indexed<In, Out, F>(f: F) -> MapIndexed<In, Out>
where
    F: Fn(usize, In) -> Out + Send + Sync + 'static,
{
    MapIndexed { f: Arc::new(f) }
}

struct MapIndexedStep<R, In, Out> {
    rf: R,
    f: Arc<dyn Fn(usize, In) -> Out + Send + Sync>,
    index: usize,
}

impl<A, In, Out, R: Reducer<A, Out>> Reducer<A, In> for MapIndexedStep<R, In, Out> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: In) -> Result<Reduction<A>> {
        let index = self.index;
        self.index += 1;
        self.rf.step(acc, (self.f)(index, item))
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<In: 'static, Out: 'static> Transducer<In, Out> for MapIndexed<In, Out> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        Box::new(MapIndexedStep {
            rf,
            f: Arc::clone(&self.f),
            index: 0,
        })
    }
}

// ============================================================================
// keep / keep_indexed
// ============================================================================

pub struct Keep<In, Out> {
    f: Arc<dyn Fn(In) -> Result<Option<Out>> + Send + Sync>,
}

impl<In, Out> Clone for Keep<In, Out> {
    fn clone(&self) -> Self {
        Keep {
            f: Arc::clone(&self.f),
        }
    }
}

/// Emit `f(x)` for each element where it is `Some`.
pub fn keep<In, Out, F>(f: F) -> Keep<In, Out>
where
    F: Fn(In) -> Option<Out> + Send + Sync + 'static,
{
    Keep {
        f: Arc::new(move |x| Ok(f(x))),
    }
}

impl<In, Out> Keep<In, Out> {
    /// `keep` with a fallible function.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(In) -> Result<Option<Out>> + Send + Sync + 'static,
    {
        Keep { f: Arc::new(f) }
    }
}

struct KeepStep<R, In, Out> {
    rf: R,
    f: Arc<dyn Fn(In) -> Result<Option<Out>> + Send + Sync>,
}

impl<A, In, Out, R: Reducer<A, Out>> Reducer<A, In> for KeepStep<R, In, Out> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: In) -> Result<Reduction<A>> {
        match (self.f)(item)? {
            Some(kept) => self.rf.step(acc, kept),
            None => Ok(Reduction::Continue(acc)),
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<In: 'static, Out: 'static> Transducer<In, Out> for Keep<In, Out> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        Box::new(KeepStep {
            rf,
            f: Arc::clone(&self.f),
        })
    }
}

pub struct KeepIndexed<In, Out> {
    f: Arc<dyn Fn(usize, In) -> Option<Out> + Send + Sync>,
}

impl<In, Out> Clone for KeepIndexed<In, Out> {
    fn clone(&self) -> Self {
        KeepIndexed {
            f: Arc::clone(&self.f),
        }
    }
}

/// Emit `f(i, x)` for each element where it is `Some`; `i` counts every
/// input element, kept or not.
pub fn keep_indexed<In, Out, F>(f: F) -> KeepIndexed<In, Out>
where
    F: Fn(usize, In) -> Option<Out> + Send + Sync + 'static,
{
    KeepIndexed { f: Arc::new(f) }
}

struct KeepIndexedStep<R, In, Out> {
    rf: R,
    f: Arc<dyn Fn(usize, In) -> Option<Out> + Send + Sync>,
    index: usize,
}

impl<A, In, Out, R: Reducer<A, Out>> Reducer<A, In> for KeepIndexedStep<R, In, Out> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: In) -> Result<Reduction<A>> {
        let index = self.index;
        self.index += 1;
        match (self.f)(index, item) {
            Some(kept) => self.rf.step(acc, kept),
            None => Ok(Reduction::Continue(acc)),
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<In: 'static, Out: 'static> Transducer<In, Out> for KeepIndexed<In, Out> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        Box::new(KeepIndexedStep {
            rf,
            f: Arc::clone(&self.f),
            index: 0,
        })
    }
}

// ============================================================================
// replace
// ============================================================================

#[derive(Clone)]
pub struct Replace<T> {
    smap: Arc<HashMap<T, T>>,
}

/// Swap each element found as a key in `smap` for its value.
pub fn replace<T: Eq + Hash>(smap: HashMap<T, T>) -> Replace<T> {
    Replace {
        smap: Arc::new(smap),
    }
}

struct ReplaceStep<R, T> {
    rf: R,
    smap: Arc<HashMap<T, T>>,
}

impl<A, T, R> Reducer<A, T> for ReplaceStep<R, T>
where
    T: Eq + Hash + Clone + Send + Sync,
    R: Reducer<A, T>,
{
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        let item = match self.smap.get(&item) {
            Some(replacement) => replacement.clone(),
            None => item,
        };
        self.rf.step(acc, item)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T> Transducer<T, T> for Replace<T>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
{
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(ReplaceStep {
            rf,
            smap: Arc::clone(&self.smap),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::completing;

    fn run<In: 'static, Out: 'static, X: Transducer<In, Out>>(xf: &X, input: Vec<In>) -> Vec<Out> {
        let mut rf = xf.apply(completing(|mut acc: Vec<Out>, x: Out| {
            acc.push(x);
            acc
        }));
        let mut acc = Vec::new();
        for x in input {
            acc = rf.step(acc, x).unwrap().unreduced();
        }
        rf.complete(acc).unwrap()
    }

    #[test]
    fn test_map() {
        assert_eq!(run(&map(|x: i64| x * 3), vec![1, 2, 3]), vec![3, 6, 9]);
        assert_eq!(
            run(&map(|x: i64| x.to_string()), vec![4, 5]),
            vec!["4".to_string(), "5".to_string()]
        );
    }

    #[test]
    fn test_try_map_propagates_error() {
        let xf = try_map(|x: i64| {
            if x > 1 {
                Err(crate::error::Error::type_mismatch("small", "big"))
            } else {
                Ok(x)
            }
        });
        let mut rf = xf.apply(completing(|acc: i64, x: i64| acc + x));
        assert!(rf.step(0, 1).is_ok());
        assert!(rf.step(0, 2).is_err());
    }

    #[test]
    fn test_map_indexed() {
        let xf = map_indexed(|i, c: char| format!("{}{}", i, c));
        assert_eq!(run(&xf, vec!['a', 'b']), vec!["0a".to_string(), "1b".to_string()]);
    }

    #[test]
    fn test_keep_and_keep_indexed() {
        let xf = keep(|x: i64| if x % 2 == 0 { Some(x / 2) } else { None });
        assert_eq!(run(&xf, vec![1, 2, 3, 4]), vec![1, 2]);

        let xf = keep_indexed(|i, x: char| if i % 2 == 1 { Some(x) } else { None });
        assert_eq!(run(&xf, vec!['a', 'b', 'c', 'd']), vec!['b', 'd']);
    }

    #[test]
    fn test_replace() {
        let smap: HashMap<i64, i64> = [(1, 10), (3, 30)].into_iter().collect();
        assert_eq!(run(&replace(smap), vec![1, 2, 3]), vec![10, 2, 30]);
    }
}
