// transeq-core - Partitioning transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Both partitioners hold back a partial group until it is closed by input
//! or by `complete`, so the last group is emitted during completion.

use std::marker::PhantomData;
use std::sync::Arc;

use super::Transducer;
use crate::error::Result;
use crate::reducer::{BoxReducer, Reducer, Reduction};

/// Groups of `n` consecutive elements; the last group may be shorter.
pub struct PartitionAll<T> {
    n: usize,
    _elem: PhantomData<fn(T) -> T>,
}

impl<T> Clone for PartitionAll<T> {
    fn clone(&self) -> Self {
        partition_all(self.n)
    }
}

/// `n` is clamped to at least 1.
pub fn partition_all<T>(n: usize) -> PartitionAll<T> {
    PartitionAll {
        n: n.max(1),
        _elem: PhantomData,
    }
}

struct PartitionAllStep<R, T> {
    rf: R,
    n: usize,
    group: Vec<T>,
}

impl<A, T: Send, R: Reducer<A, Vec<T>>> Reducer<A, T> for PartitionAllStep<R, T> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        self.group.push(item);
        if self.group.len() < self.n {
            return Ok(Reduction::Continue(acc));
        }
        let group = std::mem::replace(&mut self.group, Vec::with_capacity(self.n));
        self.rf.step(acc, group)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        let acc = if self.group.is_empty() {
            acc
        } else {
            let group = std::mem::take(&mut self.group);
            self.rf.step(acc, group)?.unreduced()
        };
        self.rf.complete(acc)
    }
}

impl<T: Send + 'static> Transducer<T, Vec<T>> for PartitionAll<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, Vec<T>> + 'static,
    {
        Box::new(PartitionAllStep {
            rf,
            n: self.n,
            group: Vec::with_capacity(self.n),
        })
    }
}

/// Splits the input each time `f` returns a different key from the
/// previous element's.
pub struct PartitionBy<T, K> {
    f: Arc<dyn Fn(&T) -> Result<K> + Send + Sync>,
}

impl<T, K> Clone for PartitionBy<T, K> {
    fn clone(&self) -> Self {
        PartitionBy {
            f: Arc::clone(&self.f),
        }
    }
}

pub fn partition_by<T, K, F>(f: F) -> PartitionBy<T, K>
where
    K: PartialEq,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    PartitionBy {
        f: Arc::new(move |x| Ok(f(x))),
    }
}

pub fn try_partition_by<T, K, F>(f: F) -> PartitionBy<T, K>
where
    K: PartialEq,
    F: Fn(&T) -> Result<K> + Send + Sync + 'static,
{
    PartitionBy { f: Arc::new(f) }
}

struct PartitionByStep<R, T, K> {
    rf: R,
    f: Arc<dyn Fn(&T) -> Result<K> + Send + Sync>,
    group: Vec<T>,
    key: Option<K>,
}

impl<A, T, K, R> Reducer<A, T> for PartitionByStep<R, T, K>
where
    T: Send,
    K: PartialEq + Send,
    R: Reducer<A, Vec<T>>,
{
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        let key = (self.f)(&item)?;
        if self.key.is_none() || self.key.as_ref() == Some(&key) {
            self.key = Some(key);
            self.group.push(item);
            return Ok(Reduction::Continue(acc));
        }
        let group = std::mem::take(&mut self.group);
        let result = self.rf.step(acc, group)?;
        if !result.is_reduced() {
            self.group.push(item);
            self.key = Some(key);
        }
        Ok(result)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        let acc = if self.group.is_empty() {
            acc
        } else {
            let group = std::mem::take(&mut self.group);
            self.rf.step(acc, group)?.unreduced()
        };
        self.rf.complete(acc)
    }
}

impl<T, K> Transducer<T, Vec<T>> for PartitionBy<T, K>
where
    T: Send + 'static,
    K: PartialEq + Send + 'static,
{
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, Vec<T>> + 'static,
    {
        Box::new(PartitionByStep {
            rf,
            f: Arc::clone(&self.f),
            group: Vec::new(),
            key: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::completing;

    fn run<X: Transducer<i64, Vec<i64>>>(xf: &X, input: &[i64]) -> Vec<Vec<i64>> {
        let mut rf = xf.apply(completing(|mut acc: Vec<Vec<i64>>, x: Vec<i64>| {
            acc.push(x);
            acc
        }));
        let mut acc = Vec::new();
        for &x in input {
            acc = rf.step(acc, x).unwrap().unreduced();
        }
        rf.complete(acc).unwrap()
    }

    #[test]
    fn test_partition_all_flushes_tail() {
        let input: Vec<i64> = (0..10).collect();
        assert_eq!(
            run(&partition_all(4), &input),
            vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]
        );
        assert_eq!(run(&partition_all(2), &[]), Vec::<Vec<i64>>::new());
    }

    #[test]
    fn test_partition_by_key_changes() {
        let xf = partition_by(|x: &i64| x % 2 == 1);
        assert_eq!(
            run(&xf, &[1, 1, 1, 2, 2, 3, 3]),
            vec![vec![1, 1, 1], vec![2, 2], vec![3, 3]]
        );
    }

    #[test]
    fn test_partition_by_single_group() {
        let xf = partition_by(|_: &i64| 0);
        assert_eq!(run(&xf, &[4, 5, 6]), vec![vec![4, 5, 6]]);
    }
}
