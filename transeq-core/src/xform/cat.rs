// transeq-core - Expanding transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::marker::PhantomData;

use super::{Comp, Map, Transducer, TransducerExt, map, try_map};
use crate::error::Result;
use crate::reduce::reduce_with;
use crate::reducer::{BoxReducer, Reducer, Reduction};
use crate::seq::{Element, Seqable};

/// Flattens each input collection into its elements.
pub struct Cat<C, Out>(PhantomData<fn(C) -> Out>);

impl<C, Out> Clone for Cat<C, Out> {
    fn clone(&self) -> Self {
        Cat(PhantomData)
    }
}

pub fn cat<C: Seqable<Out>, Out>() -> Cat<C, Out> {
    Cat(PhantomData)
}

struct CatStep<R, C, Out> {
    rf: R,
    _coll: PhantomData<fn(C) -> Out>,
}

impl<A, C, Out, R> Reducer<A, C> for CatStep<R, C, Out>
where
    C: Seqable<Out>,
    Out: Element,
    R: Reducer<A, Out>,
{
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: C) -> Result<Reduction<A>> {
        // A reduced inner reduction stops the outer one too
        reduce_with(&mut self.rf, acc, item.seq()?)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<C, Out> Transducer<C, Out> for Cat<C, Out>
where
    C: Seqable<Out> + 'static,
    Out: Element,
{
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, C>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        Box::new(CatStep {
            rf,
            _coll: PhantomData,
        })
    }
}

/// `map(f)` followed by `cat()`.
pub fn mapcat<In, C, Out, F>(f: F) -> Comp<Map<In, C>, Cat<C, Out>, C>
where
    In: 'static,
    C: Seqable<Out> + 'static,
    Out: Element,
    F: Fn(In) -> C + Send + Sync + 'static,
{
    map(f).comp(cat())
}

/// `try_map(f)` followed by `cat()`.
pub fn try_mapcat<In, C, Out, F>(f: F) -> Comp<Map<In, C>, Cat<C, Out>, C>
where
    In: 'static,
    C: Seqable<Out> + 'static,
    Out: Element,
    F: Fn(In) -> Result<C> + Send + Sync + 'static,
{
    try_map(f).comp(cat())
}

/// Emits `sep` between consecutive elements.
#[derive(Clone)]
pub struct Interpose<T> {
    sep: T,
}

pub fn interpose<T: Element>(sep: T) -> Interpose<T> {
    Interpose { sep }
}

struct InterposeStep<R, T> {
    rf: R,
    sep: T,
    started: bool,
}

impl<A, T: Element, R: Reducer<A, T>> Reducer<A, T> for InterposeStep<R, T> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if !self.started {
            self.started = true;
            return self.rf.step(acc, item);
        }
        match self.rf.step(acc, self.sep.clone())? {
            Reduction::Continue(acc) => self.rf.step(acc, item),
            reduced => Ok(reduced),
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: Element> Transducer<T, T> for Interpose<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(InterposeStep {
            rf,
            sep: self.sep.clone(),
            started: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::completing;
    use crate::xform::take;

    fn run<In: 'static, X: Transducer<In, i64>>(xf: &X, input: Vec<In>) -> Vec<i64> {
        let mut rf = xf.apply(completing(|mut acc: Vec<i64>, x: i64| {
            acc.push(x);
            acc
        }));
        let mut acc = Vec::new();
        for x in input {
            let r = rf.step(acc, x).unwrap();
            let stop = r.is_reduced();
            acc = r.unreduced();
            if stop {
                break;
            }
        }
        rf.complete(acc).unwrap()
    }

    #[test]
    fn test_cat_flattens() {
        let xf = cat::<Vec<i64>, i64>();
        assert_eq!(run(&xf, vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    }

    #[test]
    fn test_cat_preserves_reduced() {
        let xf = cat::<Vec<i64>, i64>().comp(take(3));
        assert_eq!(run(&xf, vec![vec![1, 2], vec![3, 4], vec![5]]), vec![1, 2, 3]);
    }

    #[test]
    fn test_mapcat() {
        let xf = mapcat(|x: i64| vec![x, x * 10]);
        assert_eq!(run(&xf, vec![1, 2]), vec![1, 10, 2, 20]);
    }

    #[test]
    fn test_interpose() {
        assert_eq!(run(&interpose(0i64), vec![1i64, 2, 3]), vec![1, 0, 2, 0, 3]);
        assert_eq!(run(&interpose(0i64), vec![7i64]), vec![7]);
    }
}
