// transeq-core - Typed collection adaptation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversions from standard and persistent collections into sequences,
//! and the [`Conj`] capability for collecting sequences back into them.
//!
//! Conversion never mutates or consumes shared state of the source: owned
//! inputs are moved into an immutable shared slice, borrowed inputs are
//! cloned, and `im` collections are shared structurally.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::Arc;

use crate::error::Result;
use crate::seq::{Element, Seq, Seqable, Sequence};

// ============================================================================
// Index sequences
// ============================================================================

/// A position within a shared slice. Never points past the end.
struct SliceSeq<T> {
    items: Arc<[T]>,
    index: usize,
}

fn slice_seq<T: Element>(items: Arc<[T]>, index: usize) -> Seq<T> {
    if index < items.len() {
        Seq::from_node(SliceSeq { items, index })
    } else {
        Seq::empty()
    }
}

impl<T: Element> Sequence<T> for SliceSeq<T> {
    fn first(&self) -> Result<Option<T>> {
        Ok(self.items.get(self.index).cloned())
    }

    fn rest(&self) -> Result<Seq<T>> {
        Ok(slice_seq(Arc::clone(&self.items), self.index + 1))
    }
}

/// A position within a persistent vector.
struct VectorSeq<T: Clone> {
    items: im::Vector<T>,
    index: usize,
}

pub(crate) fn vector_seq<T: Element>(items: im::Vector<T>, index: usize) -> Seq<T> {
    if index < items.len() {
        Seq::from_node(VectorSeq { items, index })
    } else {
        Seq::empty()
    }
}

impl<T: Element> Sequence<T> for VectorSeq<T> {
    fn first(&self) -> Result<Option<T>> {
        Ok(self.items.get(self.index).cloned())
    }

    fn rest(&self) -> Result<Seq<T>> {
        Ok(vector_seq(self.items.clone(), self.index + 1))
    }
}

// ============================================================================
// From impls
// ============================================================================

impl<T: Element> From<&Seq<T>> for Seq<T> {
    fn from(seq: &Seq<T>) -> Self {
        seq.clone()
    }
}

impl<T: Element> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        slice_seq(Arc::from(items), 0)
    }
}

impl<T: Element> From<&[T]> for Seq<T> {
    fn from(items: &[T]) -> Self {
        slice_seq(Arc::from(items), 0)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Seq::from(Vec::from(items))
    }
}

impl<T: Element> From<im::Vector<T>> for Seq<T> {
    fn from(items: im::Vector<T>) -> Self {
        vector_seq(items, 0)
    }
}

/// Code points, in order.
impl From<&str> for Seq<char> {
    fn from(s: &str) -> Self {
        Seq::from(s.chars().collect::<Vec<char>>())
    }
}

impl From<String> for Seq<char> {
    fn from(s: String) -> Self {
        Seq::from(s.as_str())
    }
}

/// Entries in key order.
impl<K: Element, V: Element> From<BTreeMap<K, V>> for Seq<(K, V)> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Seq::from(map.into_iter().collect::<Vec<_>>())
    }
}

/// Entries in the map's iteration order.
impl<K: Element, V: Element, S> From<HashMap<K, V, S>> for Seq<(K, V)> {
    fn from(map: HashMap<K, V, S>) -> Self {
        Seq::from(map.into_iter().collect::<Vec<_>>())
    }
}

/// Entries in key order.
impl<K: Element + Ord, V: Element> From<im::OrdMap<K, V>> for Seq<(K, V)> {
    fn from(map: im::OrdMap<K, V>) -> Self {
        Seq::from(map.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Element> Seqable<T> for Vec<T> {
    fn seq(&self) -> Result<Seq<T>> {
        Ok(Seq::from(self.as_slice()))
    }
}

impl<T: Element> Seqable<T> for im::Vector<T> {
    fn seq(&self) -> Result<Seq<T>> {
        Ok(vector_seq(self.clone(), 0))
    }
}

impl Seqable<char> for String {
    fn seq(&self) -> Result<Seq<char>> {
        Ok(Seq::from(self.as_str()))
    }
}

// ============================================================================
// Conj
// ============================================================================

/// Add one element to a collection, at whichever end is natural for it.
pub trait Conj<T> {
    fn conj(self, item: T) -> Self;
}

/// Appends.
impl<T> Conj<T> for Vec<T> {
    fn conj(mut self, item: T) -> Self {
        self.push(item);
        self
    }
}

/// Appends.
impl<T: Clone> Conj<T> for im::Vector<T> {
    fn conj(mut self, item: T) -> Self {
        self.push_back(item);
        self
    }
}

impl Conj<char> for String {
    fn conj(mut self, item: char) -> Self {
        self.push(item);
        self
    }
}

/// Inserts the entry, replacing any existing value for the key.
impl<K: Ord, V> Conj<(K, V)> for BTreeMap<K, V> {
    fn conj(mut self, (k, v): (K, V)) -> Self {
        self.insert(k, v);
        self
    }
}

impl<K: Eq + Hash, V, S: std::hash::BuildHasher> Conj<(K, V)> for HashMap<K, V, S> {
    fn conj(mut self, (k, v): (K, V)) -> Self {
        self.insert(k, v);
        self
    }
}

impl<K: Ord + Clone, V: Clone> Conj<(K, V)> for im::OrdMap<K, V> {
    fn conj(mut self, (k, v): (K, V)) -> Self {
        self.insert(k, v);
        self
    }
}

/// Prepends.
impl<T: Element> Conj<T> for Seq<T> {
    fn conj(self, item: T) -> Self {
        Seq::cons(item, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::{into, to_vec};

    #[test]
    fn test_vec_and_slice() {
        assert_eq!(to_vec(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert_eq!(to_vec(&[4, 5][..]).unwrap(), vec![4, 5]);
        assert_eq!(to_vec([6, 7]).unwrap(), vec![6, 7]);
        assert!(Seq::from(Vec::<i64>::new()).is_empty());
    }

    #[test]
    fn test_persistent_vector() {
        let v: im::Vector<i64> = (1..=3).collect();
        let s = Seq::from(v.clone());
        assert_eq!(to_vec(s).unwrap(), vec![1, 2, 3]);
        // Source is untouched
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_string_code_points() {
        assert_eq!(to_vec("héllo").unwrap(), vec!['h', 'é', 'l', 'l', 'o']);
        assert!(Seq::from("").is_empty());
    }

    #[test]
    fn test_map_entries() {
        let m: BTreeMap<&str, i64> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(to_vec(m).unwrap(), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_conj_targets() {
        assert_eq!(into(String::from("ab"), "cd").unwrap(), "abcd");
        let m = into(BTreeMap::new(), vec![(1, 'x'), (1, 'y')]).unwrap();
        assert_eq!(m.get(&1), Some(&'y'));
        let s = into(Seq::empty(), vec![1, 2, 3]).unwrap();
        assert_eq!(to_vec(s).unwrap(), vec![3, 2, 1]);
        let v = into(im::Vector::new(), vec![1, 2]).unwrap();
        assert_eq!(v, im::vector![1, 2]);
    }
}
