use std::collections::HashMap;
use std::hash::BuildHasher;
use std::hash::Hash;

use crate::array_source::ArraySource;
use crate::array_source::SliceSource;
use crate::map_source::MapRefSource;
use crate::map_source::MapSource;
use crate::producible::IterSource;
use crate::producible::Producible;

/// The handle every combinator operates on. Owns exactly one source.
///
/// Combinators that return a new `Iter` take `self` by value: the receiver is
/// drained (fully, or up to a bound) and cannot be reused. To consume part of
/// a source and keep going with the rest, go through [`Iter::by_ref`].
#[derive(Debug, Clone)]
#[must_use = "an Iter does nothing until it is pulled from"]
pub struct Iter<P> {
    source: P,
}

/// Wraps `source`. Same as [`Iter::new`].
pub fn iterate<P: Producible>(source: P) -> Iter<P> {
    Iter::new(source)
}

impl<P: Producible> Iter<P> {
    pub fn new(source: P) -> Self {
        Iter { source }
    }

    pub fn into_source(self) -> P {
        self.source
    }

    #[inline]
    pub fn pull_next(&mut self) -> Option<P::Item> {
        self.source.pull_next()
    }

    /// A wrapper that pulls from this wrapper's source. Whatever it consumes
    /// is gone from `self` as well.
    ///
    /// ```
    /// use pullseq_impl::Iter;
    ///
    /// let mut iter = Iter::from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(iter.by_ref().take(2).collect(), vec![1, 2]);
    /// assert_eq!(iter.by_ref().take(1).collect(), vec![3]);
    /// assert_eq!(iter.collect(), vec![4]);
    /// ```
    pub fn by_ref(&mut self) -> Iter<&mut P> {
        Iter::new(&mut self.source)
    }

    /// Drains every element, in pull order.
    pub fn collect(self) -> Vec<P::Item> {
        self.into_iter().collect()
    }

    pub fn count(mut self) -> usize {
        let mut count = 0;
        while self.pull_next().is_some() {
            count += 1;
        }
        count
    }

    /// Returns the `n`th element counting from the current position, or `None`
    /// if fewer than `n + 1` elements remain. Everything pulled up to and
    /// including that element is consumed, so calling `nth(0)` twice returns
    /// two consecutive elements.
    pub fn nth(&mut self, n: usize) -> Option<P::Item> {
        for _ in 0..n {
            self.pull_next()?;
        }
        self.pull_next()
    }

    pub fn last(mut self) -> Option<P::Item> {
        let mut current = None;
        while let Some(item) = self.pull_next() {
            current = Some(item);
        }
        current
    }

    pub fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(P::Item),
    {
        while let Some(item) = self.pull_next() {
            f(item);
        }
    }

    /// Like [`Iter::for_each`], but stops at the first error and hands it back.
    /// Elements after the failing one are not pulled.
    pub fn try_for_each<F, E>(mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(P::Item) -> Result<(), E>,
    {
        while let Some(item) = self.pull_next() {
            f(item)?;
        }
        Ok(())
    }

    pub fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, P::Item) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.pull_next() {
            acc = f(acc, item);
        }
        acc
    }
}

impl<T> Iter<ArraySource<T>> {
    pub fn from_vec(items: Vec<T>) -> Self {
        Iter::new(ArraySource::new(items))
    }
}

impl<'a, T> Iter<SliceSource<'a, T>> {
    pub fn from_slice(items: &'a [T]) -> Self {
        Iter::new(SliceSource::new(items))
    }
}

impl<K, V, S> Iter<MapSource<K, V, S>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Iterates over the values of `map`. See [`MapSource`] for ordering.
    pub fn from_map(map: HashMap<K, V, S>) -> Self {
        Iter::new(MapSource::new(map))
    }
}

impl<'a, K, V, S> Iter<MapRefSource<'a, K, V, S>>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn from_map_ref(map: &'a HashMap<K, V, S>) -> Self {
        Iter::new(MapRefSource::new(map))
    }
}

impl<I: Iterator> Iter<IterSource<I>> {
    pub fn from_iter_source<II>(iterable: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Iter::new(IterSource::new(iterable))
    }
}

impl<T> From<Vec<T>> for Iter<ArraySource<T>> {
    fn from(items: Vec<T>) -> Self {
        Iter::from_vec(items)
    }
}

impl<T> FromIterator<T> for Iter<ArraySource<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Iter::from_vec(iter.into_iter().collect())
    }
}

impl<P: Producible> Producible for Iter<P> {
    type Item = P::Item;

    #[inline]
    fn pull_next(&mut self) -> Option<P::Item> {
        self.source.pull_next()
    }
}

/// Std iterator that pulls from a wrapped source. Built by `into_iter`.
#[derive(Debug, Clone)]
pub struct Drain<P> {
    source: P,
}

impl<P: Producible> Iterator for Drain<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.source.pull_next()
    }
}

impl<P: Producible> IntoIterator for Iter<P> {
    type Item = P::Item;
    type IntoIter = Drain<P>;

    fn into_iter(self) -> Drain<P> {
        Drain {
            source: self.source,
        }
    }
}
