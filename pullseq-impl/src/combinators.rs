use tracing::instrument;
use tracing::trace;

use crate::array_source::ArraySource;
use crate::iter::Iter;
use crate::producible::Producible;

/// Every eager combinator ends here: the drained elements become the buffer
/// of a fresh wrapper.
pub(crate) fn rewrap<T>(items: Vec<T>) -> Iter<ArraySource<T>> {
    trace!(materialized = items.len(), "rewrapped drained elements");
    Iter::from_vec(items)
}

/// The combinators below drain their receiver completely (or, for `take`,
/// up to the bound) and return a new wrapper over the materialized result.
impl<P: Producible> Iter<P> {
    #[instrument(level = "trace", skip(self, f))]
    pub fn map<U, F>(mut self, mut f: F) -> Iter<ArraySource<U>>
    where
        F: FnMut(P::Item) -> U,
    {
        let mut res = Vec::new();
        while let Some(item) = self.pull_next() {
            res.push(f(item));
        }
        rewrap(res)
    }

    #[instrument(level = "trace", skip(self, predicate))]
    pub fn filter<F>(mut self, mut predicate: F) -> Iter<ArraySource<P::Item>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        let mut res = Vec::new();
        while let Some(item) = self.pull_next() {
            if predicate(&item) {
                res.push(item);
            }
        }
        rewrap(res)
    }

    /// Pulls at most `n` elements. Stops as soon as the bound is reached, so
    /// this is the way to consume an unbounded source.
    #[instrument(level = "trace", skip(self))]
    pub fn take(mut self, n: usize) -> Iter<ArraySource<P::Item>> {
        let mut res = Vec::new();
        while res.len() < n {
            match self.pull_next() {
                Some(item) => res.push(item),
                None => break,
            }
        }
        rewrap(res)
    }

    /// Consumes the next `n` elements of this wrapper's own source and
    /// returns the wrapper, positioned after them.
    ///
    /// ```
    /// use pullseq_impl::Iter;
    ///
    /// assert_eq!(Iter::from_vec(vec![1, 2, 3, 4]).skip(2).collect(), vec![3, 4]);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn skip(mut self, n: usize) -> Self {
        let mut shared = self.by_ref();
        let mut skipped = 0;
        while skipped < n && shared.pull_next().is_some() {
            skipped += 1;
        }
        trace!(skipped, "advanced source");
        self
    }

    /// Keeps the first element, then every `step`th one after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is 0.
    #[instrument(level = "trace", skip(self))]
    pub fn step_by(mut self, step: usize) -> Iter<ArraySource<P::Item>> {
        assert!(step != 0, "step_by requires a step of at least 1");
        let mut res = Vec::new();
        'pull: while let Some(item) = self.pull_next() {
            res.push(item);
            for _ in 1..step {
                if self.pull_next().is_none() {
                    break 'pull;
                }
            }
        }
        rewrap(res)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn reverse(self) -> Iter<ArraySource<P::Item>> {
        let mut res = self.collect();
        res.reverse();
        rewrap(res)
    }

    /// Drains `self`, then `other`, and iterates over both in that order.
    #[instrument(level = "trace", skip(self, other))]
    pub fn chain<Q>(self, other: Iter<Q>) -> Iter<ArraySource<P::Item>>
    where
        Q: Producible<Item = P::Item>,
    {
        let mut res = self.collect();
        res.extend(other);
        rewrap(res)
    }
}
