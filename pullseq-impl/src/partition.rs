use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::instrument;
use tracing::trace;

use crate::array_source::ArraySource;
use crate::combinators::rewrap;
use crate::iter::Iter;
use crate::producible::Producible;

impl<P: Producible> Iter<P> {
    /// Splits the elements in a single pass into those matching `predicate`
    /// and those that don't. Both halves keep their relative pull order.
    ///
    /// ```
    /// use pullseq_impl::Iter;
    ///
    /// let (even, odd) = Iter::from_vec(vec![1, 2, 3, 4]).partition(|i| i % 2 == 0);
    /// assert_eq!(even.collect(), vec![2, 4]);
    /// assert_eq!(odd.collect(), vec![1, 3]);
    /// ```
    #[instrument(level = "trace", skip(self, predicate))]
    pub fn partition<F>(
        mut self,
        mut predicate: F,
    ) -> (Iter<ArraySource<P::Item>>, Iter<ArraySource<P::Item>>)
    where
        F: FnMut(&P::Item) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        while let Some(item) = self.pull_next() {
            if predicate(&item) {
                matching.push(item);
            } else {
                rest.push(item);
            }
        }
        (rewrap(matching), rewrap(rest))
    }

    /// Routes every element to the partition of the key `f` computes for it.
    ///
    /// Partitions are returned in the order their key was first seen, each
    /// one holding its elements in pull order.
    #[instrument(level = "trace", skip(self, f))]
    pub fn partition_by_key<K, F>(mut self, mut f: F) -> Vec<Iter<ArraySource<P::Item>>>
    where
        K: Hash + Eq,
        F: FnMut(&P::Item) -> K,
    {
        let mut slots = HashMap::new();
        let mut partitions: Vec<Vec<P::Item>> = Vec::new();

        while let Some(item) = self.pull_next() {
            let slot = match slots.entry(f(&item)) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    partitions.push(Vec::new());
                    *entry.insert(partitions.len() - 1)
                }
            };
            partitions[slot].push(item);
        }

        trace!(partitions = partitions.len(), "partitioned by key");
        partitions.into_iter().map(Iter::from_vec).collect()
    }
}
