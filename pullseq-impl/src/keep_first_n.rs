use binary_heap_plus::BinaryHeap;
use std::cmp::Ordering;
use tracing::instrument;

use crate::array_source::ArraySource;
use crate::combinators::rewrap;
use crate::iter::Iter;
use crate::producible::Producible;

pub trait KeepFirstN<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Takes the largest N values according to the sorted function, returned in descending order
    /// (max first). Exhausts the source.
    fn keep_first_n(self, n: usize, sorted_by: F) -> Iter<ArraySource<T>>;
}

impl<P, T, F> KeepFirstN<T, F> for Iter<P>
where
    P: Producible<Item = T>,
    F: Fn(&T, &T) -> Ordering,
{
    #[instrument(level = "trace", skip(self, sorted_by))]
    fn keep_first_n(mut self, n: usize, sorted_by: F) -> Iter<ArraySource<T>> {
        if n == 0 {
            let _ = self.count();
            return rewrap(Vec::new());
        }

        // use the reverse ordering so that the smallest value is always the first to pop.
        let mut first_n = BinaryHeap::new_by(|a: &T, b: &T| sorted_by(a, b).reverse());

        while first_n.len() < n {
            match self.pull_next() {
                Some(item) => first_n.push(item),
                None => break,
            }
        }

        // If we have exhausted the source before reaching n values, we can exit early.
        if first_n.len() < n {
            return rewrap(first_n.into_sorted_vec());
        }

        // Once n values are kept, each remaining value only replaces the smallest kept one
        // when it sorts above it.
        while let Some(item) = self.pull_next() {
            let smallest_kept = first_n
                .peek()
                .expect("logic error in keep_first_n: heap holds n > 0 values");
            if sorted_by(smallest_kept, &item) == Ordering::Less {
                first_n.pop();
                first_n.push(item);
            }
        }

        rewrap(first_n.into_sorted_vec())
    }
}
