use itertools::Combinations;
use tracing::instrument;

use crate::iter::Iter;
use crate::producible::IterSource;
use crate::producible::Producible;

pub trait Combinable<T> {
    fn combinations(self, k: usize) -> Iter<IterSource<Combinations<std::vec::IntoIter<T>>>>;
}

/// This is a glue trait to allow wrappers to use Combinable in itertools.
/// The current implementation eagerly consumes the parent source.
impl<T, P> Combinable<T> for Iter<P>
where
    P: Producible<Item = T>,
    T: Clone,
{
    #[instrument(level = "trace", skip(self))]
    fn combinations(self, k: usize) -> Iter<IterSource<Combinations<std::vec::IntoIter<T>>>> {
        use itertools::Itertools;

        let combinations_iterable = self.collect().into_iter().combinations(k);
        Iter::from_iter_source(combinations_iterable)
    }
}
