use itertools::Permutations;
use tracing::instrument;

use crate::iter::Iter;
use crate::producible::IterSource;
use crate::producible::Producible;

pub trait Permutable<T> {
    fn permutations(self, k: usize) -> Iter<IterSource<Permutations<std::vec::IntoIter<T>>>>;
}

/// This is a glue trait to allow wrappers to use Permutable in itertools.
/// The current implementation eagerly consumes the parent source.
impl<T, P> Permutable<T> for Iter<P>
where
    P: Producible<Item = T>,
    T: Clone,
{
    #[instrument(level = "trace", skip(self))]
    fn permutations(self, k: usize) -> Iter<IterSource<Permutations<std::vec::IntoIter<T>>>> {
        use itertools::Itertools;

        let permutations_iterable = self.collect().into_iter().permutations(k);
        Iter::from_iter_source(permutations_iterable)
    }
}
