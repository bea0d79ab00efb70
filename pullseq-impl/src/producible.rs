/// Something that can hand out elements one at a time.
///
/// `pull_next` returns the next element and advances the source, or `None`
/// once the source is exhausted. Sources are expected to keep returning
/// `None` after the first `None`, but callers must not rely on restarting an
/// exhausted source. Unbounded sources simply never return `None`.
pub trait Producible {
    type Item;

    fn pull_next(&mut self) -> Option<Self::Item>;
}

/// A mutable borrow of a source pulls from the same underlying state, so a
/// combinator applied to `&mut P` advances `P` itself.
impl<P> Producible for &mut P
where
    P: Producible + ?Sized,
{
    type Item = P::Item;

    #[inline]
    fn pull_next(&mut self) -> Option<Self::Item> {
        (**self).pull_next()
    }
}

impl<P> Producible for Box<P>
where
    P: Producible + ?Sized,
{
    type Item = P::Item;

    #[inline]
    fn pull_next(&mut self) -> Option<Self::Item> {
        (**self).pull_next()
    }
}

/// Source backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Builds a source that calls `f` on every pull.
///
/// ```
/// use pullseq_impl::{from_fn, Iter};
///
/// let mut n = 0;
/// let evens = Iter::new(from_fn(|| {
///     n += 2;
///     Some(n)
/// }));
/// assert_eq!(evens.take(3).collect(), vec![2, 4, 6]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f }
}

impl<T, F> Producible for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn pull_next(&mut self) -> Option<T> {
        (self.f)()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Glue source that lets any std iterator (ranges included) be wrapped.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    inner: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new<II>(iterable: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        IterSource {
            inner: iterable.into_iter(),
        }
    }
}

impl<I: Iterator> Producible for IterSource<I> {
    type Item = I::Item;

    #[inline]
    fn pull_next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}
