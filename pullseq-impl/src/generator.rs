use std::future::Future;

use genawaiter::sync::Co;
use genawaiter::sync::Gen;
use genawaiter::sync::GenBoxed;
use genawaiter::GeneratorState;

use crate::iter::Iter;
use crate::producible::Producible;

/// Source driven by a generator. Built by [`generate`].
///
/// A finished generator is never resumed again: once it completes the source
/// keeps reporting exhaustion.
pub struct GenSource<T> {
    inner: GenBoxed<T>,
    done: bool,
}

/// Wraps a generator body as a source. Every `co.yield_(value).await` hands
/// out one element; returning from the body exhausts the source.
///
/// ```
/// use pullseq_impl::generate;
///
/// let fib = generate(|co| async move {
///     let (mut a, mut b) = (0u64, 1u64);
///     loop {
///         co.yield_(a).await;
///         (a, b) = (b, a + b);
///     }
/// });
/// assert_eq!(fib.take(6).collect(), vec![0, 1, 1, 2, 3, 5]);
/// ```
pub fn generate<T, F, Fut>(producer: F) -> Iter<GenSource<T>>
where
    F: FnOnce(Co<T>) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    Iter::new(GenSource {
        inner: Gen::new_boxed(producer),
        done: false,
    })
}

impl<T> Producible for GenSource<T> {
    type Item = T;

    fn pull_next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match self.inner.resume() {
            GeneratorState::Yielded(item) => Some(item),
            GeneratorState::Complete(()) => {
                self.done = true;
                None
            }
        }
    }
}

impl<T> std::fmt::Debug for GenSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenSource")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
