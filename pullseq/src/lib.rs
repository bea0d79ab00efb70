//! Pullseq is a small sequence-processing library built around a single pull
//! protocol: a source hands out its next element or reports that it is
//! exhausted. Anything implementing [`Producible`] can be wrapped in an
//! [`Iter`] and chained through the combinators.
//!
//! ## Example Usage
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let (even, odd) = Iter::from_vec(vec![1, 2, 3, 4, 5, 6])
//!     .map(|i| i * 10)
//!     .partition(|i| i % 20 == 0);
//!
//! assert_eq!(even.collect(), vec![20, 40, 60]);
//! assert_eq!(odd.reverse().collect(), vec![50, 30, 10]);
//! ```
//!
//! Most combinators drain their input and re-wrap the result in an
//! [`ArraySource`], so a chain over an unbounded source must start with
//! [`Iter::take`]:
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut n = 0;
//! let squares = from_fn(move || {
//!     n += 1;
//!     Some(n * n)
//! });
//! assert_eq!(Iter::new(squares).take(4).step_by(2).collect(), vec![1, 9]);
//! ```

pub use pullseq_impl;

pub use pullseq_impl::*;

pub mod prelude {
    pub use pullseq_impl::from_fn;
    pub use pullseq_impl::iterate;
    pub use pullseq_impl::ArraySource;
    pub use pullseq_impl::Combinable;
    pub use pullseq_impl::Iter;
    pub use pullseq_impl::KeepFirstN;
    pub use pullseq_impl::Permutable;
    pub use pullseq_impl::Producible;

    #[cfg(feature = "gen")]
    pub use pullseq_impl::generate;
}
