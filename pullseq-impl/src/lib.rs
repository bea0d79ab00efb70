//! Implementation of the pullseq sources and combinators. Most users should
//! depend on the `pullseq` crate, which re-exports everything here.

pub mod array_source;
pub mod combinations;
pub mod combinators;
#[cfg(feature = "gen")]
pub mod generator;
pub mod iter;
pub mod keep_first_n;
pub mod map_source;
pub mod partition;
pub mod permutations;
pub mod producible;

pub use array_source::ArraySource;
pub use array_source::SliceSource;
pub use combinations::Combinable;
#[cfg(feature = "gen")]
pub use generator::{generate, GenSource};
#[cfg(feature = "gen")]
pub use genawaiter::sync::Co;
pub use iter::{iterate, Drain, Iter};
pub use keep_first_n::KeepFirstN;
pub use map_source::{MapRefSource, MapSource};
pub use permutations::Permutable;
pub use producible::{from_fn, FromFn, IterSource, Producible};
