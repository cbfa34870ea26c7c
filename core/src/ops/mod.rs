//! Sequence algorithms.
//!
//! Each operation is implemented once on the list shape (`Cons`/`Nil`) and lifted
//! to value sequences by re-wrapping the resulting list in `Seq<T, _>`.

mod concat;
mod filter;
mod reverse;
mod search;
mod slice;
mod sort;

pub use concat::*;
pub use filter::*;
pub use reverse::*;
pub use search::*;
pub use slice::*;
pub use sort::*;
