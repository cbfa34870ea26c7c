//! # typeseq
//!
//! Compile-time algorithms over type-level sequences: concatenation, slicing,
//! search, filtering, reversal and sorting, all resolved by the trait solver.
//!
//! ## Quick Start
//!
//! ```rust
//! use typeseq::prelude::*;
//!
//! type Row = tlist![i32, bool, i16, f64];
//!
//! // Typed sequences are ordinary types.
//! const _: () = assert_same::<HeadT<typeseq::U2, Row>, tlist![i32, bool]>();
//! const _: () = assert_same::<SizeSortedT<Row>, tlist![bool, i16, i32, f64]>();
//!
//! // Searches return an index; "absent" is the size of the sequence.
//! assert_eq!(typeseq::find::<Row, i16>(), 2);
//! assert_eq!(typeseq::find::<Row, u64>(), end::<Row>());
//!
//! // Value sequences carry integer literals.
//! type Nums = vseq![i32; 8, 4, 2, 1, 1, 8];
//! const _: () = assert_same::<SortedT<Nums>, vseq![i32; 1, 1, 2, 4, 8, 8]>();
//! assert_eq!(<SortedT<Nums> as typeseq::Values>::to_vec(), [1, 1, 2, 4, 8, 8]);
//! ```
//!
//! ## Sequence Kinds
//!
//! | Kind   | Built with            | Elements                              |
//! |--------|-----------------------|---------------------------------------|
//! | typed  | `tlist![A, B, ...]`   | registered [`Element`] types          |
//! | value  | `vseq![T; v0, ...]`   | integer literals reifying to `T`      |
//!
//! Custom element types are registered with [`element!`].
//!
//! ## Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Reification helpers without `std`
//! - `tracing` - `tracing` events from the reification helpers

#![cfg_attr(not(feature = "std"), no_std)]

pub use typeseq_core::*;

/// Everything needed to build and query sequences.
///
/// ```rust
/// use typeseq::prelude::*;
///
/// const _: () = assert_same::<ReverseT<tlist![u8, i64]>, tlist![i64, u8]>();
/// ```
pub mod prelude {
    pub use typeseq_core::prelude::*;
}
