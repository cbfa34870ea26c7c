//! Compile-time sequence algorithms for typeseq.
//!
//! Two sequence kinds are resolved entirely by the trait solver:
//!
//! - typed sequences, the inductive list [`Cons`]/[`Nil`] built with [`tlist!`]
//! - value sequences, [`Seq<T, L>`](Seq) pairing a literal type `T` with a list of
//!   type-level integer literals, built with [`vseq!`]
//!
//! Every operation is a trait whose associated `Output` (or `Index`) is the result,
//! with a type alias and, where the result is a number, a `const fn` accessor.
//!
//! ```text
//! Structural   Concat  Head  Tail  Skip  Erase  Select
//! Search       FindIf  Find  FindOneOf  FindNotOneOf
//! Rearrange    Filter  Reverse  Reverse2  SelectionSort
//! ```
//!
//! # Example
//!
//! ```
//! use typeseq_core::{assert_same, tlist, vseq, HeadT, SortedT, SizeSortedT, U2};
//!
//! const _: () = assert_same::<HeadT<U2, tlist![i32, bool, i64]>, tlist![i32, bool]>();
//! const _: () = assert_same::<SizeSortedT<tlist![i32, bool, i16]>, tlist![bool, i16, i32]>();
//! const _: () = assert_same::<SortedT<vseq![i32; 4, 1, 2, 8]>, vseq![i32; 1, 2, 4, 8]>();
//! ```
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Reification helpers for no_std environments with an allocator
//! - `tracing` - Emit `tracing` events from the reification helpers

#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[cfg(any(feature = "std", feature = "alloc"))]
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        format,
        string::{String, ToString},
        vec::Vec,
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        format,
        string::{String, ToString},
        vec::Vec,
    };
}

mod sealed {
    pub trait Sealed {}
}

#[macro_use]
mod trace;

pub mod bit;
pub mod cmp;
pub mod element;
pub mod int;
pub mod list;
pub mod nat;
pub mod ops;
pub mod reify;
pub mod seq;

pub use bit::{Bit, False, If, IfT, Not, True};
pub use cmp::{Cmp, Compare, Equal, Greater, Less, Ordering, Same, SameT};
pub use element::{Element, USER_KEY_BASE, UserKeyBase};
pub use int::{Int, Literal, Neg, Pos};
pub use list::{Cons, EndOf, IntoSeq, Nil, Sequence, SizeOf, TypeList, end, size};
pub use nat::*;
pub use ops::*;
pub use reify::{TypeEq, assert_same, same};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use reify::{Describe, TypeNames, short_type_name};
pub use seq::{Seq, ValueList, Values};

/// Binary type-level naturals: literal magnitudes, element sizes and keys.
pub use typenum;

#[doc(hidden)]
pub use paste::paste as __paste;
#[doc(hidden)]
pub use typeseq_macros::unsigned as __unsigned;

/// Commonly used types, traits and macros.
pub mod prelude {
    pub use crate::{
        Always, Cons, Element, Find, FindIf, FindNotOneOf, FindOneOf, IsNotOneOf, IsOneOf,
        IsSame, Min, MinSize, MinSize2, Never, Nil, Predicate, SelectMin, Seq, Sequence,
        SizeAbove, TypeList, Values, assert_same, concat_t, element, end, lit, same, size, tlist,
        vseq,
    };
    pub use crate::{
        ConcatT, EraseT, Filter, FilterT, HeadT, Reverse, Reverse2, Reverse2T, ReverseT, SelectT,
        SelectionSort, SizeSortedT, SkipT, SortedT, TailT,
    };
}
