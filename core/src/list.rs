//! Typed sequences: an inductive type-level list.
//!
//! ```text
//! tlist![i32, bool, f64]  ==  Cons<i32, Cons<bool, Cons<f64, Nil>>>
//! ```
//!
//! [`Sequence`] is the common view over both sequence kinds: the list itself for
//! typed sequences, the wrapped literal list for [`Seq`](crate::Seq).

use core::marker::PhantomData;

use crate::element::Element;
use crate::nat::{Nat, S, Z};
use crate::sealed::Sealed;

/// Empty type-level list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// Non-empty type-level list node.
pub struct Cons<Head, Tail>(PhantomData<(Head, Tail)>);

/// Marker trait for type-level lists, with their length.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level list",
    label = "expected `Nil` or `Cons<_, _>` (see `tlist!`)"
)]
pub trait TypeList: Sealed {
    type Len: Nat;
}

impl Sealed for Nil {}
impl<Head, Tail: TypeList> Sealed for Cons<Head, Tail> {}

impl TypeList for Nil {
    type Len = Z;
}

impl<Head, Tail: TypeList> TypeList for Cons<Head, Tail> {
    type Len = S<Tail::Len>;
}

/// Either sequence kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence",
    label = "expected a typed sequence (`tlist!`) or a value sequence (`vseq!`)"
)]
pub trait Sequence {
    /// The underlying list of elements.
    type Items: TypeList;
}

impl<L: TypeList> Sequence for L {
    type Items = L;
}

/// Number of elements of a sequence, as a natural.
pub type SizeOf<Sq> = <<Sq as Sequence>::Items as TypeList>::Len;

/// The "not found" index of a sequence: its size.
pub type EndOf<Sq> = SizeOf<Sq>;

/// Number of elements of a sequence.
pub const fn size<Sq: Sequence>() -> usize {
    <SizeOf<Sq> as Nat>::USIZE
}

/// The "not found" index returned by the search primitives.
pub const fn end<Sq: Sequence>() -> usize {
    size::<Sq>()
}

/// Lifts a concatenation argument to a sequence.
///
/// Sequences are taken as they are; a bare element becomes a singleton typed
/// sequence.
///
/// Only registered [`Element`](crate::Element) types count as bare elements.
/// The element impl cannot overlap with the sequence impls for arbitrary `T`
/// on stable Rust, so an unregistered type has to be wrapped in `tlist!` first.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be concatenated",
    label = "expected a sequence or a registered element type",
    note = "register custom types with `typeseq::element!`"
)]
pub trait IntoSeq {
    type Output;
}

impl IntoSeq for Nil {
    type Output = Nil;
}

impl<Head, Tail> IntoSeq for Cons<Head, Tail> {
    type Output = Cons<Head, Tail>;
}

impl<E: Element> IntoSeq for E {
    type Output = Cons<E, Nil>;
}

/// Builds a typed sequence: `tlist![A, B, C]`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::tlist![$($tail),*]>
    };
}
