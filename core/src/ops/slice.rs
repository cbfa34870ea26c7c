//! Head, tail, skip, erase and indexed selection.
//!
//! Indices are type-level naturals (`U0`, `U3`, ...). Every primitive is total for
//! `0 <= N <= size`; anything past the end has no impl and fails to compile.

use crate::bit::{Bit, False, True};
use crate::int::Literal;
use crate::list::{Cons, Nil, TypeList};
use crate::nat::{Nat, NatEq, S, Z};
use crate::ops::Concat;
use crate::seq::Seq;

/// The first `N` elements.
#[diagnostic::on_unimplemented(
    message = "cannot take the first `{N}` elements of `{Self}`",
    label = "the count must not exceed the sequence size"
)]
pub trait Head<N> {
    type Output;
}

impl<L: TypeList> Head<Z> for L {
    type Output = Nil;
}

impl<N, H, T: Head<N>> Head<S<N>> for Cons<H, T> {
    type Output = Cons<H, <T as Head<N>>::Output>;
}

impl<N, T, L: Head<N>> Head<N> for Seq<T, L> {
    type Output = Seq<T, <L as Head<N>>::Output>;
}

pub type HeadT<N, Sq> = <Sq as Head<N>>::Output;

/// Every element from index `N` on.
#[diagnostic::on_unimplemented(
    message = "cannot skip `{N}` elements of `{Self}`",
    label = "the count must not exceed the sequence size"
)]
pub trait Skip<N> {
    type Output;
}

impl<L: TypeList> Skip<Z> for L {
    type Output = L;
}

impl<N, H, T: Skip<N>> Skip<S<N>> for Cons<H, T> {
    type Output = <T as Skip<N>>::Output;
}

impl<N, T, L: Skip<N>> Skip<N> for Seq<T, L> {
    type Output = Seq<T, <L as Skip<N>>::Output>;
}

pub type SkipT<N, Sq> = <Sq as Skip<N>>::Output;

/// The last `N` elements.
///
/// Drops the front element until the remaining length equals `N`.
#[diagnostic::on_unimplemented(
    message = "cannot take the last `{N}` elements of `{Self}`",
    label = "the count must not exceed the sequence size"
)]
pub trait Tail<N> {
    type Output;
}

impl<N: Nat, L: TypeList> Tail<N> for L
where
    L::Len: NatEq<N>,
    L: TailStep<N, <L::Len as NatEq<N>>::Output>,
{
    type Output = <L as TailStep<N, <L::Len as NatEq<N>>::Output>>::Output;
}

impl<N, T, L: Tail<N>> Tail<N> for Seq<T, L> {
    type Output = Seq<T, <L as Tail<N>>::Output>;
}

/// One step of [`Tail`]: `Done` says whether the list is already `N` long.
#[doc(hidden)]
pub trait TailStep<N, Done: Bit> {
    type Output;
}

impl<N, L> TailStep<N, True> for L {
    type Output = L;
}

impl<N, H, T: Tail<N>> TailStep<N, False> for Cons<H, T> {
    type Output = <T as Tail<N>>::Output;
}

pub type TailT<N, Sq> = <Sq as Tail<N>>::Output;

/// Removes the element at index `I`: `concat(head(I), skip(I + 1))`.
#[diagnostic::on_unimplemented(
    message = "cannot erase index `{I}` of `{Self}`",
    label = "the index must be smaller than the sequence size"
)]
pub trait Erase<I> {
    type Output;
}

impl<I, Sq> Erase<I> for Sq
where
    Sq: Head<I> + Skip<S<I>>,
    <Sq as Head<I>>::Output: Concat<<Sq as Skip<S<I>>>::Output>,
{
    type Output = <<Sq as Head<I>>::Output as Concat<<Sq as Skip<S<I>>>::Output>>::Output;
}

pub type EraseT<I, Sq> = <Sq as Erase<I>>::Output;

/// The element at index `I`.
///
/// For a typed sequence this is the element type itself; for a value sequence
/// it is the singleton sequence holding the value (see [`SelectValue`]).
#[diagnostic::on_unimplemented(
    message = "index `{I}` is out of range for `{Self}`",
    label = "the index must be smaller than the sequence size"
)]
pub trait Select<I> {
    type Output;
}

impl<H, T> Select<Z> for Cons<H, T> {
    type Output = H;
}

impl<N, H, T: Select<N>> Select<S<N>> for Cons<H, T> {
    type Output = <T as Select<N>>::Output;
}

impl<I, T, L: Select<I>> Select<I> for Seq<T, L> {
    type Output = Seq<T, Cons<<L as Select<I>>::Output, Nil>>;
}

pub type SelectT<I, Sq> = <Sq as Select<I>>::Output;

/// The value at index `I` of a value sequence.
pub trait SelectValue<I> {
    type Literal;

    const VALUE: Self::Literal;
}

impl<I, T, L> SelectValue<I> for Seq<T, L>
where
    L: Select<I>,
    <L as Select<I>>::Output: Literal<T>,
{
    type Literal = T;

    const VALUE: T = <<L as Select<I>>::Output as Literal<T>>::VALUE;
}

/// The value at index `I` of a value sequence.
pub const fn select_v<I, Sq: SelectValue<I>>() -> Sq::Literal {
    Sq::VALUE
}
