//! Selection sort with pluggable minimum strategies.
//!
//! [`SelectionSort<Sel>`] repeatedly takes the element at `Sel`'s minimum
//! index, appends it to the result and erases it from the input. Every
//! strategy breaks ties towards the earliest element, which makes the sort
//! stable.
//!
//! | strategy     | sequence kind | ranked by                      |
//! |--------------|---------------|--------------------------------|
//! | [`Min`]      | value         | literal value                  |
//! | [`MinSize`]  | typed         | `Element::Size`, by recursion  |
//! | [`MinSize2`] | typed         | [`Min`] over [`SizesT`]        |

use typenum::Unsigned;

use crate::bit::{Bit, False, True};
use crate::cmp::{Compare, Ordering};
use crate::element::Element;
use crate::int::{Literal, Pos};
use crate::list::{Cons, Nil, Sequence};
use crate::nat::{Nat, S, Z};
use crate::ops::{Erase, Select};
use crate::seq::Seq;

/// A "pick the minimum" strategy for the list `L`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot rank the elements of `{L}`",
    label = "`Min` ranks value sequences, `MinSize`/`MinSize2` rank registered element types",
    note = "an empty sequence has no minimum"
)]
pub trait SelectMin<L> {
    /// Index of the first minimal element.
    type Index: Nat;
}

/// Ranks integer literals by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Ranks element types by size, scanning the list directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSize;

/// Ranks element types by size through [`Min`] over their size sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSize2;

/// One step of a linear minimum scan: keeps the current element when it ranks
/// at or below the minimum of the rest, otherwise keeps the rest's minimum.
#[doc(hidden)]
pub trait MinStep<Here, RestIndex, RestValue>: Bit {
    type Index: Nat;
    type Value;
}

impl<Here, RestIndex: Nat, RestValue> MinStep<Here, RestIndex, RestValue> for True {
    type Index = Z;
    type Value = Here;
}

impl<Here, RestIndex: Nat, RestValue> MinStep<Here, RestIndex, RestValue> for False {
    type Index = S<RestIndex>;
    type Value = RestValue;
}

type KeepHere<A, B> = <<A as Compare<B>>::Output as Ordering>::IsLessOrEqual;

/// The first minimal literal of a non-empty list of literals.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no minimal literal",
    label = "expected a non-empty value sequence"
)]
pub trait MinOf {
    type Index: Nat;
    type Value;
}

impl<H> MinOf for Cons<H, Nil> {
    type Index = Z;
    type Value = H;
}

impl<H, H2, T> MinOf for Cons<H, Cons<H2, T>>
where
    Cons<H2, T>: MinOf,
    H: Compare<<Cons<H2, T> as MinOf>::Value>,
    KeepHere<H, <Cons<H2, T> as MinOf>::Value>:
        MinStep<H, <Cons<H2, T> as MinOf>::Index, <Cons<H2, T> as MinOf>::Value>,
{
    type Index = <KeepHere<H, <Cons<H2, T> as MinOf>::Value> as MinStep<
        H,
        <Cons<H2, T> as MinOf>::Index,
        <Cons<H2, T> as MinOf>::Value,
    >>::Index;
    type Value = <KeepHere<H, <Cons<H2, T> as MinOf>::Value> as MinStep<
        H,
        <Cons<H2, T> as MinOf>::Index,
        <Cons<H2, T> as MinOf>::Value,
    >>::Value;
}

impl<T, L: MinOf> MinOf for Seq<T, L> {
    type Index = L::Index;
    type Value = L::Value;
}

impl<L: MinOf> SelectMin<L> for Min {
    type Index = L::Index;
}

/// Index of the first minimal value of a value sequence.
pub const fn min_index<Sq: MinOf>() -> usize {
    <Sq::Index as Nat>::USIZE
}

/// The minimal value of a value sequence.
pub const fn min_v<T, L>() -> T
where
    L: MinOf,
    L::Value: Literal<T>,
{
    <L::Value as Literal<T>>::VALUE
}

/// The first element of smallest size in a non-empty typed sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no smallest element",
    label = "expected a non-empty typed sequence of registered element types"
)]
pub trait MinSizeOf {
    type Index: Nat;
    type Size: Unsigned;
}

impl<H: Element> MinSizeOf for Cons<H, Nil> {
    type Index = Z;
    type Size = H::Size;
}

impl<H, H2, T> MinSizeOf for Cons<H, Cons<H2, T>>
where
    H: Element,
    Cons<H2, T>: MinSizeOf,
    H::Size: Compare<<Cons<H2, T> as MinSizeOf>::Size>,
    KeepHere<H::Size, <Cons<H2, T> as MinSizeOf>::Size>:
        MinStep<H::Size, <Cons<H2, T> as MinSizeOf>::Index, <Cons<H2, T> as MinSizeOf>::Size>,
    <KeepHere<H::Size, <Cons<H2, T> as MinSizeOf>::Size> as MinStep<
        H::Size,
        <Cons<H2, T> as MinSizeOf>::Index,
        <Cons<H2, T> as MinSizeOf>::Size,
    >>::Value: Unsigned,
{
    type Index = <KeepHere<H::Size, <Cons<H2, T> as MinSizeOf>::Size> as MinStep<
        H::Size,
        <Cons<H2, T> as MinSizeOf>::Index,
        <Cons<H2, T> as MinSizeOf>::Size,
    >>::Index;
    type Size = <KeepHere<H::Size, <Cons<H2, T> as MinSizeOf>::Size> as MinStep<
        H::Size,
        <Cons<H2, T> as MinSizeOf>::Index,
        <Cons<H2, T> as MinSizeOf>::Size,
    >>::Value;
}

impl<L: MinSizeOf> SelectMin<L> for MinSize {
    type Index = L::Index;
}

pub const fn min_size_index<L: MinSizeOf>() -> usize {
    <L::Index as Nat>::USIZE
}

pub const fn min_size<L: MinSizeOf>() -> usize {
    <L::Size as Unsigned>::USIZE
}

/// Maps each element of a typed list to the literal of its size.
pub trait Sizes {
    type Output;
}

impl Sizes for Nil {
    type Output = Nil;
}

impl<H: Element, T: Sizes> Sizes for Cons<H, T> {
    type Output = Cons<Pos<H::Size>, <T as Sizes>::Output>;
}

/// The `usize` value sequence of element sizes of a typed sequence.
pub type SizesT<Sq> = Seq<usize, <<Sq as Sequence>::Items as Sizes>::Output>;

impl<L> SelectMin<L> for MinSize2
where
    L: Sizes,
    <L as Sizes>::Output: MinOf,
{
    type Index = <<L as Sizes>::Output as MinOf>::Index;
}

/// Selection sort under the strategy `Sel`.
#[diagnostic::on_unimplemented(
    message = "cannot sort `{Self}` with `{Sel}`",
    label = "`{Sel}` must rank every element of the sequence"
)]
pub trait SelectionSort<Sel> {
    type Output;
}

type MinAt<Sel, L> = <Sel as SelectMin<L>>::Index;

impl<Sel> SelectionSort<Sel> for Nil {
    type Output = Nil;
}

impl<Sel, H, T> SelectionSort<Sel> for Cons<H, T>
where
    Sel: SelectMin<Cons<H, T>>,
    Cons<H, T>: Select<MinAt<Sel, Cons<H, T>>> + Erase<MinAt<Sel, Cons<H, T>>>,
    <Cons<H, T> as Erase<MinAt<Sel, Cons<H, T>>>>::Output: SelectionSort<Sel>,
{
    type Output = Cons<
        <Cons<H, T> as Select<MinAt<Sel, Cons<H, T>>>>::Output,
        <<Cons<H, T> as Erase<MinAt<Sel, Cons<H, T>>>>::Output as SelectionSort<Sel>>::Output,
    >;
}

impl<Sel, T, L: SelectionSort<Sel>> SelectionSort<Sel> for Seq<T, L> {
    type Output = Seq<T, <L as SelectionSort<Sel>>::Output>;
}

/// `Sq` sorted by value.
pub type SortedT<Sq> = <Sq as SelectionSort<Min>>::Output;

/// `Sq` sorted by element size.
pub type SizeSortedT<Sq> = <Sq as SelectionSort<MinSize2>>::Output;

pub type SortT<Sq, Sel> = <Sq as SelectionSort<Sel>>::Output;
