//! Predicate search and membership.
//!
//! All searches return an index; "not found" is the sequence size (see
//! [`end`](crate::end)), never a separate sentinel type.

use typenum::Unsigned;

use crate::bit::{Bit, False, True};
use crate::cmp::{Compare, Ordering, Same};
use crate::element::Element;
use crate::list::{Cons, Nil, Sequence, SizeOf};
use crate::nat::{Nat, NatEq, S, Z};
use crate::seq::Seq;

/// A type-level predicate over one element and a parameter.
///
/// Implemented by marker types; `Param` defaults to `()` for predicates that
/// take none.
///
/// ```
/// use typeseq_core::typenum::U2;
/// use typeseq_core::{Compare, Element, Ordering, Predicate, find_if, tlist};
///
/// /// Elements wider than two bytes.
/// struct Wide;
///
/// impl<E: Element> Predicate<E> for Wide
/// where
///     E::Size: Compare<U2>,
/// {
///     type Output = <<E::Size as Compare<U2>>::Output as Ordering>::IsGreater;
/// }
///
/// assert_eq!(find_if::<tlist![u8, i16, f64], Wide, ()>(), 2);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over `{E}` with parameter `{Param}`",
    label = "implement `Predicate<{E}, {Param}>` for `{Self}`"
)]
pub trait Predicate<E, Param = ()> {
    type Output: Bit;
}

/// `E` is the same element as `Param`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsSame;

/// `E` occurs in the sequence `Param`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsOneOf;

/// `E` does not occur in the sequence `Param`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotOneOf;

/// Holds for every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

/// Holds for no element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

/// `size_of::<E>()` is strictly greater than `Param`, a `typenum` natural.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeAbove;

impl<E: Same<P>, P> Predicate<E, P> for IsSame {
    type Output = <E as Same<P>>::Output;
}

impl<E, Set> Predicate<E, Set> for IsOneOf
where
    Set: Sequence + Find<E>,
    <Set as Find<E>>::Index: NatEq<SizeOf<Set>>,
{
    type Output = <<<Set as Find<E>>::Index as NatEq<SizeOf<Set>>>::Output as Bit>::Not;
}

impl<E, Set> Predicate<E, Set> for IsNotOneOf
where
    Set: Sequence + Find<E>,
    <Set as Find<E>>::Index: NatEq<SizeOf<Set>>,
{
    type Output = <<Set as Find<E>>::Index as NatEq<SizeOf<Set>>>::Output;
}

impl<E, P> Predicate<E, P> for Always {
    type Output = True;
}

impl<E, P> Predicate<E, P> for Never {
    type Output = False;
}

impl<E, N> Predicate<E, N> for SizeAbove
where
    E: Element,
    N: Unsigned,
    E::Size: Compare<N>,
{
    type Output = <<E::Size as Compare<N>>::Output as Ordering>::IsGreater;
}

/// Index of the first element satisfying `P`, or the size when none does.
///
/// Scans left to right and stops at the first match: the rest of the list is
/// only inspected when the current element fails.
#[diagnostic::on_unimplemented(
    message = "cannot search `{Self}` with `{P}`",
    label = "every element must be accepted by `{P}` with parameter `{Param}`"
)]
pub trait FindIf<P, Param = ()> {
    type Index: Nat;
}

impl<P, Param> FindIf<P, Param> for Nil {
    type Index = Z;
}

impl<P, Param, H, T> FindIf<P, Param> for Cons<H, T>
where
    P: Predicate<H, Param>,
    <P as Predicate<H, Param>>::Output: FindIfStep<T, P, Param>,
{
    type Index = <<P as Predicate<H, Param>>::Output as FindIfStep<T, P, Param>>::Index;
}

impl<P, Param, T, L: FindIf<P, Param>> FindIf<P, Param> for Seq<T, L> {
    type Index = <L as FindIf<P, Param>>::Index;
}

/// One step of [`FindIf`], selected by the predicate's answer for the current
/// element.
#[doc(hidden)]
pub trait FindIfStep<Rest, P, Param>: Bit {
    type Index: Nat;
}

impl<Rest, P, Param> FindIfStep<Rest, P, Param> for True {
    type Index = Z;
}

impl<Rest: FindIf<P, Param>, P, Param> FindIfStep<Rest, P, Param> for False {
    type Index = S<<Rest as FindIf<P, Param>>::Index>;
}

pub type FindIfT<Sq, P, Param = ()> = <Sq as FindIf<P, Param>>::Index;

/// Index of `Needle`, or the size when absent.
pub trait Find<Needle> {
    type Index: Nat;
}

impl<Sq: FindIf<IsSame, Needle>, Needle> Find<Needle> for Sq {
    type Index = <Sq as FindIf<IsSame, Needle>>::Index;
}

pub type FindT<Sq, Needle> = <Sq as Find<Needle>>::Index;

/// Index of the first element that occurs in `Needles`.
pub trait FindOneOf<Needles> {
    type Index: Nat;
}

impl<Sq: FindIf<IsOneOf, Needles>, Needles> FindOneOf<Needles> for Sq {
    type Index = <Sq as FindIf<IsOneOf, Needles>>::Index;
}

/// Index of the first element that does not occur in `Needles`.
pub trait FindNotOneOf<Needles> {
    type Index: Nat;
}

impl<Sq: FindIf<IsNotOneOf, Needles>, Needles> FindNotOneOf<Needles> for Sq {
    type Index = <Sq as FindIf<IsNotOneOf, Needles>>::Index;
}

pub const fn find_if<Sq: FindIf<P, Param>, P, Param>() -> usize {
    <Sq::Index as Nat>::USIZE
}

pub const fn find<Sq: Find<Needle>, Needle>() -> usize {
    <Sq::Index as Nat>::USIZE
}

pub const fn find_one_of<Sq: FindOneOf<Needles>, Needles>() -> usize {
    <Sq::Index as Nat>::USIZE
}

pub const fn find_not_one_of<Sq: FindNotOneOf<Needles>, Needles>() -> usize {
    <Sq::Index as Nat>::USIZE
}

/// Whether `E` occurs in `Set`.
pub const fn is_one_of<E, Set>() -> bool
where
    IsOneOf: Predicate<E, Set>,
{
    <<IsOneOf as Predicate<E, Set>>::Output as Bit>::BOOL
}

/// Whether `E` does not occur in `Set`.
pub const fn is_not_one_of<E, Set>() -> bool
where
    IsNotOneOf: Predicate<E, Set>,
{
    <<IsNotOneOf as Predicate<E, Set>>::Output as Bit>::BOOL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{U1, assert_same, end, lit, tlist, typenum, vseq};

    type Abc = tlist![u8, i32, i64];

    #[test]
    fn find_if_by_identity() {
        assert_eq!(find_if::<Abc, IsSame, u8>(), 0);
        assert_eq!(find_if::<Abc, IsSame, i32>(), 1);
        assert_eq!(find_if::<Abc, IsSame, i64>(), 2);
        assert_eq!(find_if::<Abc, IsSame, i16>(), 3);
        assert_same::<FindIfT<Abc, IsSame, i32>, U1>();
    }

    #[test]
    fn find_returns_end_when_absent() {
        assert_eq!(find::<Abc, u8>(), 0);
        assert_eq!(find::<Abc, i32>(), 1);
        assert_eq!(find::<Abc, i64>(), 2);
        assert_eq!(find::<Abc, i16>(), end::<Abc>());
        assert_eq!(find::<Nil, i16>(), 0);
    }

    #[test]
    fn find_stops_at_first_match() {
        assert_eq!(find::<tlist![bool, u8, u8], u8>(), 1);
        assert_same::<FindT<tlist![bool, u8, u8], u8>, U1>();
    }

    #[test]
    fn membership() {
        assert!(is_one_of::<i32, Abc>());
        assert!(!is_one_of::<i16, Abc>());
        assert!(is_not_one_of::<i16, Abc>());
        assert!(!is_not_one_of::<u8, Abc>());
        assert!(is_one_of::<lit!(3), vseq![i32; 2, 3, 4]>());
        assert!(is_not_one_of::<lit!(-3), vseq![i32; 2, 3, 4]>());
    }

    #[test]
    fn find_one_of_sets() {
        assert_eq!(find_one_of::<Abc, tlist![i16]>(), 3);
        assert_eq!(find_one_of::<Abc, tlist![i16, i32]>(), 1);
        assert_eq!(find_one_of::<Abc, tlist![i16, i64]>(), 2);
        assert_eq!(find_not_one_of::<Abc, tlist![u8, i32]>(), 2);
        assert_eq!(find_not_one_of::<Abc, Abc>(), 3);
    }

    #[test]
    fn value_sequences() {
        type Nums = vseq![i32; 4, 1, 8, 8];
        assert_eq!(find::<Nums, lit!(8)>(), 2);
        assert_eq!(find::<Nums, lit!(5)>(), 4);
        assert_eq!(find_one_of::<Nums, vseq![i32; 7, 1]>(), 1);
        assert_eq!(find_not_one_of::<Nums, vseq![i32; 4, 1]>(), 2);
        assert_same::<FindT<Nums, lit!(1)>, U1>();
        assert_eq!(find::<vseq![u16; 200, 1000, 65535], lit!(65535)>(), 2);
        assert_eq!(find::<vseq![u16; 200, 1000], lit!(999)>(), 2);
    }

    #[test]
    fn size_threshold() {
        assert_eq!(find_if::<Abc, SizeAbove, typenum::U1>(), 1);
        assert_eq!(find_if::<Abc, SizeAbove, typenum::U3>(), 1);
        assert_eq!(find_if::<Abc, SizeAbove, typenum::U4>(), 2);
        assert_eq!(find_if::<Abc, SizeAbove, typenum::U8>(), 3);
        assert_eq!(find_if::<tlist![u8, bool], SizeAbove, typenum::U1>(), 2);
    }

    #[test]
    fn constant_predicates() {
        assert_eq!(find_if::<Abc, Always, ()>(), 0);
        assert_eq!(find_if::<Abc, Never, ()>(), 3);
    }
}
