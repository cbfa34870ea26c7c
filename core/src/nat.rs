//! Unary type-level naturals.
//!
//! Indices and lengths are [`Nat`]s: the list operations peel one `S` per
//! element, so positions stay unary. The aliases `U0`..=`U128` spell them.
//! Literal magnitudes and element sizes are binary `typenum` naturals instead
//! (see [`int`](crate::int)).

use core::marker::PhantomData;

use crate::bit::{False, True};
use crate::sealed::Sealed;

/// Zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// Successor of `N`.
pub struct S<N>(PhantomData<N>);

/// A type-level natural number.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level natural number",
    label = "expected an index such as `U0`, `U3` or `S<Z>`"
)]
pub trait Nat: Sealed + 'static {
    const USIZE: usize;
}

impl Sealed for Z {}
impl<N: Nat> Sealed for S<N> {}

impl Nat for Z {
    const USIZE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const USIZE: usize = N::USIZE + 1;
}

/// Equality of two naturals as a bit.
pub trait NatEq<Rhs: Nat>: Nat {
    type Output: crate::Bit;
}

impl NatEq<Z> for Z {
    type Output = True;
}

impl<M: Nat> NatEq<S<M>> for Z {
    type Output = False;
}

impl<N: Nat> NatEq<Z> for S<N> {
    type Output = False;
}

impl<N: NatEq<M>, M: Nat> NatEq<S<M>> for S<N> {
    type Output = <N as NatEq<M>>::Output;
}

/// `Self - Rhs`; `Rhs` must not exceed `Self`.
pub trait NatSub<Rhs: Nat>: Nat {
    type Output: Nat;
}

impl<N: Nat> NatSub<Z> for N {
    type Output = N;
}

impl<N: NatSub<M>, M: Nat> NatSub<S<M>> for S<N> {
    type Output = <N as NatSub<M>>::Output;
}

pub type Diff<A, B> = <A as NatSub<B>>::Output;

macro_rules! nat_aliases {
    ([$($prev:ident)*] [$($next:ident)*]) => {
        pub type U0 = Z;
        $(pub type $next = S<$prev>;)*
    };
}

nat_aliases!(
    [U0 U1 U2 U3 U4 U5 U6 U7 U8 U9 U10 U11 U12 U13 U14 U15
     U16 U17 U18 U19 U20 U21 U22 U23 U24 U25 U26 U27 U28 U29 U30 U31
     U32 U33 U34 U35 U36 U37 U38 U39 U40 U41 U42 U43 U44 U45 U46 U47
     U48 U49 U50 U51 U52 U53 U54 U55 U56 U57 U58 U59 U60 U61 U62 U63
     U64 U65 U66 U67 U68 U69 U70 U71 U72 U73 U74 U75 U76 U77 U78 U79
     U80 U81 U82 U83 U84 U85 U86 U87 U88 U89 U90 U91 U92 U93 U94 U95
     U96 U97 U98 U99 U100 U101 U102 U103 U104 U105 U106 U107 U108 U109 U110 U111
     U112 U113 U114 U115 U116 U117 U118 U119 U120 U121 U122 U123 U124 U125 U126 U127]
    [U1 U2 U3 U4 U5 U6 U7 U8 U9 U10 U11 U12 U13 U14 U15 U16
     U17 U18 U19 U20 U21 U22 U23 U24 U25 U26 U27 U28 U29 U30 U31 U32
     U33 U34 U35 U36 U37 U38 U39 U40 U41 U42 U43 U44 U45 U46 U47 U48
     U49 U50 U51 U52 U53 U54 U55 U56 U57 U58 U59 U60 U61 U62 U63 U64
     U65 U66 U67 U68 U69 U70 U71 U72 U73 U74 U75 U76 U77 U78 U79 U80
     U81 U82 U83 U84 U85 U86 U87 U88 U89 U90 U91 U92 U93 U94 U95 U96
     U97 U98 U99 U100 U101 U102 U103 U104 U105 U106 U107 U108 U109 U110 U111 U112
     U113 U114 U115 U116 U117 U118 U119 U120 U121 U122 U123 U124 U125 U126 U127 U128]
);
