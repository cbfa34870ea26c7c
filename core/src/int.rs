//! Signed type-level integer literals, the elements of value sequences.
//!
//! `Pos<N>` is `+N` and `Neg<N>` is `-N`, where `N` is a binary `typenum`
//! natural. Zero is `Pos<UTerm>`; `Neg<UTerm>` is deliberately not an [`Int`],
//! so every integer has exactly one spelling and [`Same`] can be decided
//! structurally. Magnitudes are only bounded by `i128`.

use core::marker::PhantomData;

use typenum::{Cmp as MagnitudeCmp, IsEqual, NonZero, Unsigned};

use crate::bit::{Bit, False};
use crate::cmp::{Compare, Greater, Less, Ordering, Same};
use crate::sealed::Sealed;

/// Non-negative literal `+N`.
pub struct Pos<N>(PhantomData<N>);

/// Negative literal `-N`, `N >= 1`.
pub struct Neg<N>(PhantomData<N>);

/// A type-level integer literal.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an integer literal",
    label = "value sequences hold `Pos<N>` or `Neg<N>` literals (see `lit!`)",
    note = "`Neg<UTerm>` is not a literal, spell zero as `lit!(0)`"
)]
pub trait Int: Sealed + 'static {
    const I128: i128;
}

impl<N: Unsigned> Sealed for Pos<N> {}
impl<N: Unsigned + NonZero> Sealed for Neg<N> {}

impl<N: Unsigned + 'static> Int for Pos<N> {
    const I128: i128 = N::I128;
}

impl<N: Unsigned + NonZero + 'static> Int for Neg<N> {
    const I128: i128 = -N::I128;
}

impl<A, B> Compare<Pos<B>> for Pos<A>
where
    A: Unsigned + MagnitudeCmp<B>,
    B: Unsigned,
    <A as MagnitudeCmp<B>>::Output: Ordering,
{
    type Output = <A as MagnitudeCmp<B>>::Output;
}

// -a < -b  <=>  b < a
impl<A, B> Compare<Neg<B>> for Neg<A>
where
    A: Unsigned + NonZero,
    B: Unsigned + NonZero + MagnitudeCmp<A>,
    <B as MagnitudeCmp<A>>::Output: Ordering,
{
    type Output = <B as MagnitudeCmp<A>>::Output;
}

impl<A: Unsigned + NonZero, B: Unsigned> Compare<Pos<B>> for Neg<A> {
    type Output = Less;
}

impl<A: Unsigned, B: Unsigned + NonZero> Compare<Neg<B>> for Pos<A> {
    type Output = Greater;
}

impl<A, B> Same<Pos<B>> for Pos<A>
where
    A: Unsigned + IsEqual<B>,
    B: Unsigned,
    <A as IsEqual<B>>::Output: Bit,
{
    type Output = <A as IsEqual<B>>::Output;
}

impl<A, B> Same<Neg<B>> for Neg<A>
where
    A: Unsigned + NonZero + IsEqual<B>,
    B: Unsigned + NonZero,
    <A as IsEqual<B>>::Output: Bit,
{
    type Output = <A as IsEqual<B>>::Output;
}

impl<A: Unsigned + NonZero, B: Unsigned> Same<Pos<B>> for Neg<A> {
    type Output = False;
}

impl<A: Unsigned, B: Unsigned + NonZero> Same<Neg<B>> for Pos<A> {
    type Output = False;
}

/// Reification of a literal into the runtime literal type `T` of its sequence.
///
/// Using `VALUE` with a literal that does not fit `T` is a compile error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a `{T}` literal",
    label = "value sequences hold primitive integers",
    note = "supported literal types: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize"
)]
pub trait Literal<T>: Int {
    const VALUE: T;
}

macro_rules! impl_literal {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<I: Int> Literal<$t> for I {
                const VALUE: $t = {
                    assert!(
                        I::I128 >= <$t>::MIN as i128 && I::I128 <= <$t>::MAX as i128,
                        "literal does not fit the literal type of its value sequence"
                    );
                    I::I128 as $t
                };
            }
        )+
    };
}

impl_literal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// Spells one integer literal type: `lit!(4)` is `Pos<U4>`, `lit!(-4)` is
/// `Neg<U4>`, with `typenum`'s `U4`.
///
/// Any magnitude up to `i128::MAX` is accepted.
#[macro_export]
macro_rules! lit {
    (- $n:tt) => {
        $crate::Neg<$crate::__unsigned!([$crate] $n)>
    };
    ($n:tt) => {
        $crate::Pos<$crate::__unsigned!([$crate] $n)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cmp, SameT};
    use typenum::{U0, U3, U4, U255, U1000};

    #[test]
    fn literal_values() {
        assert_eq!(<Pos<U4> as Int>::I128, 4);
        assert_eq!(<Neg<U4> as Int>::I128, -4);
        assert_eq!(<Pos<U0> as Literal<u8>>::VALUE, 0u8);
        assert_eq!(<Neg<U3> as Literal<i32>>::VALUE, -3i32);
        assert_eq!(<lit!(-4) as Int>::I128, -4);
        assert_eq!(<lit!(17) as Literal<usize>>::VALUE, 17usize);
    }

    #[test]
    fn macro_matches_typenum_spelling() {
        crate::assert_same::<lit!(0), Pos<U0>>();
        crate::assert_same::<lit!(255), Pos<U255>>();
        crate::assert_same::<lit!(-1000), Neg<U1000>>();
    }

    #[test]
    fn wide_literals() {
        assert_eq!(<lit!(255) as Literal<u8>>::VALUE, u8::MAX);
        assert_eq!(<lit!(-128) as Literal<i8>>::VALUE, i8::MIN);
        assert_eq!(<lit!(65535) as Literal<u16>>::VALUE, u16::MAX);
        assert_eq!(<lit!(18446744073709551615) as Literal<u64>>::VALUE, u64::MAX);
        assert_eq!(<lit!(-9223372036854775808) as Literal<i64>>::VALUE, i64::MIN);
    }

    #[test]
    fn signed_ordering() {
        assert_eq!(<Cmp<lit!(-4), lit!(-3)> as Ordering>::ORDERING, core::cmp::Ordering::Less);
        assert_eq!(<Cmp<lit!(-3), lit!(-4)> as Ordering>::ORDERING, core::cmp::Ordering::Greater);
        assert_eq!(<Cmp<lit!(-1), lit!(0)> as Ordering>::ORDERING, core::cmp::Ordering::Less);
        assert_eq!(<Cmp<lit!(2), lit!(-9)> as Ordering>::ORDERING, core::cmp::Ordering::Greater);
        assert_eq!(<Cmp<lit!(7), lit!(7)> as Ordering>::ORDERING, core::cmp::Ordering::Equal);
        assert_eq!(<Cmp<lit!(200), lit!(1000)> as Ordering>::ORDERING, core::cmp::Ordering::Less);
    }

    #[test]
    fn identity() {
        assert!(<SameT<lit!(5), lit!(5)> as Bit>::BOOL);
        assert!(<SameT<lit!(-5), lit!(-5)> as Bit>::BOOL);
        assert!(<SameT<lit!(300), lit!(300)> as Bit>::BOOL);
        assert!(!<SameT<lit!(5), lit!(-5)> as Bit>::BOOL);
        assert!(!<SameT<lit!(-1), lit!(1)> as Bit>::BOOL);
        assert!(!<SameT<lit!(1), lit!(2)> as Bit>::BOOL);
    }
}
