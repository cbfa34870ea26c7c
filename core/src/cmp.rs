//! Type-level ordering and identity.
//!
//! [`Compare`] ranks integer literals and binary magnitudes (element sizes);
//! [`Same`] answers "is this the same element" for both integer literals and
//! registered [`Element`](crate::Element) types, which is what every search
//! primitive is built on.

use typenum::{Cmp as MagnitudeCmp, UInt, UTerm, Unsigned};

use crate::bit::{Bit, False, True};
use crate::sealed::Sealed;

/// `Self < Rhs`.
pub use typenum::Less;

/// `Self == Rhs`.
pub use typenum::Equal;

/// `Self > Rhs`.
pub use typenum::Greater;

/// Result of a type-level comparison.
pub trait Ordering: Sealed + 'static {
    const ORDERING: core::cmp::Ordering;

    type IsLessOrEqual: Bit;
    type IsGreater: Bit;
}

impl Sealed for Less {}
impl Sealed for Equal {}
impl Sealed for Greater {}

impl Ordering for Less {
    const ORDERING: core::cmp::Ordering = core::cmp::Ordering::Less;
    type IsLessOrEqual = True;
    type IsGreater = False;
}

impl Ordering for Equal {
    const ORDERING: core::cmp::Ordering = core::cmp::Ordering::Equal;
    type IsLessOrEqual = True;
    type IsGreater = False;
}

impl Ordering for Greater {
    const ORDERING: core::cmp::Ordering = core::cmp::Ordering::Greater;
    type IsLessOrEqual = False;
    type IsGreater = True;
}

/// Type-level three-way comparison.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be ranked against `{Rhs}`",
    label = "only integer literals of a value sequence and element sizes are ordered",
    note = "rank typed sequences by element size with `MinSize` instead"
)]
pub trait Compare<Rhs> {
    type Output: Ordering;
}

pub type Cmp<A, B> = <A as Compare<B>>::Output;

impl<Rhs: Unsigned> Compare<Rhs> for UTerm
where
    UTerm: MagnitudeCmp<Rhs>,
    <UTerm as MagnitudeCmp<Rhs>>::Output: Ordering,
{
    type Output = <UTerm as MagnitudeCmp<Rhs>>::Output;
}

impl<U, B, Rhs: Unsigned> Compare<Rhs> for UInt<U, B>
where
    UInt<U, B>: MagnitudeCmp<Rhs>,
    <UInt<U, B> as MagnitudeCmp<Rhs>>::Output: Ordering,
{
    type Output = <UInt<U, B> as MagnitudeCmp<Rhs>>::Output;
}

/// Element identity as a bit.
///
/// Implemented for integer literals (value equality) and for every pair of
/// registered [`Element`](crate::Element) types (key equality).
#[diagnostic::on_unimplemented(
    message = "cannot tell whether `{Self}` and `{Rhs}` are the same element",
    label = "compare registered element types with each other, or literals with literals",
    note = "register custom types with `typeseq::element!`"
)]
pub trait Same<Rhs> {
    type Output: Bit;
}

pub type SameT<A, B> = <A as Same<B>>::Output;
