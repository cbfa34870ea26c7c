//! Type-level booleans.
//!
//! Predicates resolve to [`True`] or [`False`]; the rest of the crate branches on
//! them through [`If`] or through step traits implemented for each bit. The two
//! bits are `typenum`'s, so `typenum::IsEqual` results are predicate outputs as
//! they are.

use crate::sealed::Sealed;

/// Type-level `true`.
pub type True = typenum::B1;

/// Type-level `false`.
pub type False = typenum::B0;

/// A type-level boolean.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level boolean",
    label = "expected `True` or `False`",
    note = "predicates must resolve their `Output` to `typeseq::True` or `typeseq::False`"
)]
pub trait Bit: Sealed + 'static {
    const BOOL: bool;

    /// The negated bit.
    type Not: Bit;
}

impl Sealed for True {}
impl Sealed for False {}

impl Bit for True {
    const BOOL: bool = true;
    type Not = False;
}

impl Bit for False {
    const BOOL: bool = false;
    type Not = True;
}

pub type Not<B> = <B as Bit>::Not;

/// Picks `Then` or `Else` depending on the bit.
pub trait If<Then, Else>: Bit {
    type Output;
}

impl<Then, Else> If<Then, Else> for True {
    type Output = Then;
}

impl<Then, Else> If<Then, Else> for False {
    type Output = Else;
}

pub type IfT<C, Then, Else> = <C as If<Then, Else>>::Output;
