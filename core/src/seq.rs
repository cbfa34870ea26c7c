//! Value sequences: a list of integer literal types paired with the literal type
//! they reify to.
//!
//! ```text
//! vseq![i32; 4, -1, 8]  ==  Seq<i32, Cons<Pos<U4>, Cons<Neg<U1>, Cons<Pos<U8>, Nil>>>>
//! ```
//!
//! with `typenum`'s `U1`, `U4` and `U8` as magnitudes.
//!
//! The literal type is stored once, so every value of a sequence shares it, and
//! two value sequences only concatenate when their literal types agree.

use core::marker::PhantomData;

use crate::int::Literal;
use crate::list::{Cons, IntoSeq, Nil, Sequence, TypeList};

/// A value sequence of `T` literals.
pub struct Seq<T, L>(PhantomData<(T, L)>);

impl<T, L: TypeList> Sequence for Seq<T, L> {
    type Items = L;
}

impl<T, L> IntoSeq for Seq<T, L> {
    type Output = Seq<T, L>;
}

/// A list of literals that all reify to `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a list of `{T}` literals",
    label = "every element of a value sequence must be an integer literal (see `lit!`)"
)]
pub trait ValueList<T>: TypeList {
    /// Calls `f` with each value, front to back.
    fn visit<F: FnMut(T)>(f: &mut F);
}

impl<T> ValueList<T> for Nil {
    fn visit<F: FnMut(T)>(_f: &mut F) {}
}

impl<T, H: Literal<T>, Tail: ValueList<T>> ValueList<T> for Cons<H, Tail> {
    fn visit<F: FnMut(T)>(f: &mut F) {
        f(H::VALUE);
        Tail::visit(f);
    }
}

/// Runtime access to the values of a value sequence.
pub trait Values: Sequence {
    type Literal;

    fn visit<F: FnMut(Self::Literal)>(f: F);

    #[cfg(any(feature = "std", feature = "alloc"))]
    fn to_vec() -> crate::alloc_prelude::Vec<Self::Literal> {
        let mut out = crate::alloc_prelude::Vec::new();
        Self::visit(|v| out.push(v));
        typeseq_trace_reify!("values", out.len());
        out
    }
}

impl<T, L: ValueList<T>> Values for Seq<T, L> {
    type Literal = T;

    fn visit<F: FnMut(T)>(mut f: F) {
        L::visit(&mut f);
    }
}

/// Builds a value sequence: `vseq![i32; 4, 1, 8]`, `vseq![u8]` for the empty one.
#[macro_export]
macro_rules! vseq {
    ($t:ty; $($v:tt)*) => {
        $crate::Seq<$t, $crate::__lits![$($v)*]>
    };
    ($t:ty) => {
        $crate::Seq<$t, $crate::Nil>
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __lits {
    () => { $crate::Nil };
    (- $n:tt $(, $($rest:tt)*)?) => {
        $crate::Cons<$crate::lit!(- $n), $crate::__lits![$($($rest)*)?]>
    };
    ($n:tt $(, $($rest:tt)*)?) => {
        $crate::Cons<$crate::lit!($n), $crate::__lits![$($($rest)*)?]>
    };
}
