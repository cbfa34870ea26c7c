use crate::list::{Cons, Nil, TypeList};
use crate::seq::Seq;

/// Type-level concatenation of two sequences of the same kind.
#[diagnostic::on_unimplemented(
    message = "cannot concatenate `{Self}` with `{Rhs}`",
    label = "both sides must be typed sequences, or value sequences of the same literal type",
    note = "use `concat_t!` to splice bare elements into typed sequences"
)]
pub trait Concat<Rhs> {
    type Output;
}

impl<Rhs: TypeList> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<Head, Tail, Rhs> Concat<Rhs> for Cons<Head, Tail>
where
    Tail: Concat<Rhs>,
    Rhs: TypeList,
{
    type Output = Cons<Head, <Tail as Concat<Rhs>>::Output>;
}

impl<T, L1, L2> Concat<Seq<T, L2>> for Seq<T, L1>
where
    L1: Concat<L2>,
{
    type Output = Seq<T, <L1 as Concat<L2>>::Output>;
}

pub type ConcatT<A, B> = <A as Concat<B>>::Output;

/// Flattens its arguments, left to right, into one sequence.
///
/// Bare elements become singleton typed sequences; sequences are spliced in.
/// Three or more arguments fold as `concat(concat(first), concat(rest...))`.
///
/// A bare argument must be a registered [`Element`](crate::Element): it is told
/// apart from a sequence through [`IntoSeq`](crate::IntoSeq), so
/// `concat_t![Vec<u8>, tlist![]]` does not compile. Wrap unregistered types in
/// `tlist!` instead; [`ConcatT`] itself accepts any element types.
///
/// ```
/// use typeseq_core::{assert_same, concat_t, tlist};
///
/// const _: () = assert_same::<
///     concat_t![i32, bool, tlist![String], tlist![], u8, tlist![f64]],
///     tlist![i32, bool, String, u8, f64],
/// >();
/// ```
#[macro_export]
macro_rules! concat_t {
    ($only:ty $(,)?) => {
        <$only as $crate::IntoSeq>::Output
    };
    ($first:ty, $($rest:ty),+ $(,)?) => {
        <<$first as $crate::IntoSeq>::Output as $crate::Concat<$crate::concat_t![$($rest),+]>>::Output
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_same, tlist, vseq};

    #[test]
    fn typed_sequences() {
        assert_same::<ConcatT<tlist![u8], tlist![i32, i64]>, tlist![u8, i32, i64]>();
        assert_same::<ConcatT<Nil, tlist![i32]>, tlist![i32]>();
        assert_same::<ConcatT<tlist![i32], Nil>, tlist![i32]>();
        assert_same::<ConcatT<Nil, Nil>, Nil>();
    }

    #[test]
    fn duplicates_are_kept() {
        assert_same::<ConcatT<tlist![u8, u8], tlist![u8]>, tlist![u8, u8, u8]>();
    }

    #[test]
    fn value_sequences() {
        assert_same::<
            crate::concat_t![vseq![i32; 1, 2, 3], vseq![i32; 4, 5, 6], vseq![i32; 7, 8, 9]],
            vseq![i32; 1, 2, 3, 4, 5, 6, 7, 8, 9],
        >();
        assert_same::<ConcatT<vseq![u8], vseq![u8; 3]>, vseq![u8; 3]>();
    }

    #[test]
    fn unregistered_types_concatenate_as_lists() {
        assert_same::<
            crate::concat_t![tlist![Option<u8>], i32, tlist![]],
            tlist![Option<u8>, i32],
        >();
        assert_same::<ConcatT<tlist![Option<u8>], tlist![[u8; 3]]>, tlist![Option<u8>, [u8; 3]]>();
    }

    #[test]
    fn bare_elements_are_wrapped() {
        assert_same::<crate::concat_t![i32], tlist![i32]>();
        assert_same::<crate::concat_t![i32, bool], tlist![i32, bool]>();
        assert_same::<crate::concat_t![tlist![], u8, tlist![]], tlist![u8]>();
    }
}
