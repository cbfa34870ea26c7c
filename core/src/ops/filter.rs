use crate::bit::If;
use crate::list::{Cons, Nil};
use crate::ops::{Concat, Predicate};
use crate::seq::Seq;

/// The elements satisfying `P`, in their original order.
///
/// Each element maps to a singleton or an empty list depending on the
/// predicate; the pieces are concatenated front to back.
#[diagnostic::on_unimplemented(
    message = "cannot filter `{Self}` with `{P}`",
    label = "every element must be accepted by `{P}` with parameter `{Param}`"
)]
pub trait Filter<P, Param = ()> {
    type Output;
}

impl<P, Param> Filter<P, Param> for Nil {
    type Output = Nil;
}

impl<P, Param, H, T> Filter<P, Param> for Cons<H, T>
where
    P: Predicate<H, Param>,
    <P as Predicate<H, Param>>::Output: If<Cons<H, Nil>, Nil>,
    T: Filter<P, Param>,
    <<P as Predicate<H, Param>>::Output as If<Cons<H, Nil>, Nil>>::Output:
        Concat<<T as Filter<P, Param>>::Output>,
{
    type Output = <<<P as Predicate<H, Param>>::Output as If<Cons<H, Nil>, Nil>>::Output as Concat<
        <T as Filter<P, Param>>::Output,
    >>::Output;
}

impl<P, Param, T, L: Filter<P, Param>> Filter<P, Param> for Seq<T, L> {
    type Output = Seq<T, <L as Filter<P, Param>>::Output>;
}

pub type FilterT<Sq, P, Param = ()> = <Sq as Filter<P, Param>>::Output;
