use crate::list::{Cons, Nil};
use crate::ops::Concat;
use crate::seq::Seq;

/// Reversal by linear recursion: `reverse(x :: rest) = reverse(rest) ++ [x]`.
pub trait Reverse {
    type Output;
}

impl Reverse for Nil {
    type Output = Nil;
}

impl<H, T> Reverse for Cons<H, T>
where
    T: Reverse,
    <T as Reverse>::Output: Concat<Cons<H, Nil>>,
{
    type Output = <<T as Reverse>::Output as Concat<Cons<H, Nil>>>::Output;
}

impl<T, L: Reverse> Reverse for Seq<T, L> {
    type Output = Seq<T, <L as Reverse>::Output>;
}

pub type ReverseT<Sq> = <Sq as Reverse>::Output;

/// Reversal by halving: `reverse2(S) = reverse2(back) ++ reverse2(front)`,
/// where `front` holds the first `size / 2` elements.
///
/// Produces the same result as [`Reverse`] through a recursion tree of
/// logarithmic height.
pub trait Reverse2 {
    type Output;
}

impl Reverse2 for Nil {
    type Output = Nil;
}

impl<H> Reverse2 for Cons<H, Nil> {
    type Output = Cons<H, Nil>;
}

impl<A, B, T> Reverse2 for Cons<A, Cons<B, T>>
where
    Self: Halve<Self>,
    Front<Self>: Reverse2,
    Back<Self>: Reverse2,
    <Back<Self> as Reverse2>::Output: Concat<<Front<Self> as Reverse2>::Output>,
{
    type Output =
        <<Back<Self> as Reverse2>::Output as Concat<<Front<Self> as Reverse2>::Output>>::Output;
}

/// Splits a list in two by walking it next to `Runner`, which moves two
/// elements per step. Called with the list itself as the runner, `Front` is the
/// first `size / 2` elements and `Back` the rest.
#[doc(hidden)]
pub trait Halve<Runner> {
    type Front;
    type Back;
}

impl<L> Halve<Nil> for L {
    type Front = Nil;
    type Back = L;
}

impl<L, X> Halve<Cons<X, Nil>> for L {
    type Front = Nil;
    type Back = L;
}

impl<H, T, X, Y, R> Halve<Cons<X, Cons<Y, R>>> for Cons<H, T>
where
    T: Halve<R>,
{
    type Front = Cons<H, <T as Halve<R>>::Front>;
    type Back = <T as Halve<R>>::Back;
}

type Front<L> = <L as Halve<L>>::Front;
type Back<L> = <L as Halve<L>>::Back;

impl<T, L: Reverse2> Reverse2 for Seq<T, L> {
    type Output = Seq<T, <L as Reverse2>::Output>;
}

pub type Reverse2T<Sq> = <Sq as Reverse2>::Output;
