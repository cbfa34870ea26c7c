//! Observing compile-time results.
//!
//! [`assert_same`] checks identity while type checking; the remaining helpers
//! turn sequences into runtime data for printing and comparison.

use core::any::TypeId;

/// Type identity.
///
/// Only `T: TypeEq<T>` holds, so a bound `A: TypeEq<B>` fails to compile unless
/// `A` and `B` are the same type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not the same type as `{T}`",
    label = "the computed sequence differs from the expected one"
)]
pub trait TypeEq<T: ?Sized> {}

impl<T: ?Sized> TypeEq<T> for T {}

/// Compile-time assertion that `A` and `B` are the same type.
///
/// Usable in `const` items, so a mismatch is reported by the compiler:
///
/// ```
/// use typeseq_core::{assert_same, tlist, ReverseT};
///
/// const _: () = assert_same::<ReverseT<tlist![u8, i32]>, tlist![i32, u8]>();
/// ```
pub const fn assert_same<A: ?Sized + TypeEq<B>, B: ?Sized>() {}

/// Runtime identity check.
pub fn same<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

#[cfg(any(feature = "std", feature = "alloc"))]
pub use self::names::{Describe, TypeNames, short_type_name};

#[cfg(any(feature = "std", feature = "alloc"))]
mod names {
    use core::fmt::Debug;

    use typenum::{NonZero, Unsigned};

    use crate::alloc_prelude::{String, ToString, Vec, format};
    use crate::element::Element;
    use crate::int::{Int, Neg, Pos};
    use crate::list::{Cons, Nil};
    use crate::nat::{Nat, S, Z};
    use crate::seq::{Seq, ValueList, Values};

    /// Strips module paths from a type name: `alloc::string::String` becomes
    /// `String`, `core::option::Option<alloc::string::String>` becomes
    /// `Option<String>`.
    pub fn short_type_name(full: &str) -> String {
        let mut out = String::with_capacity(full.len());
        let mut segment = 0;
        for (at, ch) in full.char_indices() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                continue;
            }
            push_last_segment(&mut out, &full[segment..at]);
            out.push(ch);
            segment = at + ch.len_utf8();
        }
        push_last_segment(&mut out, &full[segment..]);
        out
    }

    fn push_last_segment(out: &mut String, path: &str) {
        out.push_str(path.rsplit("::").next().unwrap_or(path));
    }

    /// The element type names of a typed sequence.
    pub trait TypeNames {
        fn visit<F: FnMut(&'static str)>(f: &mut F);

        fn names() -> Vec<&'static str> {
            let mut out = Vec::new();
            Self::visit(&mut |name| out.push(name));
            typeseq_trace_reify!("names", out.len());
            out
        }
    }

    impl TypeNames for Nil {
        fn visit<F: FnMut(&'static str)>(_f: &mut F) {}
    }

    impl<H: 'static, T: TypeNames> TypeNames for Cons<H, T> {
        fn visit<F: FnMut(&'static str)>(f: &mut F) {
            f(core::any::type_name::<H>());
            T::visit(f);
        }
    }

    /// Human-readable rendering of an element, a literal or a sequence.
    ///
    /// Typed sequences render as `[i32, bool]`, value sequences as
    /// `i32[4, 1, 8]`.
    pub trait Describe {
        fn describe() -> String;
    }

    impl Describe for Nil {
        fn describe() -> String {
            "[]".to_string()
        }
    }

    impl<H: 'static, T: TypeNames> Describe for Cons<H, T> {
        fn describe() -> String {
            let names = Self::names();
            let mut out = String::from("[");
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&short_type_name(name));
            }
            out.push(']');
            out
        }
    }

    impl<T: Debug + 'static, L: ValueList<T>> Describe for Seq<T, L> {
        fn describe() -> String {
            let values = <Self as Values>::to_vec();
            format!("{}{values:?}", short_type_name(core::any::type_name::<T>()))
        }
    }

    impl<E: Element + 'static> Describe for E {
        fn describe() -> String {
            short_type_name(core::any::type_name::<E>())
        }
    }

    impl Describe for Z {
        fn describe() -> String {
            "0".to_string()
        }
    }

    impl<N: Nat> Describe for S<N> {
        fn describe() -> String {
            <Self as Nat>::USIZE.to_string()
        }
    }

    impl<N: Unsigned + 'static> Describe for Pos<N> {
        fn describe() -> String {
            <Self as Int>::I128.to_string()
        }
    }

    impl<N: Unsigned + NonZero + 'static> Describe for Neg<N> {
        fn describe() -> String {
            <Self as Int>::I128.to_string()
        }
    }
}
