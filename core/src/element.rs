//! Registry of types that may appear in a typed sequence.
//!
//! Stable Rust has no type-level "are these the same type" test, so every
//! element carries a type-level identity key. Two registered types are the same
//! element exactly when their keys are equal. The key also travels with a
//! type-level storage size, used by the size-ranked sort. Both are binary
//! `typenum` naturals.
//!
//! ```
//! use typeseq_core::{element, find, tlist};
//!
//! struct Point {
//!     _x: f64,
//!     _y: f64,
//! }
//!
//! element! {
//!     Point => 64, 16;
//! }
//!
//! assert_eq!(find::<tlist![u8, Point], Point>(), 1);
//! ```

use typenum::{IsEqual, Unsigned};

use crate::bit::Bit;
use crate::cmp::Same;

/// First identity key available to downstream registrations.
///
/// Keys below it belong to the built-in registrations. Keys are global: two
/// types registered with the same key are the same element to every search,
/// so a crate that registers elements should own a documented key range.
/// [`element!`](crate::element!) rejects a key registered twice in one module.
pub const USER_KEY_BASE: usize = 64;

pub type UserKeyBase = typenum::U64;

/// A type usable as a typed-sequence element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered as a sequence element",
    label = "typed sequence operations need an identity key and size for `{Self}`",
    note = "register it with `typeseq::element! {{ {Self} => <key>, <size>; }}`"
)]
pub trait Element {
    /// Identity key, unique per registered type.
    type Key: Unsigned;
    /// `size_of::<Self>()` as a type-level natural.
    type Size: Unsigned;
}

impl<A: Element, B: Element> Same<B> for A
where
    A::Key: IsEqual<B::Key>,
    <A::Key as IsEqual<B::Key>>::Output: Bit,
{
    type Output = <A::Key as IsEqual<B::Key>>::Output;
}

/// Registers types as sequence elements.
///
/// Each entry is `Type => key, size;`. The declared size is checked against
/// `size_of` at compile time, and a key used twice in the same module is a
/// duplicate definition error.
#[macro_export]
macro_rules! element {
    ($($(#[$meta:meta])* $t:ty => $key:tt, $size:tt);+ $(;)?) => {
        $(
            $(#[$meta])*
            impl $crate::Element for $t {
                type Key = $crate::__unsigned!([$crate] $key);
                type Size = $crate::__unsigned!([$crate] $size);
            }

            $(#[$meta])*
            $crate::__paste! {
                #[doc(hidden)]
                #[allow(dead_code)]
                const [<__TYPESEQ_ELEMENT_KEY_ $key>]: () = ();
            }

            $(#[$meta])*
            const _: () = ::core::assert!(
                ::core::mem::size_of::<$t>() == $size,
                "declared element size does not match size_of"
            );
        )+
    };
}

element! {
    () => 0, 0;
    bool => 1, 1;
    char => 2, 4;
    i8 => 3, 1;
    i16 => 4, 2;
    i32 => 5, 4;
    i64 => 6, 8;
    i128 => 7, 16;
    u8 => 8, 1;
    u16 => 9, 2;
    u32 => 10, 4;
    u64 => 11, 8;
    u128 => 12, 16;
    f32 => 13, 4;
    f64 => 14, 8;
    #[cfg(target_pointer_width = "64")]
    isize => 15, 8;
    #[cfg(target_pointer_width = "64")]
    usize => 16, 8;
    #[cfg(target_pointer_width = "64")]
    &'static str => 17, 16;
    #[cfg(target_pointer_width = "32")]
    isize => 15, 4;
    #[cfg(target_pointer_width = "32")]
    usize => 16, 4;
    #[cfg(target_pointer_width = "32")]
    &'static str => 17, 8;
}

#[cfg(any(feature = "std", feature = "alloc"))]
mod heap {
    use crate::alloc_prelude::String;

    element! {
        #[cfg(target_pointer_width = "64")]
        String => 18, 24;
        #[cfg(target_pointer_width = "32")]
        String => 18, 12;
    }
}
