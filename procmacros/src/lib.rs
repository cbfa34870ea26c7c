//! Procedural helpers for `typeseq-core`.
//!
//! Not meant to be used directly: `typeseq_core::lit!`, `vseq!` and `element!`
//! expand to these.

extern crate proc_macro;

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{LitInt, bracketed, parse_macro_input};

/// Spells an integer literal as a binary `typenum` unsigned:
/// `unsigned!([$crate] 6)` is `$crate::typenum::UInt<UInt<UInt<UTerm, B1>, B1>, B0>`.
///
/// The bracketed path is where the caller re-exports `typenum`; macro_rules
/// callers pass `$crate` so the expansion resolves from any downstream crate.
#[proc_macro]
pub fn unsigned(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as UnsignedInput);

    match unsigned_type(&input) {
        Ok(s) => proc_macro::TokenStream::from(s),
        Err(e) => proc_macro::TokenStream::from(e.to_compile_error()),
    }
}

struct UnsignedInput {
    krate: TokenStream,
    value: LitInt,
}

impl Parse for UnsignedInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        bracketed!(content in input);
        let krate = content.parse()?;
        let value = input.parse()?;
        Ok(Self { krate, value })
    }
}

fn unsigned_type(input: &UnsignedInput) -> syn::Result<TokenStream> {
    let value: u128 = input.value.base10_parse()?;
    if value > i128::MAX as u128 {
        return Err(syn::Error::new(
            input.value.span(),
            "literal magnitude does not fit in i128",
        ));
    }
    Ok(spell(&input.krate, value))
}

/// Most significant bit first, nothing for zero.
fn bits(value: u128) -> impl Iterator<Item = bool> {
    let width = u128::BITS - value.leading_zeros();
    (0..width).rev().map(move |at| (value >> at) & 1 == 1)
}

fn spell(krate: &TokenStream, value: u128) -> TokenStream {
    bits(value).fold(quote!(#krate::typenum::UTerm), |acc, bit| {
        let bit = if bit {
            quote!(#krate::typenum::B1)
        } else {
            quote!(#krate::typenum::B0)
        };
        quote!(#krate::typenum::UInt<#acc, #bit>)
    })
}
