//! Expansion of the structinit entry points.
//!
//! Each entry point reads its input into a `TypeDeclaration`, runs the
//! generator and splices the result back:
//! - the attribute macro re-emits the item followed by the `impl` block
//! - the derive macro emits only the `impl` block

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Item};

use crate::ast::{read_derive_input, read_item};
use crate::codegen::generate_initializer;
use crate::parse::{parse_init_attributes, InitArgs};

/// Expand `#[struct_init(args)]` applied to `item`.
///
/// On failure the item is still emitted, followed by the compile error, so the
/// diagnostic only affects this one expansion.
pub fn expand_attribute(args: TokenStream, item: TokenStream) -> TokenStream {
    let item: Item = match syn::parse2(item) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error(),
    };

    let args: InitArgs = match syn::parse2(args) {
        Ok(args) => args,
        Err(e) => {
            let error = e.to_compile_error();
            return quote! { #item #error };
        }
    };

    let decl = read_item(&item);
    match generate_initializer(&decl, &args) {
        Ok(function) => {
            let init_impl = function.to_impl_tokens();
            quote! {
                #item
                #init_impl
            }
        }
        Err(e) => {
            let error = e.into_syn_error(decl.keyword_span).to_compile_error();
            quote! {
                #item
                #error
            }
        }
    }
}

/// Expand `#[derive(StructInit)]` on `input`.
pub fn expand_derive(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error(),
    };

    let args = match parse_init_attributes(&input.attrs) {
        Ok(args) => args,
        Err(e) => return e.to_compile_error(),
    };

    let decl = read_derive_input(&input);
    match generate_initializer(&decl, &args) {
        Ok(function) => function.to_impl_tokens(),
        Err(e) => e.into_syn_error(decl.keyword_span).to_compile_error(),
    }
}
