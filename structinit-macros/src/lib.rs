//! # structinit-macros
//!
//! Procedural macros that generate memberwise initializers for structs.
//!
//! Annotating a struct with `#[struct_init]` (or deriving `StructInit`) adds an
//! inherent function taking one parameter per field, named and typed like the
//! field, in declaration order:
//!
//! ```rust,ignore
//! use structinit_macros::struct_init;
//!
//! #[struct_init]
//! pub struct Car {
//!     id: String,
//!     mileage: i64,
//!     owner: Option<String>,
//! }
//!
//! let car = Car::new("VIN-1".to_string(), 12_000, None);
//! ```
//!
//! The generated function is `pub` when the struct is `pub`, and has no
//! visibility modifier otherwise.
//!
//! ## Supported Attributes
//!
//! - `#[struct_init(name = ident)]` - Rename the generated function (default `new`)
//! - `#[init(name = ident)]` - Same, for `#[derive(StructInit)]`

pub(crate) mod ast;

mod codegen;
mod error;
mod expand;
mod parse;

use proc_macro::TokenStream;

/// Generate a memberwise initializer for the annotated struct.
///
/// Only structs with named fields and unit structs are accepted; enums,
/// unions, tuple structs and other items produce a compile error.
///
/// ```rust,ignore
/// #[struct_init(name = with_parts)]
/// pub struct Engine {
///     cylinders: u8,
///     displacement: f32,
/// }
///
/// let engine = Engine::with_parts(8, 5.7);
/// ```
#[proc_macro_attribute]
pub fn struct_init(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::expand_attribute(attr.into(), item.into()).into()
}

/// Derive macro for `StructInit`.
///
/// Generates the same initializer as `#[struct_init]`. The function name is
/// configured with the `#[init(...)]` helper attribute:
///
/// ```rust,ignore
/// #[derive(StructInit)]
/// #[init(name = assemble)]
/// struct Engine {
///     cylinders: u8,
/// }
/// ```
#[proc_macro_derive(StructInit, attributes(init))]
pub fn struct_init_derive(input: TokenStream) -> TokenStream {
    expand::expand_derive(input.into()).into()
}
