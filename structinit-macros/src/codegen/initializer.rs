//! Memberwise initializer generation.
//!
//! Turns a `TypeDeclaration` into a `GeneratedFunction` and renders it as an
//! inherent `impl` block.
//!
//! # Example Output
//!
//! For
//!
//! ```rust,ignore
//! #[struct_init]
//! pub struct Car {
//!     id: String,
//!     owner: Option<String>,
//! }
//! ```
//!
//! the generated block is
//!
//! ```rust,ignore
//! impl Car {
//!     #[allow(clippy::too_many_arguments)]
//!     pub fn new(id: String, owner: Option<String>) -> Self {
//!         Self { id, owner }
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use crate::ast::{
    Assignment, Field, GeneratedFunction, Member, Parameter, TypeDeclaration, Visibility,
};
use crate::error::ExpansionError;
use crate::parse::InitArgs;

/// Generate the initializer for a declaration.
///
/// Fails with `UnsupportedDeclarationKind` unless the declaration is a struct
/// with named fields (or a unit struct). Nothing after that check can fail.
pub fn generate_initializer(
    decl: &TypeDeclaration,
    args: &InitArgs,
) -> Result<GeneratedFunction, ExpansionError> {
    if !decl.kind.is_product_type() {
        return Err(ExpansionError::UnsupportedDeclarationKind);
    }

    let fields = extract_fields(&decl.members);

    let parameters = fields
        .iter()
        .map(|field| Parameter {
            ident: field.ident.clone(),
            ty: field.ty.clone(),
            cfgs: field.cfgs.clone(),
        })
        .collect();

    let assignments = fields
        .iter()
        .map(|field| Assignment {
            member: field.ident.clone(),
            cfgs: field.cfgs.clone(),
        })
        .collect();

    Ok(GeneratedFunction {
        ident: args.function_name(),
        visibility: decl.visibility,
        self_ty: decl.ident.clone(),
        generics: decl.generics.clone(),
        parameters,
        assignments,
    })
}

/// Stored members with an explicit type, in declaration order.
///
/// Anything else is skipped rather than rejected.
pub fn extract_fields(members: &[Member]) -> Vec<Field> {
    members
        .iter()
        .filter_map(|member| match member {
            Member::Stored {
                ident,
                ty: Some(ty),
                cfgs,
            } => Some(Field {
                ident: ident.clone(),
                ty: ty.clone(),
                cfgs: cfgs.clone(),
            }),
            Member::Stored { ty: None, .. } | Member::Unnamed => None,
        })
        .collect()
}

impl GeneratedFunction {
    /// Render the function inside an inherent `impl` block for its type.
    pub fn to_impl_tokens(&self) -> TokenStream {
        let self_ty = &self.self_ty;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let function = self.to_fn_tokens();

        quote! {
            impl #impl_generics #self_ty #ty_generics #where_clause {
                #function
            }
        }
    }

    /// Render the function on its own.
    pub fn to_fn_tokens(&self) -> TokenStream {
        let fn_name = &self.ident;
        let vis = match self.visibility {
            Visibility::Public => quote! { pub },
            Visibility::Default => quote! {},
        };

        let params: Vec<TokenStream> = self
            .parameters
            .iter()
            .map(|param| {
                let cfgs = &param.cfgs;
                let ident = &param.ident;
                let ty = &param.ty;
                quote! { #(#cfgs)* #ident: #ty }
            })
            .collect();

        let inits: Vec<TokenStream> = self
            .assignments
            .iter()
            .map(|assignment| {
                let cfgs = &assignment.cfgs;
                let member = &assignment.member;
                quote! { #(#cfgs)* #member }
            })
            .collect();

        quote! {
            #[allow(clippy::too_many_arguments)]
            #vis fn #fn_name(#(#params),*) -> Self {
                Self { #(#inits),* }
            }
        }
    }
}
