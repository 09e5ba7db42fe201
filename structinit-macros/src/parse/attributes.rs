//! Attribute parsing for structinit macros.
//!
//! Both `#[struct_init(...)]` and the `#[init(...)]` helper of
//! `#[derive(StructInit)]` take the same arguments:
//!
//! - `name = new_with_parts` (or `name = "new_with_parts"`) - name of the
//!   generated function, `new` when omitted

use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, Meta, Token};

/// Name of the derive helper attribute.
pub const INIT_HELPER: &str = "init";

/// Configuration of one initializer expansion.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    pub name: Option<Ident>,
}

impl InitArgs {
    /// Name of the generated function.
    pub fn function_name(&self) -> Ident {
        self.name
            .clone()
            .unwrap_or_else(|| Ident::new("new", proc_macro2::Span::call_site()))
    }
}

impl Parse for InitArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            let ident_str = ident.to_string();

            if ident_str == "name" {
                if name.is_some() {
                    return Err(syn::Error::new(
                        ident.span(),
                        "Duplicate attribute argument: name",
                    ));
                }
                input.parse::<Token![=]>()?;
                if input.peek(syn::LitStr) {
                    let name_lit: syn::LitStr = input.parse()?;
                    name = Some(name_lit.parse::<Ident>()?);
                } else {
                    name = Some(input.parse::<Ident>()?);
                }
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("Unknown attribute argument: {}", ident_str),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(InitArgs { name })
    }
}

/// Collect the `#[init(...)]` helper attribute from a derive input.
///
/// A bare `#[init]` is accepted and means defaults; a second `#[init]`
/// attribute is an error.
pub fn parse_init_attributes(attrs: &[Attribute]) -> syn::Result<InitArgs> {
    let mut found: Option<InitArgs> = None;

    for attr in attrs {
        if !attr.path().is_ident(INIT_HELPER) {
            continue;
        }

        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "Duplicate #[init] attribute",
            ));
        }

        let args = match &attr.meta {
            Meta::Path(_) => InitArgs::default(),
            _ => attr.parse_args::<InitArgs>()?,
        };
        found = Some(args);
    }

    Ok(found.unwrap_or_default())
}
