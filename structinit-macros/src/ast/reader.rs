//! Reading annotated items into `TypeDeclaration`.
//!
//! Both macro entry points funnel through here: the attribute macro hands over
//! a full `syn::Item`, the derive macro a `syn::DeriveInput`. Classification
//! is a single match per input shape; whether the kind is supported is decided
//! later by the generator.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, Item};

use super::types::{DeclarationKind, Member, TypeDeclaration, Visibility};

/// Read an item the `#[struct_init]` attribute is attached to.
pub fn read_item(item: &Item) -> TypeDeclaration {
    match item {
        Item::Struct(s) => {
            let (kind, members) = read_fields(&s.fields);
            TypeDeclaration {
                ident: s.ident.clone(),
                kind,
                visibility: Visibility::from(&s.vis),
                generics: s.generics.clone(),
                members,
                keyword_span: s.struct_token.span,
            }
        }
        Item::Enum(e) => named(
            &e.ident,
            DeclarationKind::Enum,
            &e.vis,
            &e.generics,
            e.enum_token.span,
        ),
        Item::Union(u) => named(
            &u.ident,
            DeclarationKind::Union,
            &u.vis,
            &u.generics,
            u.union_token.span,
        ),
        Item::Trait(t) => named(
            &t.ident,
            DeclarationKind::Other("trait"),
            &t.vis,
            &t.generics,
            t.trait_token.span,
        ),
        Item::TraitAlias(t) => named(
            &t.ident,
            DeclarationKind::Other("trait"),
            &t.vis,
            &t.generics,
            t.trait_token.span,
        ),
        Item::Type(t) => named(
            &t.ident,
            DeclarationKind::Other("type"),
            &t.vis,
            &t.generics,
            t.type_token.span,
        ),
        Item::Fn(f) => named(
            &f.sig.ident,
            DeclarationKind::Other("fn"),
            &f.vis,
            &f.sig.generics,
            f.sig.fn_token.span,
        ),
        Item::Mod(m) => named(
            &m.ident,
            DeclarationKind::Other("mod"),
            &m.vis,
            &Generics::default(),
            m.mod_token.span,
        ),
        Item::Const(c) => named(
            &c.ident,
            DeclarationKind::Other("const"),
            &c.vis,
            &c.generics,
            c.const_token.span,
        ),
        Item::Static(s) => named(
            &s.ident,
            DeclarationKind::Other("static"),
            &s.vis,
            &Generics::default(),
            s.static_token.span,
        ),
        Item::Impl(i) => unnamed("impl", i.impl_token.span),
        Item::Use(u) => unnamed("use", u.use_token.span),
        Item::ExternCrate(e) => unnamed("extern", e.extern_token.span),
        Item::ForeignMod(f) => unnamed("extern", f.abi.extern_token.span),
        Item::Macro(m) => unnamed("macro", m.mac.path.span()),
        other => unnamed("item", other.span()),
    }
}

/// Read the input of `#[derive(StructInit)]`.
pub fn read_derive_input(input: &DeriveInput) -> TypeDeclaration {
    let (kind, members, keyword_span) = match &input.data {
        Data::Struct(s) => {
            let (kind, members) = read_fields(&s.fields);
            (kind, members, s.struct_token.span)
        }
        Data::Enum(e) => (DeclarationKind::Enum, Vec::new(), e.enum_token.span),
        Data::Union(u) => (DeclarationKind::Union, Vec::new(), u.union_token.span),
    };

    TypeDeclaration {
        ident: input.ident.clone(),
        kind,
        visibility: Visibility::from(&input.vis),
        generics: input.generics.clone(),
        members,
        keyword_span,
    }
}

fn read_fields(fields: &Fields) -> (DeclarationKind, Vec<Member>) {
    match fields {
        Fields::Named(named) => {
            let members = named
                .named
                .iter()
                .filter_map(|field| {
                    field.ident.as_ref().map(|ident| Member::Stored {
                        ident: ident.clone(),
                        ty: Some(field.ty.clone()),
                        cfgs: cfg_attributes(&field.attrs),
                    })
                })
                .collect();
            (DeclarationKind::Struct, members)
        }
        Fields::Unnamed(unnamed) => {
            let members = unnamed.unnamed.iter().map(|_| Member::Unnamed).collect();
            (DeclarationKind::TupleStruct, members)
        }
        Fields::Unit => (DeclarationKind::UnitStruct, Vec::new()),
    }
}

/// Only `#[cfg]` is carried onto the generated parameter. Docs, derive helpers
/// and whatever a `cfg_attr` expands to are not accepted on a function parameter.
fn cfg_attributes(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("cfg"))
        .cloned()
        .collect()
}

fn named(
    ident: &Ident,
    kind: DeclarationKind,
    vis: &syn::Visibility,
    generics: &Generics,
    keyword_span: Span,
) -> TypeDeclaration {
    TypeDeclaration {
        ident: ident.clone(),
        kind,
        visibility: Visibility::from(vis),
        generics: generics.clone(),
        members: Vec::new(),
        keyword_span,
    }
}

// Items without a name of their own are identified by their keyword.
fn unnamed(keyword: &'static str, keyword_span: Span) -> TypeDeclaration {
    TypeDeclaration {
        ident: Ident::new(keyword, keyword_span),
        kind: DeclarationKind::Other(keyword),
        visibility: Visibility::Default,
        generics: Generics::default(),
        members: Vec::new(),
        keyword_span,
    }
}
