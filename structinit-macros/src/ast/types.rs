//! Declaration and initializer types for structinit expansion.
//!
//! These types are the intermediate representation between the `syn` item a
//! macro is attached to and the tokens it emits:
//! - `TypeDeclaration` is read from the annotated item (see `ast::reader`)
//! - `GeneratedFunction` is produced by `codegen::generate_initializer`
//!
//! Everything here lives for a single macro invocation.

use proc_macro2::Span;
use syn::{Attribute, Generics, Ident, Type};

// ============================================================================
// Input Side
// ============================================================================

/// Kind of item a structinit macro was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `struct Name { .. }`
    Struct,
    /// `struct Name;`
    UnitStruct,
    /// `struct Name(..);`
    TupleStruct,
    Enum,
    Union,
    /// Any other item (trait, fn, mod, impl, ...), named by its keyword.
    Other(&'static str),
}

impl DeclarationKind {
    /// Product types with named (or no) members.
    pub fn is_product_type(self) -> bool {
        matches!(self, DeclarationKind::Struct | DeclarationKind::UnitStruct)
    }
}

/// Access level of a declaration, reduced to the one level that propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// No modifier emitted.
    #[default]
    Default,
    /// `pub`
    Public,
}

impl From<&syn::Visibility> for Visibility {
    fn from(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Visibility::Public,
            // pub(crate), pub(super), pub(in ..) and inherited
            _ => Visibility::Default,
        }
    }
}

/// A member of the declaration's body, in source order.
#[derive(Debug, Clone)]
pub enum Member {
    /// A named stored field. `ty` is `None` when the member carries no type.
    /// `cfgs` holds the field's `#[cfg(..)]` attributes.
    Stored {
        ident: Ident,
        ty: Option<Type>,
        cfgs: Vec<Attribute>,
    },
    /// A positional member of a tuple struct.
    Unnamed,
}

/// A declaration as seen by the initializer generator.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub ident: Ident,
    pub kind: DeclarationKind,
    pub visibility: Visibility,
    pub generics: Generics,
    pub members: Vec<Member>,
    /// Span of the item keyword (`struct`, `enum`, ...), where diagnostics attach.
    pub keyword_span: Span,
}

/// A stored field with an explicit type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub ident: Ident,
    pub ty: Type,
    pub cfgs: Vec<Attribute>,
}

// ============================================================================
// Output Side
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ident: Ident,
    pub ty: Type,
    pub cfgs: Vec<Attribute>,
}

/// `member` is initialized from the parameter of the same name.
///
/// A parameter and its assignment carry the same `cfgs`, so a field compiled
/// out by `#[cfg]` drops from the signature and the struct literal together.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub member: Ident,
    pub cfgs: Vec<Attribute>,
}

/// The memberwise initializer produced for one declaration.
///
/// `parameters` and `assignments` always have one entry per extracted field,
/// in field order.
#[derive(Debug, Clone)]
pub struct GeneratedFunction {
    pub ident: Ident,
    pub visibility: Visibility,
    pub self_ty: Ident,
    pub generics: Generics,
    pub parameters: Vec<Parameter>,
    pub assignments: Vec<Assignment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_only_pub_is_public() {
        let public: syn::Visibility = parse_quote!(pub);
        assert_eq!(Visibility::from(&public), Visibility::Public);

        let restricted: Vec<syn::Visibility> = vec![
            parse_quote!(pub(crate)),
            parse_quote!(pub(super)),
            parse_quote!(pub(in crate::models)),
            syn::Visibility::Inherited,
        ];
        for vis in &restricted {
            assert_eq!(Visibility::from(vis), Visibility::Default);
        }
    }

    #[test]
    fn test_product_type_kinds() {
        assert!(DeclarationKind::Struct.is_product_type());
        assert!(DeclarationKind::UnitStruct.is_product_type());
        assert!(!DeclarationKind::TupleStruct.is_product_type());
        assert!(!DeclarationKind::Enum.is_product_type());
        assert!(!DeclarationKind::Union.is_product_type());
        assert!(!DeclarationKind::Other("trait").is_product_type());
    }
}
