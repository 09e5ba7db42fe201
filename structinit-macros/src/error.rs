//! Error types for initializer expansion.

use proc_macro2::Span;

/// Failure of the initializer generator.
///
/// Raised only by the declaration-kind check; field extraction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionError {
    UnsupportedDeclarationKind,
}

impl ExpansionError {
    /// Convert into a `syn::Error` attached to `span`.
    pub fn into_syn_error(self, span: Span) -> syn::Error {
        syn::Error::new(span, self.to_string())
    }
}

impl std::fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpansionError::UnsupportedDeclarationKind => write!(
                f,
                "StructInit can only be applied to a struct with named fields"
            ),
        }
    }
}
