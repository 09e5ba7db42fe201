//! Declaration model for structinit-macros.
//!
//! - `types` - `TypeDeclaration` in, `GeneratedFunction` out
//! - `reader` - Classification of `syn` items into `TypeDeclaration`

pub mod reader;
pub mod types;

pub use reader::{read_derive_input, read_item};
pub use types::*;
