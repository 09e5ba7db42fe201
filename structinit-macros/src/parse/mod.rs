//! Parsing module for structinit-macros.
//!
//! - `attributes` - Arguments of `#[struct_init(...)]` and the `#[init(...)]` derive helper

pub mod attributes;

pub use attributes::*;
