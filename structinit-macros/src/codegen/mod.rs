//! Code generation module for structinit-macros (internal).

mod initializer;

pub(crate) use initializer::generate_initializer;
