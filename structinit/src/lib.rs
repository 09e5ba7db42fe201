//! # structinit
//!
//! Memberwise initializers for structs, generated at compile time.
//!
//! ## Features
//!
//! - **`macros`** (default) - The `#[struct_init]` attribute and `#[derive(StructInit)]`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! structinit = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use structinit::prelude::*;
//!
//! #[struct_init]
//! pub struct Car {
//!     id: String,
//!     mileage: i64,
//!     owner: Option<String>,
//! }
//!
//! let car = Car::new("VIN-1".to_string(), 12_000, None);
//! assert_eq!(car.mileage, 12_000);
//! ```

// Re-export macros
#[cfg(feature = "macros")]
pub use structinit_macros as macros;

#[cfg(feature = "macros")]
pub use structinit_macros::{struct_init, StructInit};

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "macros")]
    pub use structinit_macros::{struct_init, StructInit};
}
