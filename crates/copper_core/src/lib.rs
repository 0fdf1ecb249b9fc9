//! Domain model for copper library elements.
//!
//! This crate contains the objects that edit commands mutate:
//! - `LibraryElement` - the metadata record of one library element
//! - Validated value types (`ElementName`, `Prefix`, `Version`)
//! - The unified `CoreError` type
//!
//! All validation lives here, in the value types. The editing engine in
//! `copper_edit` never checks domain rules itself; it only surfaces the
//! errors produced by this crate.

mod element;
mod error;
mod name;
mod prefix;
mod version;

pub use element::{ElementHandle, LibraryElement};
pub use error::{CoreError, Result};
pub use name::ElementName;
pub use prefix::Prefix;
pub use version::Version;

// Re-export so downstream crates don't need a direct uuid dependency
pub use uuid::Uuid;
