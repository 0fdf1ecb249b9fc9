//! Concrete edit commands over library elements

mod batch;
mod metadata;

pub use batch::{FieldRejection, MetadataField, MetadataInput, MetadataOutcome, apply_metadata_edit};
pub use metadata::{SetAuthor, SetDeprecated, SetDescription, SetKeywords, SetName, SetParent, SetPrefix, SetVersion};
