//! Batched metadata edit with per-field results
//!
//! A metadata form commits all of its fields at once. Validation failures
//! are collected per field instead of being discarded, so the caller can
//! show exactly which inputs were rejected while the valid fields still
//! commit as one history entry.

use copper_core::{CoreError, ElementHandle, Result, Uuid};

use crate::UndoStack;
use crate::commands::{SetAuthor, SetDeprecated, SetDescription, SetKeywords, SetName, SetParent, SetPrefix, SetVersion};

/// Raw metadata form contents. `None` means the caller did not touch the
/// field.
#[derive(Clone, Debug, Default)]
pub struct MetadataInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub deprecated: Option<bool>,
    pub prefix: Option<String>,
    /// `Some(None)` moves the element to the root
    pub parent: Option<Option<Uuid>>,
}

/// The metadata fields a batch edit can touch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataField {
    Name,
    Description,
    Keywords,
    Author,
    Version,
    Deprecated,
    Prefix,
    Parent,
}

/// One field whose new value was rejected by domain validation
#[derive(Debug)]
pub struct FieldRejection {
    pub field: MetadataField,
    pub error: CoreError,
}

/// Result of a batched metadata edit
#[derive(Debug)]
pub struct MetadataOutcome {
    /// Whether a history entry was created (false when every supplied field
    /// was either rejected or a no-op)
    pub committed: bool,
    /// Fields rejected by validation; all remaining fields were applied
    pub rejections: Vec<FieldRejection>,
}

impl MetadataOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Applies every supplied field of `input` to `element` as one transaction.
///
/// Each field becomes one sub-command; a field whose value fails validation
/// is reported in the outcome and skipped, it never blocks the other
/// fields. Fields that would not change anything are elided from the
/// resulting history entry.
///
/// # Panics
///
/// Panics if the stack already has an active transaction.
pub fn apply_metadata_edit(stack: &mut UndoStack, element: &ElementHandle, input: MetadataInput) -> MetadataOutcome {
    let mut rejections = Vec::new();
    stack.begin_command("Edit element metadata");

    if let Some(name) = input.name {
        record(
            stack.append_to_command(Box::new(SetName::new(element.clone(), name))),
            MetadataField::Name,
            &mut rejections,
        );
    }
    if let Some(description) = input.description {
        record(
            stack.append_to_command(Box::new(SetDescription::new(element.clone(), description))),
            MetadataField::Description,
            &mut rejections,
        );
    }
    if let Some(keywords) = input.keywords {
        record(
            stack.append_to_command(Box::new(SetKeywords::new(element.clone(), keywords))),
            MetadataField::Keywords,
            &mut rejections,
        );
    }
    if let Some(author) = input.author {
        record(
            stack.append_to_command(Box::new(SetAuthor::new(element.clone(), author))),
            MetadataField::Author,
            &mut rejections,
        );
    }
    if let Some(version) = input.version {
        record(
            stack.append_to_command(Box::new(SetVersion::new(element.clone(), version))),
            MetadataField::Version,
            &mut rejections,
        );
    }
    if let Some(deprecated) = input.deprecated {
        record(
            stack.append_to_command(Box::new(SetDeprecated::new(element.clone(), deprecated))),
            MetadataField::Deprecated,
            &mut rejections,
        );
    }
    if let Some(prefix) = input.prefix {
        record(
            stack.append_to_command(Box::new(SetPrefix::new(element.clone(), prefix))),
            MetadataField::Prefix,
            &mut rejections,
        );
    }
    if let Some(parent) = input.parent {
        record(
            stack.append_to_command(Box::new(SetParent::new(element.clone(), parent))),
            MetadataField::Parent,
            &mut rejections,
        );
    }

    let committed = stack.end_command();
    MetadataOutcome { committed, rejections }
}

fn record(result: Result<()>, field: MetadataField, rejections: &mut Vec<FieldRejection>) {
    if let Err(error) = result {
        rejections.push(FieldRejection { field, error });
    }
}

#[cfg(test)]
mod tests {
    use copper_core::{ElementName, LibraryElement, Prefix, Version};

    use super::*;

    fn create_test_element() -> ElementHandle {
        LibraryElement::new(
            ElementName::parse("C-0805").unwrap(),
            Version::parse("0.1").unwrap(),
            Prefix::parse("C").unwrap(),
        )
        .into_handle()
    }

    #[test]
    fn test_all_fields_applied_as_one_entry() {
        let element = create_test_element();
        let mut stack = UndoStack::new();

        let outcome = apply_metadata_edit(
            &mut stack,
            &element,
            MetadataInput {
                name: Some("C-0603".into()),
                description: Some("SMD capacitor".into()),
                version: Some("0.2".into()),
                deprecated: Some(true),
                ..Default::default()
            },
        );

        assert!(outcome.committed);
        assert!(outcome.is_clean());
        assert_eq!(stack.len(), 1);
        assert_eq!(element.lock().name().as_str(), "C-0603");
        assert_eq!(element.lock().description(), "SMD capacitor");

        stack.undo().unwrap();
        assert_eq!(element.lock().name().as_str(), "C-0805");
        assert_eq!(element.lock().description(), "");
        assert!(!element.lock().is_deprecated());
    }

    #[test]
    fn test_rejected_fields_are_reported_and_skipped() {
        let element = create_test_element();
        let mut stack = UndoStack::new();

        let outcome = apply_metadata_edit(
            &mut stack,
            &element,
            MetadataInput {
                name: Some("".into()),
                version: Some("not.a.version".into()),
                author: Some("alice".into()),
                ..Default::default()
            },
        );

        assert!(outcome.committed);
        let fields: Vec<_> = outcome.rejections.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec![MetadataField::Name, MetadataField::Version]);

        // the valid field was applied, the rejected ones were not
        assert_eq!(element.lock().author(), "alice");
        assert_eq!(element.lock().name().as_str(), "C-0805");
        assert_eq!(element.lock().version().to_string(), "0.1");
    }

    #[test]
    fn test_unchanged_fields_produce_no_entry() {
        let element = create_test_element();
        let mut stack = UndoStack::new();

        let outcome = apply_metadata_edit(
            &mut stack,
            &element,
            MetadataInput {
                name: Some("C-0805".into()),
                version: Some("0.1".into()),
                ..Default::default()
            },
        );

        assert!(!outcome.committed);
        assert!(outcome.is_clean());
        assert_eq!(stack.len(), 0);
        assert!(!stack.is_dirty());
    }

    #[test]
    fn test_untouched_fields_are_not_appended() {
        let element = create_test_element();
        let mut stack = UndoStack::new();

        let outcome = apply_metadata_edit(&mut stack, &element, MetadataInput::default());
        assert!(!outcome.committed);
        assert!(outcome.is_clean());
    }
}
