//! The library element record mutated by edit commands

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::{ElementName, Prefix, Version};

/// Shared handle to a library element.
///
/// An element is owned by its document and observed by any number of open
/// views; commands keep a clone of this handle, never the element itself.
pub type ElementHandle = Arc<Mutex<LibraryElement>>;

/// Metadata record of one library element (component, category, ...).
///
/// Setters take already-validated value types; all validation happens when
/// those types are parsed from raw input.
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryElement {
    name: ElementName,
    description: String,
    keywords: String,
    author: String,
    version: Version,
    deprecated: bool,
    prefix: Prefix,
    parent: Option<Uuid>,
}

impl LibraryElement {
    pub fn new(name: ElementName, version: Version, prefix: Prefix) -> Self {
        Self {
            name,
            description: String::new(),
            keywords: String::new(),
            author: String::new(),
            version,
            deprecated: false,
            prefix,
            parent: None,
        }
    }

    /// Wrap the element into the shared handle used by commands and views
    pub fn into_handle(self) -> ElementHandle {
        Arc::new(Mutex::new(self))
    }

    pub fn name(&self) -> &ElementName {
        &self.name
    }

    pub fn set_name(&mut self, name: ElementName) {
        self.name = name;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.keywords = keywords.into();
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.deprecated = deprecated;
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }

    pub fn parent(&self) -> Option<Uuid> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<Uuid>) {
        self.parent = parent;
    }
}
