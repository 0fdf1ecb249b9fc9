//! Per-field edit commands for library element metadata
//!
//! Each command stores the raw input exactly as the UI handed it over and
//! validates it at execute time, so a rejected value never touches the
//! element. The parsed value is captured on first execute and reused by
//! redo - computed values are never re-derived.

use copper_core::{ElementHandle, ElementName, Prefix, Result, Uuid, Version};

use crate::UndoCommand;

/// Renames a library element
pub struct SetName {
    element: ElementHandle,
    input: String,
    new: Option<ElementName>,
    old: Option<ElementName>,
}

impl SetName {
    pub fn new(element: ElementHandle, input: impl Into<String>) -> Self {
        Self {
            element,
            input: input.into(),
            new: None,
            old: None,
        }
    }
}

impl UndoCommand for SetName {
    fn description(&self) -> String {
        "Rename element".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let name = ElementName::parse(&self.input)?;
        let mut element = self.element.lock();
        if *element.name() == name {
            return Ok(false);
        }
        self.old = Some(element.name().clone());
        element.set_name(name.clone());
        self.new = Some(name);
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = &self.old {
            self.element.lock().set_name(old.clone());
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if let Some(new) = &self.new {
            self.element.lock().set_name(new.clone());
        }
        Ok(())
    }
}

/// Changes the description text
pub struct SetDescription {
    element: ElementHandle,
    new: String,
    old: Option<String>,
}

impl SetDescription {
    pub fn new(element: ElementHandle, description: impl Into<String>) -> Self {
        Self {
            element,
            new: description.into(),
            old: None,
        }
    }
}

impl UndoCommand for SetDescription {
    fn description(&self) -> String {
        "Change description".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let mut element = self.element.lock();
        if element.description() == self.new {
            return Ok(false);
        }
        self.old = Some(element.description().to_string());
        element.set_description(self.new.clone());
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = &self.old {
            self.element.lock().set_description(old.clone());
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if self.old.is_some() {
            self.element.lock().set_description(self.new.clone());
        }
        Ok(())
    }
}

/// Changes the search keywords
pub struct SetKeywords {
    element: ElementHandle,
    new: String,
    old: Option<String>,
}

impl SetKeywords {
    pub fn new(element: ElementHandle, keywords: impl Into<String>) -> Self {
        Self {
            element,
            new: keywords.into(),
            old: None,
        }
    }
}

impl UndoCommand for SetKeywords {
    fn description(&self) -> String {
        "Change keywords".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let mut element = self.element.lock();
        if element.keywords() == self.new {
            return Ok(false);
        }
        self.old = Some(element.keywords().to_string());
        element.set_keywords(self.new.clone());
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = &self.old {
            self.element.lock().set_keywords(old.clone());
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if self.old.is_some() {
            self.element.lock().set_keywords(self.new.clone());
        }
        Ok(())
    }
}

/// Changes the author field
pub struct SetAuthor {
    element: ElementHandle,
    new: String,
    old: Option<String>,
}

impl SetAuthor {
    pub fn new(element: ElementHandle, author: impl Into<String>) -> Self {
        Self {
            element,
            new: author.into(),
            old: None,
        }
    }
}

impl UndoCommand for SetAuthor {
    fn description(&self) -> String {
        "Change author".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let mut element = self.element.lock();
        if element.author() == self.new {
            return Ok(false);
        }
        self.old = Some(element.author().to_string());
        element.set_author(self.new.clone());
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = &self.old {
            self.element.lock().set_author(old.clone());
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if self.old.is_some() {
            self.element.lock().set_author(self.new.clone());
        }
        Ok(())
    }
}

/// Changes the version. The raw input is validated at execute time.
pub struct SetVersion {
    element: ElementHandle,
    input: String,
    new: Option<Version>,
    old: Option<Version>,
}

impl SetVersion {
    pub fn new(element: ElementHandle, input: impl Into<String>) -> Self {
        Self {
            element,
            input: input.into(),
            new: None,
            old: None,
        }
    }
}

impl UndoCommand for SetVersion {
    fn description(&self) -> String {
        "Change version".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let version = Version::parse(&self.input)?;
        let mut element = self.element.lock();
        if *element.version() == version {
            return Ok(false);
        }
        self.old = Some(element.version().clone());
        element.set_version(version.clone());
        self.new = Some(version);
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = &self.old {
            self.element.lock().set_version(old.clone());
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if let Some(new) = &self.new {
            self.element.lock().set_version(new.clone());
        }
        Ok(())
    }
}

/// Sets or clears the deprecated flag
pub struct SetDeprecated {
    element: ElementHandle,
    new: bool,
    old: Option<bool>,
}

impl SetDeprecated {
    pub fn new(element: ElementHandle, deprecated: bool) -> Self {
        Self {
            element,
            new: deprecated,
            old: None,
        }
    }
}

impl UndoCommand for SetDeprecated {
    fn description(&self) -> String {
        "Change deprecation flag".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let mut element = self.element.lock();
        if element.is_deprecated() == self.new {
            return Ok(false);
        }
        self.old = Some(element.is_deprecated());
        element.set_deprecated(self.new);
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = self.old {
            self.element.lock().set_deprecated(old);
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if self.old.is_some() {
            self.element.lock().set_deprecated(self.new);
        }
        Ok(())
    }
}

/// Changes the designator prefix. The raw input is validated at execute
/// time; an empty prefix is rejected.
pub struct SetPrefix {
    element: ElementHandle,
    input: String,
    new: Option<Prefix>,
    old: Option<Prefix>,
}

impl SetPrefix {
    pub fn new(element: ElementHandle, input: impl Into<String>) -> Self {
        Self {
            element,
            input: input.into(),
            new: None,
            old: None,
        }
    }
}

impl UndoCommand for SetPrefix {
    fn description(&self) -> String {
        "Change prefix".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let prefix = Prefix::parse(&self.input)?;
        let mut element = self.element.lock();
        if *element.prefix() == prefix {
            return Ok(false);
        }
        self.old = Some(element.prefix().clone());
        element.set_prefix(prefix.clone());
        self.new = Some(prefix);
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = &self.old {
            self.element.lock().set_prefix(old.clone());
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if let Some(new) = &self.new {
            self.element.lock().set_prefix(new.clone());
        }
        Ok(())
    }
}

/// Moves the element to another parent category (or to the root)
pub struct SetParent {
    element: ElementHandle,
    new: Option<Uuid>,
    old: Option<Option<Uuid>>,
}

impl SetParent {
    pub fn new(element: ElementHandle, parent: Option<Uuid>) -> Self {
        Self {
            element,
            new: parent,
            old: None,
        }
    }
}

impl UndoCommand for SetParent {
    fn description(&self) -> String {
        "Change parent category".into()
    }

    fn execute(&mut self) -> Result<bool> {
        let mut element = self.element.lock();
        if element.parent() == self.new {
            return Ok(false);
        }
        self.old = Some(element.parent());
        element.set_parent(self.new);
        Ok(true)
    }

    fn undo(&mut self) -> Result<()> {
        if let Some(old) = self.old {
            self.element.lock().set_parent(old);
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        if self.old.is_some() {
            self.element.lock().set_parent(self.new);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use copper_core::LibraryElement;

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
    fn test_set_name_round_trip() {
        let element = create_test_element();
        let mut cmd = SetName::new(element.clone(), "C-0603");

        assert!(cmd.execute().unwrap());
        assert_eq!(element.lock().name().as_str(), "C-0603");

        cmd.undo().unwrap();
        assert_eq!(element.lock().name().as_str(), "C-0805");

        cmd.redo().unwrap();
        assert_eq!(element.lock().name().as_str(), "C-0603");
    }

    #[test]
    fn test_set_name_invalid_input_rejected() {
        let element = create_test_element();
        let mut cmd = SetName::new(element.clone(), "   ");

        assert!(cmd.execute().is_err());
        assert_eq!(element.lock().name().as_str(), "C-0805");
        // undo after a failed execute must not touch the element
        cmd.undo().unwrap();
        assert_eq!(element.lock().name().as_str(), "C-0805");
    }

    #[test]
    fn test_set_name_same_value_is_empty() {
        let element = create_test_element();
        let mut cmd = SetName::new(element.clone(), "C-0805");
        assert!(!cmd.execute().unwrap());
    }

    #[test]
    fn test_set_version_trailing_zeros_are_noop() {
        let element = create_test_element();
        let mut cmd = SetVersion::new(element.clone(), "0.1.0");
        assert!(!cmd.execute().unwrap());
    }

    #[test]
    fn test_set_prefix_empty_rejected() {
        let element = create_test_element();
        let mut cmd = SetPrefix::new(element.clone(), "");
        assert!(cmd.execute().is_err());
        assert_eq!(element.lock().prefix().as_str(), "C");
    }

    #[test]
    fn test_set_deprecated_round_trip() {
        let element = create_test_element();
        let mut cmd = SetDeprecated::new(element.clone(), true);

        assert!(cmd.execute().unwrap());
        assert!(element.lock().is_deprecated());
        cmd.undo().unwrap();
        assert!(!element.lock().is_deprecated());
    }

    #[test]
    fn test_set_parent_round_trip() {
        let element = create_test_element();
        let parent = Uuid::new_v4();
        let mut cmd = SetParent::new(element.clone(), Some(parent));

        assert!(cmd.execute().unwrap());
        assert_eq!(element.lock().parent(), Some(parent));
        cmd.undo().unwrap();
        assert_eq!(element.lock().parent(), None);
        cmd.redo().unwrap();
        assert_eq!(element.lock().parent(), Some(parent));
    }
}
