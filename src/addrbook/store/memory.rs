use super::Backend;
use crate::error::{BookError, Result};

/// In-memory backend for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemBackend {
    content: Option<String>,
    fail_writes: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds persisted text.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            fail_writes: false,
        }
    }

    /// Makes every subsequent write fail, to exercise save-failure paths.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Backend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.content.clone())
    }

    fn write(&mut self, content: &str) -> Result<()> {
        if self.fail_writes {
            return Err(BookError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "memory backend is read-only",
            )));
        }
        self.content = Some(content.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;
    use crate::model::{ContactFields, ContactType};

    pub struct BookFixture {
        pub book: AddressBook<MemBackend>,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(MemBackend::new()),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = ContactFields::new(
                    ContactType::Person,
                    &format!("First{}", i + 1),
                    &format!("Last{}", i + 1),
                );
                self.book.add(fields);
            }
            self
        }

        pub fn with_contact(mut self, fields: ContactFields) -> Self {
            self.book.add(fields);
            self
        }

        /// Adds a contact and puts it in each of `groups`.
        pub fn with_grouped(mut self, first: &str, groups: &[&str]) -> Self {
            let id = self
                .book
                .add(ContactFields::new(ContactType::Person, first, ""));
            for group in groups {
                self.book.assign_group(id, group);
            }
            self
        }

        /// Adds a contact carrying each of `tags`.
        pub fn with_tagged(mut self, first: &str, tags: &[&str]) -> Self {
            let id = self
                .book
                .add(ContactFields::new(ContactType::Person, first, ""));
            for tag in tags {
                self.book.add_tag(id, tag);
            }
            self
        }
    }
}
