//! Document index domain model.
//!
//! The document server publishes its catalogue as an ordered list of
//! categories, each holding an ordered list of documents. These types mirror
//! that JSON shape exactly so the index body can be decoded with serde and no
//! intermediate representation.
//!
//! ```json
//! [
//!   {
//!     "category": "Guides",
//!     "documents": [
//!       { "doc_name": "Intro", "doc_path": "static/Guides/Intro/index.html" }
//!     ]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A single browsable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name, also the text the filter matches against.
    pub doc_name: String,
    /// Navigation target, an opaque URL or server-relative path.
    pub doc_path: String,
}

impl Document {
    #[must_use]
    pub fn new(doc_name: impl Into<String>, doc_path: impl Into<String>) -> Self {
        Self {
            doc_name: doc_name.into(),
            doc_path: doc_path.into(),
        }
    }
}

/// A named group of documents.
///
/// Category names are unique within an index and used as display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name shown as the group heading.
    pub category: String,
    /// Documents in display order.
    pub documents: Vec<Document>,
}

impl Category {
    #[must_use]
    pub fn new(category: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            category: category.into(),
            documents,
        }
    }

    /// Returns a copy of this category carrying `documents` instead of its own.
    #[must_use]
    pub fn with_documents(&self, documents: Vec<Document>) -> Self {
        Self {
            category: self.category.clone(),
            documents,
        }
    }
}

/// The full, unfiltered catalogue obtained from the server.
///
/// Serialized transparently as a JSON array of [`Category`]. An index is
/// replaced wholesale when a new one is loaded and is never edited in place,
/// so it only exposes read access to its categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentIndex {
    categories: Vec<Category>,
}

impl DocumentIndex {
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Total number of documents across all categories.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }
}

impl From<Vec<Category>> for DocumentIndex {
    fn from(categories: Vec<Category>) -> Self {
        Self::new(categories)
    }
}
