//! Filter engine: reshapes a document index around a free-text query.
//!
//! Filtering is a pure function of the index and the query. For each category
//! in order, only the documents whose name matches are kept; a category left
//! with no documents is dropped entirely. Relative order of categories and
//! documents never changes, and the source index is never modified.
//!
//! The result also carries the *top target*: the path of the first document
//! of the first surviving category, or an empty string when nothing survived.
//! Submitting the filter box navigates there.
//!
//! # Example
//!
//! ```
//! use docnav::domain::{filter_index, Category, Document, DocumentIndex};
//!
//! let index = DocumentIndex::new(vec![Category::new(
//!     "Guides",
//!     vec![
//!         Document::new("Intro", "/intro"),
//!         Document::new("Advanced Setup", "/adv"),
//!     ],
//! )]);
//!
//! let view = filter_index(&index, "setup");
//! assert_eq!(view.top_target(), "/adv");
//! assert_eq!(view.categories()[0].documents.len(), 1);
//! ```

use super::document::{Category, DocumentIndex};
use super::matcher::{DocumentMatcher, SubstringMatcher};

/// The filtered view of a [`DocumentIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredIndex {
    categories: Vec<Category>,
    top_target: String,
}

impl FilteredIndex {
    fn from_categories(categories: Vec<Category>) -> Self {
        let top_target = categories
            .first()
            .and_then(|category| category.documents.first())
            .map(|document| document.doc_path.clone())
            .unwrap_or_default();
        Self {
            categories,
            top_target,
        }
    }

    /// Surviving categories, each with at least one document.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Path of the first surviving document, or `""` if none survived.
    #[must_use]
    pub fn top_target(&self) -> &str {
        &self.top_target
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn document_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }

    /// Views the filtered result as an index so it can be filtered again.
    #[must_use]
    pub fn to_index(&self) -> DocumentIndex {
        DocumentIndex::new(self.categories.clone())
    }
}

/// Filters `index` by case-insensitive substring match on document names.
#[must_use]
pub fn filter_index(index: &DocumentIndex, query: &str) -> FilteredIndex {
    filter_index_with(index, query, &SubstringMatcher)
}

/// Filters `index` using an explicit matching strategy.
#[must_use]
pub fn filter_index_with(
    index: &DocumentIndex,
    query: &str,
    matcher: &dyn DocumentMatcher,
) -> FilteredIndex {
    let _span = tracing::debug_span!(
        "filter_index",
        categories = index.len(),
        query_len = query.len()
    )
    .entered();

    let categories: Vec<Category> = index
        .categories()
        .iter()
        .filter_map(|category| {
            let documents: Vec<_> = category
                .documents
                .iter()
                .filter(|document| matcher.is_match(&document.doc_name, query))
                .cloned()
                .collect();
            (!documents.is_empty()).then(|| category.with_documents(documents))
        })
        .collect();

    let view = FilteredIndex::from_categories(categories);
    tracing::trace!(
        surviving_categories = view.categories.len(),
        top_target = %view.top_target,
        "index filtered"
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Document;
    use crate::domain::matcher::FuzzyMatcher;

    fn guides() -> DocumentIndex {
        DocumentIndex::new(vec![Category::new(
            "Guides",
            vec![
                Document::new("Intro", "/intro"),
                Document::new("Advanced Setup", "/adv"),
            ],
        )])
    }

    fn two_categories() -> DocumentIndex {
        DocumentIndex::new(vec![
            Category::new("A", vec![Document::new("X", "/x")]),
            Category::new("B", vec![Document::new("Y", "/y")]),
        ])
    }

    #[test]
    fn query_matching_first_document() {
        let view = filter_index(&guides(), "intro");
        assert_eq!(
            view.categories(),
            &[Category::new("Guides", vec![Document::new("Intro", "/intro")])]
        );
        assert_eq!(view.top_target(), "/intro");
    }

    #[test]
    fn query_matching_second_document() {
        let view = filter_index(&guides(), "setup");
        assert_eq!(
            view.categories(),
            &[Category::new("Guides", vec![Document::new("Advanced Setup", "/adv")])]
        );
        assert_eq!(view.top_target(), "/adv");
    }

    #[test]
    fn query_matching_nothing() {
        let view = filter_index(&guides(), "zzz");
        assert!(view.is_empty());
        assert_eq!(view.top_target(), "");
    }

    #[test]
    fn empty_categories_are_dropped() {
        let view = filter_index(&two_categories(), "y");
        assert_eq!(
            view.categories(),
            &[Category::new("B", vec![Document::new("Y", "/y")])]
        );
        assert_eq!(view.top_target(), "/y");
    }

    #[test]
    fn empty_query_keeps_everything() {
        let index = two_categories();
        let view = filter_index(&index, "");
        assert_eq!(view.to_index(), index);
        assert_eq!(view.top_target(), "/x");
        assert_eq!(view.document_count(), 2);
    }

    #[test]
    fn empty_index_has_no_target() {
        let view = filter_index(&DocumentIndex::default(), "");
        assert!(view.is_empty());
        assert_eq!(view.top_target(), "");
    }

    #[test]
    fn source_index_is_untouched() {
        let index = guides();
        let before = index.clone();
        let _ = filter_index(&index, "intro");
        assert_eq!(index, before);
    }

    #[test]
    fn category_with_empty_document_list_never_survives() {
        let index = DocumentIndex::new(vec![
            Category::new("Empty", vec![]),
            Category::new("Full", vec![Document::new("Doc", "/doc")]),
        ]);
        let view = filter_index(&index, "");
        assert_eq!(view.categories().len(), 1);
        assert_eq!(view.categories()[0].category, "Full");
    }

    #[test]
    fn category_name_is_not_searched() {
        let view = filter_index(&guides(), "guides");
        assert!(view.is_empty());
    }

    #[test]
    fn fuzzy_strategy_is_pluggable() {
        let view = filter_index_with(&guides(), "adst", &FuzzyMatcher::default());
        assert_eq!(view.top_target(), "/adv");
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use crate::domain::document::Document;
    use proptest::prelude::*;

    fn document() -> impl Strategy<Value = Document> {
        ("[a-zA-Z ]{0,12}", "/[a-z]{1,8}").prop_map(|(name, path)| Document::new(name, path))
    }

    fn category(min_docs: usize) -> impl Strategy<Value = Category> {
        ("[A-Z][a-z]{0,6}", prop::collection::vec(document(), min_docs..5))
            .prop_map(|(name, documents)| Category::new(name, documents))
    }

    fn index(min_docs: usize) -> impl Strategy<Value = DocumentIndex> {
        prop::collection::vec(category(min_docs), 0..6).prop_map(DocumentIndex::new)
    }

    fn query() -> impl Strategy<Value = String> {
        "[a-zA-Z ]{0,3}"
    }

    fn matches(name: &str, query: &str) -> bool {
        name.to_lowercase().contains(&query.to_lowercase())
    }

    fn is_subsequence<T>(sub: &[T], of: &[T], same: impl Fn(&T, &T) -> bool) -> bool {
        let mut remaining = of.iter();
        sub.iter().all(|wanted| remaining.any(|candidate| same(wanted, candidate)))
    }

    proptest! {
        #[test]
        fn empty_query_returns_index_unchanged(index in index(1)) {
            let view = filter_index(&index, "");
            prop_assert_eq!(view.to_index(), index);
        }

        #[test]
        fn surviving_categories_are_non_empty_and_match(index in index(0), query in query()) {
            let view = filter_index(&index, &query);
            for category in view.categories() {
                prop_assert!(!category.documents.is_empty());
                for document in &category.documents {
                    prop_assert!(matches(&document.doc_name, &query));
                }
            }
        }

        #[test]
        fn every_matching_document_survives(index in index(0), query in query()) {
            let view = filter_index(&index, &query);
            let expected = index
                .categories()
                .iter()
                .flat_map(|c| &c.documents)
                .filter(|d| matches(&d.doc_name, &query))
                .count();
            prop_assert_eq!(view.document_count(), expected);
        }

        #[test]
        fn output_preserves_input_order(index in index(0), query in query()) {
            let view = filter_index(&index, &query);
            let ordered = is_subsequence(view.categories(), index.categories(), |kept, source| {
                kept.category == source.category
                    && is_subsequence(kept.documents.as_slice(), source.documents.as_slice(), |a, b| a == b)
            });
            prop_assert!(ordered);
        }

        #[test]
        fn top_target_is_first_surviving_document(index in index(0), query in query()) {
            let view = filter_index(&index, &query);
            match view.categories().first() {
                None => prop_assert_eq!(view.top_target(), ""),
                Some(first) => prop_assert_eq!(view.top_target(), first.documents[0].doc_path.as_str()),
            }
        }

        #[test]
        fn filtering_is_idempotent(index in index(0), query in query()) {
            let once = filter_index(&index, &query);
            let twice = filter_index(&once.to_index(), &query);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn source_index_is_not_modified(index in index(0), query in query()) {
            let before = index.clone();
            let _ = filter_index(&index, &query);
            prop_assert_eq!(index, before);
        }
    }
}
