//! Domain layer for the docnav plugin.
//!
//! Holds the document index model, the filter engine and its matching
//! strategies, and the error type. Nothing in here depends on Zellij APIs, so
//! the whole layer is testable on the host.
//!
//! # Organization
//!
//! - [`document`]: `Document`, `Category` and `DocumentIndex`
//! - [`filter`]: the filter engine and its `FilteredIndex` result
//! - [`matcher`]: substring and fuzzy name matching
//! - [`error`]: error types and result alias

pub mod document;
pub mod error;
pub mod filter;
pub mod matcher;

pub use document::{Category, Document, DocumentIndex};
pub use error::{DocnavError, Result};
pub use filter::{filter_index, filter_index_with, FilteredIndex};
pub use matcher::{DocumentMatcher, FuzzyMatcher, MatchMode, SubstringMatcher};
