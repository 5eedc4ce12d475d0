//! Error types for panelvp library.

use crate::model::EntityId;
use std::io;
use thiserror::Error;

/// Result type alias for panelvp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a conversion.
///
/// Advisory findings are not errors; they are collected as
/// [`Diagnostic`](crate::convert::Diagnostic) records on the conversion result.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not syntactically valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is valid but does not have the source document shape
    /// (missing or mistyped field).
    #[error("Invalid source document: {0}")]
    InvalidDocument(String),

    /// A field is present but holds an unusable value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// Path of the offending field, e.g. `pages[3].width`.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The declared page count does not match the page array.
    #[error("Page count doesn't match pages in file. {declared} != {actual}.")]
    PageCountMismatch {
        /// `page_count` from the document
        declared: i64,
        /// Length of the `pages` array
        actual: usize,
    },

    /// Page sort order is not monotonic in the active reading direction.
    #[error("Sort order doesn't match. {previous} != {current}.")]
    PageSortOrder {
        /// Sort order of the previously visited page
        previous: i64,
        /// Sort order of the offending page
        current: i64,
    },

    /// A viewport's sort order does not match its position within its page.
    #[error("Viewport {viewport_id} sort order on page {page} doesn't match. {expected} != {actual}.")]
    ViewportSortOrder {
        /// Id of the offending viewport
        viewport_id: EntityId,
        /// 1-based page number in traversal order
        page: usize,
        /// 1-based position within the page
        expected: usize,
        /// Sort order found on the viewport
        actual: i64,
    },

    /// Error while serializing the output.
    #[error("Rendering error: {0}")]
    Render(String),
}
