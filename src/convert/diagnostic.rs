//! Advisory findings reported during conversion.

use crate::model::EntityId;
use std::fmt;

/// A non-fatal finding about the source document.
///
/// Page numbers are 1-based and count pages in traversal order, so on a
/// right-to-left book page 1 is the last page of the `pages` array.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A page's `book_id` does not reference the document.
    BookIdMismatch {
        page: usize,
        book_id: EntityId,
        document_id: EntityId,
    },

    /// A page is marked `skip`. It is still converted.
    SkippedPage { page: usize },

    /// A page belongs to the store preview.
    PreviewPage { page: usize },

    /// A page carries a title.
    TitledPage { page: usize, title: String },

    /// A page carries an external URL.
    PageExternalUrl { page: usize, url: String },

    /// A viewport's `page_id` does not reference its page.
    PageIdMismatch {
        viewport_id: EntityId,
        page: usize,
        page_id: EntityId,
        expected: EntityId,
    },

    /// A viewport carries an external URL.
    ViewportExternalUrl {
        viewport_id: EntityId,
        page: usize,
        url: String,
    },

    /// A viewport extends beyond its page.
    ViewportOutOfBounds { viewport_id: EntityId, page: usize },

    /// A single full-page viewport was replaced by `null`.
    FullPageOmitted { page: usize },

    /// The declared viewport count disagrees with the viewports visited.
    ViewportCountMismatch { declared: i64, actual: usize },
}

impl Diagnostic {
    /// Log level this finding is reported at.
    ///
    /// Reference mismatches are warnings; the rest is informational.
    pub fn level(&self) -> log::Level {
        match self {
            Diagnostic::BookIdMismatch { .. }
            | Diagnostic::PageIdMismatch { .. }
            | Diagnostic::ViewportOutOfBounds { .. }
            | Diagnostic::ViewportCountMismatch { .. } => log::Level::Warn,
            _ => log::Level::Info,
        }
    }

    /// Traversal page number the finding refers to, if any.
    pub fn page(&self) -> Option<usize> {
        match self {
            Diagnostic::BookIdMismatch { page, .. }
            | Diagnostic::SkippedPage { page }
            | Diagnostic::PreviewPage { page }
            | Diagnostic::TitledPage { page, .. }
            | Diagnostic::PageExternalUrl { page, .. }
            | Diagnostic::PageIdMismatch { page, .. }
            | Diagnostic::ViewportExternalUrl { page, .. }
            | Diagnostic::ViewportOutOfBounds { page, .. }
            | Diagnostic::FullPageOmitted { page } => Some(*page),
            Diagnostic::ViewportCountMismatch { .. } => None,
        }
    }

    /// Emit this finding through the `log` facade.
    pub(crate) fn log(&self) {
        log::log!(self.level(), "{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BookIdMismatch {
                page,
                book_id,
                document_id,
            } => write!(
                f,
                "book_id of page {} doesn't match! {} != {}",
                page, book_id, document_id
            ),
            Diagnostic::SkippedPage { page } => write!(f, "Page {} is skip!", page),
            Diagnostic::PreviewPage { page } => write!(f, "Page {} is a preview page.", page),
            Diagnostic::TitledPage { page, title } => {
                write!(f, "Page {} has a title; {}", page, title)
            }
            Diagnostic::PageExternalUrl { page, url } => {
                write!(f, "Page {} has an external URL; {}", page, url)
            }
            Diagnostic::PageIdMismatch {
                viewport_id,
                page,
                page_id,
                expected,
            } => write!(
                f,
                "page_id of viewport ID {} on page {} doesn't match! {} != {}",
                viewport_id, page, page_id, expected
            ),
            Diagnostic::ViewportExternalUrl {
                viewport_id,
                page,
                url,
            } => write!(
                f,
                "Viewport ID {} on page {} has an external URL; {}",
                viewport_id, page, url
            ),
            Diagnostic::ViewportOutOfBounds { viewport_id, page } => write!(
                f,
                "Viewport ID {} on page {} extends beyond the page.",
                viewport_id, page
            ),
            Diagnostic::FullPageOmitted { page } => {
                write!(f, "Skipping single full viewport on page {}.", page)
            }
            Diagnostic::ViewportCountMismatch { declared, actual } => write!(
                f,
                "viewport_count doesn't match! {} != {}",
                declared, actual
            ),
        }
    }
}
