//! Conversion of source documents into reader viewports.
//!
//! The converter walks pages and their viewports in reading order,
//! validates the ordering invariants of the source document, normalizes
//! pixel geometry into page fractions and compacts single full-page
//! viewports into `null`.
//!
//! # Example
//!
//! ```no_run
//! use panelvp::convert::{ConvertOptions, Converter};
//! use panelvp::SourceDocument;
//!
//! fn main() -> panelvp::Result<()> {
//!     let data = std::fs::read("book.json")?;
//!     let doc = SourceDocument::from_json_slice(&data)?;
//!
//!     let result = Converter::new(ConvertOptions::default()).convert(&doc)?;
//!     for diagnostic in &result.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//!     println!("{} pages", result.pages.len());
//!     Ok(())
//! }
//! ```

mod diagnostic;

pub use diagnostic::Diagnostic;

use crate::error::{Error, Result};
use crate::model::{
    Direction, NormalizedViewport, OutputPage, ReaderMeta, SourceDocument, SourcePage,
};
use crate::render::JsonFormat;

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Replace a single full-page viewport with `null`
    pub omit_full_page: bool,

    /// Output document shape
    pub output_format: OutputFormat,

    /// JSON layout of the output
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the full-page omission.
    pub fn with_omit_full_page(mut self, omit: bool) -> Self {
        self.omit_full_page = omit;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            omit_full_page: true,
            output_format: OutputFormat::default(),
            json_format: JsonFormat::Compact,
        }
    }
}

/// Output document shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare array of per-page viewport lists
    #[default]
    Viewports,

    /// Reader `meta.json` with page sizes and direction
    ReaderMeta,
}

/// Counters collected during a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Pages visited
    pub page_count: usize,

    /// Viewports visited
    pub viewport_count: usize,

    /// Pages compacted to `null`
    pub omitted_pages: usize,

    /// Pages marked `skip`
    pub skipped_pages: usize,

    /// Pages marked `is_preview`
    pub preview_pages: usize,
}

/// Result of converting one document.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Output pages in reading order
    pub pages: Vec<OutputPage>,

    /// Advisory findings, in the order they were found
    pub diagnostics: Vec<Diagnostic>,

    /// Conversion counters
    pub stats: ConversionStats,

    /// Pixel size of each output page, parallel to `pages`
    pub page_sizes: Vec<[f64; 2]>,

    /// Whether the source reads right to left
    pub right_to_left: bool,
}

impl ConvertResult {
    /// Build the reader metadata document for this result.
    pub fn reader_meta(&self) -> ReaderMeta {
        ReaderMeta {
            direction: self.right_to_left.then_some(Direction::Left),
            pages: self.page_sizes.clone(),
            viewpoints: self.pages.clone(),
        }
    }

    /// Check if any diagnostic was reported at warning level.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level() == log::Level::Warn)
    }
}

/// Converts source documents into normalized reader viewports.
///
/// A converter holds only its options, so one instance can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a document.
    ///
    /// Fails on a page count mismatch, on page sort orders that are not
    /// strictly monotonic in the reading direction, and on viewport sort
    /// orders that do not match their position within the page. Everything
    /// else is reported in [`ConvertResult::diagnostics`].
    pub fn convert(&self, doc: &SourceDocument) -> Result<ConvertResult> {
        if doc.page_count < 0 || doc.page_count as usize != doc.pages.len() {
            return Err(Error::PageCountMismatch {
                declared: doc.page_count,
                actual: doc.pages.len(),
            });
        }

        let rtl = doc.is_rtl;
        let mut pass = Pass::default();

        for (index, page) in reading_order(&doc.pages, rtl).enumerate() {
            let number = index + 1;
            pass.check_page_order(page.sort_order, rtl)?;
            pass.check_page_refs(doc, page, number);

            let output = self.convert_page(page, number, rtl, &mut pass)?;
            pass.stats.page_count += 1;
            pass.pages.push(output);
            let (width, height) = page.dimensions();
            pass.page_sizes.push([width, height]);
        }

        if doc.viewport_count < 0 || doc.viewport_count as usize != pass.stats.viewport_count {
            pass.report(Diagnostic::ViewportCountMismatch {
                declared: doc.viewport_count,
                actual: pass.stats.viewport_count,
            });
        }

        log::debug!(
            "Converted {} pages, {} viewports ({} omitted)",
            pass.stats.page_count,
            pass.stats.viewport_count,
            pass.stats.omitted_pages
        );

        Ok(ConvertResult {
            pages: pass.pages,
            diagnostics: pass.diagnostics,
            stats: pass.stats,
            page_sizes: pass.page_sizes,
            right_to_left: rtl,
        })
    }

    fn convert_page(
        &self,
        page: &SourcePage,
        number: usize,
        rtl: bool,
        pass: &mut Pass,
    ) -> Result<OutputPage> {
        let mut viewports = Vec::with_capacity(page.viewports.len());

        for (index, vp) in reading_order(&page.viewports, rtl).enumerate() {
            let position = index + 1;
            pass.stats.viewport_count += 1;

            if vp.sort_order != position as i64 {
                return Err(Error::ViewportSortOrder {
                    viewport_id: vp.id.clone(),
                    page: number,
                    expected: position,
                    actual: vp.sort_order,
                });
            }
            if vp.page_id != page.id {
                pass.report(Diagnostic::PageIdMismatch {
                    viewport_id: vp.id.clone(),
                    page: number,
                    page_id: vp.page_id.clone(),
                    expected: page.id.clone(),
                });
            }
            if let Some(url) = vp.ext_url() {
                pass.report(Diagnostic::ViewportExternalUrl {
                    viewport_id: vp.id.clone(),
                    page: number,
                    url: url.to_string(),
                });
            }
            if !vp.within_page(page) {
                pass.report(Diagnostic::ViewportOutOfBounds {
                    viewport_id: vp.id.clone(),
                    page: number,
                });
            }

            viewports.push(NormalizedViewport::from_pixels(vp, page.width, page.height));
        }

        let single_full_page =
            matches!(page.viewports.as_slice(), [only] if only.covers_page(page));
        if self.options.omit_full_page && !page.skip && single_full_page {
            pass.report(Diagnostic::FullPageOmitted { page: number });
            pass.stats.omitted_pages += 1;
            return Ok(None);
        }

        Ok(Some(viewports))
    }
}

/// Running state of a single conversion pass.
#[derive(Default)]
struct Pass {
    last_sort_order: Option<i64>,
    pages: Vec<OutputPage>,
    page_sizes: Vec<[f64; 2]>,
    diagnostics: Vec<Diagnostic>,
    stats: ConversionStats,
}

impl Pass {
    fn check_page_order(&mut self, sort_order: i64, rtl: bool) -> Result<()> {
        if let Some(previous) = self.last_sort_order {
            let in_order = if rtl {
                sort_order < previous
            } else {
                sort_order > previous
            };
            if !in_order {
                return Err(Error::PageSortOrder {
                    previous,
                    current: sort_order,
                });
            }
        }
        self.last_sort_order = Some(sort_order);
        Ok(())
    }

    fn check_page_refs(&mut self, doc: &SourceDocument, page: &SourcePage, number: usize) {
        if page.book_id != doc.id {
            self.report(Diagnostic::BookIdMismatch {
                page: number,
                book_id: page.book_id.clone(),
                document_id: doc.id.clone(),
            });
        }
        if page.skip {
            self.stats.skipped_pages += 1;
            self.report(Diagnostic::SkippedPage { page: number });
        }
        if page.is_preview {
            self.stats.preview_pages += 1;
            self.report(Diagnostic::PreviewPage { page: number });
        }
        if let Some(title) = page.title() {
            self.report(Diagnostic::TitledPage {
                page: number,
                title: title.to_string(),
            });
        }
        if let Some(url) = page.ext_url() {
            self.report(Diagnostic::PageExternalUrl {
                page: number,
                url: url.to_string(),
            });
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }
}

/// Iterate `items` forward, or backward for right-to-left reading.
fn reading_order<T>(items: &[T], rtl: bool) -> Box<dyn Iterator<Item = &T> + '_> {
    if rtl {
        Box::new(items.iter().rev())
    } else {
        Box::new(items.iter())
    }
}
