//! # panelvp
//!
//! Converts comic page/panel metadata into normalized reader viewports.
//!
//! The source is a cataloguing export describing a book's pages and the
//! pixel rectangles of the panels on each page. The output is, per page in
//! reading order, the list of panel rectangles as fractions of the page
//! size, or `null` when the page's only panel is the whole page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use panelvp::{convert_file, render, JsonFormat};
//!
//! fn main() -> panelvp::Result<()> {
//!     let result = convert_file("book.json")?;
//!     for diagnostic in &result.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//!
//!     let json = render::to_json(&result.pages, JsonFormat::Compact)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading direction**: right-to-left books reverse page and panel order
//! - **Structural validation**: sort orders and page counts are checked
//! - **Diagnostics**: advisory findings are returned, not just printed
//! - **Reader metadata**: optional `meta.json` output with page sizes

pub mod convert;
pub mod error;
pub mod model;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use convert::{
    ConversionStats, ConvertOptions, ConvertResult, Converter, Diagnostic, OutputFormat,
};
pub use error::{Error, Result};
pub use model::{
    Direction, EntityId, NormalizedViewport, OutputPage, ReaderMeta, SourceDocument, SourcePage,
    SourceViewport,
};
pub use render::JsonFormat;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a source document file.
///
/// # Example
///
/// ```no_run
/// use panelvp::parse_file;
///
/// let doc = parse_file("book.json").unwrap();
/// println!("Pages: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    let file = File::open(path)?;
    SourceDocument::from_reader(BufReader::new(file))
}

/// Parse a source document from JSON text.
pub fn parse_str(json: &str) -> Result<SourceDocument> {
    SourceDocument::from_json_str(json)
}

/// Parse a source document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<SourceDocument> {
    SourceDocument::from_json_slice(data)
}

/// Parse a source document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<SourceDocument> {
    SourceDocument::from_reader(reader)
}

/// Convert a parsed document with default options.
pub fn convert(doc: &SourceDocument) -> Result<ConvertResult> {
    Converter::default().convert(doc)
}

/// Parse and convert a source document file with default options.
///
/// # Example
///
/// ```no_run
/// use panelvp::convert_file;
///
/// let result = convert_file("book.json").unwrap();
/// println!("{} pages, {} viewports", result.stats.page_count, result.stats.viewport_count);
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConvertResult> {
    let doc = parse_file(path)?;
    convert(&doc)
}

/// Convert a source document file straight to the viewport JSON array.
///
/// # Example
///
/// ```no_run
/// use panelvp::{to_json, JsonFormat};
///
/// let json = to_json("book.json", JsonFormat::Compact).unwrap();
/// std::fs::write("viewports.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let result = convert_file(path)?;
    render::to_json(&result.pages, format)
}

/// Builder for converting source documents.
///
/// # Example
///
/// ```no_run
/// use panelvp::{JsonFormat, OutputFormat, Panelvp};
///
/// let json = Panelvp::new()
///     .keep_full_pages()
///     .with_format(OutputFormat::ReaderMeta)
///     .with_json_format(JsonFormat::Pretty)
///     .convert_file("book.json")?
///     .to_json()?;
/// # Ok::<(), panelvp::Error>(())
/// ```
pub struct Panelvp {
    options: ConvertOptions,
}

impl Panelvp {
    /// Create a new Panelvp builder.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Keep single full-page viewports instead of compacting them to `null`.
    pub fn keep_full_pages(mut self) -> Self {
        self.options = self.options.with_omit_full_page(false);
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.options = self.options.with_json_format(format);
        self
    }

    /// Convert an already parsed document.
    pub fn convert(self, doc: &SourceDocument) -> Result<PanelvpResult> {
        let result = Converter::new(self.options.clone()).convert(doc)?;
        Ok(PanelvpResult {
            result,
            options: self.options,
        })
    }

    /// Parse and convert a source document file.
    pub fn convert_file<P: AsRef<Path>>(self, path: P) -> Result<PanelvpResult> {
        let doc = parse_file(path)?;
        self.convert(&doc)
    }

    /// Parse and convert a source document from JSON text.
    pub fn convert_str(self, json: &str) -> Result<PanelvpResult> {
        let doc = parse_str(json)?;
        self.convert(&doc)
    }
}

impl Default for Panelvp {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a builder conversion.
pub struct PanelvpResult {
    result: ConvertResult,
    options: ConvertOptions,
}

impl PanelvpResult {
    /// Render in the configured output and JSON format.
    pub fn to_json(&self) -> Result<String> {
        render::render(&self.result, &self.options)
    }

    /// Advisory findings.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.result.diagnostics
    }

    /// Conversion counters.
    pub fn stats(&self) -> &ConversionStats {
        &self.result.stats
    }

    /// Get the conversion result.
    pub fn result(&self) -> &ConvertResult {
        &self.result
    }

    /// Take the conversion result.
    pub fn into_result(self) -> ConvertResult {
        self.result
    }
}
