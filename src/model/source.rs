//! Source document types (the cataloguing JSON the converter reads).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::fmt;
use std::io::Read;

/// Identifier of a book, page or viewport.
///
/// Catalogue exports use numeric ids, but string ids are accepted too.
/// Ids of different kinds never compare equal. Numeric ids must fit in an
/// `i64`; fractional or larger numbers are rejected when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    /// Numeric id
    Number(i64),
    /// String id
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

/// A parsed source document: one book with its pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Book identifier
    pub id: EntityId,

    /// Declared number of pages
    pub page_count: i64,

    /// Pages in storage order
    pub pages: Vec<SourcePage>,

    /// Right-to-left reading direction
    pub is_rtl: bool,

    /// Declared number of viewports across all pages
    pub viewport_count: i64,
}

/// A single page of the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePage {
    /// Page identifier
    pub id: EntityId,

    /// Owning book identifier
    pub book_id: EntityId,

    /// Intended reading sequence
    pub sort_order: i64,

    /// Page is intentionally blank or left out of reading
    pub skip: bool,

    /// Page is part of the store preview
    pub is_preview: bool,

    /// Optional page title
    #[serde(default)]
    pub title: Option<String>,

    /// External reference, if any
    #[serde(default)]
    pub ext_url: Option<String>,

    /// Page width in pixels
    pub width: f64,

    /// Page height in pixels
    pub height: f64,

    /// Panels in storage order
    pub viewports: Vec<SourceViewport>,
}

impl SourcePage {
    /// Non-empty title, if the page has one.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Non-empty external URL, if the page has one.
    pub fn ext_url(&self) -> Option<&str> {
        non_empty(&self.ext_url)
    }

    /// Page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// A panel on a source page, in pixel coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceViewport {
    /// Viewport identifier
    pub id: EntityId,

    /// Owning page identifier
    pub page_id: EntityId,

    /// 1-based position within the page's reading order
    pub sort_order: i64,

    /// Left edge in pixels
    pub pos_x: f64,

    /// Top edge in pixels
    pub pos_y: f64,

    /// Width in pixels
    pub width: f64,

    /// Height in pixels
    pub height: f64,

    /// External reference, if any
    #[serde(default)]
    pub ext_url: Option<String>,
}

impl SourceViewport {
    /// Non-empty external URL, if the viewport has one.
    pub fn ext_url(&self) -> Option<&str> {
        non_empty(&self.ext_url)
    }

    /// Whether this viewport covers exactly the whole of `page`.
    pub fn covers_page(&self, page: &SourcePage) -> bool {
        self.pos_x == 0.0
            && self.pos_y == 0.0
            && self.width == page.width
            && self.height == page.height
    }

    /// Whether this viewport lies within the bounds of `page`.
    pub fn within_page(&self, page: &SourcePage) -> bool {
        self.pos_x >= 0.0
            && self.pos_y >= 0.0
            && self.pos_x + self.width <= page.width
            && self.pos_y + self.height <= page.height
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl SourceDocument {
    /// Parse a source document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(boundary_error)?
            .validated()
    }

    /// Parse a source document from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice::<Self>(data)
            .map_err(boundary_error)?
            .validated()
    }

    /// Parse a source document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader::<_, Self>(reader)
            .map_err(boundary_error)?
            .validated()
    }

    /// Build a source document from an already parsed JSON tree.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value::<Self>(value)
            .map_err(boundary_error)?
            .validated()
    }

    /// Actual number of pages in the document.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check value constraints the type system cannot express.
    ///
    /// Page dimensions must be strictly positive since every viewport is
    /// divided by them.
    pub fn validate(&self) -> Result<()> {
        for (index, page) in self.pages.iter().enumerate() {
            if page.width <= 0.0 {
                return Err(Error::InvalidField {
                    field: format!("pages[{}].width", index),
                    reason: format!("must be greater than 0, got {}", page.width),
                });
            }
            if page.height <= 0.0 {
                return Err(Error::InvalidField {
                    field: format!("pages[{}].height", index),
                    reason: format!("must be greater than 0, got {}", page.height),
                });
            }
        }
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// Syntax and I/O failures stay JSON errors; shape failures name the field.
fn boundary_error(err: serde_json::Error) -> Error {
    match err.classify() {
        Category::Data => Error::InvalidDocument(err.to_string()),
        Category::Io => Error::Io(err.into()),
        Category::Syntax | Category::Eof => Error::Json(err),
    }
}
