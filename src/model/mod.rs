//! Data model for source documents and converter output.
//!
//! Source types are typed views over the cataloguing JSON, validated once
//! when parsed. Output types are what the reader consumes.

mod meta;
mod source;
mod viewport;

pub use meta::{Direction, ReaderMeta};
pub use source::{EntityId, SourceDocument, SourcePage, SourceViewport};
pub use viewport::{round_fraction, NormalizedViewport, OutputPage, PRECISION};
