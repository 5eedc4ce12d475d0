//! Rendering module for serializing converter output.

mod json;

pub use json::{reader_meta_to_json, to_json, JsonFormat};

use crate::convert::{ConvertOptions, ConvertResult, OutputFormat};
use crate::error::Result;

/// Render a conversion result in the format selected by `options`.
pub fn render(result: &ConvertResult, options: &ConvertOptions) -> Result<String> {
    match options.output_format {
        OutputFormat::Viewports => to_json(&result.pages, options.json_format),
        OutputFormat::ReaderMeta => reader_meta_to_json(&result.reader_meta(), options.json_format),
    }
}
