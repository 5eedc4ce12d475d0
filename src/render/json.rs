//! JSON rendering for converter output.

use crate::error::{Error, Result};
use crate::model::{OutputPage, ReaderMeta};
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    Pretty,
    /// Compact single-line JSON
    #[default]
    Compact,
}

/// Render output pages as a JSON array.
pub fn to_json(pages: &[OutputPage], format: JsonFormat) -> Result<String> {
    serialize(pages, format)
}

/// Render a reader metadata document.
pub fn reader_meta_to_json(meta: &ReaderMeta, format: JsonFormat) -> Result<String> {
    serialize(meta, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, NormalizedViewport};

    fn sample_pages() -> Vec<OutputPage> {
        vec![
            Some(vec![
                NormalizedViewport::new(0.0, 0.0, 0.5, 0.5),
                NormalizedViewport::new(0.5, 0.0, 0.5, 0.5),
            ]),
            None,
        ]
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_pages(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"[[{"X":0.0,"Y":0.0,"W":0.5,"H":0.5},{"X":0.5,"Y":0.0,"W":0.5,"H":0.5}],null]"#
        );
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_pages(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"X\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_json(&[], JsonFormat::Compact).unwrap(), "[]");
    }

    #[test]
    fn test_reader_meta_to_json() {
        let meta = ReaderMeta {
            direction: Some(Direction::Left),
            pages: vec![[100.0, 200.0]],
            viewpoints: vec![None],
        };
        let json = reader_meta_to_json(&meta, JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"Direction":"Left","Pages":[[100.0,200.0]],"Viewpoints":[null]}"#
        );
    }
}
