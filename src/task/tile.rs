//! Tile identifiers and request validation.

use serde::Serialize;
use thiserror::Error;

use super::environment::Environment;

/// User-facing validation failures. The `Display` text is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error: Base Filename and at least one Tile ID are required.")]
    MissingRequiredField,

    #[error("Error: Invalid Tile ID '{0}'. All IDs must be numbers.")]
    InvalidTileId(String),
}

/// A validated tile identifier.
///
/// Always non-empty and made only of ASCII digits. The original text is kept
/// verbatim, so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    /// Parse a single (already trimmed) token.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidTileId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-blank lines of a multiline field, trimmed, in order.
fn non_blank_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .flat_map(|line| line.split('\r'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a newline-separated list of tile IDs.
///
/// Blank lines are skipped. The first invalid token aborts the whole parse.
/// An empty result is not an error here; see [`GenerateRequest::from_form`].
pub fn parse_tile_ids(raw: &str) -> Result<Vec<TileId>, ValidationError> {
    non_blank_lines(raw).into_iter().map(TileId::parse).collect()
}

/// A fully validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub environment: Environment,
    pub base_filename: String,
    pub tile_ids: Vec<TileId>,
}

impl GenerateRequest {
    /// Validate the raw form fields.
    ///
    /// Required-field checks run before any tile ID is inspected, so an empty
    /// filename is reported even when the tile list also contains garbage.
    pub fn from_form(
        environment: Option<&str>,
        base_filename: &str,
        tile_ids: &str,
    ) -> Result<Self, ValidationError> {
        let base_filename = base_filename.trim();
        let tokens = non_blank_lines(tile_ids);

        if base_filename.is_empty() || tokens.is_empty() {
            return Err(ValidationError::MissingRequiredField);
        }

        let tile_ids = tokens
            .into_iter()
            .map(TileId::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            environment: Environment::from_form_value(environment),
            base_filename: base_filename.to_string(),
            tile_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_keeps_original_text() {
        let id = TileId::parse("000123").unwrap();
        assert_eq!(id.as_str(), "000123");
        assert_eq!(id.to_string(), "000123");
    }

    #[test]
    fn test_tile_id_rejects_non_digits() {
        for bad in ["", "12a", "-5", "1.0", "１２", "1 2"] {
            assert_eq!(
                TileId::parse(bad),
                Err(ValidationError::InvalidTileId(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_tile_id_accepts_any_length() {
        let long = "9".repeat(200);
        assert!(TileId::parse(&long).is_ok());
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let ids = parse_tile_ids("  100 \r\n\r\n200\n   \n300\r").unwrap();
        let ids: Vec<&str> = ids.iter().map(TileId::as_str).collect();
        assert_eq!(ids, vec!["100", "200", "300"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let ids = parse_tile_ids("7\n7\n7").unwrap();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_from_form_valid() {
        let req = GenerateRequest::from_form(Some("PROD"), "  batch ", "100\n200\n300").unwrap();
        assert_eq!(req.environment, Environment::Prod);
        assert_eq!(req.base_filename, "batch");
        assert_eq!(req.tile_ids.len(), 3);
    }

    #[test]
    fn test_from_form_missing_filename() {
        let err = GenerateRequest::from_form(Some("PROD"), "   ", "100").unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField);
        assert_eq!(
            err.to_string(),
            "Error: Base Filename and at least one Tile ID are required."
        );
    }

    #[test]
    fn test_from_form_only_blank_tiles() {
        let err = GenerateRequest::from_form(None, "batch", "\n  \n\r\n").unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField);
    }

    #[test]
    fn test_from_form_names_invalid_tile() {
        let err = GenerateRequest::from_form(None, "batch", "100\n12a\n300\nxyz").unwrap_err();
        assert_eq!(err, ValidationError::InvalidTileId("12a".to_string()));
        assert_eq!(
            err.to_string(),
            "Error: Invalid Tile ID '12a'. All IDs must be numbers."
        );
    }

    #[test]
    fn test_missing_field_checked_before_tile_contents() {
        let err = GenerateRequest::from_form(None, "", "abc").unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField);
    }
}
