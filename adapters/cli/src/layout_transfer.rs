#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use vision_arena_core::{GridSize, LayoutError};
use vision_arena_world::Arena;

const TRANSFER_DOMAIN: &str = "arena";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded layout payload.
pub(crate) const TRANSFER_HEADER: &str = "arena:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Seed, size and encoded grid of a generated arena.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ArenaTransfer {
    /// Side length of the grid.
    pub(crate) size: GridSize,
    /// Seed that produced the layout.
    pub(crate) seed: u64,
    /// Encoded cell values grouped by row.
    pub(crate) encoded: Vec<Vec<i32>>,
}

impl ArenaTransfer {
    /// Captures the transferable parts of a generated arena.
    #[must_use]
    pub(crate) fn capture(arena: &Arena, seed: u64) -> Self {
        Self {
            size: arena.size(),
            seed,
            encoded: arena.encoded_rows(),
        }
    }

    /// Encodes the layout into a single-line string suitable for clipboard transfer.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let payload = SerializablePayload {
            seed: self.seed,
            encoded: self.encoded.clone(),
        };
        let json = serde_json::to_vec(&payload).expect("arena payload serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{TRANSFER_HEADER}:{}:{encoded}", self.size)
    }

    /// Decodes a layout from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, LayoutTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LayoutTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(LayoutTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(LayoutTransferError::MissingVersion)?;
        let dimensions = parts.next().ok_or(LayoutTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(LayoutTransferError::MissingPayload)?;

        if domain != TRANSFER_DOMAIN {
            return Err(LayoutTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != TRANSFER_VERSION {
            return Err(LayoutTransferError::UnsupportedVersion(version.to_owned()));
        }

        let size = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(LayoutTransferError::InvalidEncoding)?;
        let decoded: SerializablePayload =
            serde_json::from_slice(&bytes).map_err(LayoutTransferError::InvalidPayload)?;

        let side = size.side() as usize;
        if decoded.encoded.len() != side || decoded.encoded.iter().any(|row| row.len() != side) {
            return Err(LayoutTransferError::GridMismatch(size));
        }

        Ok(Self {
            size,
            seed: decoded.seed,
            encoded: decoded.encoded,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializablePayload {
    seed: u64,
    encoded: Vec<Vec<i32>>,
}

/// Errors that can occur while decoding layout transfer strings.
#[derive(Debug)]
pub(crate) enum LayoutTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded layout.
    MissingPrefix,
    /// The encoded layout did not contain a version segment.
    MissingVersion,
    /// The encoded layout did not include grid dimensions.
    MissingDimensions,
    /// The encoded layout did not include the payload segment.
    MissingPayload,
    /// The encoded layout used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded layout used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded layout.
    InvalidDimensions(String),
    /// The grid dimensions parsed but do not describe a valid arena.
    InvalidSize(LayoutError),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
    /// The encoded grid does not match the declared dimensions.
    GridMismatch(GridSize),
}

impl fmt::Display for LayoutTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "transfer string was empty"),
            Self::MissingPrefix => write!(f, "layout string is missing the prefix"),
            Self::MissingVersion => write!(f, "layout string is missing the version"),
            Self::MissingDimensions => write!(f, "layout string is missing the grid dimensions"),
            Self::MissingPayload => write!(f, "layout string is missing the payload"),
            Self::InvalidPrefix(prefix) => write!(f, "layout prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "layout version '{version}' is not supported")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse grid dimensions '{dimensions}'")
            }
            Self::InvalidSize(error) => write!(f, "layout describes an invalid grid: {error}"),
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode layout payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse layout payload: {error}")
            }
            Self::GridMismatch(size) => {
                write!(f, "encoded grid does not match declared dimensions {size}")
            }
        }
    }
}

impl Error for LayoutTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSize(error) => Some(error),
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_dimensions(dimensions: &str) -> Result<GridSize, LayoutTransferError> {
    let (columns, rows) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(|| LayoutTransferError::InvalidDimensions(dimensions.to_owned()))?;

    let columns = columns
        .trim()
        .parse::<u32>()
        .map_err(|_| LayoutTransferError::InvalidDimensions(dimensions.to_owned()))?;
    let rows = rows
        .trim()
        .parse::<u32>()
        .map_err(|_| LayoutTransferError::InvalidDimensions(dimensions.to_owned()))?;

    if columns != rows {
        return Err(LayoutTransferError::InvalidDimensions(
            dimensions.to_owned(),
        ));
    }

    GridSize::new(columns).map_err(LayoutTransferError::InvalidSize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision_arena_world::{query, ArenaConfig, World};

    fn transfer_for(side: u32, seed: u64) -> ArenaTransfer {
        let world = World::with_config(ArenaConfig {
            size: GridSize::new(side).expect("valid"),
            seed,
            ..ArenaConfig::default()
        });
        ArenaTransfer::capture(query::arena(&world), seed)
    }

    #[test]
    fn round_trip_reference_layout() {
        let transfer = transfer_for(9, 0);

        let encoded = transfer.encode();
        assert!(encoded.starts_with(&format!("{TRANSFER_HEADER}:9x9:")));

        let decoded = ArenaTransfer::decode(&encoded).expect("layout decodes");
        assert_eq!(transfer, decoded);
    }

    #[test]
    fn decode_tolerates_surrounding_whitespace() {
        let transfer = transfer_for(7, 31);
        let decoded =
            ArenaTransfer::decode(&format!("  {}\n", transfer.encode())).expect("layout decodes");
        assert_eq!(decoded.seed, 31);
        assert_eq!(decoded.encoded[3][3], -1);
    }

    #[test]
    fn decode_rejects_foreign_prefixes() {
        let encoded = transfer_for(5, 1).encode().replacen("arena", "maze", 1);
        assert!(matches!(
            ArenaTransfer::decode(&encoded),
            Err(LayoutTransferError::InvalidPrefix(prefix)) if prefix == "maze"
        ));
    }

    #[test]
    fn decode_rejects_invalid_grid_sizes() {
        let encoded = transfer_for(5, 1).encode().replacen("5x5", "6x6", 1);
        let error = ArenaTransfer::decode(&encoded).expect_err("even grid");
        assert!(matches!(error, LayoutTransferError::InvalidSize(_)));
        assert!(error.source().is_some());

        let encoded = transfer_for(5, 1).encode().replacen("5x5", "5x7", 1);
        assert!(matches!(
            ArenaTransfer::decode(&encoded),
            Err(LayoutTransferError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn decode_rejects_grids_that_disagree_with_dimensions() {
        let encoded = transfer_for(5, 1).encode().replacen("5x5", "7x7", 1);
        assert!(matches!(
            ArenaTransfer::decode(&encoded),
            Err(LayoutTransferError::GridMismatch(size)) if size.side() == 7
        ));
    }

    #[test]
    fn decode_reports_missing_segments() {
        assert!(matches!(
            ArenaTransfer::decode("   "),
            Err(LayoutTransferError::EmptyPayload)
        ));
        assert!(matches!(
            ArenaTransfer::decode("arena:v1:9x9"),
            Err(LayoutTransferError::MissingPayload)
        ));
        assert!(matches!(
            ArenaTransfer::decode("arena:v2:9x9:e30"),
            Err(LayoutTransferError::UnsupportedVersion(version)) if version == "v2"
        ));
    }
}
