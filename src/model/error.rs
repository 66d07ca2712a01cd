//! Error taxonomy for the feed engine.
//!
//! Two failure modes exist, and both are recoverable: a transport failure
//! ([`FetchError`]) and a malformed page payload ([`DecodeError`]). Either
//! one leaves the feed untouched (`is_loading` is cleared, the offset does
//! not advance, no partial merge occurs), so the next trigger re-issues the
//! identical page request.
//!
//! An expand on an unknown id is deliberately *not* an error: an affordance
//! tap arriving after the underlying data changed is a benign race, handled
//! as a silent no-op by the controller.

use thiserror::Error;

/// Top-level feed error wrapping both recoverable failure modes.
///
/// Surfaced from `apply_page_result` so a caller can offer a retry trigger;
/// the feed state itself has already been restored to its pre-fetch shape
/// by the time this is returned.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The data source could not deliver the page bytes.
    #[error("page fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The page bytes arrived but could not be decoded.
    #[error("page decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Transport-level failure from the data source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// I/O failure reading the payload (disk, pipe, socket).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source refused or could not serve the request.
    #[error("source unavailable: {reason}")]
    Unavailable {
        /// Source-supplied description of the failure.
        reason: String,
    },
}

/// Malformed page payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not a valid page document.
    ///
    /// The parser error message is extracted as a string rather than
    /// carrying `serde_json` error state through the application.
    #[error("invalid page payload: {message}")]
    InvalidPayload {
        /// Parser error message with position context.
        message: String,
    },

    /// A record carries a rating outside the renderable range.
    #[error("rating {rating} out of range for record {index} (max {max})")]
    RatingOutOfRange {
        /// Zero-based index of the offending record within the page.
        index: usize,
        /// The raw rating value.
        rating: u8,
        /// Highest accepted rating.
        max: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn fetch_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: FetchError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn fetch_error_unavailable_display() {
        let err = FetchError::Unavailable {
            reason: "connection reset".to_string(),
        };
        assert_eq!(err.to_string(), "source unavailable: connection reset");
    }

    #[test]
    fn decode_error_invalid_payload_display() {
        let err = DecodeError::InvalidPayload {
            message: "expected value at line 1 column 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid page payload"));
        assert!(msg.contains("line 1 column 2"));
    }

    #[test]
    fn decode_error_rating_out_of_range_display() {
        let err = DecodeError::RatingOutOfRange {
            index: 3,
            rating: 9,
            max: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("rating 9"));
        assert!(msg.contains("record 3"));
        assert!(msg.contains("max 5"));
    }

    #[test]
    fn feed_error_from_fetch_error() {
        let err: FeedError = FetchError::Unavailable {
            reason: "timeout".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("page fetch failed"));
        assert!(msg.contains("timeout"));
    }

    #[test]
    fn feed_error_from_decode_error() {
        let err: FeedError = DecodeError::InvalidPayload {
            message: "eof".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("page decode failed"));
        assert!(msg.contains("eof"));
    }

    #[test]
    fn feed_error_nested_io_through_fetch() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing fixture");
        let fetch: FetchError = io_err.into();
        let err: FeedError = fetch.into();
        let msg = err.to_string();
        assert!(msg.contains("page fetch failed"));
        assert!(msg.contains("missing fixture"));
    }
}
