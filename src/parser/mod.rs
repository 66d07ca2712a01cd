//! Page payload decoding.
//!
//! Decoding happens once, at the boundary: raw bytes from the data source
//! become a [`ReviewsPage`] here or fail as a [`DecodeError`], and nothing
//! downstream ever sees partially-decoded data. A page either contributes
//! all of its records or none.

use crate::model::{DecodeError, ReviewsPage};
use crate::rating::MAX_RATING;

/// Decode one page of review data from raw payload bytes.
///
/// Validates that every record's rating lies in the renderable range so the
/// rating renderer stays total over its input.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidPayload`] for syntactically or structurally
/// invalid JSON, and [`DecodeError::RatingOutOfRange`] when a record carries
/// a rating above [`MAX_RATING`]. In both cases the whole page is rejected.
pub fn decode_page(bytes: &[u8]) -> Result<ReviewsPage, DecodeError> {
    let page: ReviewsPage =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidPayload {
            message: err.to_string(),
        })?;

    for (index, record) in page.items.iter().enumerate() {
        if record.rating > MAX_RATING {
            return Err(DecodeError::RatingOutOfRange {
                index,
                rating: record.rating,
                max: MAX_RATING,
            });
        }
    }

    Ok(page)
}
