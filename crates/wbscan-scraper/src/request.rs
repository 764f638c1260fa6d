//! Retrieval request variants and their validation rules.
//!
//! A retrieval is one of three shapes: a free-text search, a seller-catalog
//! pull, or a brand-catalog pull. The variants are a closed sum type so the
//! endpoint-resolution step handles every case exhaustively instead of
//! probing nullable fields.

use crate::error::ScraperError;

/// One retrieval request. Constructed only through the validating
/// constructors, so a held value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalRequest {
    /// Free-text catalog search.
    Search { query: String },
    /// Full catalog of one seller (supplier id).
    BySeller { seller_id: String },
    /// Full catalog of one brand (brand id).
    ByBrand { brand_id: String },
}

impl RetrievalRequest {
    /// Builds a search request.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] when `query` is empty or
    /// whitespace-only.
    pub fn search(query: impl Into<String>) -> Result<Self, ScraperError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ScraperError::Validation {
                reason: "empty query".to_string(),
            });
        }
        Ok(Self::Search { query })
    }

    /// Builds a mass-retrieval request from the two optional identifier
    /// inputs. Mirrors the two free-text fields of the mass form: an empty
    /// or whitespace-only value counts as not provided.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] unless exactly one of the two
    /// identifiers is provided.
    pub fn mass(
        seller_id: Option<String>,
        brand_id: Option<String>,
    ) -> Result<Self, ScraperError> {
        let seller_id = seller_id.filter(|s| !s.trim().is_empty());
        let brand_id = brand_id.filter(|s| !s.trim().is_empty());

        match (seller_id, brand_id) {
            (Some(seller_id), None) => Ok(Self::BySeller { seller_id }),
            (None, Some(brand_id)) => Ok(Self::ByBrand { brand_id }),
            _ => Err(ScraperError::Validation {
                reason: "must specify exactly one of seller/brand id".to_string(),
            }),
        }
    }

    /// Re-checks the request invariant. Constructors already enforce it;
    /// this exists for requests deserialized or assembled field-by-field.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] with a human-readable reason.
    pub fn validate(&self) -> Result<(), ScraperError> {
        let (value, reason) = match self {
            Self::Search { query } => (query, "empty query"),
            Self::BySeller { seller_id } => (seller_id, "empty seller id"),
            Self::ByBrand { brand_id } => (brand_id, "empty brand id"),
        };
        if value.trim().is_empty() {
            return Err(ScraperError::Validation {
                reason: reason.to_string(),
            });
        }
        Ok(())
    }
}
