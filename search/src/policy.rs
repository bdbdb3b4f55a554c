//! Search policy types.

use crate::error::SearchError;

/// Search budget configuration.
///
/// The core contract is unbounded search; an expansion cap is the one
/// extension point for callers that need bounded running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Unbounded search.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Search capped at `limit` expansions.
    #[must_use]
    pub const fn with_max_expansions(limit: u64) -> Self {
        Self {
            max_expansions: Some(limit),
        }
    }

    /// Validate that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the start state.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}
