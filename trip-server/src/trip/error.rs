//! Trip service error types.

use crate::domain::{InvalidDateRange, TripId};
use crate::store::StoreError;

/// Errors from trip operations.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    /// The trip does not exist, or no trips exist at all
    #[error("{}", describe_missing(.trip_id))]
    TripNotFound { trip_id: Option<TripId> },

    /// Start date falls after end date
    #[error(transparent)]
    InvalidDateRange(#[from] InvalidDateRange),

    /// A search request with no criteria at all
    #[error("at least one search criterion is required")]
    SearchIllegalArgument,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TripError {
    /// True for the errors a caller reports as a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TripError::TripNotFound { .. })
    }
}

fn describe_missing(trip_id: &Option<TripId>) -> String {
    match trip_id {
        Some(id) => format!("trip {id} not found"),
        None => "no trips found".to_string(),
    }
}
