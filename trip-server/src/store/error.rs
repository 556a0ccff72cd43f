//! Store error types.

/// Errors from trip and itinerary stores.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Tried to save an entity the store has never issued.
    #[error("{entity} {id} does not exist")]
    Missing { entity: &'static str, id: u64 },

    /// The backing store cannot be used.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Missing {
            entity: "trip",
            id: 4,
        };
        assert_eq!(err.to_string(), "trip 4 does not exist");

        let err = StoreError::Unavailable("lock poisoned".into());
        assert_eq!(err.to_string(), "store unavailable: lock poisoned");
    }
}
