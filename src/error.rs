//! Failure reasons of a packing call.
//!
//! Every variant is terminal for the call that produced it; no partial
//! result accompanies an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    /// Unknown carrier and no explicit box list supplied.
    #[error("unknown carrier '{0}' and no explicit box list supplied")]
    Configuration(String),
    /// Every candidate box is smaller than the combined item volume.
    #[error(
        "no box can hold the combined item volume of {total_volume} (largest candidate: {largest_box_volume})"
    )]
    NoFeasibleBox {
        total_volume: f64,
        largest_box_volume: f64,
    },
    /// Every volume-feasible box failed during item placement.
    #[error("none of the {candidates} candidate boxes could hold every item")]
    PlacementExhausted { candidates: usize },
    /// Missing, negative or non-finite item or box dimension.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    /// Quantity expansion would exceed the configured item limit.
    #[error("order expands to {requested} items, more than the limit of {limit}")]
    TooManyItems { requested: u64, limit: usize },
    /// Display projection was asked for a non-positive or non-finite scale.
    #[error("display scale must be positive and finite, got {0}")]
    InvalidScale(f64),
}

impl PackError {
    /// Stable machine-readable code, used in API error bodies and events.
    pub fn code(&self) -> &'static str {
        match self {
            PackError::Configuration(_) => "configuration_error",
            PackError::NoFeasibleBox { .. } => "no_feasible_box",
            PackError::PlacementExhausted { .. } => "placement_exhausted",
            PackError::InvalidDimension(_) => "invalid_dimension",
            PackError::TooManyItems { .. } => "too_many_items",
            PackError::InvalidScale(_) => "invalid_scale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            PackError::Configuration("DHL".to_string()),
            PackError::NoFeasibleBox {
                total_volume: 10.0,
                largest_box_volume: 5.0,
            },
            PackError::PlacementExhausted { candidates: 2 },
            PackError::InvalidDimension("Height must be positive".to_string()),
            PackError::TooManyItems {
                requested: 20_000,
                limit: 10_000,
            },
            PackError::InvalidScale(0.0),
        ];
        let mut codes: Vec<_> = errors.iter().map(PackError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn configuration_message_names_the_carrier() {
        let err = PackError::Configuration("DHL".to_string());
        assert!(err.to_string().contains("'DHL'"));
    }
}
