use thiserror::Error;

/// Errors that can occur while building a [`RangeMap`](super::RangeMap).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeMapError {
    #[error("Rule source is empty: {0}")]
    EmptySource(String),

    #[error("Rule source {new} overlaps existing rule source {existing}")]
    OverlappingRule { new: String, existing: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_display() {
        let e = RangeMapError::EmptySource("[5, 4]".to_string());
        assert_eq!(e.to_string(), "Rule source is empty: [5, 4]");
    }

    #[test]
    fn overlapping_rule_display() {
        let e = RangeMapError::OverlappingRule {
            new: "[0, 10]".to_string(),
            existing: "[5, 20]".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Rule source [0, 10] overlaps existing rule source [5, 20]"
        );
    }
}
