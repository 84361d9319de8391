use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when node kind text is neither `leaf` nor `internal`.
///
/// # Examples
/// ```
/// use nodedump_core::NodeKind;
///
/// let err = "root".parse::<NodeKind>().unwrap_err();
/// assert!(err.to_string().contains("unknown node kind"));
/// ```
#[derive(Debug, Error)]
pub enum NodeKindError {
    #[error("unknown node kind '{value}': expected leaf or internal")]
    Unknown { value: String },
}

/// Error returned when degree text is not an integer.
#[derive(Debug, Error)]
pub enum DegreeError {
    #[error("invalid degree '{value}': {source}")]
    Invalid {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
