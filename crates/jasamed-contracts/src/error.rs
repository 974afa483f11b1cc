//! Boundary error types for the Jasamed engine.
//!
//! The allocation engine itself is total: malformed treatment lists, missing
//! dates, and degenerate tariffs are recovered locally with the empty or zero
//! case and never surface as errors.  `JasamedError` exists for the boundary
//! around the engine — loading a tariff-override file, reading demo input —
//! where failing loudly is the right behavior.

use thiserror::Error;

/// The unified error type for the Jasamed crates.
#[derive(Debug, Error)]
pub enum JasamedError {
    /// A configuration file (e.g. a tariff-override file) is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An input document could not be decoded into the expected contract type.
    ///
    /// Not raised for the string-encoded treatment/radiology lists inside an
    /// `AdmissionRecord` — those recover to the empty list per the input
    /// contract.
    #[error("input decode error: {reason}")]
    InputDecode { reason: String },
}

/// Convenience alias used throughout the Jasamed crates.
pub type JasamedResult<T> = Result<T, JasamedError>;
