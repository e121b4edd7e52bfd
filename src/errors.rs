//! Validation and top-level errors

use crate::float_types::Real;

/// Everything that can be wrong with a parameter record before any geometry is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositive) A dimension that must be strictly positive is not
    #[error("(NonPositive) `{field}` must be > 0, got {value}")]
    NonPositive { field: &'static str, value: Real },
    /// (Negative) A dimension that may be zero is negative
    #[error("(Negative) `{field}` must be >= 0, got {value}")]
    Negative { field: &'static str, value: Real },
    /// (TooFewFeatures) A count (teeth, lobes, magnets, pins) is below its minimum
    #[error("(TooFewFeatures) `{field}` must be at least {min}, got {value}")]
    TooFewFeatures {
        field: &'static str,
        min: usize,
        value: usize,
    },
    /// (Interference) Two features would overlap or leave no material between them
    #[error("(Interference) {0}")]
    Interference(String),
    /// (GearMismatch) The strain-wave tooth counts do not produce a reduction
    #[error("(GearMismatch) circular spline teeth ({circular}) must exceed flexspline teeth ({flex})")]
    GearMismatch { flex: usize, circular: usize },
}

impl ValidationError {
    pub(crate) fn positive(field: &'static str, value: Real) -> Result<(), Self> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::NonPositive { field, value })
        }
    }

    pub(crate) fn non_negative(field: &'static str, value: Real) -> Result<(), Self> {
        if value >= 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::Negative { field, value })
        }
    }

    pub(crate) const fn at_least(
        field: &'static str,
        min: usize,
        value: usize,
    ) -> Result<(), Self> {
        if value >= min {
            Ok(())
        } else {
            Err(ValidationError::TooFewFeatures { field, min, value })
        }
    }
}

/// Errors surfaced by the model registry, the config loader and the exporters.
#[derive(Debug, thiserror::Error)]
pub enum CadError {
    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Config(#[from] ron::error::SpannedError),
    #[error("unknown model `{0}`")]
    UnknownModel(String),
    #[error("{0} export(s) failed")]
    ExportFailed(usize),
}
