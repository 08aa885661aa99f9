use super::*;

use thiserror::Error;

/// Construction input that would give an optic or ray meaningless geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("chord length must be finite and positive, got {0}")]
    ChordLength(Float),

    #[error("focal length must be finite and non-zero, got {0}")]
    Focal(Float),

    #[error("chord length {chord} is wider than the mirror's diameter {diameter}")]
    ChordTooWide { chord: Float, diameter: Float },
}

pub type Result<T> = core::result::Result<T, ConfigurationError>;

pub(crate) fn check_finite(value: Float, what: &'static str) -> Result<Float> {
    value
        .is_finite()
        .then_some(value)
        .ok_or(ConfigurationError::NonFinite(what))
}

pub(crate) fn check_point(p: Point, what: &'static str) -> Result<Point> {
    (p.x.is_finite() && p.y.is_finite())
        .then_some(p)
        .ok_or(ConfigurationError::NonFinite(what))
}

pub(crate) fn check_chord(chord_length: Float) -> Result<Float> {
    (chord_length.is_finite() && chord_length > 0.0)
        .then_some(chord_length)
        .ok_or(ConfigurationError::ChordLength(chord_length))
}

pub(crate) fn check_focal(focal: Float) -> Result<Float> {
    (focal.is_finite() && focal != 0.0)
        .then_some(focal)
        .ok_or(ConfigurationError::Focal(focal))
}
