//! Core types shared across the crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate axis of the sampling domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// A prerequisite a description must satisfy before it can run.
///
/// Reported by [`Error::InvalidDescription`](crate::Error::InvalidDescription)
/// to name exactly which fields a rejected description lacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RequiredField {
    /// The X-axis sampling bounds.
    XPlane,
    /// The Y-axis sampling bounds.
    YPlane,
    /// The benchmark function selection.
    Function,
    /// A positive per-axis sample count.
    AmountOfPoints,
}

impl RequiredField {
    /// A short human-readable label for error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::XPlane => "X-plane",
            Self::YPlane => "Y-plane",
            Self::Function => "function",
            Self::AmountOfPoints => "positive amount of points",
        }
    }
}

impl core::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}
