use crate::types::{Axis, RequiredField};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when `run_benchmark` is called without a description.
    #[error("no benchmark description provided")]
    MissingDescription,

    /// Returned when a description fails runner validation.
    ///
    /// `missing` names every required field that was absent, in the
    /// order X-plane, Y-plane, function, amount of points.
    #[error("invalid benchmark description: missing {}", fmt_missing(.missing))]
    InvalidDescription {
        /// The required fields the description lacks.
        missing: Vec<RequiredField>,
    },

    /// Returned when the selected function fails at a specific sample.
    ///
    /// Wraps the failing input and the callable's own failure reason.
    /// The run is aborted; no partial result is produced.
    #[error("evaluation failed at sample {index} (x={x}, y={y}): {reason}")]
    Evaluation {
        /// Zero-based index of the failing sample.
        index: usize,
        /// The X coordinate handed to the callable.
        x: f64,
        /// The Y coordinate handed to the callable.
        y: f64,
        /// The callable's failure reason.
        reason: String,
    },

    /// Returned by linspace creation when the required plane is unset.
    ///
    /// Reaching this from `run_benchmark` is impossible; it indicates a
    /// caller invoked linspace creation without checking the plane.
    #[error("{axis} plane not set")]
    PlaneNotSet {
        /// The axis whose plane was never configured.
        axis: Axis,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

fn fmt_missing(missing: &[RequiredField]) -> String {
    let fields: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    fields.join(", ")
}
