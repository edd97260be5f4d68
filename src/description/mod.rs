//! Benchmark run descriptions and their fluent builder.

use crate::error::{Error, Result};
use crate::functions::BenchFn;
use crate::grid::linspace;
use crate::types::Axis;

mod builder;

pub use builder::BenchmarkDescriptionBuilder;

/// Per-axis sample count used when
/// [`amount_of_points`](BenchmarkDescriptionBuilder::amount_of_points)
/// is never called.
pub const DEFAULT_AMOUNT_OF_POINTS: usize = 100;

/// A near/far bound pair along one axis.
///
/// No ordering constraint is imposed: `near > far` is a legal plane
/// and produces a descending sample sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// First bound; the first value of the axis' sample sequence.
    pub near: f64,
    /// Second bound; the last value of the axis' sample sequence.
    pub far: f64,
}

/// Immutable configuration for one benchmark run.
///
/// Holds the domain bounds, the per-axis sample count, and the
/// selected function. Produced by
/// [`BenchmarkDescriptionBuilder::build`] and never mutated afterward;
/// equality and cloning follow value semantics.
///
/// A description is not checked for completeness on construction; an
/// incomplete one is an ordinary value that fails
/// [`BenchmarkRunner::is_valid_description`](crate::BenchmarkRunner::is_valid_description)
/// later. Unset fields are `None`, never a zero sentinel, so "never
/// configured" stays distinct from "configured to 0.0".
///
/// # Examples
///
/// ```
/// use opti_benchmarks::{BenchmarkDescriptionBuilder, TestFunction};
///
/// let description = BenchmarkDescriptionBuilder::new()
///     .function(TestFunction::Rastrigin)
///     .x_plane(-5.12, 5.12)
///     .y_plane(-5.12, 5.12)
///     .build();
///
/// assert!(description.has_x_plane());
/// assert!(!description.has_z_plane());
/// assert_eq!(description.bench_title(), Some("Rastrigin"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkDescription {
    pub(crate) x_plane: Option<Plane>,
    pub(crate) y_plane: Option<Plane>,
    pub(crate) z_plane: Option<Plane>,
    pub(crate) amount_of_points: usize,
    pub(crate) bench_fn: Option<BenchFn>,
    pub(crate) bench_title: Option<String>,
}

impl Default for BenchmarkDescription {
    /// An empty description: no planes, no function, default sample
    /// count. Fails runner validation as-is.
    fn default() -> Self {
        Self {
            x_plane: None,
            y_plane: None,
            z_plane: None,
            amount_of_points: DEFAULT_AMOUNT_OF_POINTS,
            bench_fn: None,
            bench_title: None,
        }
    }
}

impl BenchmarkDescription {
    /// Returns `true` iff both X bounds were explicitly set.
    #[must_use]
    pub fn has_x_plane(&self) -> bool {
        self.x_plane.is_some()
    }

    /// Returns `true` iff both Y bounds were explicitly set.
    #[must_use]
    pub fn has_y_plane(&self) -> bool {
        self.y_plane.is_some()
    }

    /// Returns `true` iff both Z bounds were explicitly set.
    ///
    /// The Z plane is informational only; execution never reads it.
    #[must_use]
    pub fn has_z_plane(&self) -> bool {
        self.z_plane.is_some()
    }

    /// The X-axis bounds, if set.
    #[must_use]
    pub fn x_plane(&self) -> Option<Plane> {
        self.x_plane
    }

    /// The Y-axis bounds, if set.
    #[must_use]
    pub fn y_plane(&self) -> Option<Plane> {
        self.y_plane
    }

    /// The Z-axis bounds, if set.
    #[must_use]
    pub fn z_plane(&self) -> Option<Plane> {
        self.z_plane
    }

    /// The per-axis sample count.
    #[must_use]
    pub fn amount_of_points(&self) -> usize {
        self.amount_of_points
    }

    /// The selected callable, if a function was chosen.
    #[must_use]
    pub fn bench_fn(&self) -> Option<&BenchFn> {
        self.bench_fn.as_ref()
    }

    /// The display title of the selected function, if one was chosen.
    #[must_use]
    pub fn bench_title(&self) -> Option<&str> {
        self.bench_title.as_deref()
    }

    /// Creates the X-axis sample sequence: `amount_of_points` evenly
    /// spaced values from `near` to `far`, both endpoints included.
    ///
    /// Pure and repeatable; identical calls produce identical
    /// sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaneNotSet`] if the X plane was never
    /// configured.
    pub fn create_x_linspace(&self) -> Result<Vec<f64>> {
        let plane = self.x_plane.ok_or(Error::PlaneNotSet { axis: Axis::X })?;
        Ok(linspace(plane.near, plane.far, self.amount_of_points))
    }

    /// Creates the Y-axis sample sequence, analogous to
    /// [`create_x_linspace`](Self::create_x_linspace).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaneNotSet`] if the Y plane was never
    /// configured.
    pub fn create_y_linspace(&self) -> Result<Vec<f64>> {
        let plane = self.y_plane.ok_or(Error::PlaneNotSet { axis: Axis::Y })?;
        Ok(linspace(plane.near, plane.far, self.amount_of_points))
    }
}
