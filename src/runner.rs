//! Validation and execution of benchmark descriptions.

use crate::description::BenchmarkDescription;
use crate::error::{Error, Result};
use crate::result::BenchmarkResult;
use crate::types::RequiredField;

/// Validates descriptions and expands them into evaluated results.
///
/// The runner holds no state: it is `Copy`, and independent callers
/// may share one instance across threads without coordination. Each
/// run is a single synchronous request/response with no retry;
/// callers needing retries wrap [`run_benchmark`](Self::run_benchmark)
/// externally.
///
/// # Examples
///
/// ```
/// use opti_benchmarks::prelude::*;
///
/// let runner = BenchmarkRunner::new();
/// let description = BenchmarkDescriptionBuilder::new()
///     .function(TestFunction::Himmelblau)
///     .x_plane(-5.0, 5.0)
///     .y_plane(-5.0, 5.0)
///     .build();
///
/// assert!(runner.is_valid_description(Some(&description)));
/// let result = runner.run_benchmark(Some(&description)).unwrap();
/// assert_eq!(result.len(), description.amount_of_points());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Create a runner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reports whether `description` can be run.
    ///
    /// Returns `false` for an absent description and for any
    /// description lacking one of: X-plane, Y-plane, function, or a
    /// positive sample count. The default (empty) description is
    /// always invalid. Pure predicate; never fails, whatever the
    /// input shape.
    #[must_use]
    pub fn is_valid_description(&self, description: Option<&BenchmarkDescription>) -> bool {
        description.is_some_and(|d| missing_fields(d).is_empty())
    }

    /// Runs the described benchmark.
    ///
    /// Validation is the single gate: an absent or incomplete
    /// description is rejected before any sample is generated, and an
    /// evaluation failure aborts the run without a partial result.
    ///
    /// The X and Y sample sequences are paired positionally: the
    /// `i`-th evaluated point is `(xs[i], ys[i])`, one sweep along the
    /// diagonal of the sampling rectangle, not a 2-D mesh.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingDescription`] when `description` is `None`.
    /// - [`Error::InvalidDescription`] when validation fails, naming
    ///   every missing required field.
    /// - [`Error::Evaluation`] when the selected function fails at a
    ///   sample, carrying the index and input coordinates.
    pub fn run_benchmark(
        &self,
        description: Option<&BenchmarkDescription>,
    ) -> Result<BenchmarkResult> {
        let Some(description) = description else {
            return Err(Error::MissingDescription);
        };

        let missing = missing_fields(description);
        if !missing.is_empty() {
            return Err(Error::InvalidDescription { missing });
        }

        let Some(bench_fn) = description.bench_fn() else {
            return Err(Error::InvalidDescription {
                missing: vec![RequiredField::Function],
            });
        };
        let bench_title = description.bench_title().unwrap_or_default().to_owned();

        let xs = description.create_x_linspace()?;
        let ys = description.create_y_linspace()?;

        trace_info!(
            title = %bench_title,
            points = xs.len(),
            "running benchmark"
        );

        let mut zs = Vec::with_capacity(xs.len());
        for (index, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            match bench_fn.eval(x, y) {
                Ok(z) => zs.push(z),
                Err(reason) => {
                    return Err(Error::Evaluation {
                        index,
                        x,
                        y,
                        reason,
                    })
                }
            }
        }

        trace_debug!(title = %bench_title, "evaluation complete");

        Ok(BenchmarkResult::new(xs, ys, zs, bench_title))
    }
}

/// Every required field the description lacks, in reporting order.
fn missing_fields(description: &BenchmarkDescription) -> Vec<RequiredField> {
    let mut missing = Vec::new();
    if !description.has_x_plane() {
        missing.push(RequiredField::XPlane);
    }
    if !description.has_y_plane() {
        missing.push(RequiredField::YPlane);
    }
    if description.bench_fn().is_none() {
        missing.push(RequiredField::Function);
    }
    if description.amount_of_points() == 0 {
        missing.push(RequiredField::AmountOfPoints);
    }
    missing
}
