use std::sync::Arc;

use crate::functions::{BenchFn, TestFunction};

use super::{BenchmarkDescription, Plane};

/// A builder for assembling [`BenchmarkDescription`] values with a
/// fluent API.
///
/// Each configuration method updates an owned draft and returns the
/// builder for chaining. The builder itself never errors: no
/// cross-field checks happen at configuration time, and an incomplete
/// draft builds into a description that simply fails runner validation
/// later.
///
/// # Defaults
///
/// - Planes: unset
/// - Function: unset
/// - Sample count: [`DEFAULT_AMOUNT_OF_POINTS`](super::DEFAULT_AMOUNT_OF_POINTS)
///
/// # Examples
///
/// ```
/// use opti_benchmarks::{BenchmarkDescriptionBuilder, TestFunction};
///
/// let description = BenchmarkDescriptionBuilder::new()
///     .function(TestFunction::DeJongF1)
///     .amount_of_points(150)
///     .x_plane(-5.12, 5.12)
///     .y_plane(-5.12, 5.12)
///     .build();
///
/// assert_eq!(description.amount_of_points(), 150);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BenchmarkDescriptionBuilder {
    draft: BenchmarkDescription,
}

impl BenchmarkDescriptionBuilder {
    /// Create a new builder with a default draft.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: BenchmarkDescription::default(),
        }
    }

    /// Set the X-axis sampling bounds.
    ///
    /// No ordering check is performed; `near > far` produces a
    /// descending sample sequence.
    #[must_use]
    pub fn x_plane(mut self, near: f64, far: f64) -> Self {
        self.draft.x_plane = Some(Plane { near, far });
        self
    }

    /// Set the Y-axis sampling bounds.
    #[must_use]
    pub fn y_plane(mut self, near: f64, far: f64) -> Self {
        self.draft.y_plane = Some(Plane { near, far });
        self
    }

    /// Set the Z-axis bounds.
    ///
    /// Purely informational; evaluation never reads them and no
    /// cross-validation against function output is performed.
    #[must_use]
    pub fn z_plane(mut self, near: f64, far: f64) -> Self {
        self.draft.z_plane = Some(Plane { near, far });
        self
    }

    /// Set the per-axis sample count.
    ///
    /// Zero is not rejected here; it surfaces through runner
    /// validation as a missing positive point count.
    #[must_use]
    pub fn amount_of_points(mut self, amount: usize) -> Self {
        self.draft.amount_of_points = amount;
        self
    }

    /// Select a function from the built-in registry.
    ///
    /// Sets both the callable and the display title in one step.
    #[must_use]
    pub fn function(mut self, function: TestFunction) -> Self {
        self.draft.bench_fn = Some(BenchFn::Registry(function));
        self.draft.bench_title = Some(function.title().to_owned());
        self
    }

    /// Select a user-supplied callable with a caller-chosen title.
    ///
    /// The callable may fail on individual inputs by returning `Err`;
    /// the runner surfaces such failures as
    /// [`Error::Evaluation`](crate::Error::Evaluation) carrying the
    /// failing sample's index and coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use opti_benchmarks::BenchmarkDescriptionBuilder;
    ///
    /// let description = BenchmarkDescriptionBuilder::new()
    ///     .custom_function("Inverse", |x, y| {
    ///         let denom = x * x + y * y;
    ///         if denom == 0.0 {
    ///             Err("singular at the origin".to_owned())
    ///         } else {
    ///             Ok(1.0 / denom)
    ///         }
    ///     })
    ///     .build();
    ///
    /// assert_eq!(description.bench_title(), Some("Inverse"));
    /// ```
    #[must_use]
    pub fn custom_function<F>(mut self, title: impl Into<String>, function: F) -> Self
    where
        F: Fn(f64, f64) -> core::result::Result<f64, String> + Send + Sync + 'static,
    {
        self.draft.bench_fn = Some(BenchFn::Custom(Arc::new(function)));
        self.draft.bench_title = Some(title.into());
        self
    }

    /// Discard the accumulated draft and start over with a fresh one.
    ///
    /// This is a reset, not a snapshot: nothing configured so far
    /// carries into the returned builder.
    #[must_use]
    pub fn new_instance(self) -> Self {
        Self::new()
    }

    /// Snapshot the current draft as an immutable description.
    ///
    /// Repeatable and non-destructive: calling it twice without
    /// intervening configuration yields equal descriptions, and the
    /// builder stays usable for further configuration and further
    /// builds.
    #[must_use]
    pub fn build(&self) -> BenchmarkDescription {
        self.draft.clone()
    }
}
