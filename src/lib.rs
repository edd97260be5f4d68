#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Sampling and evaluation of classic optimization benchmark functions
//! (De Jong F1, Rastrigin, Himmelblau, ...) over rectangular domains,
//! producing results ready for visualization.
//!
//! This crate does not optimize anything. It expands a declarative
//! description of a benchmark run into coordinate sequences, evaluates
//! the selected function at each sample, and packages the evaluated
//! points for a plotting consumer.
//!
//! # Getting Started
//!
//! Describe a run with the fluent builder, hand it to the runner:
//!
//! ```
//! use opti_benchmarks::prelude::*;
//!
//! let description = BenchmarkDescriptionBuilder::new()
//!     .function(TestFunction::DeJongF1)
//!     .amount_of_points(150)
//!     .x_plane(-5.12, 5.12)
//!     .y_plane(-5.12, 5.12)
//!     .build();
//!
//! let runner = BenchmarkRunner::new();
//! let result = runner.run_benchmark(Some(&description)).unwrap();
//!
//! assert_eq!(result.len(), 150);
//! assert_eq!(result.bench_title(), "De Jong F1");
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`BenchmarkDescriptionBuilder`] | Accumulate configuration via chained calls and snapshot it into a description. |
//! | [`BenchmarkDescription`] | Immutable configuration for one run: domain bounds, sample count, selected function. |
//! | [`BenchmarkRunner`] | Validate a description, expand it into sample coordinates, evaluate the function. |
//! | [`BenchmarkResult`] | Parallel `x`/`y`/`z` sequences plus the run title, consumed read-only by plotting. |
//! | [`TestFunction`](functions::TestFunction) | Closed registry of built-in benchmark surfaces, each with a fixed display title. |
//!
//! The builder never errors: an incomplete description is an ordinary
//! value that fails [`BenchmarkRunner::is_valid_description`] later.
//! All error signaling lives in one place, the runner.
//!
//! # Sampling semantics
//!
//! The runner pairs X and Y samples positionally: the `i`-th evaluated
//! point is `(xs[i], ys[i])`, a one-dimensional sweep along the diagonal
//! of the sampling rectangle rather than a full 2-D mesh. The result
//! always satisfies `x.len() == y.len() == z.len() == amount_of_points`.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on value types, [`BenchmarkResult::save`]/[`BenchmarkResult::load`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at run and report boundaries | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod description;
mod error;
pub mod functions;
mod grid;
pub mod report;
mod result;
mod runner;
mod types;

pub use description::{
    BenchmarkDescription, BenchmarkDescriptionBuilder, Plane, DEFAULT_AMOUNT_OF_POINTS,
};
pub use error::{Error, Result};
pub use functions::{BenchFn, TestFunction};
pub use report::{plot_result, plot_result_to};
pub use result::BenchmarkResult;
pub use runner::BenchmarkRunner;
pub use types::{Axis, RequiredField};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use opti_benchmarks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::description::{
        BenchmarkDescription, BenchmarkDescriptionBuilder, Plane, DEFAULT_AMOUNT_OF_POINTS,
    };
    pub use crate::error::{Error, Result};
    pub use crate::functions::{BenchFn, TestFunction};
    pub use crate::report::{plot_result, plot_result_to};
    pub use crate::result::BenchmarkResult;
    pub use crate::runner::BenchmarkRunner;
    pub use crate::types::{Axis, RequiredField};
}
