//! Built-in benchmark test functions and the registry connecting them
//! to builder selectors.
//!
//! Every registered function is a scalar surface over `(x, y)` with a
//! fixed display title. Selection goes through the closed
//! [`TestFunction`] enumeration; user-supplied callables enter through
//! [`BenchmarkDescriptionBuilder::custom_function`](crate::BenchmarkDescriptionBuilder::custom_function)
//! and are carried by the same [`BenchFn`] handle.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// De Jong F1 (sphere): unimodal, convex. Global minimum f(0, 0) = 0.
#[must_use]
pub fn de_jong_f1(x: f64, y: f64) -> f64 {
    x * x + y * y
}

/// De Jong F2 (Rosenbrock's saddle): narrow curved valley.
/// Global minimum f(1, 1) = 0.
#[must_use]
pub fn de_jong_f2(x: f64, y: f64) -> f64 {
    100.0 * (x * x - y).powi(2) + (1.0 - x).powi(2)
}

/// Rastrigin function: highly multimodal with a regular lattice of
/// local minima. Global minimum f(0, 0) = 0.
#[must_use]
pub fn rastrigin(x: f64, y: f64) -> f64 {
    let tau = 2.0 * core::f64::consts::PI;
    20.0 + x * x - 10.0 * (tau * x).cos() + y * y - 10.0 * (tau * y).cos()
}

/// Ackley function: nearly flat outer region with a deep central well.
/// Global minimum f(0, 0) = 0.
#[must_use]
pub fn ackley(x: f64, y: f64) -> f64 {
    let tau = 2.0 * core::f64::consts::PI;
    let sum_sq = x * x + y * y;
    let sum_cos = (tau * x).cos() + (tau * y).cos();
    -20.0 * (-0.2 * (sum_sq / 2.0).sqrt()).exp() - (sum_cos / 2.0).exp()
        + 20.0
        + core::f64::consts::E
}

/// Himmelblau function: four identical global minima with f* = 0,
/// one of them at (3, 2).
#[must_use]
pub fn himmelblau(x: f64, y: f64) -> f64 {
    (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)
}

/// Branin function: three global minima with f* ≈ 0.397887.
#[must_use]
pub fn branin(x: f64, y: f64) -> f64 {
    let pi = core::f64::consts::PI;
    let a = 1.0;
    let b = 5.1 / (4.0 * pi * pi);
    let c = 5.0 / pi;
    let r = 6.0;
    let s = 10.0;
    let t = 1.0 / (8.0 * pi);
    a * (y - b * x * x + c * x - r).powi(2) + s * (1.0 - t) * x.cos() + s
}

/// Goldstein-Price function: flat plateaus around a single sharp
/// valley. Global minimum f(0, -1) = 3.
#[must_use]
pub fn goldstein_price(x: f64, y: f64) -> f64 {
    let term1 = 1.0
        + (x + y + 1.0).powi(2)
            * (19.0 - 14.0 * x + 3.0 * x * x - 14.0 * y + 6.0 * x * y + 3.0 * y * y);
    let term2 = 30.0
        + (2.0 * x - 3.0 * y).powi(2)
            * (18.0 - 32.0 * x + 12.0 * x * x + 48.0 * y - 36.0 * x * y + 27.0 * y * y);
    term1 * term2
}

/// Schaffer N2 function: concentric ridge pattern.
/// Global minimum f(0, 0) = 0.
#[must_use]
pub fn schaffer_n2(x: f64, y: f64) -> f64 {
    let num = (x * x - y * y).sin().powi(2) - 0.5;
    let den = (1.0 + 0.001 * (x * x + y * y)).powi(2);
    0.5 + num / den
}

/// Identifies a function in the built-in registry.
///
/// Each variant carries a fixed display title, used to label results
/// and to name report artifacts.
///
/// # Examples
///
/// ```
/// use opti_benchmarks::TestFunction;
///
/// assert_eq!(TestFunction::DeJongF1.title(), "De Jong F1");
/// assert_eq!(TestFunction::DeJongF1.eval(0.0, 0.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TestFunction {
    /// [`de_jong_f1`]
    DeJongF1,
    /// [`de_jong_f2`]
    DeJongF2,
    /// [`rastrigin`]
    Rastrigin,
    /// [`ackley`]
    Ackley,
    /// [`himmelblau`]
    Himmelblau,
    /// [`branin`]
    Branin,
    /// [`goldstein_price`]
    GoldsteinPrice,
    /// [`schaffer_n2`]
    SchafferN2,
}

impl TestFunction {
    /// Every registered function, in registry order.
    pub const ALL: [Self; 8] = [
        Self::DeJongF1,
        Self::DeJongF2,
        Self::Rastrigin,
        Self::Ackley,
        Self::Himmelblau,
        Self::Branin,
        Self::GoldsteinPrice,
        Self::SchafferN2,
    ];

    /// The fixed display title of this function.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::DeJongF1 => "De Jong F1",
            Self::DeJongF2 => "De Jong F2",
            Self::Rastrigin => "Rastrigin",
            Self::Ackley => "Ackley",
            Self::Himmelblau => "Himmelblau",
            Self::Branin => "Branin",
            Self::GoldsteinPrice => "Goldstein-Price",
            Self::SchafferN2 => "Schaffer N2",
        }
    }

    /// Evaluates this function at `(x, y)`.
    #[must_use]
    pub fn eval(self, x: f64, y: f64) -> f64 {
        match self {
            Self::DeJongF1 => de_jong_f1(x, y),
            Self::DeJongF2 => de_jong_f2(x, y),
            Self::Rastrigin => rastrigin(x, y),
            Self::Ackley => ackley(x, y),
            Self::Himmelblau => himmelblau(x, y),
            Self::Branin => branin(x, y),
            Self::GoldsteinPrice => goldstein_price(x, y),
            Self::SchafferN2 => schaffer_n2(x, y),
        }
    }
}

impl core::fmt::Display for TestFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Signature accepted for user-supplied callables.
///
/// A callable may fail on individual inputs; the failure reason is
/// surfaced by the runner as
/// [`Error::Evaluation`](crate::Error::Evaluation).
pub type CustomFn = dyn Fn(f64, f64) -> core::result::Result<f64, String> + Send + Sync;

/// The callable selected for a benchmark run.
///
/// Either a function from the built-in registry or a user-supplied
/// closure. Cloning is cheap: custom callables are shared behind an
/// [`Arc`].
#[derive(Clone)]
pub enum BenchFn {
    /// A function from the built-in registry.
    Registry(TestFunction),
    /// A user-supplied callable.
    Custom(Arc<CustomFn>),
}

impl BenchFn {
    /// Evaluates the callable at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns the callable's own failure reason for inputs it cannot
    /// evaluate. Registry functions are total and never fail.
    pub fn eval(&self, x: f64, y: f64) -> core::result::Result<f64, String> {
        match self {
            Self::Registry(function) => Ok(function.eval(x, y)),
            Self::Custom(function) => function(x, y),
        }
    }
}

impl core::fmt::Debug for BenchFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Registry(function) => f.debug_tuple("Registry").field(function).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"..").finish(),
        }
    }
}

impl PartialEq for BenchFn {
    /// Registry selections compare by key; custom callables compare by
    /// pointer identity, since closure bodies have no meaningful
    /// equality.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Registry(a), Self::Registry(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
