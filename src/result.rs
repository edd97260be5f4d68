//! Evaluated benchmark results.

/// Immutable output of a benchmark run.
///
/// Holds three parallel coordinate sequences (`x.len() == y.len() ==
/// z.len()` always, equal to the run's `amount_of_points`) plus the
/// originating run title. Produced only by
/// [`BenchmarkRunner::run_benchmark`](crate::BenchmarkRunner::run_benchmark)
/// and consumed read-only by plotting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkResult {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    bench_title: String,
}

impl BenchmarkResult {
    pub(crate) fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, bench_title: String) -> Self {
        debug_assert_eq!(x.len(), y.len());
        debug_assert_eq!(x.len(), z.len());
        Self {
            x,
            y,
            z,
            bench_title,
        }
    }

    /// The X coordinates of the evaluated samples.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The Y coordinates of the evaluated samples.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The evaluated function values.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// The display title of the run that produced this result.
    #[must_use]
    pub fn bench_title(&self) -> &str {
        &self.bench_title
    }

    /// The number of evaluated samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the result holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate the samples as `(x, y, z)` triples.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| (x, y, z))
    }

    /// The smallest evaluated value, if any sample exists.
    #[must_use]
    pub fn min_z(&self) -> Option<f64> {
        self.z.iter().copied().reduce(f64::min)
    }

    /// The largest evaluated value, if any sample exists.
    #[must_use]
    pub fn max_z(&self) -> Option<f64> {
        self.z.iter().copied().reduce(f64::max)
    }
}

#[cfg(feature = "serde")]
impl BenchmarkResult {
    /// Save the result to a JSON file.
    ///
    /// Writes to a temp file in the same directory, then renames.
    /// A crash mid-write cannot leave a corrupt file behind.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().unwrap_or(std::path::Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
        let file = std::fs::File::create(&tmp_path)?;
        serde_json::to_writer_pretty(file, self).map_err(std::io::Error::other)?;
        std::fs::rename(&tmp_path, path)
    }

    /// Load a result from a JSON file previously written by
    /// [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(file)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
