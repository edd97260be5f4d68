//! HTML report generation for benchmark results.
//!
//! Renders a [`BenchmarkResult`] to a self-contained HTML file with an
//! embedded [Plotly.js](https://plotly.com/javascript/) chart: a 3-D
//! line trace following the sweep path through the sampling rectangle,
//! plus a 2-D profile of the evaluated values. The artifact is named
//! `<bench_title>.html` and can be opened in any browser. An internet
//! connection is needed on first load to fetch `Plotly.js` from a CDN.
//!
//! # Usage
//!
//! ```no_run
//! use opti_benchmarks::prelude::*;
//!
//! let description = BenchmarkDescriptionBuilder::new()
//!     .function(TestFunction::DeJongF1)
//!     .x_plane(-5.12, 5.12)
//!     .y_plane(-5.12, 5.12)
//!     .build();
//! let result = BenchmarkRunner::new().run_benchmark(Some(&description)).unwrap();
//!
//! let artifact = plot_result(&result).unwrap();
//! assert!(artifact.ends_with("De Jong F1.html"));
//! ```

use core::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::result::BenchmarkResult;

/// Render `result` to `<bench_title>.html` in the current directory.
///
/// Returns the path of the written artifact. The result itself is not
/// mutated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn plot_result(result: &BenchmarkResult) -> std::io::Result<PathBuf> {
    plot_result_to(result, ".")
}

/// Render `result` to `<bench_title>.html` under `dir`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn plot_result_to(result: &BenchmarkResult, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(format!("{}.html", result.bench_title()));

    trace_debug!(title = result.bench_title(), "building report");

    let html = build_html(result);
    std::fs::write(&path, html)?;

    trace_info!(path = %path.display(), "report written");

    Ok(path)
}

fn build_html(result: &BenchmarkResult) -> String {
    let mut html = String::with_capacity(4096);

    let title = escape_js(result.bench_title());
    let xs = result.x();
    let ys = result.y();
    let zs = result.z();

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 8px; font-size: 1.8em; }}
  .subtitle {{ text-align: center; color: #7f8c8d; margin-bottom: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin-bottom: 24px; padding: 16px; }}
  .chart-title {{ font-size: 1.1em; font-weight: 600; margin-bottom: 8px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="subtitle">{n} samples</p>
"#,
        n = result.len(),
    );

    // Sweep path through the sampling rectangle.
    html.push_str("<div class=\"chart\"><div class=\"chart-title\">Sweep Path</div><div id=\"sweep\"></div></div>\n");
    let _ = write!(
        html,
        r##"<script>
Plotly.newPlot("sweep", [
  {{ x: {xs:?}, y: {ys:?}, z: {zs:?}, mode: "lines+markers", name: "{title}",
     type: "scatter3d", marker: {{ color: "#3498db", size: 3 }},
     line: {{ color: "#3498db", width: 2 }} }}
], {{ scene: {{ xaxis: {{ title: "x" }}, yaxis: {{ title: "y" }}, zaxis: {{ title: "z" }} }},
     margin: {{ t: 10 }}, height: 600 }},
   {{ responsive: true }});
</script>
"##,
    );

    // Evaluated values along the sweep.
    html.push_str("<div class=\"chart\"><div class=\"chart-title\">Value Profile</div><div id=\"profile\"></div></div>\n");
    let _ = write!(
        html,
        r##"<script>
Plotly.newPlot("profile", [
  {{ x: {xs:?}, y: {zs:?}, mode: "lines", name: "z(x, y)", type: "scatter",
     line: {{ color: "#e74c3c", width: 2 }} }}
], {{ xaxis: {{ title: "x" }}, yaxis: {{ title: "z" }}, margin: {{ t: 10 }} }},
   {{ responsive: true }});
</script>
"##,
    );

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
