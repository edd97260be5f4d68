use opti_benchmarks::prelude::*;

fn sample_result() -> BenchmarkResult {
    let description = BenchmarkDescriptionBuilder::new()
        .function(TestFunction::DeJongF1)
        .amount_of_points(25)
        .x_plane(-5.12, 5.12)
        .y_plane(-5.12, 5.12)
        .build();
    BenchmarkRunner::new()
        .run_benchmark(Some(&description))
        .unwrap()
}

#[test]
fn artifact_is_named_from_the_bench_title() {
    let dir = tempfile::tempdir().unwrap();
    let result = sample_result();

    let path = plot_result_to(&result, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "De Jong F1.html");
    assert!(path.is_file());
}

#[test]
fn artifact_embeds_the_title_and_the_data() {
    let dir = tempfile::tempdir().unwrap();
    let result = sample_result();

    let path = plot_result_to(&result, dir.path()).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();

    assert!(contents.contains("<title>De Jong F1</title>"));
    assert!(contents.contains("scatter3d"));
    // z at both rectangle corners: 5.12^2 + 5.12^2.
    assert!(contents.contains("52.4288"));
}

#[test]
fn plotting_does_not_mutate_the_result() {
    let dir = tempfile::tempdir().unwrap();
    let result = sample_result();
    let before = result.clone();

    plot_result_to(&result, dir.path()).unwrap();
    assert_eq!(result, before);
}

#[test]
fn single_point_results_still_plot() {
    let dir = tempfile::tempdir().unwrap();
    let description = BenchmarkDescriptionBuilder::new()
        .function(TestFunction::Ackley)
        .amount_of_points(1)
        .x_plane(0.0, 0.0)
        .y_plane(0.0, 0.0)
        .build();
    let result = BenchmarkRunner::new()
        .run_benchmark(Some(&description))
        .unwrap();

    let path = plot_result_to(&result, dir.path()).unwrap();
    assert!(path.is_file());
    assert_eq!(path.file_name().unwrap(), "Ackley.html");
}

#[test]
fn custom_titles_name_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let description = BenchmarkDescriptionBuilder::new()
        .custom_function("Tilted Plane", |x, y| Ok(x + y))
        .amount_of_points(5)
        .x_plane(0.0, 1.0)
        .y_plane(0.0, 1.0)
        .build();
    let result = BenchmarkRunner::new()
        .run_benchmark(Some(&description))
        .unwrap();

    let path = plot_result_to(&result, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Tilted Plane.html");
}
