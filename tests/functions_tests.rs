use std::collections::HashSet;

use opti_benchmarks::functions::{
    ackley, branin, de_jong_f1, de_jong_f2, goldstein_price, himmelblau, rastrigin, schaffer_n2,
};
use opti_benchmarks::TestFunction;

const TOL: f64 = 1e-10;

#[test]
fn de_jong_f1_at_optimum() {
    assert!(de_jong_f1(0.0, 0.0).abs() < TOL);
    assert!((de_jong_f1(1.0, 2.0) - 5.0).abs() < TOL);
}

#[test]
fn de_jong_f2_at_optimum() {
    assert!(de_jong_f2(1.0, 1.0).abs() < TOL);
}

#[test]
fn rastrigin_at_optimum() {
    assert!(rastrigin(0.0, 0.0).abs() < TOL);
}

#[test]
fn ackley_at_optimum() {
    assert!(ackley(0.0, 0.0).abs() < 1e-8);
}

#[test]
fn himmelblau_at_optima() {
    assert!(himmelblau(3.0, 2.0).abs() < TOL);
    // The three remaining minima are only known numerically.
    assert!(himmelblau(-2.805118, 3.131312).abs() < 1e-3);
    assert!(himmelblau(-3.779310, -3.283186).abs() < 1e-3);
    assert!(himmelblau(3.584428, -1.848126).abs() < 1e-3);
}

#[test]
fn branin_at_optimum() {
    let target = 0.397_887_357_729_738_1;
    let val = branin(std::f64::consts::PI, 2.275);
    assert!((val - target).abs() < 1e-3);
}

#[test]
fn goldstein_price_at_optimum() {
    assert!((goldstein_price(0.0, -1.0) - 3.0).abs() < 1e-9);
}

#[test]
fn schaffer_n2_at_optimum() {
    assert!(schaffer_n2(0.0, 0.0).abs() < TOL);
}

#[test]
fn registry_titles_are_fixed_and_distinct() {
    assert_eq!(TestFunction::DeJongF1.title(), "De Jong F1");
    assert_eq!(TestFunction::DeJongF2.title(), "De Jong F2");
    assert_eq!(TestFunction::GoldsteinPrice.title(), "Goldstein-Price");

    let titles: HashSet<&str> = TestFunction::ALL.iter().map(|f| f.title()).collect();
    assert_eq!(titles.len(), TestFunction::ALL.len());
}

#[test]
fn registry_dispatch_matches_free_functions() {
    let (x, y) = (0.3, -0.7);
    assert_eq!(TestFunction::DeJongF1.eval(x, y), de_jong_f1(x, y));
    assert_eq!(TestFunction::DeJongF2.eval(x, y), de_jong_f2(x, y));
    assert_eq!(TestFunction::Rastrigin.eval(x, y), rastrigin(x, y));
    assert_eq!(TestFunction::Ackley.eval(x, y), ackley(x, y));
    assert_eq!(TestFunction::Himmelblau.eval(x, y), himmelblau(x, y));
    assert_eq!(TestFunction::Branin.eval(x, y), branin(x, y));
    assert_eq!(TestFunction::GoldsteinPrice.eval(x, y), goldstein_price(x, y));
    assert_eq!(TestFunction::SchafferN2.eval(x, y), schaffer_n2(x, y));
}

#[test]
fn every_registry_function_is_finite_on_its_typical_domain() {
    for function in TestFunction::ALL {
        for &(x, y) in &[(-5.12, -5.12), (0.0, 0.0), (5.12, 5.12), (-1.0, 4.0)] {
            assert!(
                function.eval(x, y).is_finite(),
                "{function} not finite at ({x}, {y})"
            );
        }
    }
}
