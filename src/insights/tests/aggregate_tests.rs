//! Tests for per-category statistic functions

use super::{dataset, in_window};
use crate::insights::aggregate::{maximum, mean, minimum, sum_energy_gwh, total_energy_gwh};

#[test]
fn test_statistics_over_matching_records() {
    let df = dataset(&[
        (in_window(6, 1), "Solar", 100.0),
        (in_window(6, 2), "Solar", 200.0),
        (in_window(6, 3), "Solar", 600.0),
        (in_window(6, 1), "Gas", 900.0),
    ]);

    assert_eq!(minimum("Solar", &df).unwrap(), 100.0);
    assert_eq!(mean("Solar", &df).unwrap(), 300.0);
    assert_eq!(maximum("Solar", &df).unwrap(), 600.0);
}

#[test]
fn test_single_matching_record_collapses_statistics() {
    let df = dataset(&[
        (in_window(6, 1), "Nuclear", 450.0),
        (in_window(6, 1), "Gas", 900.0),
    ]);

    assert_eq!(minimum("Nuclear", &df).unwrap(), 450.0);
    assert_eq!(mean("Nuclear", &df).unwrap(), 450.0);
    assert_eq!(maximum("Nuclear", &df).unwrap(), 450.0);
}

#[test]
fn test_empty_match_yields_nan_for_min_mean_max() {
    let df = dataset(&[(in_window(6, 1), "Gas", 900.0)]);

    assert!(minimum("Solar", &df).unwrap().is_nan());
    assert!(mean("Solar", &df).unwrap().is_nan());
    assert!(maximum("Solar", &df).unwrap().is_nan());
}

#[test]
fn test_empty_match_sums_to_zero() {
    let df = dataset(&[(in_window(6, 1), "Gas", 900.0)]);
    assert_eq!(sum_energy_gwh("Solar", &df).unwrap(), 0.0);
}

#[test]
fn test_sum_energy_applies_interval_and_unit_conversion() {
    // 100 + 300 MW over 30 min samples: 400 * 0.5 MWh = 0.2 GWh
    let df = dataset(&[
        (in_window(6, 1), "Solar", 100.0),
        (in_window(6, 2), "Solar", 300.0),
        (in_window(6, 1), "Gas", 1000.0),
    ]);

    let sum = sum_energy_gwh("Solar", &df).unwrap();
    assert!((sum - 0.2).abs() < 1e-12);
}

#[test]
fn test_total_energy_sums_every_record() {
    let df = dataset(&[
        (in_window(6, 1), "Solar", 100.0),
        (in_window(6, 2), "Gas", 300.0),
        (in_window(6, 3), "Coal", 600.0),
    ]);

    let total = total_energy_gwh(&df).unwrap();
    assert!((total - 1000.0 * 0.5 * 0.001).abs() < 1e-12);

    // Filtering by every distinct category reproduces the grand total
    let by_parts = sum_energy_gwh("Solar", &df).unwrap()
        + sum_energy_gwh("Gas", &df).unwrap()
        + sum_energy_gwh("Coal", &df).unwrap();
    assert!((total - by_parts).abs() < 1e-12);
}

#[test]
fn test_category_matching_is_exact() {
    let df = dataset(&[
        (in_window(6, 1), "Wind Onshore", 500.0),
        (in_window(6, 1), "Wind Offshore", 700.0),
    ]);

    assert_eq!(maximum("Wind Onshore", &df).unwrap(), 500.0);
    assert!(minimum("wind onshore", &df).unwrap().is_nan());
    assert!(minimum("Wind", &df).unwrap().is_nan());
}

#[test]
fn test_aggregation_does_not_mutate_caller_dataset() {
    let df = dataset(&[
        (in_window(6, 1), "Solar", 100.0),
        (in_window(6, 2), "Gas", 300.0),
    ]);
    let before = df.clone();

    minimum("Solar", &df).unwrap();
    sum_energy_gwh("Gas", &df).unwrap();

    assert!(df.equals(&before));
}
