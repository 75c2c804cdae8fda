
use super::*;

#[test]
fn test_reference_sample() {
    // Reference values from the Royston algorithm as shipped in common
    // statistics packages: W = 0.7888, p = 0.0067.
    let x = [
        148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0,
    ];
    let r = shapiro_wilk(&x).unwrap();
    assert!((r.statistic - 0.788_814_7).abs() < 1e-5, "W = {}", r.statistic);
    assert!((r.p_value - 0.006_703_8).abs() < 1e-5, "p = {}", r.p_value);
}

#[test]
fn test_three_points() {
    let r = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
    assert!((r.statistic - 1.0).abs() < 1e-12);
    assert!((r.p_value - 1.0).abs() < 1e-6);

    let r = shapiro_wilk(&[1.0, 2.0, 4.0]).unwrap();
    assert!((r.statistic - 0.964_285_7).abs() < 1e-6);
    assert!((r.p_value - 0.636_886_8).abs() < 1e-5);
}

#[test]
fn test_small_samples_use_small_n_branch() {
    let r = shapiro_wilk(&[4.0, 5.0, 6.0, 7.0]).unwrap();
    assert!((r.statistic - 0.992_912).abs() < 1e-5);
    assert!((r.p_value - 0.971_877).abs() < 1e-4);

    let r = shapiro_wilk(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap();
    assert!((r.statistic - 0.835_788).abs() < 1e-5);
    assert!((r.p_value - 0.153_613).abs() < 1e-4);
}

#[test]
fn test_symmetric_sample_is_not_rejected() {
    let x = [
        2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8, 3.9, 4.1, 3.0, 2.5, 3.7, 4.8, 3.1, 2.9,
    ];
    let r = shapiro_wilk(&x).unwrap();
    assert!((r.statistic - 0.975_591).abs() < 1e-5);
    assert!(r.p_value > 0.9);
}

#[test]
fn test_outlier_sample_is_rejected() {
    let mut x = vec![1.0; 12];
    x.push(50.0);
    let r = shapiro_wilk(&x).unwrap();
    assert!((r.statistic - 0.311_007).abs() < 1e-5);
    assert!(r.p_value < 1e-5);
}

#[test]
fn test_order_does_not_matter() {
    let a = shapiro_wilk(&[5.0, 1.0, 4.0, 2.0, 3.0, 9.0]).unwrap();
    let b = shapiro_wilk(&[9.0, 3.0, 2.0, 4.0, 1.0, 5.0]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_too_few_and_zero_range() {
    assert_eq!(
        shapiro_wilk(&[1.0, 2.0]),
        Err(ShapiroError::TooFewObservations(2))
    );
    assert_eq!(shapiro_wilk(&[3.0; 6]), Err(ShapiroError::ZeroRange));
}
