use super::*;

#[test]
fn lerp_exact_hits_endpoints() {
    let (a, b) = (0.1, 0.7);
    assert_eq!(lerp_exact(a, b, 0.0), a);
    assert_eq!(lerp_exact(a, b, -3.0), a);
    assert_eq!(lerp_exact(a, b, 1.0), b);
    assert_eq!(lerp_exact(a, b, 42.0), b);
    assert!((lerp_exact(a, b, 0.5) - 0.4).abs() < 1e-12);
}

#[test]
fn approach_stays_between_current_and_target() {
    let mut cur = 0.5;
    let target = 9.5;
    for _ in 0..1200 {
        let next = approach(cur, target, 1.0 / 60.0, 0.5);
        assert!(next >= cur && next <= target);
        cur = next;
    }
    assert_eq!(cur, target);
}

#[test]
fn approach_without_lag_snaps() {
    assert_eq!(approach(1.0, 4.0, 0.016, 0.0), 4.0);
    assert_eq!(approach(1.0, 4.0, 0.0, 0.5), 1.0);
}

#[test]
fn usable_durations_are_finite_and_positive() {
    assert!(is_usable_duration(0.25));
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(!is_usable_duration(d), "{d}");
    }
}
