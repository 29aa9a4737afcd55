use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(Progress::new(-0.5), Progress::START);
    assert_eq!(Progress::new(1.5), Progress::END);
    assert_eq!(Progress::new(f64::NAN), Progress::START);
    assert_eq!(Progress::new(0.25).get(), 0.25);
}

#[test]
fn progress_from_scroll_handles_unscrollable_region() {
    assert_eq!(Progress::from_scroll(100.0, 0.0), Progress::START);
    assert_eq!(Progress::from_scroll(50.0, 200.0).get(), 0.25);
    assert_eq!(Progress::from_scroll(500.0, 200.0), Progress::END);
}

#[test]
fn range_rejects_malformed_bounds() {
    assert!(Range::new(0.2, 0.2).is_err());
    assert!(Range::new(0.3, 0.2).is_err());
    assert!(Range::new(-0.1, 0.2).is_err());
    assert!(Range::new(0.1, 1.01).is_err());
    assert!(Range::new(f64::NAN, 0.5).is_err());
    assert!(Range::new(0.0, 1.0).is_ok());
}

#[test]
fn range_contains_is_half_open() {
    let r = Range::new(0.19, 0.23).unwrap();
    assert!(!r.contains(Progress::new(0.18)));
    assert!(r.contains(Progress::new(0.19)));
    assert!(r.contains(Progress::new(0.2299)));
    assert!(!r.contains(Progress::new(0.23)));
}

#[test]
fn range_local_is_exact_at_bounds() {
    let r = Range::new(0.19, 0.23).unwrap();
    assert_eq!(r.local(Progress::new(0.0)), 0.0);
    assert_eq!(r.local(Progress::new(0.19)), 0.0);
    assert_eq!(r.local(Progress::new(0.23)), 1.0);
    assert_eq!(r.local(Progress::new(0.9)), 1.0);
    assert!((r.local(Progress::new(0.21)) - 0.5).abs() < 1e-9);
}

#[test]
fn range_overlap_and_gap() {
    let a = Range::new(0.19, 0.23).unwrap();
    let b = Range::new(0.44, 0.48).unwrap();
    let c = Range::new(0.22, 0.30).unwrap();
    assert!(!a.overlaps(b));
    assert!(a.overlaps(c));
    assert!((a.gap_to(b) - 0.21).abs() < 1e-12);
    assert!(a.gap_to(c) < 0.0);

    let touching = Range::new(0.23, 0.3).unwrap();
    assert!(!a.overlaps(touching));
    assert_eq!(a.gap_to(touching), 0.0);
}
