use super::*;

#[test]
fn all_eases_reach_one() {
    for ease in [
        Ease::Linear,
        Ease::OutQuad,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::OutExpo,
    ] {
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
        assert!(ease.apply(5.0) <= 1.0, "{ease:?}");
    }
}

#[test]
fn out_expo_is_monotonic_and_front_loaded() {
    let mut prev = Ease::OutExpo.apply(0.0);
    assert!((prev - 0.001).abs() < 1e-12);
    for i in 1..=100 {
        let v = Ease::OutExpo.apply(f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
    assert!(Ease::OutExpo.apply(0.3) > 0.85);
}

#[test]
fn ease_deserializes_from_snake_case() {
    let e: Ease = serde_json::from_str("\"out_expo\"").unwrap();
    assert_eq!(e, Ease::OutExpo);
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
}
