use super::*;

fn driver(limit: f64) -> SmoothScroll {
    SmoothScroll::new(&SmoothingDef::default(), limit).unwrap()
}

#[test]
fn wheel_glides_toward_target() {
    let mut sm = driver(10_000.0);
    sm.on_wheel(500.0, 0.0);
    assert_eq!(sm.target(), 500.0);
    assert!(sm.is_animating());

    let early = sm.tick(0.1);
    let later = sm.tick(0.4);
    assert!(early > 0.0 && early < 500.0);
    assert!(later > early && later < 500.0);

    assert_eq!(sm.tick(1.2), 500.0);
    assert!(!sm.is_animating());
}

#[test]
fn burst_retargets_from_animated_position() {
    let mut sm = driver(10_000.0);
    sm.on_wheel(100.0, 0.0);
    let mid = sm.tick(0.05);
    sm.on_wheel(100.0, 0.05);
    assert_eq!(sm.target(), 200.0);
    let next = sm.tick(0.06);
    assert!(next >= mid);
    assert_eq!(sm.tick(10.0), 200.0);
}

#[test]
fn target_is_clamped_to_region() {
    let mut sm = driver(300.0);
    sm.on_wheel(-50.0, 0.0);
    assert_eq!(sm.target(), 0.0);
    sm.on_wheel(1_000.0, 0.0);
    assert_eq!(sm.target(), 300.0);
    assert_eq!(sm.tick(5.0), 300.0);
}

#[test]
fn native_scroll_cancels_tween() {
    let mut sm = driver(1_000.0);
    sm.on_wheel(400.0, 0.0);
    sm.on_native_scroll(120.0);
    assert!(!sm.is_animating());
    assert_eq!(sm.tick(0.5), 120.0);
    assert_eq!(sm.target(), 120.0);
}

#[test]
fn shrinking_limit_clamps_positions() {
    let mut sm = driver(1_000.0);
    sm.on_native_scroll(900.0);
    sm.set_limit(500.0);
    assert_eq!(sm.position(), 500.0);
    assert_eq!(sm.target(), 500.0);
}

#[test]
fn rejects_bad_parameters() {
    let mut def = SmoothingDef::default();
    def.duration_secs = 0.0;
    assert!(SmoothScroll::new(&def, 100.0).is_err());
    let mut def = SmoothingDef::default();
    def.wheel_multiplier = f64::NAN;
    assert!(SmoothScroll::new(&def, 100.0).is_err());
    assert!(SmoothScroll::new(&SmoothingDef::default(), -1.0).is_err());
}
