use super::*;

#[test]
fn pending_handle_is_not_ready() {
    let m = MemoryMedia::pending();
    assert_eq!(m.duration(), None);
    assert!(!m.is_ready());
}

#[test]
fn unusable_durations_are_not_ready() {
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let m = MemoryMedia::loaded(d);
        assert_eq!(m.ready_duration(), None, "duration {d}");
    }
}

#[test]
fn load_metadata_makes_ready() {
    let mut m = MemoryMedia::pending();
    m.load_metadata(12.5);
    assert_eq!(m.ready_duration(), Some(12.5));
}

#[test]
fn seeks_are_counted() {
    let mut m = MemoryMedia::loaded(4.0);
    m.set_current_time(1.0);
    m.set_current_time(2.0);
    assert_eq!(m.current_time(), 2.0);
    assert_eq!(m.seeks(), 2);
}
