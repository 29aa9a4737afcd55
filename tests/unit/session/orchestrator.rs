use super::*;
use crate::media::handle::MemoryMedia;
use crate::output::sink::RecordingSink;

const IDS: [&str; 4] = ["seq1", "seq2", "seq3", "seq4"];

fn orchestrator(table: RangeTable) -> TimelineOrchestrator<MemoryMedia> {
    TimelineOrchestrator::new(&table, HostCapabilities::default(), 1000.0).unwrap()
}

fn loaded(d: f64) -> Vec<(String, MemoryMedia)> {
    IDS.iter()
        .map(|id| (id.to_string(), MemoryMedia::loaded(d)))
        .collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn ready_handles_are_configured_on_mount() {
    let mut o = orchestrator(RangeTable::constrained());
    let report = o.mount(loaded(10.0)).unwrap();
    assert_eq!(report.configured, IDS.map(String::from).to_vec());
    assert!(report.subscriptions.is_empty());
    assert!(report.missing.is_empty());
    assert_eq!(o.phase(), Phase::Active);
    for id in IDS {
        let h = o.handle(id).unwrap();
        assert_eq!(h.current_time(), 0.5);
        assert_eq!(h.seeks(), 1);
        assert_eq!(
            o.segment_status(id),
            Some(SegmentStatus::Ready { duration: 10.0 })
        );
    }
}

#[test]
fn frame_before_mount_is_dropped() {
    let mut other = orchestrator(RangeTable::constrained());
    let token = other.mount(loaded(10.0)).unwrap().frame;
    let mut o = orchestrator(RangeTable::constrained());
    assert!(o.frame(token, 0.0).is_none());
}

#[test]
fn frame_scrubs_and_slides() {
    let mut o = orchestrator(RangeTable::constrained());
    let token = o.mount(loaded(10.0)).unwrap().frame;

    o.on_native_scroll(0.12 * 29_000.0);
    let w = o.frame(token, 0.0).unwrap().clone();
    assert!(approx(w.progress, 0.12));
    assert!(approx(w.segment_time("seq1").unwrap(), 5.0));
    assert!(approx(o.handle("seq1").unwrap().current_time(), 5.0));
    assert_eq!(w.layer_offset("layer1"), Some(0.0));

    o.on_native_scroll(0.21 * 29_000.0);
    let w = o.frame(token, 0.1).unwrap();
    assert!((w.layer_offset("layer1").unwrap() + 50.0).abs() < 1e-6);
    assert!((w.layer_offset("layer2").unwrap() - 50.0).abs() < 1e-6);
}

#[test]
fn unchanged_time_is_not_reseeked() {
    let mut o = orchestrator(RangeTable::constrained());
    let token = o.mount(loaded(10.0)).unwrap().frame;
    for i in 0..5 {
        let w = o.frame(token, i as f64 / 60.0).unwrap();
        assert_eq!(w.segment_time("seq1"), Some(0.5));
    }
    assert_eq!(o.handle("seq1").unwrap().seeks(), 1);
}

#[test]
fn deferred_metadata_configures_later() {
    let mut o = orchestrator(RangeTable::constrained());
    let mut handles = loaded(10.0);
    handles[1].1 = MemoryMedia::pending();
    let report = o.mount(handles).unwrap();
    assert_eq!(report.subscriptions.len(), 1);
    let (id, sub) = report.subscriptions[0].clone();
    assert_eq!(id, "seq2");
    assert_eq!(sub.segment_index(), 1);
    assert_eq!(o.phase(), Phase::WaitingForMetadata);
    assert_eq!(o.segment_status("seq2"), Some(SegmentStatus::Waiting));

    let w = o.frame(report.frame, 0.0).unwrap();
    assert_eq!(w.segment_time("seq2"), None);
    assert_eq!(w.segments.len(), 3);
    assert_eq!(w.layers.len(), 4);

    o.handle_mut("seq2").unwrap().load_metadata(8.0);
    assert!(o.metadata_ready(sub));
    assert_eq!(o.phase(), Phase::Active);
    assert_eq!(o.handle("seq2").unwrap().current_time(), 0.5);
    assert!(!o.metadata_ready(sub));

    let w = o.frame(report.frame, 0.1).unwrap();
    assert_eq!(w.segment_time("seq2"), Some(0.5));
}

#[test]
fn readiness_without_duration_keeps_waiting() {
    let mut o = orchestrator(RangeTable::constrained());
    let mut handles = loaded(10.0);
    handles[3].1 = MemoryMedia::pending();
    let report = o.mount(handles).unwrap();
    let sub = report.subscriptions[0].1;

    assert!(!o.metadata_ready(sub));
    assert_eq!(o.segment_status("seq4"), Some(SegmentStatus::Waiting));
    assert_eq!(o.handle("seq4").unwrap().seeks(), 0);

    o.handle_mut("seq4").unwrap().load_metadata(3.0);
    assert!(o.metadata_ready(sub));
}

#[test]
fn missing_and_unknown_handles_are_tolerated() {
    let mut o = orchestrator(RangeTable::desktop());
    let handles = vec![
        ("seq1".to_string(), MemoryMedia::loaded(10.0)),
        ("seq3".to_string(), MemoryMedia::loaded(10.0)),
        ("intro".to_string(), MemoryMedia::loaded(10.0)),
    ];
    let report = o.mount(handles).unwrap();
    assert_eq!(report.missing, vec!["seq2".to_string(), "seq4".to_string()]);
    assert_eq!(report.configured, vec!["seq1".to_string(), "seq3".to_string()]);
    assert_eq!(o.phase(), Phase::Active);
    for id in ["seq2", "seq4"] {
        assert_eq!(o.segment_status(id), Some(SegmentStatus::Unbound));
        assert!(o.handle(id).is_none());
    }
    for id in ["seq1", "seq3"] {
        assert_eq!(
            o.segment_status(id),
            Some(SegmentStatus::Ready { duration: 10.0 })
        );
        assert_eq!(o.handle(id).unwrap().current_time(), 0.5);
    }

    let w = o.frame(report.frame, 0.0).unwrap();
    assert_eq!(w.segments.len(), 2);
    assert_eq!(w.segment_time("seq1"), Some(0.5));
    assert_eq!(w.segment_time("seq2"), None);
    assert_eq!(w.layers.len(), 4);
    assert_eq!(w.texts.len(), 10);
}

#[test]
fn second_mount_is_a_lifecycle_error() {
    let mut o = orchestrator(RangeTable::constrained());
    o.mount(loaded(10.0)).unwrap();
    let err = o.mount(loaded(10.0)).unwrap_err();
    assert!(matches!(err, ReelError::Lifecycle(_)));
}

#[test]
fn teardown_silences_everything() {
    let mut o = orchestrator(RangeTable::constrained());
    let mut handles = loaded(10.0);
    handles[2].1 = MemoryMedia::pending();
    let report = o.mount(handles).unwrap();
    let sub = report.subscriptions[0].1;
    o.frame(report.frame, 0.0).unwrap();

    o.teardown();
    assert_eq!(o.phase(), Phase::TornDown);
    assert!(o.signal().is_destroyed());
    assert_eq!(o.segment_status("seq3"), Some(SegmentStatus::Unbound));

    let seeks: Vec<u64> = IDS.iter().map(|id| o.handle(id).unwrap().seeks()).collect();
    o.on_native_scroll(10_000.0);
    assert!(o.frame(report.frame, 1.0).is_none());
    o.handle_mut("seq3").unwrap().load_metadata(6.0);
    assert!(!o.metadata_ready(sub));
    let after: Vec<u64> = IDS.iter().map(|id| o.handle(id).unwrap().seeks()).collect();
    assert_eq!(seeks, after);

    o.teardown();
    assert_eq!(o.phase(), Phase::TornDown);
    assert!(o.mount(loaded(10.0)).is_err());
}

#[test]
fn teardown_before_mount_is_safe() {
    let mut o = orchestrator(RangeTable::desktop());
    o.teardown();
    assert_eq!(o.phase(), Phase::TornDown);
}

#[test]
fn out_of_order_frames_are_dropped() {
    let mut o = orchestrator(RangeTable::constrained());
    let token = o.mount(loaded(10.0)).unwrap().frame;
    assert!(o.frame(token, 1.0).is_some());
    o.on_native_scroll(0.12 * 29_000.0);
    assert!(o.frame(token, 0.5).is_none());
    assert_eq!(o.handle("seq1").unwrap().current_time(), 0.5);
}

#[test]
fn scrub_lag_follows_within_window() {
    let mut o = orchestrator(RangeTable::desktop());
    let token = o.mount(loaded(10.0)).unwrap().frame;
    o.on_native_scroll(0.09 * 39_000.0);

    let mut prev = o.frame(token, 0.0).unwrap().segment_time("seq1").unwrap();
    assert_eq!(prev, 0.5);
    for i in 1..=600 {
        let t = o
            .frame(token, i as f64 / 60.0)
            .unwrap()
            .segment_time("seq1")
            .unwrap();
        assert!(t >= prev);
        assert!((0.5..=9.5).contains(&t));
        if i == 1 {
            assert!(t < 5.0);
        }
        prev = t;
    }
    assert!(approx(prev, 5.0));
    assert_eq!(o.handle("seq1").unwrap().current_time(), prev);
}

#[test]
fn degenerate_trim_holds_first_frame() {
    let mut o = orchestrator(RangeTable::constrained());
    let token = o.mount(loaded(0.8)).unwrap().frame;
    o.on_native_scroll(0.12 * 29_000.0);
    let w = o.frame(token, 0.0).unwrap();
    assert_eq!(w.segment_time("seq1"), Some(0.5));
}

#[test]
fn frame_into_feeds_the_sink() {
    let mut o = orchestrator(RangeTable::constrained());
    let token = o.mount(loaded(10.0)).unwrap().frame;
    let mut sink = RecordingSink::new();
    assert!(o.frame_into(token, 0.0, &mut sink).unwrap());
    assert!(o.frame_into(token, 0.016, &mut sink).unwrap());
    assert!(!o.frame_into(token, 0.010, &mut sink).unwrap());
    o.teardown();
    assert!(!o.frame_into(token, 1.0, &mut sink).unwrap());
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.last(), Some(o.last_writes()));
}

#[test]
fn resize_keeps_relative_progress() {
    let mut o = orchestrator(RangeTable::constrained());
    let token = o.mount(loaded(10.0)).unwrap().frame;
    o.on_native_scroll(0.5 * 29_000.0);
    o.frame(token, 0.0).unwrap();
    o.resize(800.0).unwrap();
    let w = o.frame(token, 0.1).unwrap();
    assert!(approx(w.progress, 0.5));
    assert!(o.resize(0.0).is_err());
}

#[test]
fn subscriptions_and_tokens_do_not_cross_orchestrators() {
    let pending = || {
        let mut handles = loaded(10.0);
        handles[1].1 = MemoryMedia::pending();
        handles
    };
    let mut a = orchestrator(RangeTable::constrained());
    let mut b = orchestrator(RangeTable::constrained());
    let ra = a.mount(pending()).unwrap();
    let rb = b.mount(pending()).unwrap();
    let sub_a = ra.subscriptions[0].1;
    assert_ne!(sub_a, rb.subscriptions[0].1);

    b.handle_mut("seq2").unwrap().load_metadata(8.0);
    assert!(!b.metadata_ready(sub_a));
    assert_eq!(b.segment_status("seq2"), Some(SegmentStatus::Waiting));
    assert!(b.frame(ra.frame, 0.0).is_none());

    assert!(b.metadata_ready(rb.subscriptions[0].1));
    assert!(b.frame(rb.frame, 0.0).is_some());
}
