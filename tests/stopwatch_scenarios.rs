use std::time::Duration;

use lap_clock::{format_elapsed, parse_elapsed, ElapsedTimeTracker, SharedTracker};
use pretty_assertions::assert_eq;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn start_stop_resume_scenario() {
    let mut tracker = ElapsedTimeTracker::new();
    assert_eq!(tracker.sample(), Duration::ZERO);

    tracker.start();
    advance(Duration::from_millis(500)).await;
    assert_eq!(tracker.sample(), Duration::from_millis(500));

    tracker.stop();
    advance(Duration::from_millis(500)).await;
    assert_eq!(tracker.sample(), Duration::from_millis(500));
    assert_eq!(tracker.sample(), Duration::from_millis(500));

    tracker.start();
    advance(Duration::from_millis(300)).await;
    assert_eq!(tracker.sample(), Duration::from_millis(800));
    assert_eq!(format_elapsed(tracker.sample()), "00:00.80");
}

#[tokio::test(start_paused = true)]
async fn elapsed_grows_while_running() {
    let mut tracker = ElapsedTimeTracker::new();
    tracker.start();

    let mut previous = tracker.sample();
    for _ in 0..10 {
        advance(Duration::from_millis(33)).await;
        tracker.start();
        let current = tracker.sample();
        assert!(current > previous);
        previous = current;
    }
    assert_eq!(previous, Duration::from_millis(330));
}

#[tokio::test(start_paused = true)]
async fn reset_then_start_counts_from_zero() {
    let mut tracker = ElapsedTimeTracker::new();
    tracker.start();
    advance(Duration::from_secs(42)).await;
    tracker.stop();
    tracker.reset();
    assert_eq!(tracker.sample(), Duration::ZERO);

    tracker.start();
    advance(Duration::from_millis(120)).await;
    tracker.stop();
    assert_eq!(format_elapsed(tracker.sample()), "00:00.12");
}

#[tokio::test(start_paused = true)]
async fn long_runs_keep_counting_minutes() {
    let shared = SharedTracker::new();
    shared.start().unwrap();
    advance(Duration::from_secs(75 * 60 + 3) + Duration::from_millis(400)).await;
    let snapshot = shared.stop().unwrap();
    assert_eq!(snapshot.display, "75:03.40");

    let parsed = parse_elapsed(&snapshot.display).unwrap();
    assert!((parsed.as_secs_f64() - 4503.4).abs() < 1e-6);
}
