use crate::Debouncer;

use std::sync::{Arc, Mutex};
use std::time::Duration;

fn recording_debouncer(delay_ms: u64) -> (Debouncer<String>, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let debouncer = Debouncer::new(Duration::from_millis(delay_ms), move |value: String| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push(value);
        }
    });

    (debouncer, seen)
}

#[tokio::test(start_paused = true)]
async fn test_burst_applies_once_with_last_value() {
    let (debouncer, seen) = recording_debouncer(500);

    for text in ["s", "sh", "shr", "shree"] {
        debouncer.push(text.to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(*seen.lock().unwrap(), vec!["shree".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_fires_before_quiet_period() {
    let (debouncer, seen) = recording_debouncer(500);

    debouncer.push("pune".to_string());
    tokio::time::sleep(Duration::from_millis(499)).await;

    assert!(seen.lock().unwrap().is_empty());
    assert!(debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_each_apply() {
    let (debouncer, seen) = recording_debouncer(500);

    debouncer.push("a".to_string());
    tokio::time::sleep(Duration::from_millis(600)).await;
    debouncer.push("b".to_string());
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_pending_value() {
    let (debouncer, seen) = recording_debouncer(500);

    debouncer.push("nashik".to_string());
    debouncer.cancel();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_drop_discards_pending_value() {
    let (debouncer, seen) = recording_debouncer(500);

    debouncer.push("satara".to_string());
    drop(debouncer);
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_quiet_period_lets_action_finish() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let debouncer = Debouncer::new(Duration::from_millis(50), move |value: String| {
        let sink = Arc::clone(&sink);
        async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            sink.lock().unwrap().push(value);
        }
    });

    debouncer.push("abc".to_string());
    tokio::time::sleep(Duration::from_millis(150)).await;
    debouncer.cancel();
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(*seen.lock().unwrap(), vec!["abc".to_string()]);
}
