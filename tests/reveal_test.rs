use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use batch_groups::{
    Group, GroupSession, MemoryStore, RevealScheduler, RevealSink, RevealState, Settings,
    TracingNotifier,
};

#[derive(Default)]
struct RecordingSink {
    labels: Mutex<Vec<String>>,
    finished: AtomicUsize,
}

impl RecordingSink {
    fn labels(&self) -> Vec<String> {
        self.labels.lock().unwrap().clone()
    }

    fn finished_count(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl RevealSink for RecordingSink {
    fn revealed(&self, group: &Group) {
        let label = group.members.first().cloned().unwrap_or_default();
        self.labels.lock().unwrap().push(label);
    }

    fn finished(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

fn groups(tag: &str, count: usize) -> Vec<Group> {
    (1..=count)
        .map(|i| Group {
            id: i as u32,
            members: vec![format!("{}{}", tag, i)],
        })
        .collect()
}

const INTERVAL: Duration = Duration::from_millis(800);

#[tokio::test]
async fn test_unstaged_start_completes_synchronously() {
    let mut scheduler = RevealScheduler::new();
    let sink = Arc::new(RecordingSink::default());

    scheduler.start(groups("A", 3), INTERVAL, false, sink.clone());

    assert_eq!(scheduler.state(), RevealState::Complete { total: 3 });
    assert_eq!(sink.labels(), vec!["A1", "A2", "A3"]);
    assert_eq!(sink.finished_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_staged_reveal_progresses_one_group_per_interval() {
    let mut scheduler = RevealScheduler::new();
    let sink = Arc::new(RecordingSink::default());
    let mut rx = scheduler.subscribe();

    let started = tokio::time::Instant::now();
    scheduler.start(groups("A", 4), INTERVAL, true, sink.clone());

    assert_eq!(
        scheduler.state(),
        RevealState::Revealing {
            revealed: 0,
            total: 4
        }
    );

    let mut seen = Vec::new();
    loop {
        rx.changed().await.unwrap();
        let state = *rx.borrow_and_update();
        seen.push(state);
        if matches!(state, RevealState::Complete { .. }) {
            break;
        }
    }

    // One group per interval means full disclosure takes at least 3 intervals.
    assert!(started.elapsed() >= INTERVAL * 3);
    assert_eq!(sink.labels(), vec!["A1", "A2", "A3", "A4"]);
    assert_eq!(sink.finished_count(), 1);
    for revealed in 1..=3 {
        assert!(seen.contains(&RevealState::Revealing { revealed, total: 4 }));
    }
    assert_eq!(seen.last(), Some(&RevealState::Complete { total: 4 }));
}

#[tokio::test(start_paused = true)]
async fn test_superseding_start_cancels_inflight_schedule() {
    let mut scheduler = RevealScheduler::new();
    let sink = Arc::new(RecordingSink::default());
    let mut rx = scheduler.subscribe();

    scheduler.start(groups("A", 4), INTERVAL, true, sink.clone());

    // Let the first schedule get two groups out, then supersede it.
    loop {
        rx.changed().await.unwrap();
        if *rx.borrow_and_update()
            == (RevealState::Revealing {
                revealed: 2,
                total: 4,
            })
        {
            break;
        }
    }
    scheduler.start(groups("B", 2), INTERVAL, true, sink.clone());

    loop {
        rx.changed().await.unwrap();
        if matches!(*rx.borrow_and_update(), RevealState::Complete { total: 2 }) {
            break;
        }
    }

    // Groups 3 and 4 of the superseded run are never revealed, and only the
    // new schedule signals completion.
    assert_eq!(sink.labels(), vec!["A1", "A2", "B1", "B2"]);
    assert_eq!(sink.finished_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_explicit_cancel_stops_reveals_and_resets_to_idle() {
    let mut scheduler = RevealScheduler::new();
    let sink = Arc::new(RecordingSink::default());
    let mut rx = scheduler.subscribe();

    scheduler.start(groups("A", 3), INTERVAL, true, sink.clone());
    loop {
        rx.changed().await.unwrap();
        if *rx.borrow_and_update()
            == (RevealState::Revealing {
                revealed: 1,
                total: 3,
            })
        {
            break;
        }
    }

    scheduler.cancel();
    assert_eq!(scheduler.state(), RevealState::Idle);

    // Give any stale timer a chance to fire; nothing further may arrive.
    tokio::time::sleep(INTERVAL * 5).await;
    assert_eq!(sink.labels(), vec!["A1"]);
    assert_eq!(sink.finished_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_session_staged_generation_runs_to_completion() {
    let settings = Settings {
        use_custom_names: true,
        custom_names: "Alice\nBob\nCharlie\nDiana".to_string(),
        group_size: 1,
        suspense: true,
        ..Settings::default()
    };
    let store = MemoryStore::with_settings(settings);
    let mut session = GroupSession::new(store, TracingNotifier).unwrap();
    let sink = Arc::new(RecordingSink::default());

    let started = tokio::time::Instant::now();
    let total = session.generate(sink.clone()).unwrap();
    assert_eq!(total, 4);
    assert_eq!(
        session.reveal_state(),
        RevealState::Revealing {
            revealed: 0,
            total: 4
        }
    );

    session.wait_for_reveal().await;

    assert_eq!(session.reveal_state(), RevealState::Complete { total: 4 });
    assert!(started.elapsed() >= Duration::from_millis(800) * 3);
    assert_eq!(sink.labels().len(), 4);
    assert_eq!(sink.finished_count(), 1);
}
