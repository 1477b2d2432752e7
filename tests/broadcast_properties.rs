//! Property tests for registry membership and fan-out accounting.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use tokio::sync::mpsc;

use live_notes::adapters::{NoteBroadcaster, SubscriberConnection};
use live_notes::domain::foundation::NoteId;
use live_notes::domain::note::Note;
use live_notes::domain::notification::{ChangeAction, ChangeEvent};
use live_notes::ports::{ChangeNotifier, NoteSubscriber};

#[derive(Debug, Clone)]
enum Op {
    /// Connect a fresh subscriber.
    Connect,
    /// Disconnect the n-th subscriber ever connected (modulo count).
    Disconnect(usize),
    /// Close the n-th subscriber's transport without unregistering it.
    Close(usize),
    /// Drop the n-th subscriber's receiving end.
    DropReceiver(usize),
    /// Broadcast one change.
    Broadcast,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Connect),
        1 => any::<usize>().prop_map(Op::Disconnect),
        1 => any::<usize>().prop_map(Op::Close),
        1 => any::<usize>().prop_map(Op::DropReceiver),
        2 => Just(Op::Broadcast),
    ]
}

struct Subscriber {
    connection: Arc<SubscriberConnection>,
    receiver: Option<mpsc::Receiver<Arc<str>>>,
    /// Whether a broadcast should still reach it.
    healthy: bool,
    registered: bool,
    expected: Vec<i64>,
}

fn note(id: i64) -> Note {
    Note {
        id: NoteId::new(id),
        title: Some(format!("note {}", id)),
        description: None,
        done: false,
    }
}

async fn run(ops: Vec<Op>) -> Result<(), TestCaseError> {
    // Generous capacity so only deliberate failures cause evictions.
    let broadcaster = NoteBroadcaster::new(Duration::from_millis(200));
    let mut subscribers: Vec<Subscriber> = Vec::new();
    let mut next_note = 1;

    for op in ops {
        match op {
            Op::Connect => {
                let (connection, receiver) = SubscriberConnection::new(64);
                connection.open().unwrap();
                let connection = Arc::new(connection);
                prop_assert!(broadcaster.connect(connection.clone()).await);
                subscribers.push(Subscriber {
                    connection,
                    receiver: Some(receiver),
                    healthy: true,
                    registered: true,
                    expected: Vec::new(),
                });
            }
            Op::Disconnect(n) if !subscribers.is_empty() => {
                let i = n % subscribers.len();
                let sub = &mut subscribers[i];
                let removed = broadcaster.disconnect(sub.connection.as_ref()).await;
                prop_assert_eq!(removed, sub.registered);
                sub.registered = false;
                sub.healthy = false;
            }
            Op::Close(n) if !subscribers.is_empty() => {
                let i = n % subscribers.len();
                subscribers[i].connection.close();
                subscribers[i].healthy = false;
            }
            Op::DropReceiver(n) if !subscribers.is_empty() => {
                let i = n % subscribers.len();
                subscribers[i].receiver = None;
                subscribers[i].healthy = false;
            }
            Op::Broadcast => {
                let id = next_note;
                next_note += 1;
                let report = broadcaster
                    .broadcast(ChangeAction::Create, &note(id))
                    .await
                    .unwrap();

                let registered = subscribers.iter().filter(|s| s.registered).count();
                let healthy = subscribers
                    .iter()
                    .filter(|s| s.registered && s.healthy)
                    .count();
                prop_assert_eq!(report.attempted, registered);
                prop_assert_eq!(report.delivered, healthy);
                prop_assert_eq!(report.evicted, registered - healthy);

                for sub in subscribers.iter_mut() {
                    if sub.registered && sub.healthy {
                        sub.expected.push(id);
                    }
                    if !sub.healthy {
                        sub.registered = false;
                    }
                }
            }
            _ => {}
        }

        let registered = subscribers.iter().filter(|s| s.registered).count();
        prop_assert_eq!(broadcaster.subscriber_count().await, registered);
    }

    for sub in subscribers.iter_mut() {
        prop_assert_eq!(
            broadcaster.registry().contains(&sub.connection.id()).await,
            sub.registered
        );
        if let Some(receiver) = sub.receiver.as_mut() {
            let mut seen = Vec::new();
            while let Ok(payload) = receiver.try_recv() {
                seen.push(ChangeEvent::decode(&payload).unwrap().note().id.as_i64());
            }
            prop_assert_eq!(&seen, &sub.expected);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn registry_and_reports_track_subscriber_health(ops in prop::collection::vec(op(), 0..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        runtime.block_on(run(ops))?;
    }
}
