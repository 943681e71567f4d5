/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

#![allow(dead_code)]

use std::sync::Arc;

use hail::prelude::*;

use crate::setup::initialize_tracing;

mod setup;

const SENDERS: usize = 4;
const TRIGGERS_PER_SENDER: usize = 50;

/// Tests mailbox exclusivity under concurrent delivery.
///
/// **Scenario:**
/// 1. Spawn one greeting cell over a capturing sink.
/// 2. Launch several tasks, each with its own inbox identity, delivering
///    a burst of triggers concurrently through clones of the same handle.
/// 3. Each task awaits one acknowledgement per trigger it sent.
///
/// **Verification:**
/// - Every sender receives exactly its own number of acknowledgements.
/// - The sink holds one intact greeting line per trigger overall; no two
///   effects interleaved within a line, and none went missing.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_senders_observe_serialized_effects() -> anyhow::Result<()> {
    initialize_tracing();
    let mut runtime = HailApp::launch_async().await;
    let sink = MemorySink::new();
    let greeter = runtime.spawn_greeter(Arc::new(sink.clone())).await;

    let mut workers = Vec::new();
    for sender_index in 0..SENDERS {
        let handle = greeter.clone();
        workers.push(tokio::spawn(async move {
            let mut inbox =
                Inbox::new(format!("sender{sender_index}")).expect("valid inbox name");
            for _ in 0..TRIGGERS_PER_SENDER {
                handle
                    .deliver(Signal::Greet, &inbox.address())
                    .await
                    .expect("delivery must succeed while the cell runs");
            }
            let mut acknowledged = 0;
            while acknowledged < TRIGGERS_PER_SENDER {
                let (ack, _) = inbox.recv().await.expect("acknowledgement expected");
                assert_eq!(ack, Signal::Done);
                acknowledged += 1;
            }
            acknowledged
        }));
    }

    let mut total_acknowledged = 0;
    for worker in workers {
        total_acknowledged += worker.await?;
    }
    assert_eq!(total_acknowledged, SENDERS * TRIGGERS_PER_SENDER);

    greeter.stop().await?;

    let lines = sink.lines();
    assert_eq!(lines.len(), SENDERS * TRIGGERS_PER_SENDER);
    assert!(
        lines.iter().all(|line| line == GREETING),
        "every captured line must be intact"
    );

    runtime.shutdown_all().await
}

/// Tests that a slow burst from one sender does not starve another: both
/// senders' acknowledgements arrive, in inbox order per sender.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_interleaved_senders_each_complete() -> anyhow::Result<()> {
    initialize_tracing();
    let mut runtime = HailApp::launch_async().await;
    let sink = MemorySink::new();
    let greeter = runtime.spawn_greeter(Arc::new(sink.clone())).await;

    let mut a = Inbox::new("a")?;
    let mut b = Inbox::new("b")?;
    for _ in 0..10 {
        greeter.deliver(Signal::Greet, &a.address()).await?;
        greeter.deliver(Signal::Greet, &b.address()).await?;
    }

    for _ in 0..10 {
        let (ack, _) = a.recv().await.expect("acknowledgement for a");
        assert_eq!(ack, Signal::Done);
        let (ack, _) = b.recv().await.expect("acknowledgement for b");
        assert_eq!(ack, Signal::Done);
    }

    greeter.stop().await?;
    assert_eq!(sink.len(), 20);

    runtime.shutdown_all().await
}
