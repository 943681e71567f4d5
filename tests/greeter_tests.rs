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

use tracing::*;

use hail::prelude::*;

use crate::setup::initialize_tracing;

mod setup;

/// Tests the whole greet/acknowledge round trip for a single sender.
///
/// **Scenario:**
/// 1. Launch runtime and spawn a greeting cell over a capturing sink.
/// 2. Deliver `Signal::Greet` on behalf of caller `a`.
/// 3. Await the reply in `a`'s inbox.
///
/// **Verification:**
/// - The sink received exactly one greeting line.
/// - `a` received exactly one `Signal::Done`, sent by the greeting cell.
#[tokio::test]
async fn test_greet_round_trip() -> anyhow::Result<()> {
    initialize_tracing();
    let mut runtime = HailApp::launch_async().await;
    let sink = MemorySink::new();
    let greeter = runtime.spawn_greeter(Arc::new(sink.clone())).await;

    let mut a = Inbox::new("a")?;
    greeter.deliver(Signal::Greet, &a.address()).await?;

    let (ack, from) = a.recv().await.expect("acknowledgement expected");
    info!(ack = ?ack, "Received acknowledgement");
    assert_eq!(ack, Signal::Done);
    assert_eq!(from, greeter.reply_address());
    assert_eq!(sink.lines(), vec![GREETING.to_string()]);

    runtime.shutdown_all().await
}

/// Tests that consecutive triggers from different senders are each
/// acknowledged to their own sender.
///
/// **Scenario:**
/// 1. Deliver a greet on behalf of `a`, then immediately one on behalf of `b`.
///
/// **Verification:**
/// - The sink received two greeting lines.
/// - `a` and `b` each received exactly one acknowledgement; neither saw
///   the other's.
#[tokio::test]
async fn test_each_sender_gets_own_acknowledgement() -> anyhow::Result<()> {
    initialize_tracing();
    let mut runtime = HailApp::launch_async().await;
    let sink = MemorySink::new();
    let greeter = runtime.spawn_greeter(Arc::new(sink.clone())).await;

    let mut a = Inbox::new("a")?;
    let mut b = Inbox::new("b")?;
    greeter.deliver(Signal::Greet, &a.address()).await?;
    greeter.deliver(Signal::Greet, &b.address()).await?;

    let (ack_a, _) = a.recv().await.expect("acknowledgement for a");
    let (ack_b, _) = b.recv().await.expect("acknowledgement for b");
    assert_eq!(ack_a, Signal::Done);
    assert_eq!(ack_b, Signal::Done);

    greeter.stop().await?;
    assert_eq!(sink.len(), 2);
    // Exactly one acknowledgement each; the cell has stopped, so nothing
    // further can arrive.
    assert!(a.try_recv().is_none());
    assert!(b.try_recv().is_none());

    runtime.shutdown_all().await
}

/// Tests that an unrecognized signal produces neither output nor reply.
///
/// **Scenario:**
/// 1. Deliver `Signal::Done` (not a trigger) on behalf of `c`.
/// 2. Stop the cell, which drains everything queued before the stop.
///
/// **Verification:**
/// - The sink is empty and `c`'s inbox is empty.
#[tokio::test]
async fn test_unrecognized_signal_is_silently_dropped() -> anyhow::Result<()> {
    initialize_tracing();
    let mut runtime = HailApp::launch_async().await;
    let sink = MemorySink::new();
    let greeter = runtime.spawn_greeter(Arc::new(sink.clone())).await;

    let mut c = Inbox::new("c")?;
    greeter.deliver(Signal::Done, &c.address()).await?;

    // Stopping only returns once the queued signal has been handled.
    greeter.stop().await?;

    assert!(sink.is_empty(), "dropped signal must not touch the sink");
    assert!(c.try_recv().is_none(), "dropped signal must not be answered");

    runtime.shutdown_all().await
}

/// Tests repetition without cross-call leakage: N triggers yield N
/// acknowledgements, each addressed to the sender of its own trigger.
#[tokio::test]
async fn test_repeated_triggers_are_independent() -> anyhow::Result<()> {
    initialize_tracing();
    const ROUNDS: usize = 5;

    let mut runtime = HailApp::launch_async().await;
    let sink = MemorySink::new();
    let greeter = runtime.spawn_greeter(Arc::new(sink.clone())).await;

    let mut caller = Inbox::new("caller")?;
    for _ in 0..ROUNDS {
        greeter.deliver(Signal::Greet, &caller.address()).await?;
    }

    for round in 0..ROUNDS {
        let (ack, _) = caller.recv().await.expect("acknowledgement expected");
        assert_eq!(ack, Signal::Done, "round {round} must be acknowledged");
    }

    greeter.stop().await?;
    assert_eq!(sink.len(), ROUNDS);
    assert!(caller.try_recv().is_none(), "no extra acknowledgements");

    runtime.shutdown_all().await
}

/// Tests that a custom handler slot behaves like the stock one at the
/// cell boundary: a cell hosts whatever implements the handler contract.
#[tokio::test]
async fn test_custom_handler_is_hosted_unchanged() -> anyhow::Result<()> {
    initialize_tracing();

    /// Counts triggers and answers every signal kind it recognizes.
    #[derive(Debug, Default)]
    struct CountingHandler {
        seen: usize,
    }

    impl MessageHandler for CountingHandler {
        fn handle(&mut self, signal: Signal, sender: &MessageAddress) -> Option<Outbound> {
            match signal {
                Signal::Greet => {
                    self.seen += 1;
                    Some(Outbound::reply(sender, Signal::Done))
                }
                Signal::Done => None,
            }
        }
    }

    let mut runtime = HailApp::launch_async().await;
    let handle = runtime
        .new_cell_with_name(CountingHandler::default(), "counter".to_string())
        .start()
        .await;

    let mut caller = Inbox::new("caller")?;
    handle.deliver(Signal::Greet, &caller.address()).await?;
    let (ack, _) = caller.recv().await.expect("acknowledgement expected");
    assert_eq!(ack, Signal::Done);

    runtime.shutdown_all().await
}
