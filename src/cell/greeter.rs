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

use tracing::trace;

use crate::common::SinkRef;
use crate::message::{MessageAddress, Outbound, Signal};
use crate::traits::MessageHandler;

/// The line a greeting cell emits for every trigger it receives.
pub const GREETING: &str = "Hello World!";

/// The stock handler: greet on request, acknowledge the requester.
///
/// On [`Signal::Greet`] it writes [`GREETING`] to its sink and replies
/// [`Signal::Done`] to whoever asked. Every other signal kind is dropped
/// without effect or reply.
///
/// The handler keeps no state across signals beyond the sink reference,
/// so repeated triggers are independent: N greets from N different
/// senders yield N lines and N acknowledgements, each addressed to the
/// sender of its own trigger.
#[derive(Debug)]
pub struct Greeter {
    sink: SinkRef,
}

impl Greeter {
    /// Creates a greeter writing to `sink`.
    #[must_use]
    pub fn new(sink: SinkRef) -> Self {
        Self { sink }
    }
}

impl MessageHandler for Greeter {
    fn handle(&mut self, signal: Signal, sender: &MessageAddress) -> Option<Outbound> {
        match signal {
            Signal::Greet => {
                self.sink.write_line(GREETING);
                Some(Outbound::reply(sender, Signal::Done))
            }
            Signal::Done => {
                trace!(sender = %sender.sender, "Ignoring acknowledgement signal");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::common::{Inbox, MemorySink};

    #[tokio::test]
    async fn test_greet_produces_line_and_ack() {
        let sink = MemorySink::new();
        let mut greeter = Greeter::new(Arc::new(sink.clone()));
        let caller = Inbox::new("caller").expect("valid inbox name");

        let outbound = greeter.handle(Signal::Greet, &caller.address());

        let outbound = outbound.expect("greet must be acknowledged");
        assert_eq!(outbound.signal(), Signal::Done);
        assert_eq!(outbound.recipient(), &caller.address());
        assert_eq!(sink.lines(), vec![GREETING.to_string()]);
    }

    #[tokio::test]
    async fn test_unrecognized_signal_is_dropped() {
        let sink = MemorySink::new();
        let mut greeter = Greeter::new(Arc::new(sink.clone()));
        let caller = Inbox::new("caller").expect("valid inbox name");

        let outbound = greeter.handle(Signal::Done, &caller.address());

        assert!(outbound.is_none());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_each_ack_targets_its_own_sender() {
        let sink = MemorySink::new();
        let mut greeter = Greeter::new(Arc::new(sink.clone()));
        let first = Inbox::new("first").expect("valid inbox name");
        let second = Inbox::new("second").expect("valid inbox name");

        let ack_first = greeter
            .handle(Signal::Greet, &first.address())
            .expect("ack for first");
        let ack_second = greeter
            .handle(Signal::Greet, &second.address())
            .expect("ack for second");

        assert_eq!(ack_first.recipient(), &first.address());
        assert_eq!(ack_second.recipient(), &second.address());
        assert_eq!(sink.len(), 2);
    }
}
