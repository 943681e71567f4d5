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

use acton_ern::Ern;
use tokio::sync::mpsc::{self, Receiver};

use crate::common::config::CONFIG;
use crate::message::{Envelope, MessageAddress, Payload, Signal};

/// A caller-owned identity with a receive endpoint for replies.
///
/// Cells are not the only endpoints in a system: whoever delivers signals
/// to a cell needs an identity of its own for the cell to answer. An
/// `Inbox` mints such an identity: a named channel whose
/// [`address`](Inbox::address) is passed as the `from` argument of
/// `deliver`, and whose [`recv`](Inbox::recv) yields whatever gets routed
/// back.
///
/// Identities minted here are owned by the caller, never by a handler;
/// dropping the `Inbox` simply makes future replies to it undeliverable.
#[derive(Debug)]
pub struct Inbox {
    address: MessageAddress,
    receiver: Receiver<Envelope>,
}

impl Inbox {
    /// Creates a named inbox with the default channel capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid root identifier.
    pub fn new(name: impl Into<String>) -> anyhow::Result<Self> {
        let (outbox, receiver) = mpsc::channel(CONFIG.limits.cell_inbox_capacity);
        let id = Ern::with_root(name.into())?;
        Ok(Self {
            address: MessageAddress::new(outbox, id),
            receiver,
        })
    }

    /// Returns the address other endpoints use to reach this inbox.
    #[must_use]
    pub fn address(&self) -> MessageAddress {
        self.address.clone()
    }

    /// Waits for the next application signal routed to this inbox.
    ///
    /// Control-plane payloads are skipped. The inbox keeps its own
    /// address alive, so this pends until something is routed here;
    /// pair it with a timeout when absence is the expected outcome.
    pub async fn recv(&mut self) -> Option<(Signal, MessageAddress)> {
        while let Some(envelope) = self.receiver.recv().await {
            if let Payload::Signal(signal) = envelope.payload {
                return Some((signal, envelope.reply_to));
            }
        }
        None
    }

    /// Returns the next already-queued application signal, if any.
    ///
    /// Never waits; useful for asserting that nothing was delivered.
    pub fn try_recv(&mut self) -> Option<(Signal, MessageAddress)> {
        while let Ok(envelope) = self.receiver.try_recv() {
            if let Payload::Signal(signal) = envelope.payload {
                return Some((signal, envelope.reply_to));
            }
        }
        None
    }
}
