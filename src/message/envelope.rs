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

use std::time::SystemTime;

use static_assertions::assert_impl_all;

use crate::message::message_address::MessageAddress;
use crate::message::signal::{Signal, SystemSignal};

/// The kinds of payload an envelope can carry over an inbox channel.
///
/// Application signals reach a handler; system signals are consumed by the
/// cell's message loop and never leave the delivery layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// An application signal destined for the recipient's handler.
    Signal(Signal),
    /// A control signal consumed by the recipient's message loop.
    System(SystemSignal),
}

/// Represents an envelope that carries a payload between endpoints.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// The payload contained in the envelope.
    pub(crate) payload: Payload,
    /// The time when the envelope was created.
    pub(crate) timestamp: SystemTime,
    /// The address of the originator, used for addressing any reply.
    pub(crate) reply_to: MessageAddress,
    /// The address the envelope is delivered to.
    pub(crate) recipient: MessageAddress,
}

impl Envelope {
    /// Creates a new envelope with the specified payload, reply address, and recipient.
    pub(crate) fn new(payload: Payload, reply_to: MessageAddress, recipient: MessageAddress) -> Self {
        let timestamp = SystemTime::now();
        Envelope {
            payload,
            timestamp,
            reply_to,
            recipient,
        }
    }
}

// Ensures that Envelope can cross task boundaries.
assert_impl_all!(Envelope: Send);
