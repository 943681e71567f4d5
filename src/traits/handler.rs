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

use crate::message::{MessageAddress, Outbound, Signal};

/// The reaction contract a cell hosts: one signal in, at most one reply out.
///
/// A `MessageHandler` reacts to exactly one inbound signal at a time. The
/// hosting cell guarantees that no two `handle` invocations on the same
/// instance ever run concurrently (mailbox exclusivity), so implementations
/// need no interior locking. Taking `&mut self` leaves room for per-instance
/// state without weakening that guarantee.
///
/// The `sender` parameter is the address of whoever originated the signal
/// currently being handled. It is only borrowed for the duration of the
/// call; implementations must not stash it away. To answer the sender,
/// return [`Outbound::reply`] and let the cell route it.
///
/// Returning `None` means the signal produced no reply. Unrecognized signal
/// kinds are expected to be dropped this way, silently; they are defined
/// behavior, not an error.
pub trait MessageHandler: Send + 'static {
    /// Reacts to a single signal, optionally producing one reply addressed
    /// to `sender`.
    fn handle(&mut self, signal: Signal, sender: &MessageAddress) -> Option<Outbound>;
}
