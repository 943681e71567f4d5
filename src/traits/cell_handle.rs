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
use async_trait::async_trait;
use tokio_util::task::TaskTracker;

use crate::message::{DeliveryError, MessageAddress, Signal};

/// Core trait defining interaction with a running cell.
///
/// Implemented by [`CellHandle`](crate::common::CellHandle), this is the
/// inbound half of the delivery boundary: dispatchers call [`deliver`]
/// with a signal and the sender's identity, and the implementation is
/// responsible for serializing what reaches the cell's handler.
#[async_trait]
pub trait CellHandleInterface: Send + Sync {
    /// Returns the [`MessageAddress`] of this cell, used by others to
    /// address signals (and replies) to it.
    fn reply_address(&self) -> MessageAddress;

    /// Returns a clone of the cell's unique identifier (`Ern`).
    fn id(&self) -> Ern;

    /// Returns the cell's root name as a String.
    fn name(&self) -> String;

    /// Returns a clone of the cell's task tracker.
    fn tracker(&self) -> TaskTracker;

    /// Enqueues `signal` into the cell's inbox on behalf of `from`.
    ///
    /// The sender identity travels with the signal, so the handler can
    /// address a reply without the caller embedding an address in the
    /// payload. Waits for inbox capacity when the channel is full.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the cell has stopped
    /// (`ChannelClosed`) or is shutting down (`Cancelled`). Signal kinds
    /// the handler does not recognize are not an error at this boundary.
    async fn deliver(&self, signal: Signal, from: &MessageAddress) -> Result<(), DeliveryError>;

    /// Initiates a graceful shutdown of the cell and waits for its task
    /// to complete.
    ///
    /// Signals queued before the shutdown request are still handled. The
    /// call is idempotent; stopping an already-stopped cell returns
    /// successfully.
    async fn stop(&self) -> anyhow::Result<()>;
}
