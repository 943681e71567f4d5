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
use std::hash::{Hash, Hasher};

use acton_ern::Ern;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::common::CellSender;
use crate::message::{
    DeliveryError, Envelope, MessageAddress, Payload, Signal, SystemSignal,
};
use crate::traits::CellHandleInterface;

/// A clonable handle for interacting with a cell.
///
/// `CellHandle` provides the mechanism for communicating with and managing
/// a cell from outside its own execution context. It encapsulates what is
/// needed to enqueue signals into the cell's inbox (`outbox`), identify the
/// cell (`id`), and manage its lifecycle (`stop`).
///
/// Handles can be cloned freely, allowing multiple parts of the system to
/// hold references to the same cell. The serialization guarantee lives
/// behind the handle: however many clones deliver concurrently, the cell
/// drains its inbox from a single task, so no two signals are ever handled
/// at once.
///
/// Equality and hashing are based solely on the cell's unique identifier.
#[derive(Debug, Clone)]
pub struct CellHandle {
    /// The unique identifier (`Ern`) for the cell this handle refers to.
    pub(crate) id: Ern,
    /// The sender part of the MPSC channel connected to the cell's inbox.
    pub(crate) outbox: CellSender,
    /// Tracks the cell's message loop task.
    tracker: TaskTracker,
    /// The cell's cancellation token (clone).
    pub(crate) cancellation_token: CancellationToken,
}

impl CellHandle {
    /// Crate-internal constructor wiring a handle to a freshly created inbox.
    pub(crate) fn new(
        id: Ern,
        outbox: CellSender,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            id,
            outbox,
            tracker: TaskTracker::new(),
            cancellation_token,
        }
    }
}

impl Default for CellHandle {
    /// Creates a default, placeholder `CellHandle`.
    ///
    /// This handle is initialized with a default `Ern` and a closed channel.
    /// It's primarily used as a starting point before being properly
    /// configured when a cell is created; signals cannot be delivered
    /// through it.
    fn default() -> Self {
        use crate::common::config::CONFIG;

        let dummy_channel_size = CONFIG.limits.dummy_channel_size;
        let (outbox, _) = mpsc::channel(dummy_channel_size);
        Self {
            id: Ern::default(),
            outbox,
            tracker: TaskTracker::new(),
            cancellation_token: CancellationToken::new(),
        }
    }
}

/// Implements equality comparison based on the cell's unique ID (`Ern`).
impl PartialEq for CellHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CellHandle {}

impl Hash for CellHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Implements the core interface for interacting with a cell.
#[async_trait]
impl CellHandleInterface for CellHandle {
    /// Returns the [`MessageAddress`] for this cell, used for addressing
    /// signals and replies to it.
    #[inline]
    fn reply_address(&self) -> MessageAddress {
        MessageAddress::new(self.outbox.clone(), self.id.clone())
    }

    /// Returns a clone of the cell's unique identifier (`Ern`).
    #[inline]
    fn id(&self) -> Ern {
        self.id.clone()
    }

    /// Returns the cell's root name as a String.
    #[inline]
    fn name(&self) -> String {
        self.id.root.to_string()
    }

    /// Returns a clone of the cell's task tracker.
    #[inline]
    fn tracker(&self) -> TaskTracker {
        self.tracker.clone()
    }

    /// Enqueues `signal` into the cell's inbox on behalf of `from`.
    ///
    /// Uses a non-blocking `try_reserve()` fast path when the inbox has
    /// capacity, and falls back to waiting for capacity when it is full.
    /// The calls made through this method are serialized by the inbox
    /// itself; nothing here ever runs handler code.
    #[instrument(skip(self, from), fields(cell = %self.id, sender = %from.sender))]
    async fn deliver(&self, signal: Signal, from: &MessageAddress) -> Result<(), DeliveryError> {
        if self.cancellation_token.is_cancelled() {
            return Err(DeliveryError::Cancelled);
        }

        let envelope = Envelope::new(Payload::Signal(signal), from.clone(), self.reply_address());

        match self.outbox.try_reserve() {
            Ok(permit) => {
                permit.send(envelope);
                return Ok(());
            }
            Err(mpsc::error::TrySendError::Closed(())) => {
                return Err(DeliveryError::ChannelClosed);
            }
            Err(mpsc::error::TrySendError::Full(())) => {
                // Inbox is full, fall through to slow path
            }
        }

        tokio::select! {
            () = self.cancellation_token.cancelled() => Err(DeliveryError::Cancelled),
            permit_result = self.outbox.reserve() => {
                match permit_result {
                    Ok(permit) => {
                        permit.send(envelope);
                        Ok(())
                    }
                    Err(_) => Err(DeliveryError::ChannelClosed),
                }
            }
        }
    }

    /// Sends a [`SystemSignal::Terminate`] to the cell and waits for its
    /// task to complete.
    ///
    /// The terminate signal travels through the inbox, so everything
    /// queued before it is still handled before the loop stops.
    #[instrument(skip(self), fields(cell = %self.id))]
    async fn stop(&self) -> anyhow::Result<()> {
        let tracker = self.tracker();

        trace!("Sending Terminate signal");
        let envelope = Envelope::new(
            Payload::System(SystemSignal::Terminate),
            self.reply_address(),
            self.reply_address(),
        );
        if self.outbox.send(envelope).await.is_err() {
            trace!("Inbox already closed, cell is stopping or stopped");
        }

        tracker.wait().await;

        trace!("Cell terminated successfully.");
        Ok(())
    }
}
