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

use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

use acton_ern::Ern;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;

pub use idle::Idle;

use crate::common::CellHandle;
use crate::message::Envelope;
use crate::traits::MessageHandler;

mod idle;
/// Contains the `Started` type-state marker and the running message loop.
pub mod started;

/// Represents a cell whose message loop is managed by the runtime.
///
/// `ManagedCell` wraps a user-supplied [`MessageHandler`] together with the
/// inbox it will drain. It uses a type-state pattern via the `CellState`
/// generic parameter ([`Idle`], [`started::Started`]) to separate the
/// configuration phase from active processing.
///
/// The defining property enforced here is mailbox exclusivity: once
/// started, a single spawned task owns both the handler and the inbox
/// receiver, so `handle` is never invoked concurrently with itself on the
/// same instance, no matter how many clones of the [`CellHandle`] deliver
/// signals at once.
///
/// # Type Parameters
///
/// *   `CellState`: A marker type indicating the current lifecycle state.
/// *   `H`: The handler hosted by this cell.
pub struct ManagedCell<CellState, H: MessageHandler> {
    /// Handle for external interaction with this cell.
    pub(crate) handle: CellHandle,

    /// The cell's unique identifier.
    pub(crate) id: Ern,

    /// The handler this cell hosts. All signal processing flows through it,
    /// one signal at a time.
    pub(crate) handler: H,

    /// MPSC receiver for incoming envelopes.
    pub(crate) inbox: Receiver<Envelope>,

    /// Tokio cancellation token for forceful shutdown.
    pub(crate) cancellation_token: CancellationToken,

    /// Phantom data to associate the `CellState` type parameter.
    _cell_state: std::marker::PhantomData<CellState>,
}

impl<CellState, H: MessageHandler> ManagedCell<CellState, H> {
    /// Returns a reference to the cell's unique identifier (`Ern`).
    #[inline]
    pub const fn id(&self) -> &Ern {
        &self.id
    }

    /// Returns the root name segment of the cell's identifier.
    #[inline]
    pub fn name(&self) -> &str {
        self.id.root.as_str()
    }

    /// Returns a reference to the cell's [`CellHandle`].
    ///
    /// The handle is the primary means for external interaction with the
    /// cell once it has started.
    #[inline]
    pub const fn handle(&self) -> &CellHandle {
        &self.handle
    }
}

impl<CellState, H: MessageHandler> Debug for ManagedCell<CellState, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedCell")
            .field("id", &self.id)
            // Avoid showing channels/handler internals in Debug output
            .finish_non_exhaustive()
    }
}
