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

use std::marker::PhantomData;

use tokio::sync::mpsc;
use tracing::{instrument, trace};

use crate::cell::managed_cell::started::Started;
use crate::cell::{CellConfig, ManagedCell};
use crate::common::config::CONFIG;
use crate::common::runtime::CellRuntime;
use crate::common::CellHandle;
use crate::traits::{CellHandleInterface, MessageHandler};

/// Type-state marker for a [`ManagedCell`] that has been configured but has
/// not yet started its message loop.
///
/// An idle cell owns its handler and inbox but spawns nothing; dropping it
/// releases both without side effects. Calling
/// [`start`](ManagedCell::start) consumes it and transitions to
/// [`Started`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idle;

impl<H: MessageHandler> ManagedCell<Idle, H> {
    /// Crate-internal: wires up a cell's inbox, handle, and cancellation
    /// token within `runtime`.
    pub(crate) fn new(runtime: &CellRuntime, config: CellConfig, handler: H) -> Self {
        let id = config.id();
        let capacity = config
            .inbox_capacity()
            .unwrap_or(CONFIG.limits.cell_inbox_capacity);
        let (outbox, inbox) = mpsc::channel(capacity);
        let cancellation_token = runtime.0.cancellation_token.child_token();
        let handle = CellHandle::new(id.clone(), outbox, cancellation_token.clone());

        Self {
            handle,
            id,
            handler,
            inbox,
            cancellation_token,
            _cell_state: PhantomData,
        }
    }

    /// Starts the cell's message loop and returns its handle.
    ///
    /// From this point on, the spawned task is the only code that touches
    /// the handler, which is what makes one-signal-at-a-time processing a
    /// guarantee rather than a convention.
    #[instrument(skip(self), fields(cell = %self.id))]
    pub async fn start(self) -> CellHandle {
        trace!("Starting cell");

        let handle = self.handle.clone();
        let active: ManagedCell<Started, H> = self.into();

        handle.tracker().spawn(active.wake());
        // Close the tracker to indicate the main task is launched.
        handle.tracker().close();

        trace!("Cell started successfully.");
        handle
    }
}

impl<H: MessageHandler> From<ManagedCell<Idle, H>> for ManagedCell<Started, H> {
    fn from(value: ManagedCell<Idle, H>) -> Self {
        Self {
            handle: value.handle,
            id: value.id,
            handler: value.handler,
            inbox: value.inbox,
            cancellation_token: value.cancellation_token,
            _cell_state: PhantomData,
        }
    }
}
