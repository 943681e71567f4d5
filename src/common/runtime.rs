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

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use futures::future::join_all;
use tokio::time::timeout as tokio_timeout;
use tokio_util::sync::CancellationToken;
use tracing::{error, instrument, trace};

use crate::cell::{CellConfig, Greeter, Idle, ManagedCell};
use crate::common::{CellHandle, HailConfig, SinkRef};
use crate::traits::{CellHandleInterface, MessageHandler};

/// Crate-internal shared state behind a [`CellRuntime`].
#[derive(Debug, Clone, Default)]
pub(crate) struct RuntimeInner {
    /// Handles of the top-level cells created through this runtime,
    /// keyed by the string form of their `Ern`.
    pub(crate) roots: Arc<DashMap<String, CellHandle>>,
    /// Root cancellation token; every cell gets a child of it.
    pub(crate) cancellation_token: CancellationToken,
    /// The configuration the system was launched with.
    pub(crate) config: HailConfig,
}

impl RuntimeInner {
    pub(crate) fn new(config: HailConfig) -> Self {
        Self {
            roots: Arc::new(DashMap::new()),
            cancellation_token: CancellationToken::new(),
            config,
        }
    }
}

/// Represents the initialized and active cell system runtime.
///
/// This struct is obtained by launching the system via
/// [`HailApp::launch()`](crate::common::HailApp::launch). It holds a
/// registry of the top-level cells and provides the methods for
/// interacting with the system as a whole: creating cells (`new_cell`
/// and variants) and initiating a graceful shutdown of all of them
/// (`shutdown_all`).
///
/// It is cloneable, allowing different parts of an application to hold
/// references to the runtime environment.
#[derive(Debug, Clone, Default)]
pub struct CellRuntime(pub(crate) RuntimeInner);

/// Result of attempting to stop a single cell.
enum CellStopResult {
    /// Cell stopped successfully
    Success,
    /// Cell stop returned an error
    Error { cell_id: String, error: String },
    /// Cell stop timed out
    Timeout { cell_id: String },
}

impl CellRuntime {
    /// Creates a new top-level cell hosting `handler`, with a specified
    /// root name.
    ///
    /// The returned cell is in the [`Idle`] state, ready to be started by
    /// calling `.start()` on it.
    ///
    /// # Panics
    ///
    /// Panics if creating the root `Ern` from the provided `name` fails.
    pub fn new_cell_with_name<H>(&mut self, handler: H, name: String) -> ManagedCell<Idle, H>
    where
        H: MessageHandler,
    {
        let config = CellConfig::new_with_name(name)
            .expect("Failed to create root Ern for new cell");
        self.new_cell_with_config(handler, config)
    }

    /// Creates a new top-level cell hosting `handler`, with the default
    /// name from configuration.
    pub fn new_cell<H>(&mut self, handler: H) -> ManagedCell<Idle, H>
    where
        H: MessageHandler,
    {
        let name = self.0.config.defaults.cell_name.clone();
        self.new_cell_with_name(handler, name)
    }

    /// Creates a new top-level cell hosting `handler`, using a provided
    /// configuration.
    pub fn new_cell_with_config<H>(&mut self, handler: H, config: CellConfig) -> ManagedCell<Idle, H>
    where
        H: MessageHandler,
    {
        let cell = ManagedCell::new(self, config, handler);
        trace!("Registering new top-level cell: {}", cell.id());
        self.0
            .roots
            .insert(cell.id().to_string(), cell.handle().clone());
        cell
    }

    /// Creates and starts a greeting cell writing to `sink`.
    ///
    /// Convenience wrapper around [`new_cell`](Self::new_cell) with the
    /// stock [`Greeter`] handler.
    pub async fn spawn_greeter(&mut self, sink: SinkRef) -> CellHandle {
        self.new_cell(Greeter::new(sink)).start().await
    }

    /// Returns the number of top-level cells currently registered in the
    /// runtime.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.0.roots.len()
    }

    /// Stops every registered cell and waits for their tasks to finish.
    ///
    /// Each cell is asked to stop gracefully, bounded by the per-cell
    /// shutdown timeout; the whole operation is additionally bounded by
    /// the system shutdown timeout. Timeout and error results are
    /// aggregated to avoid log flooding when many cells fail
    /// simultaneously.
    ///
    /// # Errors
    ///
    /// Returns an error if the system-wide timeout elapses before every
    /// cell has stopped.
    #[instrument(skip(self))]
    pub async fn shutdown_all(&mut self) -> anyhow::Result<()> {
        trace!("Sending Terminate signal to all root cells.");
        let cell_timeout = self.0.config.cell_shutdown_timeout();
        let stop_futures: Vec<_> = self
            .0
            .roots
            .iter()
            .map(|item| {
                let handle = item.value().clone();
                async move { stop_cell(handle, cell_timeout).await }
            })
            .collect();

        let system_timeout = self.0.config.system_shutdown_timeout();
        let results = match tokio_timeout(system_timeout, join_all(stop_futures)).await {
            Ok(results) => results,
            Err(_) => {
                self.0.cancellation_token.cancel();
                anyhow::bail!(
                    "System shutdown timed out after {} ms",
                    system_timeout.as_millis()
                );
            }
        };

        let mut timeout_cells: Vec<String> = Vec::new();
        let mut error_cells: Vec<(String, String)> = Vec::new();
        for result in results {
            match result {
                CellStopResult::Success => {}
                CellStopResult::Timeout { cell_id } => timeout_cells.push(cell_id),
                CellStopResult::Error { cell_id, error } => error_cells.push((cell_id, error)),
            }
        }

        if !timeout_cells.is_empty() {
            error!(
                "Shutdown timeout ({} ms) for {} cell(s): [{}]",
                cell_timeout.as_millis(),
                timeout_cells.len(),
                timeout_cells.join(", ")
            );
        }

        if !error_cells.is_empty() {
            error!(
                "Shutdown errors for {} cell(s): [{}]",
                error_cells.len(),
                error_cells
                    .iter()
                    .map(|(id, err)| format!("{id}: {err}"))
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }

        self.0.roots.clear();
        trace!("All cells stopped.");
        Ok(())
    }
}

/// Stops one cell within `timeout`, classifying the outcome.
async fn stop_cell(handle: CellHandle, timeout: Duration) -> CellStopResult {
    trace!("Sending stop signal to cell: {}", handle.id());
    match tokio_timeout(timeout, handle.stop()).await {
        Ok(Ok(())) => {
            trace!("Cell {} shut down successfully.", handle.id());
            CellStopResult::Success
        }
        Ok(Err(e)) => CellStopResult::Error {
            cell_id: handle.id().to_string(),
            error: format!("{e:?}"),
        },
        Err(_) => CellStopResult::Timeout {
            cell_id: handle.id().to_string(),
        },
    }
}
