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

use crate::common::runtime::{CellRuntime, RuntimeInner};
use crate::common::HailConfig;

/// Represents the entry point for initializing the cell system.
///
/// This struct serves as a marker type to initiate the system bootstrap
/// process. The primary ways to use it are via:
/// - [`HailApp::launch_async()`] - Preferred when in an async context
/// - [`HailApp::launch()`] - For synchronous contexts (will panic if called from async)
///
/// Creating a `HailApp` instance directly is typically not necessary; use
/// the launch methods instead.
#[derive(Default, Debug, Clone)]
pub struct HailApp;

impl HailApp {
    /// Initializes the cell system asynchronously.
    ///
    /// This is the preferred initialization method when called from within
    /// an async context (e.g., inside a `#[tokio::main]` function, a
    /// `#[tokio::test]`, or from an async task).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use hail::prelude::*;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let mut runtime = HailApp::launch_async().await;
    ///     // Use runtime...
    ///     runtime.shutdown_all().await.unwrap();
    /// }
    /// ```
    ///
    /// # Returns
    ///
    /// An initialized [`CellRuntime`].
    pub async fn launch_async() -> CellRuntime {
        trace!("Starting cell system initialization (async)");

        let config = HailConfig::load();
        trace!("Configuration loaded: {:?}", config);

        let runtime = CellRuntime(RuntimeInner::new(config));

        trace!("Cell system initialization complete (async)");
        runtime
    }

    /// Initializes the cell system synchronously.
    ///
    /// Use this when initializing from a synchronous context (e.g., at the
    /// start of `main()` before entering async code).
    ///
    /// # Panics
    ///
    /// Panics if called from within an existing Tokio runtime. Use
    /// [`launch_async()`](Self::launch_async) instead when in an async context.
    ///
    /// # Returns
    ///
    /// An initialized [`CellRuntime`].
    #[must_use]
    pub fn launch() -> CellRuntime {
        // Guard: prevent calling from async context
        assert!(
            tokio::runtime::Handle::try_current().is_err(),
            "HailApp::launch() was called from within a Tokio runtime. \
             Use HailApp::launch_async().await instead when in an async context."
        );

        trace!("Starting cell system initialization (sync)");

        let config = HailConfig::load();
        trace!("Configuration loaded: {:?}", config);

        CellRuntime(RuntimeInner::new(config))
    }
}
