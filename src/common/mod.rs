//! Internal utilities and structures used throughout the crate.
//!
//! This module hosts the runtime plumbing around the message plane: the
//! system entry point ([`HailApp`]) and runtime ([`CellRuntime`]), the
//! clonable [`CellHandle`] used to reach a running cell, caller-side
//! identities ([`Inbox`]), output sinks, configuration, and shared type
//! aliases.

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

// --- Public Re-exports ---
pub use app::HailApp;
pub use cell_handle::CellHandle;
pub use config::HailConfig;
pub use inbox::Inbox;
pub use runtime::CellRuntime;
pub use sink::{GreetingSink, MemorySink, StdoutSink};
pub use types::{CellSender, SinkRef};

// --- Submodules ---

/// Defines [`HailApp`], the system entry point.
mod app;
/// Defines [`CellHandle`].
mod cell_handle;
/// Defines [`HailConfig`] and the global `CONFIG`.
pub(crate) mod config;
/// Defines [`Inbox`].
mod inbox;
/// Defines [`CellRuntime`].
pub(crate) mod runtime;
/// Defines the output sink trait and stock sinks.
mod sink;
/// Common type aliases.
mod types;
