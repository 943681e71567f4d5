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

#![forbid(unsafe_code)]
// #![warn(missing_docs)]

//! # Hail
//!
//! This crate provides a minimal single-cell messaging unit built on Tokio.
//! A cell hosts one [`MessageHandler`](traits::MessageHandler) and gives it
//! two guarantees: signals are handled strictly one at a time (mailbox
//! exclusivity), and each signal arrives with the address of its sender, so
//! a reply can be routed back without the caller embedding addressing in
//! the payload.
//!
//! ## Key Concepts
//!
//! - **Cells (`ManagedCell`)**: Units wrapping a handler, managed by the
//!   runtime with a type-state lifecycle (`Idle`, `Started`).
//! - **Handles (`CellHandle`)**: External references for interacting with
//!   cells (delivering signals, stopping).
//! - **Signals**: A closed set of payload-free message kinds, matched
//!   exhaustively; unrecognized kinds are dropped silently by handlers.
//! - **Replies (`Outbound`)**: Values naming a recipient address, produced
//!   by handlers and routed by the cell's message loop.
//! - **Runtime (`CellRuntime`)**: Manages the overall system, including
//!   cell creation and shutdown.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hail::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut runtime = HailApp::launch_async().await;
//!     let greeter = runtime.spawn_greeter(Arc::new(StdoutSink)).await;
//!
//!     let mut caller = Inbox::new("caller")?;
//!     greeter.deliver(Signal::Greet, &caller.address()).await?;
//!     let (ack, _from) = caller.recv().await.expect("acknowledgement");
//!     assert_eq!(ack, Signal::Done);
//!
//!     runtime.shutdown_all().await
//! }
//! ```

/// Internal utilities and structures used throughout the crate.
pub(crate) mod common;

/// Defines the core cell structures and logic.
pub(crate) mod cell;

/// Defines signal kinds and envelopes used for communication.
pub(crate) mod message;

/// Defines core traits used throughout the crate.
pub(crate) mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// This module re-exports essential types and traits from the crate and
/// from dependencies like `acton-ern` and `async-trait`, simplifying the
/// import process for users.
pub mod prelude {
    // External crate re-exports
    pub use acton_ern::Ern;
    pub use async_trait::async_trait;

    // Core types
    pub use crate::cell::{CellConfig, Greeter, Idle, ManagedCell, Started, GREETING};
    pub use crate::common::{
        CellHandle, CellRuntime, GreetingSink, HailApp, HailConfig, Inbox, MemorySink, SinkRef,
        StdoutSink,
    };
    pub use crate::message::{DeliveryError, MessageAddress, Outbound, Signal};
    pub use crate::traits::{CellHandleInterface, MessageHandler};
}
