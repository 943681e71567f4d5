//! Defines the core components for creating, configuring, and running cells.
//!
//! This module provides the building blocks for cells: single-threaded
//! message-handling units that process one signal at a time and can reply
//! to whoever sent the signal currently being handled.
//!
//! # Key Components
//!
//! *   [`ManagedCell`]: The runtime wrapper around a handler, managing the
//!     cell's lifecycle (`Idle`, `Started`) and its inbox.
//! *   [`CellConfig`]: Configuration parameters for a new cell, such as its
//!     unique identifier (`Ern`) and inbox capacity.
//! *   [`Idle`]: Type-state marker for a cell before its loop starts.
//! *   [`Started`]: Type-state marker for a running cell.
//! *   [`Greeter`]: The stock handler, reacting to a greet request with a
//!     fixed output line and an acknowledgement to the requester.

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

pub use cell_config::CellConfig;
pub use greeter::{Greeter, GREETING};
pub use managed_cell::started::Started;
pub use managed_cell::Idle;
pub use managed_cell::ManagedCell;

/// Contains the `CellConfig` struct for cell initialization.
mod cell_config;

/// Contains the stock `Greeter` handler.
mod greeter;

/// Contains the `ManagedCell` struct and its state-specific implementations.
mod managed_cell;
