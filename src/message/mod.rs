//! Defines signal kinds, addressing, envelopes, and reply values.
//!
//! This module provides the message plane of the crate. It includes the
//! closed set of application signals, the addressable endpoint type used
//! as sender identity, the internal envelope transmitted over inbox
//! channels, and the reply value a handler produces for routing back to
//! a sender.
//!
//! # Key Components
//!
//! *   [`Signal`]: The closed set of application signal kinds.
//! *   [`MessageAddress`]: The unique, addressable endpoint of a message
//!     originator, combining its ID (`Ern`) and its inbox channel sender.
//! *   [`Outbound`]: A reply value naming a recipient address, produced by
//!     handlers and routed by the cell's message loop.
//! *   [`DeliveryError`]: Errors surfaced at the delivery boundary.
//! *   [`SystemSignal`]: Control signals used for managing cell lifecycles
//!     (e.g., `Terminate`).
//!
//! Internal submodules handle implementation details like the `Envelope`
//! structure used for channel transmission.

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
pub use delivery_error::DeliveryError;
pub use message_address::MessageAddress;
pub use outbound::Outbound;
pub use signal::{Signal, SystemSignal};

// --- Crate-Internal Re-exports ---
pub(crate) use envelope::{Envelope, Payload};

// --- Submodules ---

/// Defines [`DeliveryError`].
mod delivery_error;
/// Defines the internal `Envelope` used for channel communication.
mod envelope;
/// Defines [`MessageAddress`].
mod message_address;
/// Defines [`Outbound`].
mod outbound;
/// Defines [`Signal`] and [`SystemSignal`].
mod signal;
