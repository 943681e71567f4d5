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

//! Defines common internal type aliases used within the crate.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use crate::common::GreetingSink;
use crate::message::Envelope;

/// Crate-internal: Type alias for the sender part of a cell's MPSC channel.
pub type CellSender = Sender<Envelope>;

/// A shared, thread-safe reference to an output sink.
///
/// Handlers that emit text hold one of these; the sink itself is an
/// external collaborator supplied by the hosting program.
pub type SinkRef = Arc<dyn GreetingSink>;
