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

/// Represents errors that can occur when delivering a signal to a cell.
///
/// These errors belong to the delivery boundary only. A handler never sees
/// them; an unrecognized signal kind is a defined no-op rather than an
/// error of any variant below.
#[derive(Debug, PartialEq, Eq)]
pub enum DeliveryError {
    /// The recipient's inbox channel is closed, typically because the cell
    /// has stopped.
    ChannelClosed,
    /// Delivery was abandoned because the cell's cancellation token fired.
    Cancelled,
    /// Indicates that enqueueing the envelope failed for another reason.
    SendFailed(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::ChannelClosed => write!(f, "Recipient channel is closed"),
            DeliveryError::Cancelled => write!(f, "Delivery cancelled"),
            DeliveryError::SendFailed(msg) => write!(f, "Failed to deliver signal: {msg}"),
        }
    }
}

impl std::error::Error for DeliveryError {}

/// Converts a `SendError` from Tokio's MPSC channel to a `DeliveryError`.
impl<T> From<tokio::sync::mpsc::error::SendError<T>> for DeliveryError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        DeliveryError::ChannelClosed
    }
}
