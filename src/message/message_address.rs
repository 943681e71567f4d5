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

use std::hash::{Hash, Hasher};

use acton_ern::Ern;
use derive_new::new;

use crate::common::CellSender;

/// Represents the addressable endpoint of a message originator, combining
/// its identity and inbox channel.
///
/// A `MessageAddress` contains the necessary information to route a signal
/// back to a specific endpoint: its unique identifier (`sender`, an [`Ern`])
/// and the sender half (`address`) of the MPSC channel connected to its
/// inbox.
///
/// Addresses are owned by the delivery layer. A handler only ever borrows
/// one for the duration of a single `handle` call; there is no validity
/// guarantee beyond that call, and a recipient that has since gone away
/// simply makes the reply undeliverable.
///
/// Equality and hashing are based solely on the identifier.
#[derive(new, Clone, Debug)]
pub struct MessageAddress {
    /// The sender part of the MPSC channel for the endpoint's inbox.
    pub(crate) address: CellSender,
    /// The unique identifier (`Ern`) of the endpoint.
    pub(crate) sender: Ern,
}

impl MessageAddress {
    /// Returns the root name component of the endpoint's identifier.
    #[inline]
    pub fn name(&self) -> &str {
        self.sender.root.as_str()
    }
}

/// Implements equality comparison for `MessageAddress` based on the `Ern`.
impl PartialEq for MessageAddress {
    fn eq(&self, other: &Self) -> bool {
        self.sender == other.sender
    }
}

impl Eq for MessageAddress {}

impl Hash for MessageAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sender.hash(state);
    }
}

impl Default for MessageAddress {
    /// Creates a default `MessageAddress` with a default `Ern` and a closed channel sender.
    ///
    /// This is primarily useful for placeholder initialization before a real address is known.
    /// Messages cannot be successfully sent using the default address's channel sender.
    fn default() -> Self {
        let (outbox, _) = tokio::sync::mpsc::channel(1);
        Self::new(outbox, Ern::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address_is_unusable() {
        let address = MessageAddress::default();
        assert!(address.address.is_closed());
    }

    #[test]
    fn test_equality_ignores_channel() {
        let (outbox_a, _rx_a) = tokio::sync::mpsc::channel(1);
        let (outbox_b, _rx_b) = tokio::sync::mpsc::channel(1);
        let id = Ern::with_root("endpoint").expect("valid root name");
        let left = MessageAddress::new(outbox_a, id.clone());
        let right = MessageAddress::new(outbox_b, id);
        assert_eq!(left, right);
    }
}
