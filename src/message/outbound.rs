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

use static_assertions::assert_impl_all;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::message::envelope::{Envelope, Payload};
use crate::message::message_address::MessageAddress;
use crate::message::signal::Signal;
use crate::message::DeliveryError;

/// A reply produced by a handler, naming the recipient it must reach.
///
/// An `Outbound` is a value, not an action: the handler that creates it
/// performs no delivery of its own. The cell's message loop routes the
/// value to the named [`MessageAddress`] after the handler returns, which
/// keeps the handler free of channel plumbing and trivially testable in
/// isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    /// The signal to deliver.
    pub(crate) signal: Signal,
    /// The address of the intended recipient.
    pub(crate) recipient: MessageAddress,
}

impl Outbound {
    /// Creates a reply carrying `signal`, addressed to `recipient`.
    ///
    /// The usual recipient is the borrowed sender address of the signal
    /// currently being handled.
    #[must_use]
    pub fn reply(recipient: &MessageAddress, signal: Signal) -> Self {
        Self {
            signal,
            recipient: recipient.clone(),
        }
    }

    /// Returns the signal this reply carries.
    #[inline]
    #[must_use]
    pub const fn signal(&self) -> Signal {
        self.signal
    }

    /// Returns the address this reply is directed at.
    #[inline]
    #[must_use]
    pub const fn recipient(&self) -> &MessageAddress {
        &self.recipient
    }

    /// Crate-internal: routes the reply to its recipient's inbox.
    ///
    /// Uses a fast path via `try_reserve()`, which is non-blocking and
    /// avoids async overhead when the channel has capacity (the common
    /// case). Only when the channel is full does it fall back to the
    /// async `reserve()` path, where cancellation is still honored.
    pub(crate) async fn dispatch(
        self,
        reply_to: MessageAddress,
        cancellation_token: &CancellationToken,
    ) -> Result<(), DeliveryError> {
        if cancellation_token.is_cancelled() {
            return Err(DeliveryError::Cancelled);
        }

        trace!(recipient = %self.recipient.sender, signal = ?self.signal, "Routing reply");
        let channel_sender = self.recipient.address.clone();
        let envelope = Envelope::new(Payload::Signal(self.signal), reply_to, self.recipient);

        match channel_sender.try_reserve() {
            Ok(permit) => {
                permit.send(envelope);
                return Ok(());
            }
            Err(tokio::sync::mpsc::error::TrySendError::Closed(())) => {
                return Err(DeliveryError::ChannelClosed);
            }
            Err(tokio::sync::mpsc::error::TrySendError::Full(())) => {
                // Channel is full, fall through to slow path
            }
        }

        tokio::select! {
            () = cancellation_token.cancelled() => Err(DeliveryError::Cancelled),
            permit_result = channel_sender.reserve() => {
                match permit_result {
                    Ok(permit) => {
                        permit.send(envelope);
                        Ok(())
                    }
                    Err(e) => Err(DeliveryError::SendFailed(e.to_string())),
                }
            }
        }
    }
}

assert_impl_all!(Outbound: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use acton_ern::Ern;

    #[tokio::test]
    async fn test_dispatch_to_closed_channel() {
        let (outbox, receiver) = tokio::sync::mpsc::channel(1);
        drop(receiver);
        let recipient =
            MessageAddress::new(outbox, Ern::with_root("gone").expect("valid root name"));
        let outbound = Outbound::reply(&recipient, Signal::Done);
        let result = outbound
            .dispatch(MessageAddress::default(), &CancellationToken::new())
            .await;
        assert_eq!(result, Err(DeliveryError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_dispatch_honors_cancellation() {
        let (outbox, _receiver) = tokio::sync::mpsc::channel(1);
        let recipient =
            MessageAddress::new(outbox, Ern::with_root("busy").expect("valid root name"));
        let token = CancellationToken::new();
        token.cancel();
        let outbound = Outbound::reply(&recipient, Signal::Done);
        let result = outbound
            .dispatch(MessageAddress::default(), &token)
            .await;
        assert_eq!(result, Err(DeliveryError::Cancelled));
    }
}
