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

use tracing::{error, instrument, trace};

use crate::cell::ManagedCell;
use crate::message::{Payload, SystemSignal};
use crate::traits::{CellHandleInterface, MessageHandler};

/// Type-state marker for a [`ManagedCell`] that is actively running and
/// processing signals.
///
/// When a cell is in the `Started` state, its main asynchronous task
/// (`wake`) is running, receiving envelopes from its inbox one at a time
/// and dispatching each to the hosted handler. Interaction happens via the
/// cell's [`CellHandle`](crate::common::CellHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Started;

impl<H: MessageHandler> ManagedCell<Started, H> {
    // wake() is an internal implementation detail of the message loop.
    //
    // The loop is the serialization point of the whole crate: it owns both
    // the inbox receiver and the handler, and it awaits the routing of
    // each reply before it receives the next envelope, so the effects of
    // consecutive signals cannot interleave.
    #[instrument(skip(self), fields(cell = %self.id))]
    pub(crate) async fn wake(mut self) {
        let cancel_token = self.cancellation_token.clone();
        let mut cancel = Box::pin(cancel_token.cancelled());

        loop {
            tokio::select! {
                () = &mut cancel => {
                    trace!("Forceful cancellation triggered for cell: {}", self.id);
                    break;
                }

                incoming_opt = self.inbox.recv() => {
                    let Some(envelope) = incoming_opt else { break; };
                    trace!("Received envelope from: {}", envelope.reply_to.sender.root);

                    match envelope.payload {
                        Payload::System(SystemSignal::Terminate) => {
                            trace!("Terminate signal received for cell: {}. Closing inbox.", self.id);
                            self.inbox.close();
                        }
                        Payload::Signal(signal) => {
                            let sender = envelope.reply_to;
                            match self.handler.handle(signal, &sender) {
                                Some(outbound) => {
                                    let reply_to = self.handle.reply_address();
                                    if let Err(e) = outbound.dispatch(reply_to, &cancel_token).await {
                                        error!(
                                            "Reply from cell {} could not be routed: {}",
                                            self.id, e
                                        );
                                    }
                                }
                                None => {
                                    trace!(
                                        "No reply produced for signal {:?} in cell {}",
                                        signal, self.id
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }

        trace!("Cell {} stopped.", self.id);
    }
}
