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

/// The closed set of application signals a cell can receive or emit.
///
/// Signals are deliberately payload-free values compared by structural
/// equality, so the set of recognized kinds is explicit and every match
/// over them is checked exhaustively at compile time. Handlers that do
/// not recognize a kind drop it silently; an unknown kind is defined
/// behavior, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Asks the receiving cell to perform its greeting action.
    Greet,
    /// Acknowledges that a greeting action was performed.
    Done,
}

/// Represents system-level signals used to manage cell lifecycles.
///
/// These signals are distinct from regular application [`Signal`]s and are
/// handled by the cell's message loop itself, never by a handler. They
/// travel through the same inbox as application signals so that shutdown
/// is ordered after everything queued before it.
///
/// This enum is marked `#[non_exhaustive]` to indicate that more signal
/// types may be added in future versions without constituting a breaking
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SystemSignal {
    /// Instructs a cell to initiate a graceful shutdown.
    ///
    /// Upon receiving `Terminate`, a cell closes its inbox, finishes
    /// handling whatever was already queued, and stops its message loop.
    Terminate,
}
