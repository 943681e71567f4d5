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

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// An output destination accepting one human-readable line per call.
///
/// The sink is an external collaborator: the crate never interprets what
/// an implementation does with a line, and the signature is infallible by
/// design. An implementation that can fail chooses its own policy
/// (panic, swallow, buffer).
///
/// Calls originating from a single cell never interleave, because the
/// cell handles one signal at a time.
pub trait GreetingSink: Debug + Send + Sync {
    /// Accepts a single line of text. Implementations append any line
    /// terminator themselves.
    fn write_line(&self, line: &str);
}

/// Writes each line to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl GreetingSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in memory, preserving arrival order.
///
/// Clones share the same buffer, so a test can keep one clone and hand
/// the other to a cell.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every line captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .expect("MemorySink buffer lock poisoned")
            .clone()
    }

    /// Returns the number of lines captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .expect("MemorySink buffer lock poisoned")
            .len()
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GreetingSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .expect("MemorySink buffer lock poisoned")
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink.lines(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let observer = sink.clone();
        sink.write_line("shared");
        assert_eq!(observer.len(), 1);
    }
}
