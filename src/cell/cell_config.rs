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

use acton_ern::Ern;

/// Configuration parameters required to initialize a new cell.
///
/// This struct encapsulates the settings for creating a cell instance:
/// its unique identity and an optional inbox capacity override. The
/// identity is represented by an [`Ern`](acton_ern::Ern).
#[derive(Default, Debug, Clone)]
pub struct CellConfig {
    /// The unique identifier (`Ern`) for the cell.
    id: Ern,
    /// Optional custom inbox capacity for this cell.
    /// If `None`, uses the global default from configuration.
    inbox_capacity: Option<usize>,
}

impl CellConfig {
    /// Creates a new `CellConfig` with the given identifier.
    #[must_use]
    pub const fn new(id: Ern) -> Self {
        Self {
            id,
            inbox_capacity: None,
        }
    }

    /// Creates a new `CellConfig` with a root identifier derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if creating the root `Ern` from the provided `name`
    /// fails (e.g., if the name is invalid according to `Ern` rules).
    pub fn new_with_name(name: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self::new(Ern::with_root(name.into())?))
    }

    /// Sets a custom inbox capacity for this cell.
    ///
    /// This allows overriding the global default inbox capacity on a
    /// per-cell basis. High-throughput cells may benefit from larger
    /// capacities, while low-throughput cells can use smaller capacities
    /// to conserve memory.
    #[must_use]
    pub const fn with_inbox_capacity(mut self, capacity: usize) -> Self {
        self.inbox_capacity = Some(capacity);
        self
    }

    /// Returns a clone of the cell's unique identifier (`Ern`).
    #[inline]
    pub(crate) fn id(&self) -> Ern {
        self.id.clone()
    }

    /// Returns the optional custom inbox capacity for this cell.
    #[inline]
    pub(crate) const fn inbox_capacity(&self) -> Option<usize> {
        self.inbox_capacity
    }
}
