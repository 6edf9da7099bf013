// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Process-unique identifiers used to key scene objects and GPU resources.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The process-wide identifier counter. This is the only piece of global
/// mutable state in the engine core.
static NEXT_UID: AtomicU64 = AtomicU64::new(1);

/// A stable, process-unique 64-bit identifier.
///
/// `Uid`s are generated from a monotonically increasing atomic counter, so
/// generation is thread-safe and never reuses a value within a process.
/// Zero and `u64::MAX` are reserved sentinels and are never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(u64);

impl Uid {
    /// The sentinel identifier representing "no object".
    pub const INVALID: Uid = Uid(u64::MAX);

    /// Generates the next process-unique identifier.
    pub fn generate() -> Self {
        Uid(NEXT_UID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw 64-bit value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` when this identifier refers to an actual object, i.e.
    /// it is neither zero nor the invalid sentinel.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != 0 && self.0 != u64::MAX
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
