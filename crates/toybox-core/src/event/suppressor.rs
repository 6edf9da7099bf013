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

use std::sync::atomic::{AtomicUsize, Ordering};

static SUPPRESSION_COUNT: AtomicUsize = AtomicUsize::new(0);

/// A process-wide RAII guard that silences event delivery.
///
/// While at least one suppressor is alive, [`EventBus::send`] and delivery
/// from [`EventBus::flush`] become no-ops on every bus in the process.
/// Guards nest: delivery resumes only once the last one drops.
///
/// [`EventBus::send`]: crate::event::EventBus::send
/// [`EventBus::flush`]: crate::event::EventBus::flush
#[derive(Debug)]
pub struct EventSuppressor {
    _private: (),
}

impl EventSuppressor {
    /// Activates suppression until the returned guard is dropped.
    pub fn new() -> Self {
        SUPPRESSION_COUNT.fetch_add(1, Ordering::SeqCst);
        log::trace!("Event suppression activated.");
        Self { _private: () }
    }

    /// Returns `true` while any suppressor instance is alive.
    pub fn is_active() -> bool {
        SUPPRESSION_COUNT.load(Ordering::SeqCst) > 0
    }
}

impl Default for EventSuppressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventSuppressor {
    fn drop(&mut self) {
        SUPPRESSION_COUNT.fetch_sub(1, Ordering::SeqCst);
        log::trace!("Event suppression released.");
    }
}
