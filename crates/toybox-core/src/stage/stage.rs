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

use crate::memory::Shared;
use crate::stage::{Toy, ToyRef};
use crate::uid::Uid;

/// A shared handle to a [`Stage`]. Bookkeeping identity is pointer
/// equality on this handle (`Shared::ptr_eq`).
pub type SharedStage = Shared<Stage>;

/// A scene: one tree of toys under a root named `"Root"`.
///
/// The stage owns nothing mutable itself; all tree state lives behind the
/// toys' locks, so a stage can be shared freely between the application
/// and the render core.
pub struct Stage {
    id: Uid,
    root: ToyRef,
}

impl Stage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self {
            id: Uid::generate(),
            root: Toy::named("Root").into_ref(),
        }
    }

    /// Creates an empty stage behind a shared handle.
    pub fn new_shared() -> SharedStage {
        Shared::new(Self::new())
    }

    /// The stage's id, used for logging.
    pub fn id(&self) -> Uid {
        self.id
    }

    /// The root toy of the tree.
    pub fn root(&self) -> ToyRef {
        self.root.clone()
    }

    /// Adds a toy under the root and returns its shared handle.
    pub fn add_toy(&self, toy: Toy) -> ToyRef {
        self.root.write().add_child(toy)
    }

    /// Runs one scene tick: every enabled toy's logic, parents before
    /// children, in child order.
    pub fn update(&self) {
        self.root.write().update();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("id", &self.id).finish()
    }
}
