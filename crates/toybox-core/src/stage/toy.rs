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

use parking_lot::RwLock;

use crate::memory::Shared;
use crate::stage::BlockCollection;
use crate::uid::Uid;

/// A shared, lockable handle to a [`Toy`]. Children are held through this
/// type, so subtrees can be shared across stages.
pub type ToyRef = Shared<RwLock<Toy>>;

/// Per-toy application behaviour, invoked once per scene tick.
pub trait ToyLogic: Send + Sync {
    /// Called during the tree update with exclusive access to the owning
    /// toy's blocks.
    fn on_update(&mut self, blocks: &mut BlockCollection);
}

impl<F> ToyLogic for F
where
    F: FnMut(&mut BlockCollection) + Send + Sync,
{
    fn on_update(&mut self, blocks: &mut BlockCollection) {
        self(blocks)
    }
}

/// Identity of a toy: a display name plus a process-unique id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToyHandle {
    /// Human-readable name, for logs and lookups.
    pub name: String,
    /// Process-unique identifier, minted at construction.
    pub id: Uid,
}

impl ToyHandle {
    /// Creates a handle with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: Uid::generate(),
        }
    }
}

/// A node in the scene tree: identity, an enabled flag, a bag of data
/// blocks, child toys, and optional per-tick logic.
///
/// Toys hold shared handles to children only; there is no parent pointer.
pub struct Toy {
    /// The toy's identity.
    pub handle: ToyHandle,
    /// Disabled toys and their entire subtrees are skipped by updates and
    /// views.
    pub enabled: bool,
    /// The toy's data blocks.
    pub blocks: BlockCollection,
    children: Vec<ToyRef>,
    logic: Option<Box<dyn ToyLogic>>,
}

impl Toy {
    /// Creates an enabled, empty toy with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            handle: ToyHandle::new(name),
            enabled: true,
            blocks: BlockCollection::new(),
            children: Vec::new(),
            logic: None,
        }
    }

    /// Wraps the toy in a shared handle.
    pub fn into_ref(self) -> ToyRef {
        Shared::new(RwLock::new(self))
    }

    /// Installs the toy's per-tick logic, replacing any previous logic.
    pub fn set_logic(&mut self, logic: impl ToyLogic + 'static) {
        self.logic = Some(Box::new(logic));
    }

    /// Appends `child` and returns a shared handle to it.
    pub fn add_child(&mut self, child: Toy) -> ToyRef {
        let child_ref = child.into_ref();
        self.children.push(child_ref.clone());
        child_ref
    }

    /// Appends an already-shared child.
    pub fn add_child_ref(&mut self, child: ToyRef) {
        self.children.push(child);
    }

    /// Removes the direct child with the given id.
    ///
    /// ## Returns
    /// The removed child, or `None` when no direct child matches.
    pub fn remove_child(&mut self, id: Uid) -> Option<ToyRef> {
        let index = self
            .children
            .iter()
            .position(|child| child.read().handle.id == id)?;
        Some(self.children.remove(index))
    }

    /// Finds a direct child by id.
    pub fn find_child(&self, id: Uid) -> Option<ToyRef> {
        self.children
            .iter()
            .find(|child| child.read().handle.id == id)
            .cloned()
    }

    /// The toy's direct children.
    pub fn children(&self) -> &[ToyRef] {
        &self.children
    }

    /// Runs one tick: this toy's logic first, then each child in order.
    ///
    /// Disabled toys are skipped entirely, children included.
    pub fn update(&mut self) {
        if !self.enabled {
            return;
        }

        // Take the logic out so it can borrow the blocks exclusively.
        if let Some(mut logic) = self.logic.take() {
            logic.on_update(&mut self.blocks);
            self.logic = Some(logic);
        }

        for child in &self.children {
            child.write().update();
        }
    }
}

impl std::fmt::Debug for Toy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toy")
            .field("handle", &self.handle)
            .field("enabled", &self.enabled)
            .field("blocks", &self.blocks)
            .field("children", &self.children.len())
            .field("has_logic", &self.logic.is_some())
            .finish()
    }
}
