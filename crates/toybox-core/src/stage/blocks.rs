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

use std::any::{Any, TypeId};
use std::collections::HashMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::memory::Shared;

/// A typed, shared handle to one block inside a [`BlockCollection`].
///
/// Cloning the handle shares the same block; reads and writes go through
/// the embedded lock.
pub struct BlockHandle<T> {
    inner: Shared<RwLock<T>>,
}

impl<T> BlockHandle<T> {
    /// Acquires a shared read guard on the block.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read()
    }

    /// Acquires an exclusive write guard on the block.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write()
    }
}

impl<T> Clone for BlockHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BlockHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BlockHandle").field(&*self.inner.read()).finish()
    }
}

/// A heterogeneous map of data blocks keyed by their runtime type.
///
/// A collection holds at most one block per type; inserting a second block
/// of the same type replaces the first. Blocks are plain data owned by the
/// collection and handed out through shared [`BlockHandle`]s.
#[derive(Default)]
pub struct BlockCollection {
    blocks: HashMap<TypeId, Shared<dyn Any + Send + Sync>>,
}

impl BlockCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `block`, replacing any existing block of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, block: T) {
        self.blocks
            .insert(TypeId::of::<T>(), Shared::new(RwLock::new(block)));
    }

    /// Returns a typed handle to the block of type `T`, if present.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<BlockHandle<T>> {
        let erased = self.blocks.get(&TypeId::of::<T>())?.clone();
        match erased.downcast::<RwLock<T>>() {
            Ok(inner) => Some(BlockHandle { inner }),
            Err(_) => None,
        }
    }

    /// Returns `true` when a block of type `T` is present.
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.blocks.contains_key(&TypeId::of::<T>())
    }

    /// Returns `true` when a block with the given type id is present.
    pub fn contains_id(&self, type_id: TypeId) -> bool {
        self.blocks.contains_key(&type_id)
    }

    /// Returns `true` when any of `type_ids` matches a stored block.
    pub fn contains_any(&self, type_ids: &[TypeId]) -> bool {
        type_ids.iter().any(|id| self.blocks.contains_key(id))
    }

    /// Removes the block of type `T`.
    ///
    /// ## Returns
    /// `true` when a block was removed.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> bool {
        self.blocks.remove(&TypeId::of::<T>()).is_some()
    }

    /// The type ids of every stored block, in no particular order.
    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.blocks.keys().copied()
    }

    /// The number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` when no blocks are stored.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl std::fmt::Debug for BlockCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockCollection")
            .field("len", &self.blocks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[derive(Debug, PartialEq)]
    struct Label(String);

    #[test]
    fn insert_and_get_round_trip() {
        let mut blocks = BlockCollection::new();
        blocks.insert(Health(100));
        blocks.insert(Label("player".to_string()));

        let health = blocks.get::<Health>().expect("health block");
        assert_eq!(*health.read(), Health(100));
        assert!(blocks.get::<u64>().is_none());
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn insert_replaces_existing_block_of_same_type() {
        let mut blocks = BlockCollection::new();
        blocks.insert(Health(100));
        blocks.insert(Health(42));

        assert_eq!(blocks.len(), 1);
        assert_eq!(*blocks.get::<Health>().expect("health block").read(), Health(42));
    }

    #[test]
    fn handles_share_the_same_block() {
        let mut blocks = BlockCollection::new();
        blocks.insert(Health(1));

        let first = blocks.get::<Health>().expect("health block");
        let second = blocks.get::<Health>().expect("health block");
        first.write().0 = 7;

        assert_eq!(second.read().0, 7);
    }

    #[test]
    fn remove_and_membership() {
        let mut blocks = BlockCollection::new();
        blocks.insert(Health(5));

        assert!(blocks.contains::<Health>());
        assert!(blocks.contains_any(&[TypeId::of::<Label>(), TypeId::of::<Health>()]));
        assert!(blocks.remove::<Health>());
        assert!(!blocks.remove::<Health>());
        assert!(blocks.is_empty());
    }
}
