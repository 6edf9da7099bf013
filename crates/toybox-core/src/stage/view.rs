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

use std::any::TypeId;

use crate::stage::ToyRef;

/// A compile-time set of block types used to filter a [`StageView`].
///
/// Implemented for tuples of up to four types; the unit tuple selects
/// every enabled toy.
pub trait BlockSet {
    /// The runtime ids of the set's types.
    fn type_ids() -> Vec<TypeId>;
}

impl BlockSet for () {
    fn type_ids() -> Vec<TypeId> {
        Vec::new()
    }
}

impl<A: 'static> BlockSet for (A,) {
    fn type_ids() -> Vec<TypeId> {
        vec![TypeId::of::<A>()]
    }
}

impl<A: 'static, B: 'static> BlockSet for (A, B) {
    fn type_ids() -> Vec<TypeId> {
        vec![TypeId::of::<A>(), TypeId::of::<B>()]
    }
}

impl<A: 'static, B: 'static, C: 'static> BlockSet for (A, B, C) {
    fn type_ids() -> Vec<TypeId> {
        vec![TypeId::of::<A>(), TypeId::of::<B>(), TypeId::of::<C>()]
    }
}

impl<A: 'static, B: 'static, C: 'static, D: 'static> BlockSet for (A, B, C, D) {
    fn type_ids() -> Vec<TypeId> {
        vec![
            TypeId::of::<A>(),
            TypeId::of::<B>(),
            TypeId::of::<C>(),
            TypeId::of::<D>(),
        ]
    }
}

/// A lazy pre-order traversal of the enabled toys under a root.
///
/// Yields toys whose block set contains *any* of the requested types, or
/// every enabled toy when the filter is empty. Disabled toys are skipped
/// without descending into their subtrees.
///
/// The view takes read locks one toy at a time as it advances; mutating
/// the tree while a view is live is not supported.
pub struct StageView {
    stack: Vec<ToyRef>,
    filter: Vec<TypeId>,
}

impl StageView {
    /// Creates a view over the subtree rooted at `root`, filtered by a
    /// tuple of block types.
    pub fn of<S: BlockSet>(root: &ToyRef) -> Self {
        Self::with_type_ids(root, S::type_ids())
    }

    /// Creates a view with an explicit runtime type list.
    pub fn with_type_ids(root: &ToyRef, filter: Vec<TypeId>) -> Self {
        Self {
            stack: vec![root.clone()],
            filter,
        }
    }
}

impl Iterator for StageView {
    type Item = ToyRef;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(toy_ref) = self.stack.pop() {
            let matches = {
                let toy = toy_ref.read();
                if !toy.enabled {
                    continue;
                }
                // Reverse push keeps children in declaration order.
                for child in toy.children().iter().rev() {
                    self.stack.push(child.clone());
                }
                self.filter.is_empty() || toy.blocks.contains_any(&self.filter)
            };
            if matches {
                return Some(toy_ref);
            }
        }
        None
    }
}
