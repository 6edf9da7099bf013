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

//! The scene model: stages of toys, toys of blocks, and views over them.

mod blocks;
#[allow(clippy::module_inception)]
mod stage;
mod toy;
mod view;

pub use blocks::{BlockCollection, BlockHandle};
pub use stage::{SharedStage, Stage};
pub use toy::{Toy, ToyHandle, ToyLogic, ToyRef};
pub use view::{BlockSet, StageView};
