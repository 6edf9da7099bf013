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

//! The engine's ownership vocabulary.
//!
//! Three ownership relations are used throughout the codebase:
//!
//! - **Exclusive ownership** — `Box<T>` or a plain field: one owner,
//!   move-only, destruction releases the resource.
//! - **Shared ownership** — [`Shared<T>`]: ref-counted, the last holder
//!   releases.
//! - **Weak reference** — [`WeakShared<T>`]: a non-owning observer that must
//!   be upgraded for access; the upgrade fails once the referent is gone.

use std::sync::{Arc, Weak};

/// A ref-counted shared handle. The last holder releases the resource.
pub type Shared<T> = Arc<T>;

/// A non-owning observer of a [`Shared`] value. Upgrade before use; the
/// upgrade returns `None` once every shared holder has dropped.
pub type WeakShared<T> = Weak<T>;
