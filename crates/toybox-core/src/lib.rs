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

//! # Toybox Core
//!
//! Foundational types and contracts for the Toybox engine: identifiers,
//! the event bus, the stage/toy/block scene model, backend-neutral
//! graphics resources and traits, and the small math additions the
//! renderer needs on top of `glam`.
//!
//! This crate defines *what* the engine talks about; `toybox-render`
//! turns it into frames.

pub mod event;
pub mod graphics;
pub mod math;
pub mod memory;
pub mod stage;
pub mod uid;
pub mod window;

pub use memory::{Shared, WeakShared};
pub use uid::Uid;
