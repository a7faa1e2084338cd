/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Multi-way merge of sorted integer sequences, the merge phase of an
//! external sort. Two interchangeable algorithms are provided:
//! [`merge_linear`] (O(n·k)) and [`merge_heap`] (O(n·log k)).

pub mod config;
pub mod cursor;
pub mod datagen;
pub mod error;
pub mod heap;
pub mod merge;
pub mod stats;

pub use error::{MergeError, MergeResult};
pub use merge::{merge_heap, merge_linear, MergeStrategy};
