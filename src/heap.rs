/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use log::trace;

use super::cursor::Cursor;
use super::error::{try_vec, MergeError, MergeResult};

/// A cursor together with the sequence it reads from.
///
/// `key` is a copy of the element under the cursor, so the heap never has to
/// reach back into the sequence to compare entries.
#[derive(Clone, Copy, Debug)]
pub struct HeapEntry<'a, T> {
    pub key: T,
    pub cursor: Cursor,
    pub sequence: &'a [T],
}

impl<'a, T: Copy> HeapEntry<'a, T> {
    /// Returns `None` if the cursor is already past the end of `sequence`.
    pub fn new(cursor: Cursor, sequence: &'a [T]) -> Option<Self> {
        cursor.current(sequence).map(|key| Self {
            key,
            cursor,
            sequence,
        })
    }

    /// Moves one element further along the same sequence.
    pub fn advanced(self) -> Option<Self> {
        let mut cursor = self.cursor;
        cursor.advance();
        Self::new(cursor, self.sequence)
    }
}

/// Fixed capacity binary min-heap of [`HeapEntry`] ordered by `key`.
///
/// Slots are addressed 1-based internally (parent of `k` is `k / 2`,
/// children are `2k` and `2k + 1`), mapped onto a 0-based `Vec`.
#[derive(Debug)]
pub struct MinHeap<'a, T> {
    capacity: usize,
    entries: Vec<HeapEntry<'a, T>>,
}

impl<'a, T: Ord + Copy> MinHeap<'a, T> {
    pub fn with_capacity(capacity: usize) -> MergeResult<Self> {
        if capacity < 1 {
            return Err(MergeError::AllocationFailure { requested: capacity });
        }

        Ok(Self {
            capacity,
            entries: try_vec(capacity)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `entry`, or drops it if the heap is already full.
    pub fn push(&mut self, entry: HeapEntry<'a, T>) {
        if self.entries.len() >= self.capacity {
            trace!("heap full ({}), dropping entry at {}", self.capacity, entry.cursor);
            return;
        }

        self.entries.push(entry);
        self.sift_up(self.entries.len());
    }

    /// Peeks at the entry with the smallest key without removing it.
    pub fn top(&self) -> Option<&HeapEntry<'a, T>> {
        self.entries.first()
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop(&mut self) -> Option<HeapEntry<'a, T>> {
        if self.entries.is_empty() {
            return None;
        }

        // last slot moves to the root
        let top = self.entries.swap_remove(0);

        if self.entries.len() > 1 {
            self.sift_down(1);
        }

        Some(top)
    }

    fn key(&self, k: usize) -> T {
        self.entries[k - 1].key
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 1 {
            let parent = k / 2;

            if self.key(k) < self.key(parent) {
                self.swap(k, parent);
                k = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let occupied = self.entries.len();

        while 2 * k <= occupied {
            let mut child = 2 * k;

            if child < occupied && self.key(child + 1) < self.key(child) {
                child += 1;
            }

            if self.key(k) <= self.key(child) {
                break;
            }

            self.swap(k, child);
            k = child;
        }
    }
}
