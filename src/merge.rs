/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! k-way merge of sorted sequences.
//!
//! Every input must already be non-decreasing. This is not checked: unsorted
//! input yields some permutation of the inputs, not an error. The output is
//! reserved in full before the first element is written, and a failed merge
//! returns no output at all.

use log::{debug, error};

use super::cursor::Cursor;
use super::error::{try_vec, MergeError, MergeResult};
use super::heap::{HeapEntry, MinHeap};

/// Sum of all input lengths, i.e. the length of the merged output.
pub fn total_len<S, T>(sequences: &[S]) -> MergeResult<usize>
where
    S: AsRef<[T]>,
{
    sequences.iter().try_fold(0usize, |acc, seq| {
        acc.checked_add(seq.as_ref().len())
            .ok_or(MergeError::AllocationFailure {
                requested: usize::MAX,
            })
    })
}

/// Merges by scanning every cursor for the minimum on each step, O(n·k).
///
/// On ties the earliest sequence wins.
pub fn merge_linear<S, T>(sequences: &[S]) -> MergeResult<Vec<T>>
where
    S: AsRef<[T]>,
    T: Ord + Copy,
{
    let total = total_len(sequences)?;
    debug!("linear merge: k = {}, n = {}", sequences.len(), total);

    let mut cursors = try_vec(sequences.len())?;
    cursors.extend((0..sequences.len()).map(Cursor::new));

    let mut output = try_vec(total)?;

    while let Some(value) = take_min(sequences, &mut cursors) {
        output.push(value);
    }

    Ok(output)
}

// Finds the smallest value under any live cursor and advances that cursor.
fn take_min<S, T>(sequences: &[S], cursors: &mut [Cursor]) -> Option<T>
where
    S: AsRef<[T]>,
    T: Ord + Copy,
{
    let mut min: Option<(usize, T)> = None;

    for (i, cursor) in cursors.iter().enumerate() {
        let value = match cursor.current(sequences[cursor.sequence].as_ref()) {
            Some(value) => value,
            None => continue,
        };

        match min {
            Some((_, smallest)) if smallest <= value => {}
            _ => min = Some((i, value)),
        }
    }

    min.map(|(i, value)| {
        cursors[i].advance();
        value
    })
}

/// Merges through a [`MinHeap`] holding one cursor per unfinished sequence,
/// O(n·log k).
pub fn merge_heap<S, T>(sequences: &[S]) -> MergeResult<Vec<T>>
where
    S: AsRef<[T]>,
    T: Ord + Copy,
{
    let total = total_len(sequences)?;
    debug!("heap merge: k = {}, n = {}", sequences.len(), total);

    let mut output = try_vec(total)?;

    if sequences.is_empty() {
        return Ok(output);
    }

    let mut heap = MinHeap::with_capacity(sequences.len())?;

    for (i, seq) in sequences.iter().enumerate() {
        if let Some(entry) = HeapEntry::new(Cursor::new(i), seq.as_ref()) {
            heap.push(entry);
        }
    }

    while output.len() < total {
        let entry = match heap.pop() {
            Some(entry) => entry,
            None => {
                error!(
                    "heap merge ran dry after {} of {} elements",
                    output.len(),
                    total
                );
                return Err(MergeError::InternalInconsistency {
                    produced: output.len(),
                    expected: total,
                });
            }
        };

        output.push(entry.key);

        if let Some(next) = entry.advanced() {
            heap.push(next);
        }
    }

    Ok(output)
}

/// Selects one of the two merge algorithms at runtime.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum MergeStrategy {
    Linear,
    Heap,
}

impl MergeStrategy {
    pub const ALL: [MergeStrategy; 2] = [MergeStrategy::Heap, MergeStrategy::Linear];

    pub fn name(self) -> &'static str {
        match self {
            MergeStrategy::Linear => "linear",
            MergeStrategy::Heap => "heap",
        }
    }

    pub fn merge<S, T>(self, sequences: &[S]) -> MergeResult<Vec<T>>
    where
        S: AsRef<[T]>,
        T: Ord + Copy,
    {
        match self {
            MergeStrategy::Linear => merge_linear(sequences),
            MergeStrategy::Heap => merge_heap(sequences),
        }
    }
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
