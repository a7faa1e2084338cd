/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError
{
    /// Working storage for `requested` elements could not be obtained.
    #[error("unable to allocate working storage for {requested} elements")]
    AllocationFailure { requested: usize },

    /// The heap ran dry before every input element was emitted. Callers
    /// should treat this as a bug, not a condition to recover from.
    #[error("heap emptied after {produced} of {expected} elements")]
    InternalInconsistency { produced: usize, expected: usize },
}

pub type MergeResult<T> = Result<T, MergeError>;

/// Empty `Vec` with room for exactly `len` elements.
pub fn try_vec<T>(len: usize) -> MergeResult<Vec<T>>
{
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| MergeError::AllocationFailure { requested: len })?;
    Ok(v)
}
