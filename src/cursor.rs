/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Read position into one of the input sequences of a merge.
///
/// Cursors only hold indices; the sequences themselves stay with the caller.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct Cursor
{
    pub sequence: usize,
    pub position: usize,
}

impl Cursor
{
    pub fn new(sequence: usize) -> Self
    {
        Self
        {
            sequence: sequence,
            position: 0,
        }
    }

    pub fn is_exhausted<T>(&self, seq: &[T]) -> bool
    {
        self.position >= seq.len()
    }

    pub fn current<T: Copy>(&self, seq: &[T]) -> Option<T>
    {
        seq.get(self.position).copied()
    }

    pub fn advance(&mut self)
    {
        self.position += 1;
    }
}

impl std::fmt::Display for Cursor
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}@{}", self.sequence, self.position)
    }
}
