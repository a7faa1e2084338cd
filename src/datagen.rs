/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Synthetic inputs for the driver: a shuffled range of integers cut into
//! pieces and sorted, so a correct merge reconstructs the range exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::convert::TryFrom;
use thiserror::Error;

use super::error::{try_vec, MergeError};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot generate {total} distinct ints")]
    TooMany { total: usize },

    #[error(transparent)]
    Alloc(#[from] MergeError),
}

#[derive(Debug)]
pub struct TestData {
    pub lens: Vec<usize>,
    pub sequences: Vec<Vec<i32>>,
    /// `1..=n`, the result every correct merge must produce.
    pub expected: Vec<i32>,
}

/// Inclusive range input lengths are drawn from, centered on `ave_input_len`.
/// The lower bound is at least 1, so empty inputs are never generated.
pub fn length_bounds(ave_input_len: usize) -> (usize, usize) {
    let min = (ave_input_len.saturating_add(5) / 10).max(1);
    let max = ave_input_len.saturating_mul(2).saturating_sub(min).max(min);
    (min, max)
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn generate<R>(nr_inputs: usize, ave_input_len: usize, rng: &mut R) -> Result<TestData, GenerateError>
where
    R: Rng + ?Sized,
{
    let (min, max) = length_bounds(ave_input_len);

    let mut lens = try_vec(nr_inputs)?;
    lens.extend((0..nr_inputs).map(|_| rng.gen_range(min..=max)));

    let total: usize = lens.iter().sum();
    let top = i32::try_from(total).map_err(|_| GenerateError::TooMany { total })?;

    let mut expected = try_vec(total)?;
    expected.extend(1..=top);

    let mut shuffled = try_vec(total)?;
    shuffled.extend_from_slice(&expected);
    shuffled.shuffle(rng);

    let mut sequences = try_vec(nr_inputs)?;
    let mut rest = &shuffled[..];

    for &len in &lens {
        let (head, tail) = rest.split_at(len);
        let mut seq = head.to_vec();
        seq.sort_unstable();
        sequences.push(seq);
        rest = tail;
    }

    Ok(TestData {
        lens,
        sequences,
        expected,
    })
}
