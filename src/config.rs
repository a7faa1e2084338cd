/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

/// Upper bound on the number of generated integers (about 2GiB of `i32`).
pub const MAX_INPUT_INTS: usize = 500_000_000;

pub const DEFAULT_NR_INPUTS: usize = 1000;
pub const DEFAULT_AVE_INPUT_LEN: usize = 10000;

/// Parameters of one driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub nr_inputs: usize,
    pub ave_input_len: usize,
    /// Also time the slower linear merge.
    pub linear: bool,
    pub seed: Option<u64>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("nr_inputs ({nr_inputs}) and ave_input_len ({ave_input_len}) must be strictly positive")]
    NonPositive {
        nr_inputs: usize,
        ave_input_len: usize,
    },

    #[error("total number of ints to merge ({product}) must be no greater than {max}")]
    TooLarge { product: usize, max: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nr_inputs: DEFAULT_NR_INPUTS,
            ave_input_len: DEFAULT_AVE_INPUT_LEN,
            linear: false,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.nr_inputs == 0 || self.ave_input_len == 0 {
            return Err(ConfigError::NonPositive {
                nr_inputs: self.nr_inputs,
                ave_input_len: self.ave_input_len,
            });
        }

        match self.nr_inputs.checked_mul(self.ave_input_len) {
            Some(product) if product <= MAX_INPUT_INTS => Ok(self),
            product => Err(ConfigError::TooLarge {
                product: product.unwrap_or(usize::MAX),
                max: MAX_INPUT_INTS,
            }),
        }
    }
}
