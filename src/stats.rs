/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Summary of the input sequence lengths of a generated data set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthStats {
    pub count: usize,
    pub total: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
}

impl LengthStats {
    /// Returns `None` for an empty slice.
    pub fn from_lens(lens: &[usize]) -> Option<Self> {
        let min = *lens.iter().min()?;
        let max = *lens.iter().max()?;
        let count = lens.len();
        let total: usize = lens.iter().sum();
        let mean = total as f64 / count as f64;

        // population variance
        let variance = lens
            .iter()
            .map(|&len| {
                let diff = len as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            total,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

impl fmt::Display for LengthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nr_inputs {}, tot_lens {}, mean_len {}, std dev {}, min_len {}, max_len {}",
            self.count,
            self.total,
            self.mean.round(),
            self.std_dev.round(),
            self.min,
            self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_stats() {
        assert_eq!(LengthStats::from_lens(&[]), None);
    }

    #[test]
    fn known_values() {
        let stats = LengthStats::from_lens(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.total, 40);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 9);
        assert!((stats.mean - 5.0).abs() < 1e-9);
        assert!((stats.std_dev - 2.0).abs() < 1e-9);
        assert_eq!(
            stats.to_string(),
            "nr_inputs 8, tot_lens 40, mean_len 5, std dev 2, min_len 2, max_len 9"
        );
    }
}
