/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Result};
use log::{error, info};
use std::time::Instant;
use structopt::StructOpt;

use kmerge::config::{self, Config};
use kmerge::datagen;
use kmerge::stats::LengthStats;
use kmerge::MergeStrategy;

#[derive(StructOpt)]
#[structopt(name = "kmerge", about = "Test k-way merge of sorted int arrays.")]
struct Opt {
    /// Number of sorted input arrays to generate.
    #[structopt(name = "nr_inputs", default_value = "1000")]
    nr_inputs: usize,

    /// Desired average length of the generated arrays.
    #[structopt(name = "ave_input_len", default_value = "10000")]
    ave_input_len: usize,

    /// Test the slower linear method as well as the heap method.
    #[structopt(short = "l")]
    linear: bool,

    /// Seed for the data generator; random if omitted.
    #[structopt(long)]
    seed: Option<u64>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            nr_inputs: opt.nr_inputs,
            ave_input_len: opt.ave_input_len,
            linear: opt.linear,
            seed: opt.seed,
        }
    }
}

const SMALL_DATA: [&[i32]; 3] = [&[2, 6, 88, 688], &[1, 2, 3, 4, 5, 6, 7, 8], &[5, 10, 15, 20]];
const SMALL_MERGED: &[i32] = &[1, 2, 2, 3, 4, 5, 5, 6, 6, 7, 8, 10, 15, 20, 88, 688];

// data small enough to verify by hand

fn verify_small_data() -> bool {
    let mut ok = true;

    for &strategy in MergeStrategy::ALL.iter() {
        match strategy.merge(&SMALL_DATA) {
            Ok(output) => {
                info!("{:<6} small data {:?}", strategy, output);

                if output != SMALL_MERGED {
                    error!("{} merge differs from expected output", strategy);
                    ok = false;
                }
            }
            Err(e) => {
                error!("{} merge failed on small data: {}", strategy, e);
                ok = false;
            }
        }
    }

    ok
}

fn timed_merge(strategy: MergeStrategy, sequences: &[Vec<i32>], expected: &[i32]) -> Result<bool> {
    info!("{} merge start", strategy);

    let start = Instant::now();
    let output = strategy.merge(sequences)?;
    let elapsed = start.elapsed();

    info!("{} merge elapsed {:.2} sec", strategy, elapsed.as_secs_f64());

    let matches = output == expected;
    info!(
        "{:<6} {} expected output",
        strategy,
        if matches { "matches" } else { "differs from" }
    );

    Ok(matches)
}

fn main() -> Result<()> {
    env_logger::builder()
        .format_timestamp(None)
        .parse_filters("info")
        .parse_default_env()
        .init();

    // read options

    let cfg = Config::from(Opt::from_args()).validate()?;

    let mut ok = verify_small_data();

    // larger test

    let mut rng = datagen::rng_from_seed(cfg.seed);
    let data = datagen::generate(cfg.nr_inputs, cfg.ave_input_len, &mut rng)?;

    if let Some(stats) = LengthStats::from_lens(&data.lens) {
        info!(
            "requested ave_input_len {}, product {} (max {})",
            cfg.ave_input_len,
            cfg.nr_inputs * cfg.ave_input_len,
            config::MAX_INPUT_INTS
        );
        info!("{}", stats);
    }

    ok &= timed_merge(MergeStrategy::Heap, &data.sequences, &data.expected)?;

    if cfg.linear {
        ok &= timed_merge(MergeStrategy::Linear, &data.sequences, &data.expected)?;
    }

    if !ok {
        bail!("merge output differs from expected");
    }

    Ok(())
}
