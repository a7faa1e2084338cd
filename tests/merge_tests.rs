/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use kmerge::datagen::{generate, rng_from_seed};
use kmerge::{merge_heap, merge_linear, MergeStrategy};
use proptest::prelude::*;

fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn hand_checked_scenario() {
    let seqs = vec![
        vec![2, 6, 88, 688],
        vec![1, 2, 3, 4, 5, 6, 7, 8],
        vec![5, 10, 15, 20],
    ];
    let expected = vec![1, 2, 2, 3, 4, 5, 5, 6, 6, 7, 8, 10, 15, 20, 88, 688];

    assert_eq!(merge_linear(&seqs).unwrap(), expected);
    assert_eq!(merge_heap(&seqs).unwrap(), expected);
    assert_eq!(expected.len(), 16);
}

#[test]
fn empty_collection() {
    let seqs: Vec<Vec<i32>> = vec![];
    assert_eq!(merge_linear(&seqs).unwrap(), Vec::<i32>::new());
    assert_eq!(merge_heap(&seqs).unwrap(), Vec::<i32>::new());
}

#[test]
fn single_sequence_unchanged() {
    let seqs = vec![vec![-4, -4, 0, 3, 3, 3, 17]];
    assert_eq!(merge_linear(&seqs).unwrap(), seqs[0]);
    assert_eq!(merge_heap(&seqs).unwrap(), seqs[0]);
}

#[test]
fn extreme_values() {
    let seqs = vec![vec![i32::MIN, 0, i32::MAX], vec![i32::MIN, i32::MAX], vec![i32::MAX]];
    let expected = vec![i32::MIN, i32::MIN, 0, i32::MAX, i32::MAX, i32::MAX];
    assert_eq!(merge_linear(&seqs).unwrap(), expected);
    assert_eq!(merge_heap(&seqs).unwrap(), expected);
}

#[test]
fn borrowed_slices_are_accepted() {
    let a = [1u64, 5, 9];
    let b = [2u64, 3];
    let seqs: [&[u64]; 2] = [&a, &b];
    assert_eq!(merge_heap(&seqs).unwrap(), vec![1, 2, 3, 5, 9]);
    assert_eq!(merge_linear(&seqs).unwrap(), vec![1, 2, 3, 5, 9]);
}

#[test]
fn generated_data_reconstructs_range() {
    let data = generate(100, 1000, &mut rng_from_seed(Some(2013))).unwrap();

    for &strategy in MergeStrategy::ALL.iter() {
        assert_eq!(strategy.merge(&data.sequences).unwrap(), data.expected, "{}", strategy);
    }
}

#[test]
#[ignore] // ~10M elements; run with --ignored --release
fn stress_ten_million() {
    let data = generate(1000, 10000, &mut rng_from_seed(Some(1))).unwrap();
    let total: usize = data.lens.iter().sum();

    let heap = merge_heap(&data.sequences).unwrap();
    assert_eq!(heap.len(), total);
    assert_eq!(heap, data.expected);

    let linear = merge_linear(&data.sequences).unwrap();
    assert_eq!(linear, heap);
}

fn arb_sorted_seqs() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(
        prop::collection::vec(-50i32..50, 0..40).prop_map(|mut v| {
            v.sort_unstable();
            v
        }),
        0..12,
    )
}

proptest! {
    #[test]
    fn strategies_agree(seqs in arb_sorted_seqs()) {
        let linear = merge_linear(&seqs).unwrap();
        let heap = merge_heap(&seqs).unwrap();

        let total: usize = seqs.iter().map(Vec::len).sum();
        prop_assert_eq!(linear.len(), total);
        prop_assert_eq!(&linear, &heap);
    }

    #[test]
    fn output_is_sorted_permutation(seqs in arb_sorted_seqs()) {
        let merged = merge_heap(&seqs).unwrap();
        prop_assert!(is_sorted(&merged));

        let mut union: Vec<i32> = seqs.concat();
        union.sort_unstable();
        prop_assert_eq!(merged, union);
    }

    #[test]
    fn remerging_is_noop(seqs in arb_sorted_seqs()) {
        let merged = merge_heap(&seqs).unwrap();
        let again = merge_heap(&[merged.clone()]).unwrap();
        prop_assert_eq!(again, merged);
    }
}
