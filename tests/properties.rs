use itertools::Itertools;
use resistor_net::*;

use std::collections::HashSet;

#[test]
fn series_and_parallel_are_exact() {
    let nets = build(&[33.0, 150.0, 680.0], 2, 10_000).unwrap();
    let singles = nets.bucket(1);
    for (ai, a) in singles.iter().enumerate() {
        for b in &singles[ai..] {
            let (ra, rb) = (a.resistance(), b.resistance());
            let pair: Vec<f64> = nets
                .bucket(2)
                .iter()
                .filter(|n| n.parts() == [ra, rb])
                .map(Network::resistance)
                .collect();
            assert_eq!(pair, vec![ra + rb, 1.0 / (1.0 / ra + 1.0 / rb)]);
        }
    }
}

#[test]
fn bucket_sizes_match_component_counts() {
    let nets = NetCalc::from_series(&E3).networks().unwrap();
    assert_eq!(nets.max_size(), 5);
    for k in 1..=5 {
        assert!(nets.bucket(k).len() <= 10_000);
        assert!(nets
            .bucket(k)
            .iter()
            .all(|n| n.component_count() == k && n.parts().len() == k.min(MAX_TRACKED_PARTS)));
    }
}

#[test]
fn no_mirrored_pairs_in_equal_splits() {
    let nets = build(&[10.0, 22.0, 47.0], 4, 10_000).unwrap();

    // Size 2 only comes from the (1, 1) split: each unordered pair once per operator
    let pairs: HashSet<(bool, Vec<u64>)> = nets
        .bucket(2)
        .iter()
        .map(|n| {
            let mut parts: Vec<u64> = n.parts().iter().map(|p| p.to_bits()).collect();
            parts.sort_unstable();
            (n.expression().contains(" + "), parts)
        })
        .collect();
    assert_eq!(pairs.len(), nets.bucket(2).len());
    assert_eq!(nets.bucket(2).len(), 12);

    // 3 singles, 12 pairs, 144 triples: (1,3) and (3,1) give 432 pairs each, (2,2) gives
    // 12 * 13 / 2 = 78, two networks per pair
    assert_eq!(nets.bucket(3).len(), 144);
    assert_eq!(nets.bucket(4).len(), 1884);
}

#[test]
fn ranking_is_ordered_and_within_tolerance() {
    let nets = NetCalc::from_series(&E6)
        .limits(Limits::default().max_size(3))
        .networks()
        .unwrap();
    let ranking = rank(&nets, 5100.0, 2.0, usize::MAX).unwrap();
    assert!(ranking.found());
    for (a, b) in ranking.iter().tuple_windows() {
        assert!(a.error() <= b.error());
        if a.error() == b.error() {
            assert!(a.component_count() <= b.component_count());
        }
    }
    assert!(ranking.iter().all(|m| m.error() <= 0.02));
}

#[test]
fn exact_single_resistor() {
    let solution = NetCalc::new(vec![100.0])
        .limits(Limits::default().max_size(1))
        .solve(100.0, Some(0.0))
        .unwrap();
    assert_eq!(solution.total, 1);
    assert_eq!(solution.entries.len(), 1);
    assert_eq!(solution.entries[0].error_percent, 0.0);
    assert_eq!(solution.entries[0].component_count, 1);
}

#[test]
fn exact_single_resistor_ranks_first_among_equivalents() {
    // (100 + 100) ∥ (100 + 100) and (100 ∥ 100) + (100 ∥ 100) are exact too
    let solution = NetCalc::new(vec![100.0]).solve(100.0, Some(0.0)).unwrap();
    assert_eq!(solution.total, 3);
    assert_eq!(solution.entries[0].expression, "100.00");
    assert_eq!(solution.entries[0].component_count, 1);
    assert!(solution.entries.iter().all(|e| e.error_percent == 0.0));
    assert_eq!(
        solution
            .entries
            .iter()
            .filter(|e| e.component_count == 1)
            .count(),
        1
    );
}

#[test]
fn unreachable_target_finds_nothing() {
    let solution = NetCalc::new(vec![1.0, 10.0, 100.0])
        .limits(Limits::default().max_size(2))
        .solve(1_000_000_000.0, Some(1.0))
        .unwrap();
    assert!(!solution.found());
    assert!(solution.entries.is_empty());
}

#[test]
fn color_code_spot_checks() {
    assert_eq!(four_band(4700.0), "Yellow-Violet-Red-Gold");
    assert_eq!(five_band(4700.0), "Yellow-Violet-Black-Brown-Brown");
    assert_eq!(smd(4700.0), "472");
    assert_eq!(smd(4.7), "4R7");
}

#[test]
fn eight_bit_ladder() {
    let spec = ladder(10_000.0, 8, 5.0).unwrap();
    assert_eq!(spec.r_count, 7);
    assert_eq!(spec.r2_count, 9);
    assert!((spec.lsb - 0.019531).abs() < 1e-6);
    let top = spec.samples.iter().find(|s| s.value == 255).unwrap();
    assert!((top.voltage - 4.980469).abs() < 1e-6);
}

#[test]
fn results_are_capped_for_display() {
    let solution = NetCalc::from_series(&E12)
        .limits(Limits::default().max_size(3))
        .solve(1000.0, Some(10.0))
        .unwrap();
    assert_eq!(solution.entries.len(), 50);
    assert!(solution.total > 50);
    assert_eq!(solution.hidden(), solution.total - 50);
    assert_eq!(solution.entries.iter().filter(|e| !e.codes.is_empty()).count(), 5);
}
