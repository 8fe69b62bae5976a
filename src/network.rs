//! Enumeration of series/parallel resistor networks.
//!
//! Networks are built bottom-up by size: every network of `n` resistors is the series or
//! parallel combination of two smaller networks whose sizes add up to `n`. Each size bucket only
//! reads from strictly smaller buckets, so a bucket is a pure function of the ones before it.

use log::{debug, trace, warn};
use serde::Serialize;

use std::fmt;

use crate::config::MAX_TRACKED_PARTS;
use crate::error::Result;

/// One way of wiring resistors together, with its equivalent resistance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    resistance: f64,
    count: usize,
    expression: String,
    parts: Box<[f64]>,
}

impl Network {
    /// A network made of a single resistor.
    pub fn single(r: f64) -> Self {
        Network {
            resistance: r,
            count: 1,
            expression: format!("{:.2}", r),
            parts: Box::new([r]),
        }
    }

    /// `a` and `b` in series.
    pub fn series(a: &Network, b: &Network) -> Self {
        Network {
            resistance: a.resistance + b.resistance,
            count: a.count + b.count,
            expression: format!("({} + {})", a.expression, b.expression),
            parts: merge_parts(a, b),
        }
    }

    /// `a` and `b` in parallel, or `None` when either side is not strictly positive.
    pub fn parallel(a: &Network, b: &Network) -> Option<Self> {
        if !(a.resistance > 0.0 && b.resistance > 0.0) {
            return None;
        }
        Some(Network {
            resistance: 1.0 / (1.0 / a.resistance + 1.0 / b.resistance),
            count: a.count + b.count,
            expression: format!("({} ∥ {})", a.expression, b.expression),
            parts: merge_parts(a, b),
        })
    }

    /// Equivalent resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Number of resistors in the network.
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Fully parenthesised topology, `+` for series and `∥` for parallel.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Individual resistor values in construction order, at most [`MAX_TRACKED_PARTS`] of them.
    pub fn parts(&self) -> &[f64] {
        &self.parts
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {:.2} Ω", self.expression, self.resistance)
    }
}

fn merge_parts(a: &Network, b: &Network) -> Box<[f64]> {
    a.parts
        .iter()
        .chain(b.parts.iter())
        .take(MAX_TRACKED_PARTS)
        .cloned()
        .collect::<Vec<f64>>()
        .into_boxed_slice()
}

/// Networks grouped by the number of resistors they use.
#[derive(Debug, Default)]
pub struct NetworksBySize {
    buckets: Vec<Vec<Network>>,
    truncated: Vec<bool>,
}

impl NetworksBySize {
    /// All networks of exactly `size` resistors. Sizes outside the built range are empty.
    pub fn bucket(&self, size: usize) -> &[Network] {
        size.checked_sub(1)
            .and_then(|idx| self.buckets.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether candidates of `size` resistors were dropped because the bucket was full.
    pub fn truncated(&self, size: usize) -> bool {
        size.checked_sub(1)
            .and_then(|idx| self.truncated.get(idx))
            .copied()
            .unwrap_or(false)
    }

    /// Largest network size that was built.
    pub fn max_size(&self) -> usize {
        self.buckets.len()
    }

    /// Every network, smallest sizes first.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.buckets.iter().flatten()
    }

    /// Total number of networks over all sizes.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Enumerates every series/parallel network of `1..=max_size` resistors drawn from `available`.
///
/// Each size keeps at most `max_networks` networks; candidates past that are dropped without
/// error and the size is marked [`truncated`](NetworksBySize::truncated). An empty `available`
/// yields empty buckets.
///
/// ```
/// # use resistor_net::network::build;
/// let nets = build(&[100.0, 220.0], 2, 10_000).unwrap();
/// assert_eq!(nets.bucket(1).len(), 2);
/// assert_eq!(nets.bucket(2).len(), 6);
/// ```
pub fn build(available: &[f64], max_size: usize, max_networks: usize) -> Result<NetworksBySize> {
    let mut buckets: Vec<Vec<Network>> = Vec::new();
    buckets.try_reserve_exact(max_size)?;
    let mut truncated = Vec::new();
    truncated.try_reserve_exact(max_size)?;

    if max_size == 0 {
        return Ok(NetworksBySize { buckets, truncated });
    }

    let mut singles = Vec::new();
    singles.try_reserve_exact(available.len().min(max_networks))?;
    singles.extend(available.iter().take(max_networks).map(|&r| Network::single(r)));
    if available.len() > max_networks {
        warn!(
            "{} available values exceed the cap of {} networks",
            available.len(),
            max_networks
        );
    }
    debug!("size 1: {} networks", singles.len());
    buckets.push(singles);
    truncated.push(available.len() > max_networks);

    for n in 2..=max_size {
        let (bucket, dropped) = combine(&buckets, n, max_networks)?;
        debug!("size {}: {} networks", n, bucket.len());
        buckets.push(bucket);
        truncated.push(dropped);
    }

    Ok(NetworksBySize { buckets, truncated })
}

/// Upper bound on the candidates produced for size `n`, used to pre-size its bucket.
fn candidates(smaller: &[Vec<Network>], n: usize) -> usize {
    (1..n)
        .map(|i| {
            let (a, b) = (smaller[i - 1].len(), smaller[n - i - 1].len());
            let pairs = if i == n - i {
                a.saturating_mul(a.saturating_add(1)) / 2
            } else {
                a.saturating_mul(b)
            };
            pairs.saturating_mul(2)
        })
        .fold(0, usize::saturating_add)
}

/// Builds the bucket for networks of `n` resistors from `smaller`, the buckets of sizes `1..n`.
/// The flag is set when a candidate was dropped for lack of room.
fn combine(
    smaller: &[Vec<Network>],
    n: usize,
    max_networks: usize,
) -> Result<(Vec<Network>, bool)> {
    let mut out = Vec::new();
    out.try_reserve_exact(candidates(smaller, n).min(max_networks))?;
    let mut dropped = false;

    'splits: for i in 1..n {
        let j = n - i;
        let (left, right) = (&smaller[i - 1], &smaller[j - 1]);
        trace!("size {}: combining {} x {} networks", n, left.len(), right.len());

        for (ai, a) in left.iter().enumerate() {
            // Pair each unordered couple once when both halves come from the same bucket
            let start = if i == j { ai } else { 0 };
            for b in &right[start..] {
                for net in Some(Network::series(a, b))
                    .into_iter()
                    .chain(Network::parallel(a, b))
                {
                    if out.len() >= max_networks {
                        dropped = true;
                        break 'splits;
                    }
                    out.push(net);
                }
            }
        }
    }

    if dropped {
        warn!("size {}: capped at {} networks", n, max_networks);
    }
    Ok((out, dropped))
}
