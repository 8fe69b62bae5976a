//! Filtering and ordering of networks against a target resistance.

use log::debug;
use serde::Serialize;

use std::ops::Deref;

use crate::codes::ColorCode;
use crate::error::{Error, Result};
use crate::network::{Network, NetworksBySize};

/// Two component values closer than this are listed once.
const SAME_VALUE_EPSILON: f64 = 0.01;

/// A network that lands within tolerance of the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    network: Network,
    error: f64,
}

impl Match {
    /// Relative error `|R - target| / target`.
    pub fn error(&self) -> f64 {
        self.error
    }

    pub fn error_percent(&self) -> f64 {
        self.error * 100.0
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Markings for each distinct component value, in the order the values first appear.
    ///
    /// Values within 0.01 ohm of one already listed are skipped.
    pub fn component_codes(&self) -> Vec<ColorCode> {
        let mut seen: Vec<f64> = Vec::with_capacity(self.network.parts().len());
        for &part in self.network.parts() {
            if seen.iter().all(|s| (s - part).abs() >= SAME_VALUE_EPSILON) {
                seen.push(part);
            }
        }
        seen.into_iter().map(ColorCode::new).collect()
    }
}

impl Deref for Match {
    type Target = Network;

    fn deref(&self) -> &Network {
        &self.network
    }
}

/// Matches ordered from lowest to highest error, truncated for display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ranking {
    matches: Vec<Match>,
    total: usize,
}

impl Ranking {
    /// The displayed matches. Equal errors are ordered by fewer resistors first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// How many networks matched, including those cut from the display list.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Matches that were found but not listed.
    pub fn hidden(&self) -> usize {
        self.total - self.matches.len()
    }

    pub fn found(&self) -> bool {
        self.total > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }
}

/// Keeps the networks within `tolerance` percent of `target`, best first, listing at most
/// `max_results` of them.
///
/// ```
/// # use resistor_net::{network::build, rank::rank};
/// let nets = build(&[100.0], 2, 10_000).unwrap();
/// let ranking = rank(&nets, 50.0, 1.0, 50).unwrap();
/// assert_eq!(ranking.total(), 1);
/// assert_eq!(ranking.matches()[0].expression(), "(100.00 ∥ 100.00)");
/// ```
pub fn rank(
    networks: &NetworksBySize,
    target: f64,
    tolerance: f64,
    max_results: usize,
) -> Result<Ranking> {
    if !(target > 0.0 && target.is_finite()) {
        return Err(Error::InvalidTarget(target));
    }
    if !(tolerance >= 0.0 && tolerance.is_finite()) {
        return Err(Error::InvalidTolerance(tolerance));
    }
    let limit = tolerance / 100.0;

    let mut matches: Vec<Match> = networks
        .iter()
        .filter_map(|net| {
            let error = (net.resistance() - target).abs() / target;
            if error <= limit {
                Some(Match {
                    network: net.clone(),
                    error,
                })
            } else {
                None
            }
        })
        .collect();
    matches.sort_by(|a, b| {
        a.error
            .total_cmp(&b.error)
            .then(a.component_count().cmp(&b.component_count()))
    });

    let total = matches.len();
    matches.truncate(max_results);
    debug!(
        "{} of {} networks within {}% of {}",
        total,
        networks.len(),
        tolerance,
        target
    );

    Ok(Ranking { matches, total })
}
