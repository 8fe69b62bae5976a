//! A resistor network finder for circuit design.
//!
//! Given a bin of available resistor values, it builds every series/parallel network of up to
//! five resistors, keeps those within a tolerance of a target resistance, and lists them from
//! the most to the least accurate, along with the colour and SMD codes of the parts used.
//!
//! # Example
//! A 3.7K resistor is not in the E12 series, but a few E12 parts get close:
//! ```rust
//! use resistor_net::*;
//!
//! let calc = NetCalc::from_series(&E12).limits(Limits::default().max_size(2));
//! let solution = calc.solve(3700.0, Some(1.0)).expect("valid input");
//!
//! let best = &solution.entries[0];
//! println!("{}", solution);
//! assert!(best.error_percent <= 1.0);
//! assert!(best.component_count <= 2);
//! ```
//! Printing the solution produces a report like:
//! ```text
//! -- Networks within 1.00% tolerance of 3700.00 Ω --
//!    Found 7 combinations, showing top 7 sorted by error
//!
//! #1 (1000.00 + 2700.00) = 3700.00 Ω (2 resistors, error 0.00%)
//!     Component resistor codes:
//!       1000.00 Ω: 4-band: Brown-Black-Red-Gold | 5-band: Brown-Black-Black-Brown-Brown | SMD: 102
//!       2700.00 Ω: 4-band: Red-Violet-Red-Gold | 5-band: Red-Violet-Black-Brown-Brown | SMD: 272
//! ```
//!
//! The R-2R ladder calculator is independent of the network search:
//! ```rust
//! let spec = resistor_net::ladder(10_000.0, 8, 5.0).unwrap();
//! assert_eq!(spec.r2_count, 9);
//! ```

use log::info;
use serde::Serialize;

pub mod codes;
pub mod config;
mod error;
pub mod ladder;
pub mod network;
pub mod rank;
mod report;
mod series;
mod value;

#[cfg(feature = "expr_builder")]
mod expr;

pub use codes::{five_band, four_band, smd, ColorCode};
pub use config::{Limits, DEFAULT_TOLERANCE, MAX_TRACKED_PARTS};
pub use error::{Error, Result};
#[cfg(feature = "expr_builder")]
pub use expr::eval_target;
pub use ladder::{ladder, LadderSample, LadderSpec};
pub use network::{build, Network, NetworksBySize};
pub use rank::{rank, Match, Ranking};
pub use series::{RSeries, E12, E192, E24, E3, E48, E6, E96, STOCK};
pub use value::{engineering, format_value, parse_value, rkm};

/// One displayed network of a [`Solution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub expression: String,
    pub resistance: f64,
    pub component_count: usize,
    pub error_percent: f64,
    /// Codes of the distinct parts used. Only filled in for the leading entries.
    pub codes: Vec<ColorCode>,
}

/// The answer to one target/tolerance query.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub target: f64,
    pub tolerance: f64,
    /// Matches found, including those not listed in `entries`.
    pub total: usize,
    /// How many leading entries carry codes.
    pub top_codes: usize,
    pub entries: Vec<Entry>,
}

impl Solution {
    pub fn found(&self) -> bool {
        self.total > 0
    }

    /// Matches found but left out of `entries`.
    pub fn hidden(&self) -> usize {
        self.total - self.entries.len()
    }
}

/// Main calculator struct
#[derive(Debug, Clone)]
pub struct NetCalc {
    available: Vec<f64>,
    limits: Limits,
}

impl NetCalc {
    /// Creates a calculator drawing parts from `available`.
    /// # Examples
    /// ```
    ///     # use resistor_net::*;
    ///     let calc = NetCalc::new(vec![100.0, 220.0, 470.0]);
    ///     let exact = calc.solve(320.0, Some(0.0)).unwrap();
    ///     assert_eq!(exact.entries[0].expression, "(100.00 + 220.00)");
    /// ```
    pub fn new(available: Vec<f64>) -> Self {
        NetCalc {
            available,
            limits: Limits::default(),
        }
    }

    /// Creates a calculator drawing parts from a standard series.
    pub fn from_series(series: &RSeries) -> Self {
        Self::new(series.iter().cloned().collect())
    }

    /// Creates a calculator from the default parts bin, [`STOCK`].
    pub fn stock() -> Self {
        Self::new(STOCK.to_vec())
    }

    pub fn limits(self, limits: Limits) -> Self {
        NetCalc { limits, ..self }
    }

    pub fn available(&self) -> &[f64] {
        &self.available
    }

    /// Builds every network the configured parts and limits allow.
    pub fn networks(&self) -> Result<NetworksBySize> {
        self.check_available()?;
        build(
            &self.available,
            self.limits.max_size,
            self.limits.max_networks,
        )
    }

    /// Finds the networks within `tolerance` percent of `target` ohms, defaulting to
    /// [`DEFAULT_TOLERANCE`].
    ///
    /// Input is validated before anything is enumerated. Finding nothing is not an error: the
    /// solution simply has no entries.
    pub fn solve(&self, target: f64, tolerance: Option<f64>) -> Result<Solution> {
        let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !(target > 0.0 && target.is_finite()) {
            return Err(Error::InvalidTarget(target));
        }
        if !(tolerance >= 0.0 && tolerance.is_finite()) {
            return Err(Error::InvalidTolerance(tolerance));
        }

        let networks = self.networks()?;
        let ranking = rank(&networks, target, tolerance, self.limits.max_results)?;
        info!(
            "target {} ± {}%: {} matches from {} networks",
            target,
            tolerance,
            ranking.total(),
            networks.len()
        );

        let entries = ranking
            .iter()
            .enumerate()
            .map(|(idx, m)| Entry {
                expression: m.expression().to_string(),
                resistance: m.resistance(),
                component_count: m.component_count(),
                error_percent: m.error_percent(),
                codes: if idx < self.limits.top_codes {
                    m.component_codes()
                } else {
                    Vec::new()
                },
            })
            .collect();

        Ok(Solution {
            target,
            tolerance,
            total: ranking.total(),
            top_codes: self.limits.top_codes,
            entries,
        })
    }

    fn check_available(&self) -> Result<()> {
        if self.available.is_empty() {
            return Err(Error::NoAvailableValues);
        }
        match self
            .available
            .iter()
            .find(|&&r| !(r > 0.0 && r.is_finite()))
        {
            Some(&r) => Err(Error::InvalidValue(r)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_before_enumerating() {
        let calc = NetCalc::new(vec![]);
        assert!(matches!(calc.solve(0.0, None), Err(Error::InvalidTarget(_))));
        assert!(matches!(calc.solve(100.0, None), Err(Error::NoAvailableValues)));

        let calc = NetCalc::new(vec![100.0, 0.0]);
        assert!(matches!(calc.solve(100.0, None), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn codes_only_for_leading_entries() {
        let calc = NetCalc::new(vec![100.0, 220.0]).limits(Limits::default().top_codes(2));
        let solution = calc.solve(300.0, Some(50.0)).unwrap();
        assert!(solution.entries.len() > 2);
        assert!(solution.entries[..2].iter().all(|e| !e.codes.is_empty()));
        assert!(solution.entries[2..].iter().all(|e| e.codes.is_empty()));
    }

    #[test]
    fn default_tolerance_is_five_percent() {
        let solution = NetCalc::new(vec![104.0])
            .limits(Limits::default().max_size(1))
            .solve(100.0, None)
            .unwrap();
        assert_eq!(solution.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(solution.total, 1);

        let strict = NetCalc::new(vec![106.0])
            .limits(Limits::default().max_size(1))
            .solve(100.0, None)
            .unwrap();
        assert!(!strict.found());
    }
}
