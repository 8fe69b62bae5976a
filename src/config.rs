//! Resource limits for the network search.

use serde::Serialize;

/// Individual resistor values remembered per network. Larger networks still compute the right
/// resistance but only list their first eight parts.
pub const MAX_TRACKED_PARTS: usize = 8;

/// Tolerance in percent used when the caller gives none.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Bounds on enumeration and reporting. Every bound truncates silently when reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limits {
    /// Largest network, in resistors.
    pub max_size: usize,
    /// Networks kept per network size.
    pub max_networks: usize,
    /// Matches listed in a solution.
    pub max_results: usize,
    /// Leading matches that get per-component codes.
    pub top_codes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_size: 5,
            max_networks: 10_000,
            max_results: 50,
            top_codes: 5,
        }
    }
}

impl Limits {
    pub fn max_size(self, max_size: usize) -> Self {
        Limits { max_size, ..self }
    }

    pub fn max_networks(self, max_networks: usize) -> Self {
        Limits {
            max_networks,
            ..self
        }
    }

    pub fn max_results(self, max_results: usize) -> Self {
        Limits {
            max_results,
            ..self
        }
    }

    pub fn top_codes(self, top_codes: usize) -> Self {
        Limits { top_codes, ..self }
    }
}
