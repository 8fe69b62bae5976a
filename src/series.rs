//! Standard resistor value series.

use itertools::Itertools;
use lazy_static::lazy_static;

const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1],
    );
    /// RSeries constant for the E48 standard series
    pub static ref E48: RSeries = RSeries::new(&[
        1.00, 1.05, 1.10, 1.15, 1.21, 1.27, 1.33, 1.40, 1.47, 1.54, 1.62, 1.69, 1.78, 1.87, 1.96, 2.05,
        2.15, 2.26, 2.37, 2.49, 2.61, 2.74, 2.87, 3.01, 3.16, 3.32, 3.48, 3.65, 3.83, 4.02, 4.22, 4.42,
        4.64, 4.87, 5.11, 5.36, 5.62, 5.90, 6.19, 6.49, 6.81, 7.15, 7.50, 7.87, 8.25, 8.66, 9.09, 9.53,
    ]);
    /// RSeries constant for the E96 standard series
    pub static ref E96: RSeries = RSeries::new(&[
        1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40, 1.43,
        1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00, 2.05, 2.10,
        2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87, 2.94, 3.01, 3.09,
        3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12, 4.22, 4.32, 4.42, 4.53,
        4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90, 6.04, 6.19, 6.34, 6.49, 6.65,
        6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45, 8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
    ]);
    /// RSeries constant for the E192 standard series
    pub static ref E192: RSeries = RSeries::new(&[
        1.00, 1.01, 1.02, 1.04, 1.05, 1.06, 1.07, 1.09, 1.10, 1.11, 1.13, 1.14, 1.15, 1.17, 1.18, 1.20,
        1.21, 1.23, 1.24, 1.26, 1.27, 1.29, 1.30, 1.32, 1.33, 1.35, 1.37, 1.38, 1.40, 1.42, 1.43, 1.45,
        1.47, 1.49, 1.50, 1.52, 1.54, 1.56, 1.58, 1.60, 1.62, 1.64, 1.65, 1.67, 1.69, 1.72, 1.74, 1.76,
        1.78, 1.80, 1.82, 1.84, 1.87, 1.89, 1.91, 1.93, 1.96, 1.98, 2.00, 2.03, 2.05, 2.08, 2.10, 2.13,
        2.15, 2.18, 2.21, 2.23, 2.26, 2.29, 2.32, 2.34, 2.37, 2.40, 2.43, 2.46, 2.49, 2.52, 2.55, 2.58,
        2.61, 2.64, 2.67, 2.71, 2.74, 2.77, 2.80, 2.84, 2.87, 2.91, 2.94, 2.98, 3.01, 3.05, 3.09, 3.12,
        3.16, 3.20, 3.24, 3.28, 3.32, 3.36, 3.40, 3.44, 3.48, 3.52, 3.57, 3.61, 3.65, 3.70, 3.74, 3.79,
        3.83, 3.88, 3.92, 3.97, 4.02, 4.07, 4.12, 4.17, 4.22, 4.27, 4.32, 4.37, 4.42, 4.48, 4.53, 4.59,
        4.64, 4.70, 4.75, 4.81, 4.87, 4.93, 4.99, 5.05, 5.11, 5.17, 5.23, 5.30, 5.36, 5.42, 5.49, 5.56,
        5.62, 5.69, 5.76, 5.83, 5.90, 5.97, 6.04, 6.12, 6.19, 6.26, 6.34, 6.42, 6.49, 6.57, 6.65, 6.73,
        6.81, 6.90, 6.98, 7.06, 7.15, 7.23, 7.32, 7.41, 7.50, 7.59, 7.68, 7.77, 7.87, 7.96, 8.06, 8.16,
        8.25, 8.35, 8.45, 8.56, 8.66, 8.76, 8.87, 8.98, 9.09, 9.20, 9.31, 9.42, 9.53, 9.65, 9.76, 9.88,
    ]);
}

/// The parts bin offered when no series is chosen: 62 common values from 1 ohm to 10 Mohm.
pub const STOCK: &[f64] = &[
    1.0, 7.5, 10.0, 18.0, 22.0, 24.0, 39.0, 47.0, 68.0, 75.0, 100.0, 120.0, 130.0, 150.0, 200.0,
    220.0, 330.0, 360.0, 470.0, 560.0, 820.0, 1e3, 1.2e3, 1.8e3, 2.2e3, 2.7e3, 3e3, 3.6e3, 3.9e3,
    4.7e3, 5.6e3, 6.8e3, 8.2e3, 10e3, 12e3, 18e3, 22e3, 33e3, 39e3, 47e3, 56e3, 68e3, 100e3,
    120e3, 130e3, 150e3, 180e3, 220e3, 270e3, 330e3, 390e3, 470e3, 510e3, 560e3, 680e3, 750e3,
    1e6, 2.7e6, 3e6, 3.3e6, 4.7e6, 10e6,
];

/// A series of resistor values, constants are provided for standard resistor array values.
#[derive(Debug)]
pub struct RSeries {
    pub values: Box<[f64]>,
}

impl RSeries {
    /// Defines a new series of resistor values. Only the decade needs to be provided, multiples
    /// upto Val * 1M will be generated automatically.
    /// # Example
    /// ```
    ///     # use resistor_net::RSeries;
    ///     let piher = RSeries::new(&[1.0, 2.0, 2.2, 2.5, 4.7, 5.0]);
    ///     assert_eq!(piher.len(), 42);
    /// ```
    pub fn new(series: &[f64]) -> Self {
        RSeries {
            values: series
                .iter()
                .cartesian_product(POWERS.iter())
                .map(|(val, pow)| round_sig(val * pow))
                .sorted_by(|a, b| a.total_cmp(b))
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        RSeries {
            values: base
                .iter()
                .cloned()
                .chain(
                    add.iter()
                        .cartesian_product(POWERS.iter())
                        .map(|(val, pow)| round_sig(val * pow)),
                )
                .sorted_by(|a, b| a.total_cmp(b))
                .dedup()
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    /// Looks a series up by name (`"e3"`, `"E24"`, ...).
    pub fn by_name(name: &str) -> Option<&'static RSeries> {
        match name.to_ascii_uppercase().as_str() {
            "E3" => Some(&E3),
            "E6" => Some(&E6),
            "E12" => Some(&E12),
            "E24" => Some(&E24),
            "E48" => Some(&E48),
            "E96" => Some(&E96),
            "E192" => Some(&E192),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Drops the float noise left by scaling a decade value, so 4.7 * 1e3 is exactly 4700.
fn round_sig(r: f64) -> f64 {
    let exp = 2 - r.log10().floor() as i32;
    if exp >= 0 {
        let scale = 10_f64.powi(exp);
        (r * scale).round() / scale
    } else {
        let scale = 10_f64.powi(-exp);
        (r / scale).round() * scale
    }
}
