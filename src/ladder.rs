//! R-2R ladder DAC sizing.

use serde::Serialize;

use crate::codes::ColorCode;
use crate::error::{Error, Result};

/// Reference voltage used when the caller passes a non-positive one.
pub const DEFAULT_VREF: f64 = 5.0;

/// Bit depths the calculator accepts.
pub const BITS: std::ops::RangeInclusive<u32> = 2..=24;

/// Ladders this narrow list every input code; wider ones get [`SAMPLES`] evenly spaced codes.
const EXHAUSTIVE_BITS: u32 = 4;
const SAMPLES: u64 = 16;

/// Output voltage for one digital input code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderSample {
    /// The code in binary, MSB first, `bits` digits wide.
    pub code: String,
    pub value: u64,
    pub voltage: f64,
}

/// Parts list and transfer characteristics of an R-2R ladder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderSpec {
    pub r: f64,
    pub r2: f64,
    pub bits: u32,
    pub vref: f64,
    /// Resistors of value R.
    pub r_count: u32,
    /// Resistors of value 2R, including the termination.
    pub r2_count: u32,
    /// Voltage step of one LSB.
    pub lsb: f64,
    /// Output at the all-ones code.
    pub full_scale: f64,
    /// Thevenin output impedance, equal to R at every code.
    pub output_impedance: f64,
    pub r_code: ColorCode,
    pub r2_code: ColorCode,
    pub samples: Vec<LadderSample>,
}

/// Sizes an R-2R ladder of `bits` bits built from `r` and `2r` against reference `vref`.
///
/// ```
/// # use resistor_net::ladder::ladder;
/// let spec = ladder(10_000.0, 8, 5.0).unwrap();
/// assert_eq!((spec.r_count, spec.r2_count), (7, 9));
/// assert_eq!(spec.lsb, 5.0 / 256.0);
/// ```
pub fn ladder(r: f64, bits: u32, vref: f64) -> Result<LadderSpec> {
    if !(r > 0.0 && r.is_finite()) {
        return Err(Error::InvalidValue(r));
    }
    if !BITS.contains(&bits) {
        return Err(Error::InvalidBits(bits));
    }
    let vref = if vref > 0.0 { vref } else { DEFAULT_VREF };

    let steps = 1_u64 << bits;
    let max = steps - 1;
    let lsb = vref / steps as f64;
    let voltage = |value: u64| vref * value as f64 / steps as f64;

    let values: Vec<u64> = if bits <= EXHAUSTIVE_BITS {
        (0..=max).collect()
    } else {
        (0..SAMPLES).map(|i| i * max / (SAMPLES - 1)).collect()
    };
    let samples = values
        .into_iter()
        .map(|value| LadderSample {
            code: format!("{:0width$b}", value, width = bits as usize),
            value,
            voltage: voltage(value),
        })
        .collect();

    Ok(LadderSpec {
        r,
        r2: 2.0 * r,
        bits,
        vref,
        r_count: bits - 1,
        r2_count: bits + 1,
        lsb,
        full_scale: voltage(max),
        output_impedance: r,
        r_code: ColorCode::new(r),
        r2_code: ColorCode::new(2.0 * r),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_bit_ladder() {
        let spec = ladder(10_000.0, 8, 5.0).unwrap();
        assert_eq!(spec.r_count, 7);
        assert_eq!(spec.r2_count, 9);
        assert!((spec.lsb - 0.019531).abs() < 1e-6);
        assert!((spec.full_scale - 4.980469).abs() < 1e-6);

        assert_eq!(spec.samples.len(), 16);
        let last = spec.samples.last().unwrap();
        assert_eq!(last.value, 255);
        assert_eq!(last.code, "11111111");
        assert!((last.voltage - 5.0 * 255.0 / 256.0).abs() < 1e-12);
        assert_eq!(spec.samples[0].value, 0);
        assert_eq!(spec.samples[1].value, 17);
    }

    #[test]
    fn narrow_ladders_list_every_code() {
        let spec = ladder(1000.0, 3, 3.3).unwrap();
        let codes: Vec<&str> = spec.samples.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["000", "001", "010", "011", "100", "101", "110", "111"]
        );
        assert_eq!(spec.r2, 2000.0);
        assert_eq!(spec.r2_code.four_band, "Red-Black-Red-Gold");
    }

    #[test]
    fn non_positive_vref_falls_back() {
        let spec = ladder(1000.0, 4, 0.0).unwrap();
        assert_eq!(spec.vref, DEFAULT_VREF);
        assert_eq!(spec.samples.len(), 16);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(ladder(1000.0, 1, 5.0), Err(Error::InvalidBits(1))));
        assert!(matches!(ladder(1000.0, 25, 5.0), Err(Error::InvalidBits(25))));
        assert!(matches!(ladder(0.0, 8, 5.0), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn widest_ladder_samples_full_scale() {
        let spec = ladder(10_000.0, 24, 5.0).unwrap();
        assert_eq!(spec.samples.last().unwrap().value, (1 << 24) - 1);
    }
}
