//! Resistor marking codes: 4-band and 5-band colour codes and SMD numeric codes.
//!
//! All encoders are total: non-positive input yields [`INVALID`] instead of an error, and
//! magnitudes outside what the colour tables can express saturate at the nearest band.

use serde::Serialize;

/// Marker returned for values that cannot be encoded.
pub const INVALID: &str = "(invalid)";

/// Band colours indexed by digit. The multiplier band for `10^k` uses the colour of digit `k`.
pub const COLOR_NAMES: [&str; 10] = [
    "Black", "Brown", "Red", "Orange", "Yellow", "Green", "Blue", "Violet", "Grey", "White",
];

/// Highest multiplier exponent with a colour (White, `10^9`).
const MAX_EXP: i32 = 9;

fn color(d: i64) -> &'static str {
    COLOR_NAMES[d.clamp(0, 9) as usize]
}

/// Splits `ohms` into `sig * 10^exp` with `sig` carrying `digits` significant figures.
///
/// `exp` is clamped to the multiplier table, so values below one ohm or above the White
/// multiplier are approximated by the boundary band.
fn normalize(ohms: f64, digits: i32) -> (i64, i32) {
    let lo = 10_i64.pow(digits as u32 - 1);
    let hi = lo * 10;

    let mut exp = (ohms.log10().floor() as i32 - (digits - 1)).clamp(0, MAX_EXP);
    let mut sig = (ohms / 10_f64.powi(exp)).round() as i64;
    if sig >= hi {
        sig /= 10;
        exp += 1;
    }
    if sig < lo {
        sig *= 10;
        exp -= 1;
    }
    (sig.min(hi - 1), exp.clamp(0, MAX_EXP))
}

/// 4-band colour code with a Gold (5%) tolerance band.
///
/// ```
/// # use resistor_net::codes::four_band;
/// assert_eq!(four_band(4700.0), "Yellow-Violet-Red-Gold");
/// assert_eq!(four_band(0.0), "(invalid)");
/// ```
pub fn four_band(ohms: f64) -> String {
    if !(ohms > 0.0) {
        return INVALID.to_string();
    }
    let (sig, exp) = normalize(ohms, 2);
    format!(
        "{}-{}-{}-Gold",
        color(sig / 10),
        color(sig % 10),
        color(exp as i64)
    )
}

/// 5-band colour code with a Brown (1%) tolerance band.
///
/// ```
/// # use resistor_net::codes::five_band;
/// assert_eq!(five_band(4700.0), "Yellow-Violet-Black-Brown-Brown");
/// ```
pub fn five_band(ohms: f64) -> String {
    if !(ohms > 0.0) {
        return INVALID.to_string();
    }
    let (sig, exp) = normalize(ohms, 3);
    format!(
        "{}-{}-{}-{}-Brown",
        color(sig / 100),
        color((sig / 10) % 10),
        color(sig % 10),
        color(exp as i64)
    )
}

/// 3-digit SMD marking, or R-notation (`4R7`) below ten ohms.
///
/// ```
/// # use resistor_net::codes::smd;
/// assert_eq!(smd(4700.0), "472");
/// assert_eq!(smd(4.7), "4R7");
/// ```
pub fn smd(ohms: f64) -> String {
    if !(ohms > 0.0) {
        return INVALID.to_string();
    }
    if ohms < 10.0 {
        let whole = ohms.trunc();
        // A tenth that rounds up to 10 wraps to 0 without carrying: 9.96 is "9R0"
        let frac = ((ohms - whole) * 10.0).round() as i64 % 10;
        return format!("{}R{}", whole as i64, frac);
    }
    let (sig, exp) = normalize(ohms, 2);
    format!("{}{}", sig, exp)
}

/// All markings of a single resistor value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorCode {
    pub value: f64,
    pub four_band: String,
    pub five_band: String,
    pub smd: String,
}

impl ColorCode {
    pub fn new(value: f64) -> Self {
        ColorCode {
            value,
            four_band: four_band(value),
            five_band: five_band(value),
            smd: smd(value),
        }
    }
}
