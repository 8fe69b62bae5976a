//! Conversion between resistor labels and ohm values.

use signifix::metric;

/// Parses a resistor label such as `"4.7K"`, `"1 kΩ"` or `"220 Ω"` into ohms.
///
/// The label must start with a decimal number (leading whitespace is skipped). The next
/// whitespace separated word, if any, is inspected for a multiplier: a `K` (either case) scales
/// by 1000, an `M` (either case) by 1,000,000. Anything else after the number is ignored.
/// Returns `None` only when no leading number can be found.
///
/// Only decimal notation is read (digits, an optional fraction and exponent). Hexadecimal floats
/// and `inf`/`nan` are not numbers here, so `"0x10"` reads as 0 and `"inf"` as `None`.
///
/// ```
/// # use resistor_net::parse_value;
/// assert_eq!(parse_value("4.7K"), Some(4700.0));
/// assert_eq!(parse_value("1M Ω"), Some(1e6));
/// assert_eq!(parse_value("330 Ω"), Some(330.0));
/// assert_eq!(parse_value("ohm"), None);
/// ```
pub fn parse_value(label: &str) -> Option<f64> {
    let label = label.trim_start();
    let len = number_prefix(label);
    let value: f64 = label[..len].parse().ok()?;
    let suffix: String = label[len..]
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .take(9)
        .collect();
    if suffix.contains(&['K', 'k'][..]) {
        Some(value * 1e3)
    } else if suffix.contains(&['M', 'm'][..]) {
        Some(value * 1e6)
    } else {
        Some(value)
    }
}

/// Length in bytes of the longest prefix of `s` that reads as a decimal float.
fn number_prefix(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_end = digits(i);
    let mut end = int_end;
    let mut seen = int_end > i;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits(end + 1);
        seen |= frac_end > end + 1;
        end = frac_end;
    }
    if !seen {
        return 0;
    }
    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut j = end + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

fn format_rval(r: f64, unit: &str) -> String {
    let mut val = format!("{}", r);
    if val.contains('.') {
        val.replace('.', unit)
    } else {
        val.push_str(unit);
        val
    }
}

/// Renders `r` in RKM marking, where the multiplier letter stands in for the decimal point.
///
/// ```
/// # use resistor_net::rkm;
/// assert_eq!(rkm(4700.0), "4K7");
/// assert_eq!(rkm(100.0), "100R");
/// assert_eq!(rkm(2.2e6), "2M2");
/// ```
pub fn rkm(r: f64) -> String {
    if r < 1000.0 {
        format_rval(r, "R")
    } else if r < 1_000_000.0 {
        format_rval(r / 1000.0, "K")
    } else {
        format_rval(r / 1_000_000.0, "M")
    }
}

/// Renders `r` as a label that [`parse_value`] reads back, e.g. `"4.7K"` or `"100"`.
pub fn format_value(r: f64) -> String {
    let (scaled, unit) = if r >= 1_000_000.0 {
        (r / 1_000_000.0, "M")
    } else if r >= 1000.0 {
        (r / 1000.0, "K")
    } else {
        (r, "")
    };
    // Strip float noise such as 4.699999999999999
    let rounded = (scaled * 1e6).round() / 1e6;
    format!("{}{}", rounded, unit)
}

/// Renders `r` with an SI prefix and four significant digits, e.g. `"4.700 k"`.
pub fn engineering(r: f64) -> String {
    match metric::Signifix::try_from(r) {
        Ok(sig) => format!("{}", sig),
        Err(_) => format!("{:.2}", r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_value("100"), Some(100.0));
        assert_eq!(parse_value("  7.5 Ω"), Some(7.5));
        assert_eq!(parse_value(".5"), Some(0.5));
        assert_eq!(parse_value("1e3"), Some(1000.0));
    }

    #[test]
    fn suffixes_are_case_insensitive() {
        assert_eq!(parse_value("2.2k"), Some(2200.0));
        assert_eq!(parse_value("1 kΩ"), Some(1000.0));
        assert_eq!(parse_value("4m"), Some(4e6));
        assert_eq!(parse_value("10MEG"), Some(10e6));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_value("47xyz"), Some(47.0));
        assert_eq!(parse_value("1e"), Some(1.0));
        assert_eq!(parse_value("12.Q"), Some(12.0));
    }

    #[test]
    fn only_decimal_notation() {
        assert_eq!(parse_value("0x10"), Some(0.0));
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("nan"), None);
    }

    #[test]
    fn no_number_is_none() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("K"), None);
        assert_eq!(parse_value("-"), None);
        assert_eq!(parse_value("."), None);
    }

    #[test]
    fn labels_parse_back() {
        for &r in &[1.0, 7.5, 470.0, 4700.0, 56_000.0, 2.7e6, 10e6] {
            assert_eq!(parse_value(&format_value(r)), Some(r));
        }
    }

    #[test]
    fn rkm_marking() {
        assert_eq!(rkm(1.0), "1R");
        assert_eq!(rkm(7.5), "7R5");
        assert_eq!(rkm(10_000.0), "10K");
    }
}
