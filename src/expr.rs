//! Arithmetic target values, such as `"2*4700"` or `"1/(1/330+1/470)"`.

use crate::error::{Error, Result};
use crate::value::parse_value;

/// Evaluates `input` as an arithmetic expression, falling back to a resistor label like `"4.7K"`.
///
/// ```
/// # use resistor_net::eval_target;
/// assert_eq!(eval_target("2*4700").unwrap(), 9400.0);
/// assert_eq!(eval_target("4.7K").unwrap(), 4700.0);
/// assert!(eval_target("ohm").is_err());
/// ```
pub fn eval_target(input: &str) -> Result<f64> {
    match meval::eval_str(input) {
        Ok(v) => Ok(v),
        Err(e) => parse_value(input).ok_or_else(|| Error::Expression(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_formula() {
        let r = eval_target("1/(1/300+1/600)").unwrap();
        assert!((r - 200.0).abs() < 1e-9);
    }

    #[test]
    fn labels_fall_through() {
        assert_eq!(eval_target("1M").unwrap(), 1e6);
        assert_eq!(eval_target(" 220 Ω").unwrap(), 220.0);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(eval_target("K"), Err(Error::Expression(_))));
    }
}
