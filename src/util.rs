//! Small parsing helpers shared across setup routines.

/// Parse an optional delay attribute into seconds.
///
/// The input comes straight from a `data-*` attribute and may be absent
/// or arbitrary text. Output is always a finite, non-negative number:
/// absent, unparseable, non-finite, or negative input yields `0.0`.
/// Never errors.
#[must_use]
pub fn parse_delay(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_yields_zero() {
        assert_eq!(parse_delay(None), 0.0);
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_delay(Some("0.25")), 0.25);
        assert_eq!(parse_delay(Some("2")), 2.0);
        assert_eq!(parse_delay(Some("  0.4  ")), 0.4);
    }

    #[test]
    fn garbage_yields_zero() {
        assert_eq!(parse_delay(Some("")), 0.0);
        assert_eq!(parse_delay(Some("fast")), 0.0);
        assert_eq!(parse_delay(Some("0.3s")), 0.0);
    }

    #[test]
    fn non_finite_yields_zero() {
        assert_eq!(parse_delay(Some("NaN")), 0.0);
        assert_eq!(parse_delay(Some("inf")), 0.0);
        assert_eq!(parse_delay(Some("-inf")), 0.0);
    }

    #[test]
    fn negative_yields_zero() {
        assert_eq!(parse_delay(Some("-0.5")), 0.0);
    }

    #[test]
    fn output_is_always_finite() {
        for raw in [None, Some("1e999"), Some("NaN"), Some("x"), Some("3.5")] {
            assert!(parse_delay(raw).is_finite());
        }
    }
}
