//! Display text <-> f64 conversion
//!
//! The display buffer is plain text, so every operand goes through
//! [`parse_display`] and every result through [`format_number`].

/// Render a value the way the display shows it.
///
/// Shortest round-trip digits, no trailing `.0` on integers, exponent form
/// outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Also folds -0 into "0"
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Returns NaN when no prefix is a number, e.g. `"-"` or a partially
/// backspaced error marker.
pub fn parse_display(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers_have_no_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-120.0), "-120");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_exponent_forms() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e22), "-1.5e+22");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_display("42"), 42.0);
        assert_eq!(parse_display("-3.5"), -3.5);
        assert_eq!(parse_display("0.25"), 0.25);
    }

    #[test]
    fn test_parse_trailing_decimal_point() {
        assert_eq!(parse_display("12."), 12.0);
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(parse_display("1e+21"), 1e21);
        assert_eq!(parse_display("1.5e-7"), 1.5e-7);
        // Dangling exponent is ignored
        assert_eq!(parse_display("2e"), 2.0);
        assert_eq!(parse_display("1e+21."), 1e21);
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse_display("3.14abc"), 3.14);
    }

    #[test]
    fn test_parse_without_digits_is_nan() {
        assert!(parse_display("Erro").is_nan());
        assert!(parse_display("-").is_nan());
        assert!(parse_display(".").is_nan());
        assert!(parse_display("NaN").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
    }
}
