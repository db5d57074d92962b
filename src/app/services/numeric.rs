//! Tolerant numeric token conversion and whitespace tokenization
//!
//! HYSPLIT output files carry thousands of fixed-layout rows, so the hot
//! path avoids the standard library's validating float parser in favour of
//! a single-scan, best-effort conversion: it never fails, stops at the first
//! byte it does not understand, and returns `0.0` for tokens with no leading
//! numeric content. Callers must not rely on it to reject bad input.

/// Convert a text token to `f64`, best effort.
///
/// Scan order: optional leading spaces/tabs, optional sign, integer digits,
/// optional `.` and fractional digits accumulated against a growing
/// power-of-ten divisor, optional `e`/`E` exponent with its own sign. Any
/// other byte terminates the scan and whatever was read so far stands.
/// Once the exponent begins, mantissa accumulation is over: remaining digits
/// feed the exponent only. No overflow checking is performed.
///
/// Unparsable input yields `0.0`: `parse_token("abc") == 0.0`,
/// `parse_token("") == 0.0`.
pub fn parse_token(token: &str) -> f64 {
    let bytes = token.as_bytes();
    let mut pos = 0;

    let mut result = 0.0_f64;
    let mut sign = 1.0_f64;
    let mut fraction = 0.0_f64;
    let mut divisor = 1.0_f64;
    let mut in_fraction = false;
    let mut in_exponent = false;
    let mut exponent = 0_i32;
    let mut exp_sign = 1_i32;

    while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
        pos += 1;
    }

    if pos < bytes.len() {
        if bytes[pos] == b'-' {
            sign = -1.0;
            pos += 1;
        } else if bytes[pos] == b'+' {
            pos += 1;
        }
    }

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_digit() {
            let digit = (b - b'0') as i32;
            if in_exponent {
                exponent = exponent * 10 + digit;
            } else if in_fraction {
                fraction = fraction * 10.0 + digit as f64;
                divisor *= 10.0;
            } else {
                result = result * 10.0 + digit as f64;
            }
        } else if b == b'.' {
            in_fraction = true;
        } else if b == b'e' || b == b'E' {
            in_exponent = true;
            pos += 1;
            if pos < bytes.len() {
                if bytes[pos] == b'-' {
                    exp_sign = -1;
                    pos += 1;
                } else if bytes[pos] == b'+' {
                    pos += 1;
                }
            }
            continue;
        } else {
            break;
        }
        pos += 1;
    }

    result = sign * (result + fraction / divisor);
    if in_exponent {
        result *= 10.0_f64.powi(exp_sign * exponent);
    }
    result
}

/// Split a line into whitespace-delimited tokens.
///
/// Splits on any run of whitespace; an empty or all-whitespace line yields
/// an empty vector. No quoting, no escaping, no locale awareness.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_token("0"), 0.0);
        assert_eq!(parse_token("42"), 42.0);
        assert_eq!(parse_token("-7"), -7.0);
        assert_eq!(parse_token("+15"), 15.0);
    }

    #[test]
    fn test_parse_decimals() {
        assert_eq!(parse_token("3.14"), 3.14);
        assert_eq!(parse_token("-0.5"), -0.5);
        assert_eq!(parse_token(".25"), 0.25);
        assert_eq!(parse_token("975.0"), 975.0);
    }

    #[test]
    fn test_parse_exponents() {
        assert_eq!(parse_token("-12.5e3"), -12500.0);
        assert_eq!(parse_token("1e-3"), 0.001);
        assert_eq!(parse_token("2.5E+2"), 250.0);
        assert_eq!(parse_token("1e0"), 1.0);
    }

    #[test]
    fn test_unparsable_tokens_yield_zero() {
        assert_eq!(parse_token(""), 0.0);
        assert_eq!(parse_token("abc"), 0.0);
        assert_eq!(parse_token("-"), -0.0);
        assert_eq!(parse_token("."), 0.0);
        assert_eq!(parse_token("NA"), 0.0);
    }

    #[test]
    fn test_trailing_garbage_keeps_prefix() {
        assert_eq!(parse_token("12.5x7"), 12.5);
        assert_eq!(parse_token("40,000"), 40.0);
        assert_eq!(parse_token("3.0\r"), 3.0);
    }

    #[test]
    fn test_leading_spaces_and_tabs_skipped() {
        assert_eq!(parse_token("  \t-2.5"), -2.5);
        assert_eq!(parse_token("   "), 0.0);
    }

    #[test]
    fn test_exponent_without_digits() {
        // "1e" and "1e-" read an empty exponent, leaving the mantissa scaled
        // by ten to the zero.
        assert_eq!(parse_token("1e"), 1.0);
        assert_eq!(parse_token("1e-"), 1.0);
    }

    #[test]
    fn test_digits_after_exponent_never_rejoin_mantissa() {
        // Once the exponent begins, a stray decimal point contributes
        // nothing further to the mantissa.
        assert_eq!(parse_token("2e1.5"), 2e15);
    }

    #[test]
    fn test_tokenize_runs_of_whitespace() {
        assert_eq!(tokenize("a  b\t c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("  leading and trailing  "), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn test_tokenize_empty_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }
}
