/// Parses the longest numeric prefix of `input` as an `f64`, the way a
/// lenient form field does.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// yields `12.0`. Input with no numeric prefix yields `NaN` rather than an
/// error; callers decide whether `NaN` is acceptable.
///
/// Accepted prefix grammar: `[+-]? (Infinity | digits [. digits?] | . digits) ([eE] [+-]? digits)?`
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
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

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float_prefix("2000"), 2000.0);
        assert_eq!(parse_float_prefix("150.50"), 150.5);
        assert_eq!(parse_float_prefix("-42"), -42.0);
        assert_eq!(parse_float_prefix("+7"), 7.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("3."), 3.0);
        assert_eq!(parse_float_prefix("0"), 0.0);
    }

    #[test]
    fn test_whitespace_and_trailing_garbage() {
        assert_eq!(parse_float_prefix("  12.5  "), 12.5);
        assert_eq!(parse_float_prefix("12abc"), 12.0);
        assert_eq!(parse_float_prefix("1,000"), 1.0);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        assert_eq!(parse_float_prefix("0.001"), 0.001);
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("2.5E-1"), 0.25);
        assert_eq!(parse_float_prefix("5e"), 5.0);
        assert_eq!(parse_float_prefix("5e+"), 5.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinityxyz"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_no_numeric_prefix_is_nan() {
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("   ").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("£100").is_nan());
        assert!(parse_float_prefix("inf").is_nan());
    }
}
