//! Formatting utilities used for tiles and map popups.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Round to one decimal place, half away from zero.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Print a number the way a user typed it: no trailing `.0` for whole values.
pub fn num(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

/// One-decimal rendering for derived metrics ("4.6", "0.3", "12.0").
pub fn one_decimal(x: f64) -> String {
    format!("{:.1}", x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_is_half_away_from_zero() {
        assert_eq!(round1(4.615), 4.6);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(20.0 / 60.0), 0.3);
    }

    #[test]
    fn num_drops_trailing_zero() {
        assert_eq!(num(24.0), "24");
        assert_eq!(num(5.2), "5.2");
        assert_eq!(num(-5.0), "-5");
        assert_eq!(one_decimal(12.0), "12.0");
    }
}
