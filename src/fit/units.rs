//! Unit Conversion Helpers
//!
//! All measurements enter in inches. Conversions in either direction use the
//! exact 2.54 factor on unrounded values; rounding happens only for display.

/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;

#[inline]
pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

#[inline]
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_IN
}

/// Round to specified decimal places
///
/// Rounds the exact binary value, so 30.555 (stored as 30.55499...) becomes
/// 30.55. Scaling by a power of ten first would round that up.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion() {
        assert_relative_eq!(in_to_cm(1.0), 2.54, epsilon = 1e-12);
        assert_relative_eq!(cm_to_in(in_to_cm(35.0)), 35.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rounding() {
        assert_relative_eq!(round_to_decimals(30.9049, 2), 30.9, epsilon = 1e-12);
        assert_relative_eq!(round_to_decimals(78.4987, 1), 78.5, epsilon = 1e-12);
        assert_relative_eq!(round_to_decimals(0.7299999, 2), 0.73, epsilon = 1e-12);
        assert_relative_eq!(round_to_decimals(-0.126, 2), -0.13, epsilon = 1e-12);
    }

    #[test]
    fn test_rounding_uses_stored_binary_value() {
        // 35in inseam, endurance: point 30.905, low end 30.555 stored just below the tie
        let low = 35.0 * 2.54 * 0.883 / 2.54 - 0.35;
        assert_eq!(round_to_decimals(low, 2), 30.55);
        // 15 × 0.883 = 13.245, also stored just below the tie
        assert_eq!(round_to_decimals(15.0 * 2.54 * 0.883 / 2.54, 2), 13.24);
    }
}
