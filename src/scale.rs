use crate::error::FormatError;
use crate::types::{MeasurementType, ScaledQuantity, LAST_UNIT_INDEX, MAX_VALUE};

// ========== Range Validation ==========

/// Rejects measurements outside `[0, MAX_VALUE]`; NaN is rejected too
pub(crate) fn validate_range(value: f64) -> Result<f64, FormatError> {
    if value.is_nan() || value < 0.0 || value > MAX_VALUE {
        return Err(FormatError::InvalidRange(value));
    }
    Ok(value)
}

// ========== Scale Selection ==========

/// Picks the unit index for a validated value: `floor(log_base(value))`, clamped to Yotta
pub(crate) fn select_scale(value: f64, base: f64) -> ScaledQuantity {
    if value == 0.0 {
        return ScaledQuantity { quantity: 0.0, unit_index: 0 };
    }

    let estimate = (value.ln() / base.ln()).floor().max(0.0) as usize;
    let mut unit_index = estimate.min(LAST_UNIT_INDEX);

    // The logarithm can land one step off at exact powers of the base
    while unit_index > 0 && value < base.powi(unit_index as i32) {
        unit_index -= 1;
    }
    while unit_index < LAST_UNIT_INDEX && value >= base.powi(unit_index as i32 + 1) {
        unit_index += 1;
    }

    ScaledQuantity {
        quantity: value / base.powi(unit_index as i32),
        unit_index,
    }
}

/// Validates a measurement and scales it for display
///
/// Returns the scale the formatter would use before rounding. Values below
/// the base stay at index 0; anything from `base^8` up to [`MAX_VALUE`]
/// lands on index 8 ("Yotta").
///
/// # Example
///
/// ```rust
/// use unit_formatter::{scale_measurement, MeasurementType};
///
/// let scaled = scale_measurement(1536.0, MeasurementType::Byte)?;
/// assert_eq!(scaled.unit_index, 1);
/// assert_eq!(scaled.quantity, 1.5);
/// assert_eq!(scaled.unit_name(), "Kilo");
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub fn scale_measurement(
    value: f64,
    measurement: MeasurementType,
) -> Result<ScaledQuantity, FormatError> {
    let value = validate_range(value)?;
    Ok(select_scale(value, measurement.base()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(MAX_VALUE)]
    fn accepts_domain_bounds(#[case] value: f64) {
        assert_eq!(validate_range(value), Ok(value));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(-0.001)]
    #[case(1.24e27)]
    #[case(f64::INFINITY)]
    fn rejects_out_of_domain(#[case] value: f64) {
        assert_eq!(validate_range(value), Err(FormatError::InvalidRange(value)));
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(validate_range(f64::NAN), Err(FormatError::InvalidRange(v)) if v.is_nan()));
    }

    #[test]
    fn zero_stays_unscaled() {
        let scaled = select_scale(0.0, 1024.0);
        assert_eq!(scaled, ScaledQuantity { quantity: 0.0, unit_index: 0 });
    }

    #[test]
    fn fractions_below_one_stay_unscaled() {
        let scaled = select_scale(0.5, 1000.0);
        assert_eq!(scaled, ScaledQuantity { quantity: 0.5, unit_index: 0 });
    }

    #[test]
    fn exact_powers_map_to_their_exponent() {
        for base in [1000.0, 1024.0] {
            for n in 0..=LAST_UNIT_INDEX {
                let scaled = select_scale(f64::powi(base, n as i32), base);
                assert_eq!(scaled.unit_index, n, "base {base}, exponent {n}");
                assert_eq!(scaled.quantity, 1.0, "base {base}, exponent {n}");
            }
        }
    }

    #[test]
    fn just_below_a_power_stays_on_the_lower_unit() {
        let scaled = select_scale(1023.0, 1024.0);
        assert_eq!(scaled.unit_index, 0);

        let scaled = select_scale(999_999.0, 1000.0);
        assert_eq!(scaled.unit_index, 1);
    }

    #[test]
    fn max_value_clamps_to_yotta() {
        let scaled = select_scale(MAX_VALUE, 1024.0);
        assert_eq!(scaled.unit_index, LAST_UNIT_INDEX);
        assert!((scaled.quantity - 1024.0).abs() < 1e-6);

        let scaled = select_scale(MAX_VALUE, 1000.0);
        assert_eq!(scaled.unit_index, LAST_UNIT_INDEX);
    }

    #[test]
    fn unit_index_never_decreases_as_value_grows() {
        for base in [1000.0, 1024.0] {
            let mut value = 0.25;
            let mut previous = 0;
            while value <= MAX_VALUE {
                let index = select_scale(value, base).unit_index;
                assert!(index >= previous, "index dropped at {value} for base {base}");
                previous = index;
                value *= 1.37;
            }
        }
    }
}
