use crate::types::{
    FormatCode, FormatStyle, MeasurementType, ScaledQuantity, LAST_UNIT_INDEX, UNIT_NAMES,
};

// ========== Rounding ==========

#[inline]
fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Rounds to 3 decimals, truncates to 2, then rounds to 2 again
///
/// The first pass strips floating-point noise so that the truncation does
/// not drop a digit that only looks like `…999`.
pub(crate) fn round_quantity(quantity: f64) -> f64 {
    let rounded = round_to(quantity, 3);
    let truncated = (rounded * 100.0).floor() / 100.0;
    round_to(truncated, 2)
}

/// Rounds a scaled quantity, moving up one unit if rounding reached the base
fn settle(scaled: ScaledQuantity, base: f64) -> ScaledQuantity {
    let quantity = round_quantity(scaled.quantity);
    if quantity >= base && scaled.unit_index < LAST_UNIT_INDEX {
        return ScaledQuantity {
            quantity: round_quantity(scaled.quantity / base),
            unit_index: scaled.unit_index + 1,
        };
    }
    ScaledQuantity { quantity, ..scaled }
}

// ========== Unit Text ==========

/// Unit text at index 0: the type name, singular only for exactly one
fn unscaled_unit_text(measurement: MeasurementType, style: FormatStyle, quantity: f64) -> String {
    let name = measurement.name();
    let word = if quantity == 1.0 {
        name.to_string()
    } else {
        format!("{name}s")
    };

    match style {
        FormatStyle::SingleLetter => word[..1].to_string(),
        _ => word,
    }
}

/// Unit text for a prefixed scale, e.g. ("Kilo", Byte, DecimalSi) -> "KB"
fn scaled_unit_text(unit_name: &str, measurement: MeasurementType, style: FormatStyle) -> String {
    let suffix = measurement.suffix();
    let initial = &unit_name[..1];

    match style {
        FormatStyle::FullWord => format!("{unit_name}{suffix}"),
        FormatStyle::AbbreviatedBi => format!("{}bi{suffix}", &unit_name[..2]),
        FormatStyle::SingleLetter => initial.to_string(),
        FormatStyle::DecimalSi => format!("{initial}B"),
        FormatStyle::BinaryIec => format!("{initial}IB"),
    }
}

// ========== Rendering ==========

/// Renders a scaled measurement as `"<number> <unit>"`
///
/// `scaled` must come from scale selection for the same measurement type.
pub(crate) fn render(scaled: ScaledQuantity, measurement: MeasurementType, code: FormatCode) -> String {
    let settled = settle(scaled, measurement.base());

    let unit = if settled.unit_index == 0 {
        unscaled_unit_text(measurement, code.style, settled.quantity)
    } else {
        scaled_unit_text(UNIT_NAMES[settled.unit_index], measurement, code.style)
    };
    let unit = if code.lowercase_output {
        unit.to_lowercase()
    } else {
        unit
    };

    // f64's Display is shortest round-trip: 2.0 prints as "2", 1.50 as "1.5"
    format!("{} {}", settled.quantity, unit)
}
