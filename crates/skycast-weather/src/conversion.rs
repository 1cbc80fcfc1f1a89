//! Display-time temperature conversion. Stored data stays in Fahrenheit.

use skycast_core::DisplayUnit;

pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// Round to two decimal places using the exact binary value of `value`.
///
/// `-19.985` is stored as `-19.98499...` and rounds to `-19.98`. Only odd
/// multiples of 1/8 sit exactly on a half; those round away from zero.
pub fn round2(value: f64) -> f64 {
    let exact_half = (value * 8.0).fract() == 0.0 && (value * 4.0).fract() != 0.0;
    if exact_half {
        return (value * 100.0).round() / 100.0;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// `temp_f` expressed in `unit`, rounded to two decimals
pub fn converted_temperature(temp_f: f64, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Fahrenheit => round2(temp_f),
        DisplayUnit::Celsius => round2(fahrenheit_to_celsius(temp_f)),
    }
}

/// e.g. `"15.00° C"`
pub fn temperature_label(temp_f: f64, unit: DisplayUnit) -> String {
    format!("{:.2}° {}", converted_temperature(temp_f, unit), unit.symbol())
}
