//! Rule-based clothing hints keyed on the weather condition.

use skycast_core::DisplayUnit;

pub const UMBRELLA: &str = "Carry an umbrella or wear a raincoat.";
pub const WINTER_GEAR: &str = "Wear warm clothes, gloves, and boots.";
pub const SUNGLASSES: &str = "Wear sunglasses and light clothes.";
pub const LIGHT_JACKET: &str = "Wear light clothes, but keep a jacket handy.";
pub const FREEZING: &str = "It's freezing! Wear heavy winter clothing.";
pub const COMFORTABLE: &str = "Dress comfortably for the current weather.";

/// Checked in order; the first rule with a matching keyword wins.
const CONDITION_RULES: &[(&[&str], &str)] = &[
    (&["rain"], UMBRELLA),
    (&["snow"], WINTER_GEAR),
    (&["clear", "sunny"], SUNGLASSES),
    (&["cloud"], LIGHT_JACKET),
];

/// Threshold compared against the temperature in the active display unit.
// NOTE: 32 is the Fahrenheit freezing point but is also applied in Celsius mode.
const FREEZING_THRESHOLD: f64 = 32.0;

/// Suggest clothing for `condition` at `temp_f`, viewed in `unit`.
///
/// Condition keywords match case-insensitively anywhere in the string. When
/// none match, the unrounded temperature in `unit` decides between the
/// freezing and comfortable hints.
pub fn clothing_suggestion(condition: &str, temp_f: f64, unit: DisplayUnit) -> &'static str {
    let condition = condition.to_lowercase();

    let matched = CONDITION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
        .map(|(_, hint)| *hint);
    if let Some(hint) = matched {
        return hint;
    }

    let temp = match unit {
        DisplayUnit::Celsius => (temp_f - 32.0) * (5.0 / 9.0),
        DisplayUnit::Fahrenheit => temp_f,
    };

    if temp <= FREEZING_THRESHOLD {
        FREEZING
    } else {
        COMFORTABLE
    }
}
