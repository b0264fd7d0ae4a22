// ─────────────────────────────────────────────────────────────────────────────
// Input bounds for the basic-information step
// ─────────────────────────────────────────────────────────────────────────────

/// Youngest accepted age in years.
pub const AGE_MIN: u32 = 1;

/// Oldest accepted age in years.
pub const AGE_MAX: u32 = 120;

/// Lightest accepted body weight.
pub const WEIGHT_MIN_KG: f64 = 20.0;

/// Shortest accepted body height.
pub const HEIGHT_MIN_CM: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI buckets
// ─────────────────────────────────────────────────────────────────────────────

/// Below this BMI the profile is underweight and weight gain is recommended.
pub const BMI_UNDERWEIGHT: f64 = 18.5;

/// From this BMI the profile is overweight and weight loss is recommended.
pub const BMI_OVERWEIGHT: f64 = 25.0;

/// From this BMI the profile is obese.
pub const BMI_OBESE: f64 = 30.0;

/// Decimal places kept when rounding BMI.
pub const BMI_DECIMALS: u32 = 1;
